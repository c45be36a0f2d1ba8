use acr128s::test_support::{SharedTransport, response_frame};
use acr128s::transport::mock::MockTransport;
use acr128s::types::ResponseKind;
use acr128s::Reader;
use proptest::prelude::*;

fn reader_answering(count: usize) -> (Reader, SharedTransport) {
    let responses = (0..count)
        .map(|i| response_frame(ResponseKind::DataBlock, i as u8, &[0x90, 0x00]))
        .collect();
    let shared = SharedTransport::new(MockTransport::with_responses(responses));
    (Reader::with_transport(Box::new(shared.clone())), shared)
}

#[test]
fn sequence_wraps_after_255() {
    let (mut reader, shared) = reader_answering(258);
    for _ in 0..258 {
        reader.transmit(&[0x00]).unwrap();
    }
    let seqs: Vec<u8> = shared.sent().iter().map(|f| f[7]).collect();
    assert_eq!(&seqs[254..], &[254, 255, 0, 1]);
    assert_eq!(reader.next_sequence(), 2);
}

proptest! {
    #[test]
    fn consecutive_calls_use_consecutive_sequences(n in 1usize..40) {
        let (mut reader, shared) = reader_answering(n);
        for _ in 0..n {
            reader.transmit(&[0x00]).unwrap();
        }
        let sent = shared.sent();
        for (i, frame) in sent.iter().enumerate() {
            prop_assert_eq!(frame[7], i as u8);
        }
    }
}
