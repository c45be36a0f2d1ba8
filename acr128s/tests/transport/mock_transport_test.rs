use acr128s::test_support::SharedTransport;
use acr128s::transport::Transport;
use acr128s::transport::mock::MockTransport;

#[test]
fn mock_transport_send_and_receive() {
    let mut m = MockTransport::new();
    m.push_response(vec![0x01]);
    m.send(&[0xAA]).unwrap();
    assert_eq!(m.sent.len(), 1);
    let r = m.receive(1000).unwrap();
    assert_eq!(r, vec![0x01]);
    assert_eq!(m.timeouts, vec![1000]);
}

#[test]
fn shared_handle_sees_boxed_traffic() {
    let shared = SharedTransport::new(MockTransport::new());
    shared.push_response(vec![0x02, 0x00, 0x00, 0x03]);

    let mut boxed: Box<dyn Transport> = Box::new(shared.clone());
    let r = boxed.send_recv(&[0x10, 0x20], 50).unwrap();

    assert_eq!(r, vec![0x02, 0x00, 0x00, 0x03]);
    assert_eq!(shared.sent(), vec![vec![0x10, 0x20]]);
    assert_eq!(shared.timeouts(), vec![50]);
    assert_eq!(shared.pending(), 0);
}
