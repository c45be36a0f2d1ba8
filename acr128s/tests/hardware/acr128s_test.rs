#[path = "common.rs"]
mod common;

use acr128s::Error;

#[test]
fn picc_connect_on_real_reader() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut reader = match common::open_reader().unwrap() {
        Some(r) => r,
        None => return,
    };

    match reader.connect_picc() {
        Ok(card) => {
            let uid = card.uid().unwrap();
            assert!(!uid.as_bytes().is_empty());
            println!("card UID: {}", uid.to_hex());
        }
        Err(Error::NoCard) => println!("no card in field"),
        Err(e) => panic!("PICC connect failed: {}", e),
    }
}

#[test]
fn power_off_on_real_reader() {
    let mut reader = match common::open_reader().unwrap() {
        Some(r) => r,
        None => return,
    };
    let status = reader.power_off().unwrap();
    assert_eq!(status.len(), 3);
}
