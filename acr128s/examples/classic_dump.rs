// Dump the first sector of a Mifare Classic tag through a Multi-ISO reader.
//
// Usage:
//   cargo run -p acr128s --example classic_dump --features serial -- /dev/ttyUSB0

use acr128s::prelude::*;
use acr128s::transport::serial::{DEFAULT_BAUD_RATE, SerialTransport};

const DEFAULT_KEY: [u8; 6] = [0xFF; 6];

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/dev/ttyUSB0".to_string());
    let transport = SerialTransport::open(&path, DEFAULT_BAUD_RATE)?;
    let mut reader = ReaderBuilder::new()
        .with_transport(Box::new(transport))
        .timeout_ms(500)
        .build_classic()?;

    let mut card = match reader.connect_classic() {
        Ok(card) => card,
        Err(Error::NoCard) => {
            println!("No tag in field");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    if let Some(uid) = card.uid() {
        println!("UID = {}", uid.to_hex());
    }

    let status = card.login(0, KeyType::A, &DEFAULT_KEY)?;
    println!("login: {}", status);
    if !status.is_success() {
        return Ok(());
    }

    for block in 0..4u8 {
        let data = card.read_block(block)?;
        println!("block {:2}: {}", block, bytes_to_hex_spaced(&data));
    }
    Ok(())
}
