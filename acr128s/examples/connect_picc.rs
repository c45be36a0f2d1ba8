// Contactless card detection example for ACR128S readers.
//
// Usage:
//   cargo run -p acr128s --example connect_picc --features serial -- /dev/ttyUSB0

use acr128s::prelude::*;
use acr128s::transport::serial::{DEFAULT_BAUD_RATE, SerialTransport};
use anyhow::Context;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/dev/ttyUSB0".to_string());
    println!("Opening ACR128S on {}...", path);

    let transport = SerialTransport::open(&path, DEFAULT_BAUD_RATE)
        .with_context(|| format!("opening {}", path))?;
    let mut reader = ReaderBuilder::new()
        .with_transport(Box::new(transport))
        .timeout_ms(500)
        .build()?;

    println!("\n=== Contactless (PICC) ===");
    match reader.connect_picc() {
        Ok(mut card) => {
            if let Some(uid) = card.uid() {
                println!("UID = {}", uid.to_hex());
            }
            match card.ats() {
                Ok(ats) => println!("ATS = {}", bytes_to_hex_spaced(&ats)),
                Err(e) => println!("ATS not available: {}", e),
            }
            card.disconnect()?;
        }
        Err(Error::NoCard) => println!("No card in field"),
        Err(e) => return Err(e).context("PICC connect"),
    }

    println!("\n=== Contact (SAM) ===");
    // Slot is fixed per reader.
    drop(reader);
    let transport = SerialTransport::open(&path, DEFAULT_BAUD_RATE)?;
    let mut sam = ReaderBuilder::new()
        .with_transport(Box::new(transport))
        .slot(Slot::Sam)
        .timeout_ms(500)
        .build()?;
    match sam.connect_sam() {
        Ok(card) => println!("ATR = {}", card.info().to_hex()),
        Err(e) => println!("SAM connect failed: {}", e),
    }

    Ok(())
}
