//! Select a card, authenticate and print the value stored in a block.
//!
//! Usage:
//!   RUST_LOG=debug cargo run -p libsonmicro --example read_value --features serial -- /dev/ttyUSB0 5 [KEY_HEX]

use anyhow::{Context, bail};
use libsonmicro::prelude::*;
use libsonmicro::transport::SerialTransport;
use libsonmicro::utils::parse_key;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let port = args.next().context("missing serial port argument")?;
    let block: u8 = args
        .next()
        .unwrap_or_else(|| "4".to_string())
        .parse()
        .context("block must be a number")?;
    let key = match args.next() {
        Some(k) => parse_key(&k).map_err(anyhow::Error::msg)?,
        None => [0xFF; 6],
    };

    let transport = SerialTransport::open_default(&port)?;
    let mut reader = ReaderBuilder::new()
        .with_transport(transport)
        .block(block)
        .auth(KeyType::KEY_A, key)
        .legacy_value_fallback(true)
        .build()?;

    println!("firmware: {}", reader.firmware_version()?);

    let card_type = match reader.select_tag() {
        Ok(t) => t,
        Err(Error::NoTag { .. }) => bail!("no tag in field"),
        Err(e) => return Err(e.into()),
    };
    println!("card: {:?} uid={}", card_type, reader.uid().to_hex());

    if let Err(e) = reader.authenticate() {
        bail!("authentication failed: {} ({:?})", e, reader.auth_response());
    }

    let reading = reader.read_value()?;
    println!(
        "block {}: value={} source={:?}{}",
        block,
        reading.value,
        reading.source,
        if reading.legacy_order { " (legacy order)" } else { "" }
    );
    Ok(())
}
