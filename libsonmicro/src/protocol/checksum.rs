// libsonmicro/src/protocol/checksum.rs

/// Compute the SM130 frame checksum.
/// CSUM = (length + sum(bytes)) mod 256, where `length` is the number of
/// bytes covered (command + arguments).
pub fn checksum(bytes: &[u8]) -> u8 {
    bytes
        .iter()
        .fold(bytes.len() as u8, |acc, &b| acc.wrapping_add(b))
}
