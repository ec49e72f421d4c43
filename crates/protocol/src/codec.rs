use log::debug;

use crate::Record;

/// Encode a record as a datagram payload.
///
/// Wire format:
///   - UTF-8 text `[date, region, subregion, code, cases, deaths]`
///   - no length prefix, no terminator
pub fn encode_record(record: &Record) -> Vec<u8> {
    let text = record.to_string();
    debug!("Prepared message: {text}");
    text.into_bytes()
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
