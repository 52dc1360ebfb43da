//! Plaintext record codec for the vault file.
//!
//! The serialized form is one line per entry:
//!
//! ```text
//! <site>|<password>\n
//! ```
//!
//! There is no escaping and no length prefix — a `|` or newline inside
//! a site name corrupts that record.  This is a documented limitation
//! of the format, kept for compatibility with existing vault files.
//!
//! `decode` is total: it never fails, whatever bytes it is handed.
//! That matters because the bytes come straight out of `Cipher::decrypt`
//! and may be garbage when the wrong cipher or key was selected.

use std::collections::BTreeMap;

/// Separator between site and password within a record line.
/// Non-alphabetic on purpose: the shift cipher passes it through
/// unchanged, so record framing survives encryption.
pub const DELIMITER: u8 = b'|';

/// Record terminator.
pub const TERMINATOR: u8 = b'\n';

/// Serialize the vault map into the delimited line format, one record
/// per entry in map iteration order.
pub fn encode(entries: &BTreeMap<String, String>) -> Vec<u8> {
    let mut buf = Vec::new();
    for (site, password) in entries {
        buf.extend_from_slice(site.as_bytes());
        buf.push(DELIMITER);
        buf.extend_from_slice(password.as_bytes());
        buf.push(TERMINATOR);
    }
    buf
}

/// Parse the delimited line format back into a map.
///
/// - Empty lines (including the trailing one after the final `\n`)
///   are ignored.
/// - Each line splits on the FIRST `|`; the password may itself
///   contain further `|` bytes.
/// - Lines without a `|` are silently dropped — they are treated as
///   corrupt, not as an error.
/// - A later line with the same site overwrites an earlier one.
/// - Non-UTF-8 bytes are converted lossily rather than rejected.
pub fn decode(data: &[u8]) -> BTreeMap<String, String> {
    let mut entries = BTreeMap::new();

    for line in data.split(|&b| b == TERMINATOR) {
        if line.is_empty() {
            continue;
        }
        let Some(sep) = line.iter().position(|&b| b == DELIMITER) else {
            continue;
        };
        let site = String::from_utf8_lossy(&line[..sep]).into_owned();
        let password = String::from_utf8_lossy(&line[sep + 1..]).into_owned();
        entries.insert(site, password);
    }

    entries
}
