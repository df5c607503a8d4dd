//! Editor version extraction.
//!
//! Unity reports versions like `2021.3.12f1` or `6000.0.23f1`. Only the
//! leading `<major>.<minor>` pair goes into the manifest's `unity` field.

/// Extract the first `<digits>.<digits>` run from a raw version string.
///
/// Returns `None` when no such run exists.
pub fn extract_minor_version(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let major_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }

        if i < bytes.len() && bytes[i] == b'.' {
            let minor_start = i + 1;
            let mut j = minor_start;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            if j > minor_start {
                return Some(raw[major_start..j].to_string());
            }
        }
        // Digit run not followed by ".<digits>"; keep scanning after it.
    }

    None
}
