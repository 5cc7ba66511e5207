//! Byte-size literal parsing.
//!
//! Accepts strings like `"1gb"`, `"12 MB"`, or `"512"`. Parsing is
//! best-effort by contract: malformed input degrades to zero bytes rather
//! than raising an error.

const KILOBYTE: u64 = 1_024;
const MEGABYTE: u64 = 1_048_576;
const GIGABYTE: u64 = 1_073_741_824;

/// Convert a human-readable size literal into a byte count.
///
/// The format is `<integer><optional whitespace><unit letter><optional 'b'>`
/// with unit letters `k`, `m`, and `g`, all case-insensitive; without a unit
/// letter the number is a plain byte count.
///
/// Unparseable numbers and negative values yield 0. A multiplication that
/// would overflow `u64` also yields 0; the saturation is deliberate, see
/// `safe_mul`.
pub fn parse_size_in_bytes(raw: &str) -> u64 {
    let text = raw.trim();
    let text = text.strip_suffix(['b', 'B']).unwrap_or(text);
    let (number, multiplier) = strip_unit(text);
    let size: u64 = number.parse().unwrap_or(0);
    safe_mul(size, multiplier)
}

/// Strip a trailing unit letter, returning the numeric prefix and the
/// multiplier it implies.
fn strip_unit(text: &str) -> (&str, u64) {
    for (unit, multiplier) in [('k', KILOBYTE), ('m', MEGABYTE), ('g', GIGABYTE)] {
        if let Some(prefix) = text.strip_suffix([unit, unit.to_ascii_uppercase()]) {
            return (prefix.trim_end(), multiplier);
        }
    }
    (text.trim_end(), 1)
}

/// Overflow-safe multiplication: saturates to 0 instead of wrapping.
///
/// Zero, not `u64::MAX`, so an absurd size literal reads as "no budget"
/// rather than "unlimited". Callers relying on a parsed size must treat 0 as
/// suspect.
fn safe_mul(a: u64, b: u64) -> u64 {
    a.checked_mul(b).unwrap_or(0)
}
