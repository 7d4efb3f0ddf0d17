use crate::error::Result;
use serde::Serialize;

/// Folds a string into a signed 32-bit rolling hash: `hash = hash * 31 + c` over the UTF-16 code
/// units of `data`, seeded with 0 and wrapping on overflow.
pub fn rolling_hash(data: &str) -> i32 {
    data.encode_utf16().fold(0i32, |hash, c| {
        (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(c))
    })
}

/// Renders a hash the way JavaScript's `Number.prototype.toString(16)` does: lowercase hex of the
/// magnitude, with a leading `-` for negative values.
pub fn to_hex(hash: i32) -> String {
    if hash < 0 {
        format!("-{:x}", -i64::from(hash))
    } else {
        format!("{:x}", hash)
    }
}

/// Returns the hex fingerprint of the JSON serialization of `value`.
pub fn fingerprint<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(to_hex(rolling_hash(&json)))
}
