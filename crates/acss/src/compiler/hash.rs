//! Content-addressed class identities.
//!
//! Identities are derived purely from rule content, never from allocation or
//! declaration order, so identical logical rules collide to the identical
//! identifier across independent builds and incremental rebuilds. The bit
//! mixing below is normative: it must not be swapped for another hash, or
//! every cached identity in every downstream registry invalidates at once.

use crate::error::AcssError;
use crate::types::Value;

const M: u32 = 0x5bd1_e995;
const SEED: u32 = 1;

/// MurmurHash2, 32-bit, byte-at-a-time tail handling.
pub fn murmur2(data: &str, seed: u32) -> u32 {
    let bytes = data.as_bytes();
    let mut len = bytes.len();
    let mut h: u32 = seed ^ (len as u32);
    let mut i = 0;

    while len >= 4 {
        let mut k = (bytes[i] as u32)
            | ((bytes[i + 1] as u32) << 8)
            | ((bytes[i + 2] as u32) << 16)
            | ((bytes[i + 3] as u32) << 24);
        k = k.wrapping_mul(M);
        k ^= k >> 24;
        k = k.wrapping_mul(M);
        h = h.wrapping_mul(M) ^ k;
        i += 4;
        len -= 4;
    }

    if len >= 3 {
        h ^= (bytes[i + 2] as u32) << 16;
    }
    if len >= 2 {
        h ^= (bytes[i + 1] as u32) << 8;
    }
    if len >= 1 {
        h ^= bytes[i] as u32;
        h = h.wrapping_mul(M);
    }

    h ^= h >> 13;
    h = h.wrapping_mul(M);
    h ^= h >> 15;
    h
}

/// Renders a 32-bit hash as lowercase base36.
pub fn base36(mut n: u32) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = [0u8; 7];
    let mut pos = out.len();
    while n > 0 {
        pos -= 1;
        out[pos] = DIGITS[(n % 36) as usize];
        n /= 36;
    }
    String::from_utf8_lossy(&out[pos..]).into_owned()
}

/// Hashes the canonical form of one atomic rule into its short identifier
/// body (without the class prefix).
pub fn class_hash(canonical: &str) -> String {
    base36(murmur2(canonical, SEED))
}

/// Builds the canonical hash input for a `(property, value, selector,
/// pseudo-element, at-rule)` tuple. Parts concatenate in that order; absent
/// parts contribute the empty string; fallback values join with `", "` so
/// their order is significant.
pub fn canonical_input(
    property: &str,
    value: &Value,
    selector_suffix: Option<&str>,
    pseudo_element: Option<&str>,
    at_rule: Option<&str>,
) -> Result<String, AcssError> {
    let value_part = match value {
        Value::Literal(s) => s.clone(),
        Value::Fallbacks(list) => list.join(", "),
        Value::Conditional(_) => {
            return Err(AcssError::UnknownIdentityInput {
                property: property.to_string(),
            });
        }
    };
    let mut input = String::with_capacity(
        property.len()
            + value_part.len()
            + selector_suffix.map_or(0, str::len)
            + pseudo_element.map_or(0, str::len)
            + at_rule.map_or(0, str::len),
    );
    input.push_str(property);
    input.push_str(&value_part);
    if let Some(suffix) = selector_suffix {
        input.push_str(suffix);
    }
    if let Some(element) = pseudo_element {
        input.push_str(element);
    }
    if let Some(rule) = at_rule {
        input.push_str(rule);
    }
    Ok(input)
}

/// Computes the full identity (prefix + base36 hash) for one rule tuple.
///
/// Conditional values cannot be canonicalized and raise
/// [`AcssError::UnknownIdentityInput`]; flatten them first.
pub fn identity_for(
    prefix: &str,
    property: &str,
    value: &Value,
    selector_suffix: Option<&str>,
    pseudo_element: Option<&str>,
    at_rule: Option<&str>,
) -> Result<String, AcssError> {
    let input = canonical_input(property, value, selector_suffix, pseudo_element, at_rule)?;
    Ok(format!("{}{}", prefix, class_hash(&input)))
}
