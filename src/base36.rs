//! Base-36 coordinate codec.
//!
//! Every numeric parameter in a command stream is a fixed-width run of
//! radix-36 digits (`0-9`, then `A-Z` or `a-z` for 10..35). Coordinates use
//! two digits, colours and counts use one.
//!
//! Decoding is lenient: a character outside the digit alphabet contributes
//! zero instead of rejecting the token.

/// Numeric base of a token digit.
pub const RADIX: u32 = 36;

/// Width of a coordinate token in characters.
pub const COORD_WIDTH: usize = 2;

/// Largest value a coordinate token can carry (`"ZZ"`).
pub const MAX_COORD: u32 = RADIX * RADIX - 1;

const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Value of a single digit; characters outside `0-9A-Za-z` count as zero.
#[inline]
pub fn digit_value(ch: char) -> u32 {
    match ch {
        '0'..='9' => ch as u32 - '0' as u32,
        'A'..='Z' => ch as u32 - 'A' as u32 + 10,
        'a'..='z' => ch as u32 - 'a' as u32 + 10,
        _ => 0,
    }
}

/// Decode a token, most significant digit first.
///
/// Saturates instead of overflowing on absurdly long input.
pub fn decode<I>(chars: I) -> u32
where
    I: IntoIterator<Item = char>,
{
    chars.into_iter().fold(0u32, |acc, ch| {
        acc.saturating_mul(RADIX).saturating_add(digit_value(ch))
    })
}

/// Decode a token held in a string slice.
pub fn decode_str(token: &str) -> u32 {
    decode(token.chars())
}

/// Encode `n` as an upper-case token of exactly `width` digits.
///
/// Returns `None` when `n` needs more than `width` digits.
pub fn encode(mut n: u32, width: usize) -> Option<String> {
    let mut out = vec![b'0'; width];
    for slot in out.iter_mut().rev() {
        *slot = DIGITS[(n % RADIX) as usize];
        n /= RADIX;
    }
    if n != 0 {
        return None;
    }
    // Only ASCII digits were written.
    String::from_utf8(out).ok()
}

/// Encode a coordinate as a two-digit token.
pub fn encode_coord(n: u32) -> Option<String> {
    encode(n, COORD_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_values() {
        assert_eq!(digit_value('0'), 0);
        assert_eq!(digit_value('9'), 9);
        assert_eq!(digit_value('A'), 10);
        assert_eq!(digit_value('Z'), 35);
        assert_eq!(digit_value('a'), 10);
        assert_eq!(digit_value('z'), 35);
    }

    #[test]
    fn test_decode_is_case_insensitive() {
        assert_eq!(decode_str("2S"), 100);
        assert_eq!(decode_str("2s"), 100);
        assert_eq!(decode_str("1E"), 50);
        assert_eq!(decode_str("ZZ"), MAX_COORD);
        assert_eq!(decode_str("zz"), MAX_COORD);
    }

    #[test]
    fn test_decode_empty_is_zero() {
        assert_eq!(decode_str(""), 0);
    }

    #[test]
    fn test_lenient_non_alphanumeric_counts_as_zero() {
        // Punctuation and non-ASCII characters are accepted as digit zero.
        assert_eq!(digit_value('|'), 0);
        assert_eq!(digit_value('-'), 0);
        assert_eq!(digit_value('é'), 0);
        assert_eq!(decode_str("1|"), 36);
        assert_eq!(decode_str("#5"), 5);
    }

    #[test]
    fn test_round_trip_all_coordinates() {
        for n in 0..=MAX_COORD {
            let token = encode_coord(n).unwrap();
            assert_eq!(token.len(), COORD_WIDTH);
            assert_eq!(decode_str(&token), n, "token {token}");
        }
    }

    #[test]
    fn test_encode_pads_and_rejects_overflow() {
        assert_eq!(encode(5, 2).as_deref(), Some("05"));
        assert_eq!(encode(35, 1).as_deref(), Some("Z"));
        assert_eq!(encode(36, 1), None);
        assert_eq!(encode_coord(MAX_COORD + 1), None);
    }

    #[test]
    fn test_decode_saturates() {
        let long = "Z".repeat(32);
        assert_eq!(decode_str(&long), u32::MAX);
    }
}
