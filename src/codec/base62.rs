//! Base62 encoding with leading-zero preservation
//!
//! Text is read as one big base-62 numeral, most significant symbol first,
//! over the alphabet `0-9A-Za-z`. Each leading `'0'` symbol stands for one
//! leading zero byte, which a purely numeric conversion would drop.

use crate::error::{VaultError, VaultResult};

use super::radix;

/// The base62 alphabet; a symbol's value is its index
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const BASE: u32 = 62;
const ZERO_SYMBOL: char = '0';

/// Byte order mark, treated like whitespace
const BOM: char = '\u{feff}';

/// Whether `c` is skipped when reading base62 text
///
/// Whitespace and the byte order mark a text editor may prepend to a saved
/// backup are both insignificant.
pub fn is_ignorable(c: char) -> bool {
    c.is_whitespace() || c == BOM
}

/// Look up the numeric value of a base62 symbol
fn symbol_value(symbol: char) -> Option<u8> {
    let value = match symbol {
        '0'..='9' => symbol as u32 - '0' as u32,
        'A'..='Z' => symbol as u32 - 'A' as u32 + 10,
        'a'..='z' => symbol as u32 - 'a' as u32 + 36,
        _ => return None,
    };
    Some(value as u8)
}

/// Decode base62 text into the exact byte string it represents
///
/// Whitespace and byte order marks anywhere in `text` are ignored (see
/// [`is_ignorable`]). The output holds one zero byte per leading `'0'`
/// symbol followed by the big-endian value of the rest.
///
/// # Errors
///
/// - [`VaultError::EmptyInput`] if nothing remains after stripping ignorable characters
/// - [`VaultError::InvalidSymbol`] for any character outside the alphabet;
///   `position` counts characters of the stripped text
pub fn decode(text: &str) -> VaultResult<Vec<u8>> {
    let symbols: Vec<char> = text.chars().filter(|&c| !is_ignorable(c)).collect();
    if symbols.is_empty() {
        return Err(VaultError::EmptyInput);
    }

    let zeros = symbols.iter().take_while(|&&c| c == ZERO_SYMBOL).count();

    // Little-endian base-256 accumulator
    let mut acc: Vec<u8> = Vec::with_capacity(symbols.len());
    for (position, &symbol) in symbols.iter().enumerate().skip(zeros) {
        let value =
            symbol_value(symbol).ok_or(VaultError::InvalidSymbol { symbol, position })?;
        radix::mul_add(&mut acc, 256, BASE, u32::from(value));
    }

    let mut bytes = Vec::with_capacity(zeros + acc.len());
    bytes.resize(zeros, 0);
    bytes.extend(acc.iter().rev());
    Ok(bytes)
}

/// Encode bytes as base62 text
///
/// Inverse of [`decode`]: every leading zero byte becomes a leading `'0'`.
/// An empty slice encodes to an empty string.
pub fn encode(bytes: &[u8]) -> String {
    let zeros = bytes.iter().take_while(|&&b| b == 0).count();

    // Little-endian base-62 accumulator
    let mut acc: Vec<u8> = Vec::with_capacity(bytes.len() * 2);
    for &byte in &bytes[zeros..] {
        radix::mul_add(&mut acc, BASE, 256, u32::from(byte));
    }

    let mut text = String::with_capacity(zeros + acc.len());
    text.extend(std::iter::repeat(ZERO_SYMBOL).take(zeros));
    text.extend(
        acc.iter()
            .rev()
            .map(|&digit| char::from(ALPHABET[usize::from(digit)])),
    );
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        assert_eq!(decode("1").unwrap(), vec![0x01]);
        assert_eq!(decode("0").unwrap(), vec![0x00]);
        assert_eq!(decode("10").unwrap(), vec![0x3E]);
        // 61 * 62 + 61 = 3843
        assert_eq!(decode("zz").unwrap(), vec![0x0F, 0x03]);
    }

    #[test]
    fn test_alphabet_values() {
        for (index, &symbol) in ALPHABET.iter().enumerate() {
            assert_eq!(symbol_value(char::from(symbol)), Some(index as u8));
        }
        assert_eq!(symbol_value('-'), None);
    }

    #[test]
    fn test_leading_zero_fidelity() {
        let bytes = [0x00, 0x00, 0x01];
        let text = encode(&bytes);
        assert_eq!(text, "001");

        let decoded = decode(&text).unwrap();
        assert_eq!(decoded.len(), 3);
        assert_eq!(decoded, bytes);
    }

    #[test]
    fn test_all_zero_symbols() {
        assert_eq!(decode("000").unwrap(), vec![0, 0, 0]);
        assert_eq!(encode(&[0, 0, 0]), "000");
    }

    #[test]
    fn test_whitespace_ignored() {
        let compact = decode("4Vd3x9Kq").unwrap();
        let spaced = decode("  4Vd3\n x9\tKq \r\n").unwrap();
        assert_eq!(compact, spaced);
    }

    #[test]
    fn test_byte_order_mark_ignored() {
        assert_eq!(decode("\u{feff}10").unwrap(), vec![0x3E]);
        assert_eq!(decode("\u{feff}001\n").unwrap(), vec![0x00, 0x00, 0x01]);
        assert!(matches!(decode("\u{feff}"), Err(VaultError::EmptyInput)));
    }

    #[test]
    fn test_unicode_whitespace_ignored() {
        // no-break space and next line
        assert_eq!(decode("1\u{a0}0").unwrap(), vec![0x3E]);
        assert_eq!(decode("1\u{85}0").unwrap(), vec![0x3E]);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(decode(""), Err(VaultError::EmptyInput)));
        assert!(matches!(decode(" \n\t "), Err(VaultError::EmptyInput)));
    }

    #[test]
    fn test_invalid_symbols() {
        assert!(matches!(
            decode("abc-def"),
            Err(VaultError::InvalidSymbol {
                symbol: '-',
                position: 3
            })
        ));
        assert!(matches!(
            decode("abc_"),
            Err(VaultError::InvalidSymbol { symbol: '_', .. })
        ));
        assert!(matches!(
            decode("abcé"),
            Err(VaultError::InvalidSymbol { symbol: 'é', .. })
        ));
    }

    #[test]
    fn test_invalid_symbol_position_skips_whitespace() {
        let result = decode("a b\n+");
        assert!(matches!(
            result,
            Err(VaultError::InvalidSymbol {
                symbol: '+',
                position: 2
            })
        ));
    }

    #[test]
    fn test_round_trip() {
        let samples: Vec<Vec<u8>> = vec![
            vec![0x01],
            vec![0xFF],
            vec![0x00, 0xFF, 0x00],
            vec![0x00, 0x00, 0x00, 0x2A, 0x00, 0x00],
            (0..=255).collect(),
            vec![0xFF; 64],
        ];

        for bytes in samples {
            let text = encode(&bytes);
            assert_eq!(decode(&text).unwrap(), bytes, "round trip of {:?}", text);
        }
    }

    #[test]
    fn test_value_wider_than_u128() {
        // 2^136 - 1 does not fit any primitive integer
        let bytes = vec![0xFF; 17];
        let text = encode(&bytes);
        assert!(text.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(decode(&text).unwrap(), bytes);
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&[]), "");
    }
}
