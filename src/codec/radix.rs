//! Arbitrary-precision change of base
//!
//! Numbers are held as little-endian digit vectors in a fixed radix. The
//! same multiply-add step drives base62 decoding (radix 256, multiplier
//! 62), base62 encoding (radix 62, multiplier 256) and decimal rendering of
//! hex values (radix 10, multiplier 16).

/// Multiply `digits` by `multiplier` and add `addend`, in place.
///
/// `digits` is little-endian in base `radix`. New high-order digits are
/// pushed while carry remains, so the vector never gains a zero high digit
/// and never loses a significant one.
pub(crate) fn mul_add(digits: &mut Vec<u8>, radix: u32, multiplier: u32, addend: u32) {
    debug_assert!((2..=256).contains(&radix));
    debug_assert!(multiplier <= 256);

    let mut carry = addend;
    for digit in digits.iter_mut() {
        let x = u32::from(*digit) * multiplier + carry;
        *digit = (x % radix) as u8;
        carry = x / radix;
    }
    while carry > 0 {
        digits.push((carry % radix) as u8);
        carry /= radix;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_add_from_empty() {
        let mut digits = Vec::new();
        mul_add(&mut digits, 256, 62, 0);
        assert!(digits.is_empty());

        mul_add(&mut digits, 256, 62, 1);
        assert_eq!(digits, vec![1]);
    }

    #[test]
    fn test_mul_add_carries_into_new_digit() {
        // 255 * 62 + 61 = 15871 = 0x3DFF
        let mut digits = vec![255];
        mul_add(&mut digits, 256, 62, 61);
        assert_eq!(digits, vec![0xFF, 0x3D]);
    }

    #[test]
    fn test_mul_add_decimal() {
        // 0x1a2b built nibble by nibble
        let mut digits = Vec::new();
        for nibble in [0x1, 0xa, 0x2, 0xb] {
            mul_add(&mut digits, 10, 16, nibble);
        }
        // 6699, little-endian
        assert_eq!(digits, vec![9, 9, 6, 6]);
    }

    #[test]
    fn test_mul_add_into_base62() {
        // bytes [0xFF, 0xFF] = 65535
        let mut digits = Vec::new();
        mul_add(&mut digits, 62, 256, 0xFF);
        mul_add(&mut digits, 62, 256, 0xFF);

        assert!(digits.iter().all(|&d| d < 62));
        let value: u64 = digits
            .iter()
            .rev()
            .fold(0, |acc, &d| acc * 62 + u64::from(d));
        assert_eq!(value, 65535);
    }
}
