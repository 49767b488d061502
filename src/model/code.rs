//! Confirmation code generation.

use rand::Rng;

/// Alphabet for confirmation codes. Excludes I, O, 0 and 1, which are easy
/// to misread over the phone or on a printed report.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Length of a confirmation code.
pub const CODE_LEN: usize = 6;

/// Generate a random confirmation code, e.g. "A3X7K9".
///
/// Uniqueness is enforced by the store; the write path re-rolls on a
/// collision.
pub fn generate_confirmation_code() -> String {
    let mut rng = rand::thread_rng();
    (0..CODE_LEN)
        .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_have_the_expected_shape() {
        for _ in 0..200 {
            let code = generate_confirmation_code();
            assert_eq!(code.len(), CODE_LEN);
            assert!(code.bytes().all(|b| CODE_ALPHABET.contains(&b)), "bad code: {code}");
        }
    }

    #[test]
    fn ambiguous_characters_are_excluded() {
        for forbidden in [b'I', b'O', b'0', b'1'] {
            assert!(!CODE_ALPHABET.contains(&forbidden));
        }
    }
}
