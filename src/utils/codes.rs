//! Short random codes
//!
//! Used for team join codes and email verification codes.

use rand::Rng;

const CODE_CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Generate an uppercase alphanumeric code of the given length
///
/// The charset omits easily-confused characters (0/O, 1/I) since codes are
/// typed in by hand from the mobile app.
pub fn generate_code(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..CODE_CHARSET.len());
            CODE_CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_code_length() {
        assert_eq!(generate_code(8).len(), 8);
        assert_eq!(generate_code(6).len(), 6);
    }

    #[test]
    fn test_generate_code_charset() {
        let code = generate_code(64);
        assert!(code.bytes().all(|b| CODE_CHARSET.contains(&b)));
    }
}
