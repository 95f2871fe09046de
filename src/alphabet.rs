//! The shared 26-letter alphabet and message normalization helpers
//!
//! Every cipher in this crate does its arithmetic over alphabet indices
//! (`a` = 0 .. `z` = 25). Messages are case-folded before any transform.

/// The lowercase alphabet, in index order
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Number of letters in [`ALPHABET`]
pub const ALPHABET_LEN: usize = ALPHABET.len();

/// Zero-based alphabet index of a lowercase letter
///
/// Returns `None` for anything that is not `a`..=`z`, including uppercase
/// letters; callers normalize first.
pub fn index_of(c: char) -> Option<usize> {
    if c.is_ascii_lowercase() {
        Some((c as u8 - b'a') as usize)
    } else {
        None
    }
}

/// The letter at an alphabet index, wrapping modulo 26
pub fn letter_at(index: usize) -> char {
    ALPHABET[index % ALPHABET_LEN] as char
}

/// Shift an alphabet index by a signed offset, wrapping in both directions
pub fn shift_index(index: usize, offset: i64) -> usize {
    (index as i64 + offset).rem_euclid(ALPHABET_LEN as i64) as usize
}

/// Case-fold a message
pub fn normalize(message: &str) -> String {
    message.to_lowercase()
}

/// Case-fold a message and drop every whitespace character
pub fn normalize_stripped(message: &str) -> String {
    message
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_of_letters() {
        assert_eq!(index_of('a'), Some(0));
        assert_eq!(index_of('m'), Some(12));
        assert_eq!(index_of('z'), Some(25));
    }

    #[test]
    fn test_index_of_non_letters() {
        assert_eq!(index_of('A'), None);
        assert_eq!(index_of(' '), None);
        assert_eq!(index_of('!'), None);
        assert_eq!(index_of('é'), None);
    }

    #[test]
    fn test_letter_at_wraps() {
        assert_eq!(letter_at(0), 'a');
        assert_eq!(letter_at(25), 'z');
        assert_eq!(letter_at(26), 'a');
    }

    #[test]
    fn test_shift_index_wraps_both_ways() {
        assert_eq!(shift_index(24, 3), 1);
        assert_eq!(shift_index(1, -3), 24);
        assert_eq!(shift_index(0, 0), 0);
        assert_eq!(shift_index(0, -26), 0);
    }

    #[test]
    fn test_normalize_stripped() {
        assert_eq!(normalize_stripped("Hello, World\n\tAgain"), "hello,worldagain");
        assert_eq!(normalize_stripped("   "), "");
    }
}
