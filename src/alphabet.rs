pub const ALPHABET : &[u8] = "abcdefghijklmnopqrstuvwxyz'".as_bytes();

/// Slot of `a` in a 27-wide child array. Only `a`..`z` and `'` are valid input.
pub fn get_idx(a: char) -> usize {
    if a == '\'' {
        return 26
    }
    (a as u8 - b'a') as usize
}

/// Letters the mutation sweep is allowed to touch.
pub fn is_mutable(c: char) -> bool {
    c.is_ascii_lowercase()
}

pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|&x| x.is_ascii_alphabetic() || x == '\'')
        .map(|x| x.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::alphabet::{ALPHABET, get_idx, is_mutable, normalize};

    #[test]
    fn indexes_cover_the_alphabet() {
        ALPHABET.iter().enumerate()
            .for_each(|(i, &c)| assert_eq!(get_idx(c as char), i));
        assert_eq!(get_idx('\''), 26);
    }

    #[test]
    fn normalize_strips_and_lowercases() {
        assert_eq!(normalize("Don't!"), "don't");
        assert_eq!(normalize("  HeLLo-World 42 "), "helloworld");
        assert_eq!(normalize("123 ..."), "");
    }

    #[test]
    fn apostrophe_is_not_mutable() {
        assert!(is_mutable('a'));
        assert!(is_mutable('z'));
        assert!(!is_mutable('\''));
        assert!(!is_mutable('A'));
        assert!(!is_mutable('é'));
    }
}
