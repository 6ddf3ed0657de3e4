//! URL-safe random identifiers for timeline events and share links.

use rand::Rng;

const URL_SAFE_ALPHABET: &[u8] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-_";

const EVENT_ID_LEN: usize = 21;
const SHARE_ID_LEN: usize = 12;

fn random_id(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| URL_SAFE_ALPHABET[rng.gen_range(0..URL_SAFE_ALPHABET.len())] as char)
        .collect()
}

pub fn new_event_id() -> String {
    random_id(EVENT_ID_LEN)
}

pub fn new_share_id() -> String {
    random_id(SHARE_ID_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_has_64_distinct_url_safe_chars() {
        let mut chars: Vec<u8> = URL_SAFE_ALPHABET.to_vec();
        chars.sort_unstable();
        chars.dedup();
        assert_eq!(chars.len(), 64);
        assert!(chars
            .iter()
            .all(|c| c.is_ascii_alphanumeric() || *c == b'-' || *c == b'_'));
    }

    #[test]
    fn test_id_lengths() {
        assert_eq!(new_event_id().len(), 21);
        assert_eq!(new_share_id().len(), 12);
    }

    #[test]
    fn test_ids_are_not_repeated() {
        let a = new_share_id();
        let b = new_share_id();
        assert_ne!(a, b);
    }
}
