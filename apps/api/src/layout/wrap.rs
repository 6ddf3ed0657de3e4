//! Greedy line wrapping on a character-count budget.
//!
//! Width is a character count standing in for visual width. Glyph metrics are
//! not consulted, so proportional fonts and wide scripts will render lines of
//! uneven length. A single word longer than the budget is placed on its own
//! line unsplit; overflow is preferred to hyphenation.

/// Character budget used for PDF body text at 12pt on A4.
pub const PDF_WRAP_WIDTH: usize = 70;

/// Wraps `text` into lines of at most `width` characters.
///
/// Tokenizes on any whitespace (newlines included) and packs words greedily,
/// joined by a single space. No look-ahead or balancing. Whitespace-only input
/// yields no lines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        } else {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_text() -> String {
        "I was born in a small town by the sea where the fishing boats came home \
         every evening and the whole street smelled of salt and diesel. My mother \
         ran the bakery on the corner and my father repaired radios in the back room \
         of a shop that never seemed to have a sign."
            .to_string()
    }

    #[test]
    fn test_empty_and_whitespace_input_yield_no_lines() {
        assert!(wrap_text("", 70).is_empty());
        assert!(wrap_text("   \n\n\t ", 70).is_empty());
    }

    #[test]
    fn test_short_text_is_single_line() {
        assert_eq!(wrap_text("Para one.", 70), vec!["Para one."]);
    }

    #[test]
    fn test_no_line_exceeds_width() {
        let text = sample_text();
        for width in [10, 25, 40, 70] {
            for line in wrap_text(&text, width) {
                assert!(
                    line.chars().count() <= width,
                    "line {line:?} exceeds width {width}"
                );
            }
        }
    }

    #[test]
    fn test_rejoin_reconstructs_word_sequence() {
        let text = sample_text();
        let lines = wrap_text(&text, 30);
        let rejoined = lines.join(" ");
        let original: Vec<&str> = text.split_whitespace().collect();
        let recovered: Vec<&str> = rejoined.split_whitespace().collect();
        assert_eq!(original, recovered);
    }

    #[test]
    fn test_overlong_word_gets_its_own_line() {
        let lines = wrap_text("a supercalifragilisticexpialidocious b", 10);
        assert_eq!(lines, vec!["a", "supercalifragilisticexpialidocious", "b"]);
    }

    #[test]
    fn test_overlong_first_word_is_not_preceded_by_empty_line() {
        let lines = wrap_text("abcdefghijkl mn", 5);
        assert_eq!(lines, vec!["abcdefghijkl", "mn"]);
    }

    #[test]
    fn test_exact_fit_stays_on_line() {
        // "aaaa bbbb" is exactly 9 characters.
        assert_eq!(wrap_text("aaaa bbbb cc", 9), vec!["aaaa bbbb", "cc"]);
    }

    #[test]
    fn test_greedy_packing_without_lookahead() {
        // Greedy fills the first line even when a balanced split would look nicer.
        let lines = wrap_text("aa bb cc dd", 8);
        assert_eq!(lines, vec!["aa bb cc", "dd"]);
    }

    #[test]
    fn test_newlines_collapse_into_spaces() {
        let lines = wrap_text("Para one.\n\nPara two.", 70);
        assert_eq!(lines, vec!["Para one. Para two."]);
    }

    #[test]
    fn test_width_counts_chars_not_bytes() {
        // Each "é" is two bytes but one character.
        let lines = wrap_text("éééé éééé", 9);
        assert_eq!(lines, vec!["éééé éééé"]);
    }
}
