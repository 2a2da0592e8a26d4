//! Review tokenizer: lowercase word tokens, apostrophes and hyphens kept inside words.

/// Split `text` into lowercase word tokens.
///
/// Alphanumeric characters, apostrophes (`'` and `’`, the latter folded to `'`)
/// and hyphens form words; every other character separates them. Apostrophes
/// and hyphens at the edges of a word are trimmed, empty tokens are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            cur.extend(ch.to_lowercase());
        } else if ch == '\'' || ch == '\u{2019}' {
            cur.push('\'');
        } else if ch == '-' {
            cur.push('-');
        } else {
            flush(&mut cur, &mut out);
        }
    }
    flush(&mut cur, &mut out);
    out
}

fn flush(cur: &mut String, out: &mut Vec<String>) {
    if cur.is_empty() {
        return;
    }
    let trimmed = cur.trim_matches(|c| c == '\'' || c == '-');
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
    cur.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_splits_on_punctuation() {
        assert_eq!(
            tokenize("10/10 Masterpiece, would RECOMMEND!"),
            vec!["10", "10", "masterpiece", "would", "recommend"]
        );
    }

    #[test]
    fn keeps_inner_apostrophes_and_hyphens() {
        assert_eq!(
            tokenize("Don’t buy this pay-to-win 'game' --"),
            vec!["don't", "buy", "this", "pay-to-win", "game"]
        );
    }

    #[test]
    fn collapses_separators_and_handles_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ...!!! 👍 ").is_empty());
        assert_eq!(tokenize("a...b\n\tc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn unicode_letters_are_words() {
        assert_eq!(tokenize("Très BIEN"), vec!["très", "bien"]);
    }
}
