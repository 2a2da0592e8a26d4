// src/markup.rs
//! Steam review bodies arrive with BBCode (`[b]`, `[spoiler]`, `[url=...]`),
//! occasional HTML and entity-escaped characters. This strips the markup and
//! keeps the words.

use once_cell::sync::OnceCell;
use regex::Regex;

/// Normalize a review body: decode entities, drop BBCode/HTML tags,
/// fold curly quotes to ASCII, collapse whitespace.
pub fn normalize_review_text(s: &str) -> String {
    // 1) HTML entity decode
    let mut out = html_escape::decode_html_entities(s).to_string();

    // 2) Strip BBCode and HTML tags (content between tags is kept)
    static RE_BBCODE: OnceCell<Regex> = OnceCell::new();
    let re_bb = RE_BBCODE.get_or_init(|| {
        Regex::new(r"(?i)\[/?(?:b|i|u|s|h[1-3]|spoiler|strike|noparse|hr|list|olist|\*|quote|code|table|tr|th|td|url|img)(?:=[^\]]*)?\]")
            .expect("bbcode regex")
    });
    out = re_bb.replace_all(&out, " ").to_string();

    static RE_TAGS: OnceCell<Regex> = OnceCell::new();
    let re_tags = RE_TAGS.get_or_init(|| Regex::new(r"(?is)</?[a-z][^>]*>").expect("html tag regex"));
    out = re_tags.replace_all(&out, " ").to_string();

    // 3) Normalize “ ” ‘ ’ « » to ASCII quotes
    out = out
        .replace(['\u{201C}', '\u{201D}', '\u{00AB}', '\u{00BB}'], "\"")
        .replace(['\u{2018}', '\u{2019}'], "'");

    // 4) Collapse whitespace
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_bbcode_and_keeps_content() {
        let s = "[h1]Verdict[/h1][b]Great[/b] game, [spoiler]ending is sad[/spoiler]";
        assert_eq!(normalize_review_text(s), "Verdict Great game, ending is sad");
    }

    #[test]
    fn strips_links_and_html() {
        let s = "see [url=https://example.com]this guide[/url]<br/>and <i>enjoy</i>";
        assert_eq!(normalize_review_text(s), "see this guide and enjoy");
    }

    #[test]
    fn decodes_entities_and_quotes() {
        assert_eq!(
            normalize_review_text("Don\u{2019}t buy &amp; &quot;regret&quot;"),
            "Don't buy & \"regret\""
        );
    }

    #[test]
    fn leaves_ratings_and_brackets_that_are_not_tags() {
        assert_eq!(normalize_review_text("9/10 [edit: patched]"), "9/10 [edit: patched]");
        assert_eq!(normalize_review_text("a < b > c"), "a < b > c");
    }
}
