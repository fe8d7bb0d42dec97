//! Comment text normalization.
//!
//! Reduces a raw comment to lowercase ASCII letters and spaces:
//! - URLs (`http...`, `https...`, `www...`) are dropped
//! - `@mentions` and the `#` hashtag marker are dropped (tag text stays)
//! - every other non-letter becomes a space

use once_cell::sync::Lazy;
use regex::Regex;

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"http\S+|www\S+|https\S+").expect("url pattern compiles")
});

static MENTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@\w+|#").expect("mention pattern compiles")
});

static NON_LETTER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^a-zA-Z]").expect("letter pattern compiles")
});

/// Normalize a single comment (or a concatenated blob of comments).
///
/// Interior runs of spaces left by removed tokens are kept; only the ends
/// are trimmed. Applying it twice yields the same string.
pub fn clean_text(text: &str) -> String {
    let mut current = clean_pass(text);
    // A pass can expose a new URL token ("HTTPSfoo" lowercases to "httpsfoo",
    // "ww#wfoo" loses its '#'), so repeat until stable. Passes never grow the
    // string, which bounds the loop.
    loop {
        let next = clean_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_pass(text: &str) -> String {
    let text = URL_RE.replace_all(text, "");
    let text = MENTION_RE.replace_all(&text, "");
    let text = NON_LETTER_RE.replace_all(&text, " ");
    text.to_lowercase().trim().to_string()
}

/// Clean every comment of a batch, keeping order and length.
pub fn clean_all(comments: &[String]) -> Vec<String> {
    comments.iter().map(|c| clean_text(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only_letters_and_spaces(s: &str) -> bool {
        s.chars().all(|c| c.is_ascii_lowercase() || c == ' ')
    }

    #[test]
    fn test_strips_urls() {
        let inputs = [
            "check this https://example.com/watch?v=1 now",
            "www.example.org is great",
            "link:http://a.b/c",
            "two links http://x.y and https://z.w/q?=1",
        ];
        for input in inputs {
            let out = clean_text(input);
            assert!(!out.contains("http"), "{:?} -> {:?}", input, out);
            assert!(!out.contains("www"), "{:?} -> {:?}", input, out);
        }
        assert_eq!(clean_text("check this https://example.com/watch?v=1 now"), "check this  now");
    }

    #[test]
    fn test_mentions_and_hashtags() {
        assert_eq!(clean_text("@someone thanks for the #tutorial"), "thanks for the tutorial");
        assert_eq!(clean_text("#1 fan"), "fan");
    }

    #[test]
    fn test_non_letters_become_spaces() {
        assert_eq!(clean_text("I LOVE this!!! 10/10"), "i love this");
        assert_eq!(clean_text("don't"), "don t");
        assert_eq!(clean_text("café naïve"), "caf  na ve");
    }

    #[test]
    fn test_output_character_class() {
        let inputs = [
            "Hello, World! 😀",
            "   padded   ",
            "ÀÉÎÕÜ ß ø",
            "tabs\tand\nnewlines",
            "@user #tag https://t.co/x www.y.z 123",
            "",
        ];
        for input in inputs {
            let out = clean_text(input);
            assert!(only_letters_and_spaces(&out), "{:?} -> {:?}", input, out);
            assert_eq!(out, out.trim());
        }
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "I love this!",
            "Visit https://foo.bar @me #wow GREAT video!!",
            "  mixed   CASE and 123 numbers  ",
            "www",
            "http",
            "HTTPSfoo bar",
            "ww#wfoo bar",
        ];
        for input in inputs {
            let once = clean_text(input);
            assert_eq!(clean_text(&once), once, "input {:?}", input);
        }
    }

    #[test]
    fn test_clean_all_keeps_order() {
        let comments = vec!["B!".to_string(), "a?".to_string(), "".to_string()];
        assert_eq!(clean_all(&comments), vec!["b", "a", ""]);
    }
}
