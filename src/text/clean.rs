// Review text cleaning.
//
// Four fixed steps, always in this order: lowercase, drop URLs, drop
// anything that isn't a word character or whitespace, drop digits. The
// result is what the tokenizer sees.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Start of a URL with an explicit scheme. `www://` is matched too; bare
/// `www.` hosts are left for the punctuation step to flatten.
///
/// Only the scheme is matched here. regex-lite's `\s` is ASCII-only, so the
/// end of the URL is found with `char::is_whitespace` instead.
static URL_SCHEME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(https?|www)://").expect("URL scheme pattern is a valid regex")
});

/// Clean a raw review into lowercase words separated by whitespace.
///
/// Idempotent: cleaning already-cleaned text returns it unchanged.
pub fn clean_text(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let without_urls = strip_urls(&lowered);
    let without_punct = strip_non_word(&without_urls);
    strip_digits(&without_punct)
}

/// Remove every URL: a scheme followed by at least one non-whitespace
/// character, up to the next (Unicode) whitespace.
pub fn strip_urls(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(m) = URL_SCHEME.find(rest) {
        let tail = &rest[m.end()..];
        let end = tail.find(char::is_whitespace).unwrap_or(tail.len());
        if end == 0 {
            // Bare scheme with nothing after it is not a URL.
            out.push_str(&rest[..m.end()]);
        } else {
            out.push_str(&rest[..m.start()]);
        }
        rest = &tail[end..];
    }
    out.push_str(rest);
    out
}

/// Keep only word characters (Unicode alphanumerics and `_`) and whitespace.
///
/// regex-lite's `\w` is ASCII-only, which would eat accented letters, so
/// this step filters by char class instead of by pattern.
pub fn strip_non_word(text: &str) -> String {
    text.chars()
        .filter(|&c| is_word_char(c) || c.is_whitespace())
        .collect()
}

/// Remove digit characters, including non-ASCII numerals.
pub fn strip_digits(text: &str) -> String {
    text.chars().filter(|c| !c.is_numeric()).collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases() {
        assert_eq!(clean_text("GREAT Product"), "great product");
    }

    #[test]
    fn test_strips_http_and_https_urls() {
        let cleaned = clean_text("see https://example.com/x?y=1 and http://a.b now");
        assert_eq!(cleaned, "see  and  now");
    }

    #[test]
    fn test_url_match_is_case_insensitive() {
        assert_eq!(strip_urls("go HTTPS://EXAMPLE.COM"), "go ");
    }

    #[test]
    fn test_url_ends_at_unicode_whitespace() {
        assert_eq!(
            clean_text("see https://a.com\u{a0}great product"),
            "see \u{a0}great product"
        );
        assert_eq!(strip_urls("x http://a.b\u{3000}nice"), "x \u{3000}nice");
    }

    #[test]
    fn test_bare_scheme_is_not_a_url() {
        assert_eq!(strip_urls("http:// ok"), "http:// ok");
    }

    #[test]
    fn test_bare_www_host_is_flattened_not_removed() {
        // No scheme, so the URL step leaves it and the punctuation step
        // squashes the dots out.
        assert_eq!(clean_text("visit www.shop.com"), "visit wwwshopcom");
    }

    #[test]
    fn test_strips_punctuation_keeps_underscore() {
        assert_eq!(clean_text("it's snake_case, ok?!"), "its snake_case ok");
    }

    #[test]
    fn test_strips_digits() {
        assert_eq!(clean_text("5 stars for the 2nd one"), " stars for the nd one");
    }

    #[test]
    fn test_keeps_accented_letters() {
        assert_eq!(clean_text("Très bien, café!"), "très bien café");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn test_idempotent_on_messy_input() {
        let once = clean_text("Loved it!!! 10/10 https://amzn.to/abc WOULD buy again :)");
        assert_eq!(clean_text(&once), once);
    }
}
