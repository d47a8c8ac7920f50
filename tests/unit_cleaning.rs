// Unit tests for review text cleaning.
//
// Tests the properties cleaning must hold on realistic review text:
// idempotence, no surviving URLs, no surviving digits, lowercase output.

use reviewmood::text::clean::{clean_text, strip_urls};

const REVIEWS: &[&str] = &[
    "Great product, loved it!",
    "Bought 3 of these for $19.99 each. See https://amzn.to/3xYz for the deal!!",
    "DO NOT BUY. Returned after 2 weeks... http://example.com/return?id=42",
    "Works as advertised :) 5/5 would recommend",
    "Kindle Fire HD 8\" — meh. Battery lasts ~6hrs, screen's fine.",
    "Check www://weird.scheme/path and HTTPS://UPPER.CASE/Path too",
    "Café-quality coffee maker; très bien!",
    "",
    "   \n\t  ",
    "١٢٣ arabic-indic digits and ① circled ones",
];

#[test]
fn cleaning_is_idempotent() {
    for review in REVIEWS {
        let once = clean_text(review);
        let twice = clean_text(&once);
        assert_eq!(once, twice, "cleaning not idempotent for {review:?}");
    }
}

#[test]
fn no_url_survives_cleaning() {
    for review in REVIEWS {
        let cleaned = clean_text(review);
        assert!(!cleaned.contains("http"), "URL left in {cleaned:?}");
        assert!(!cleaned.contains("://"), "URL left in {cleaned:?}");
        assert_eq!(strip_urls(&cleaned), cleaned);
    }
}

#[test]
fn no_digit_survives_cleaning() {
    for review in REVIEWS {
        let cleaned = clean_text(review);
        assert!(
            !cleaned.chars().any(|c| c.is_numeric()),
            "digit left in {cleaned:?}"
        );
    }
}

#[test]
fn cleaned_text_has_only_word_chars_and_whitespace() {
    for review in REVIEWS {
        let cleaned = clean_text(review);
        assert!(
            cleaned
                .chars()
                .all(|c| c.is_alphanumeric() || c == '_' || c.is_whitespace()),
            "unexpected character in {cleaned:?}"
        );
    }
}

#[test]
fn cleaned_text_is_lowercase() {
    for review in REVIEWS {
        let cleaned = clean_text(review);
        assert_eq!(cleaned, cleaned.to_lowercase());
    }
}

#[test]
fn example_review_cleans_to_plain_words() {
    assert_eq!(clean_text("Great product, loved it!"), "great product loved it");
}

#[test]
fn url_removed_but_surrounding_words_kept() {
    let cleaned = clean_text("Love it https://example.com/a/b?c=d so much");
    let words: Vec<&str> = cleaned.split_whitespace().collect();
    assert_eq!(words, vec!["love", "it", "so", "much"]);
}

#[test]
fn word_after_url_and_no_break_space_survives() {
    let cleaned = clean_text("See https://a.com\u{a0}great product");
    let words: Vec<&str> = cleaned.split_whitespace().collect();
    assert_eq!(words, vec!["see", "great", "product"]);
}
