use segmenter_core::utf16_len;
use segmenter_engine::{append_unsubscribe_footer, FooterOutcome, MAX_CONCATENATED_LEN};

const URL: &str = "https://astr.io/u/abc123";

fn init_logging() {
    segmenter_logging::initialize_for_tests();
}

#[test]
fn short_message_gets_footer_appended() {
    init_logging();
    let outcome = append_unsubscribe_footer("20% off today", URL, MAX_CONCATENATED_LEN);
    assert_eq!(
        outcome,
        FooterOutcome {
            text: format!("20% off today\n\nUnsubscribe: {URL}"),
            truncated: false,
        }
    );
}

#[test]
fn long_message_is_cut_to_fit_limit() {
    init_logging();
    let message = "a".repeat(2000);
    let outcome = append_unsubscribe_footer(&message, URL, MAX_CONCATENATED_LEN);
    assert!(outcome.truncated);
    assert_eq!(utf16_len(&outcome.text), MAX_CONCATENATED_LEN);
    assert!(outcome.text.ends_with(&format!("...\n\nUnsubscribe: {URL}")));
}

#[test]
fn exact_fit_is_not_truncated() {
    init_logging();
    let footer_len = utf16_len(&format!("\n\nUnsubscribe: {URL}"));
    let message = "b".repeat(100 - footer_len);
    let outcome = append_unsubscribe_footer(&message, URL, 100);
    assert!(!outcome.truncated);
    assert_eq!(utf16_len(&outcome.text), 100);
}

#[test]
fn truncation_respects_surrogate_pairs() {
    init_logging();
    let footer_len = utf16_len(&format!("\n\nUnsubscribe: {URL}"));
    let message: String = std::iter::repeat_n('🎉', 50).collect();
    // Leave an odd budget so the cut falls inside a pair.
    let limit = footer_len + 3 + 5;
    let outcome = append_unsubscribe_footer(&message, URL, limit);
    assert!(outcome.truncated);
    assert!(outcome.text.starts_with("🎉🎉..."));
    assert_eq!(utf16_len(&outcome.text), limit - 1);
}

#[test]
fn footer_alone_when_limit_is_tiny() {
    init_logging();
    let outcome = append_unsubscribe_footer("hello", URL, 10);
    assert!(outcome.truncated);
    assert_eq!(outcome.text, format!("\n\nUnsubscribe: {URL}"));
}
