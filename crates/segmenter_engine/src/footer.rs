use segmenter_core::utf16_len;
use segmenter_logging::seg_warn;

/// Longest concatenated message the send path will build, in UTF-16 code units.
pub const MAX_CONCATENATED_LEN: usize = 1600;

const TRUNCATION_MARKER: &str = "...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterOutcome {
    pub text: String,
    pub truncated: bool,
}

/// Append the unsubscribe link, cutting the body when the result would exceed `limit`.
pub fn append_unsubscribe_footer(message: &str, short_url: &str, limit: usize) -> FooterOutcome {
    let footer = format!("\n\nUnsubscribe: {short_url}");
    let footer_len = utf16_len(&footer);
    let message_len = utf16_len(message);

    if message_len + footer_len <= limit {
        return FooterOutcome {
            text: format!("{message}{footer}"),
            truncated: false,
        };
    }

    seg_warn!(
        "message of {} units plus footer of {} units exceeds limit {}; truncating",
        message_len,
        footer_len,
        limit
    );

    let reserved = footer_len + TRUNCATION_MARKER.len();
    if reserved > limit {
        return FooterOutcome {
            text: footer,
            truncated: true,
        };
    }

    let body = truncate_utf16(message, limit - reserved);
    FooterOutcome {
        text: format!("{body}{TRUNCATION_MARKER}{footer}"),
        truncated: true,
    }
}

/// Longest prefix of `text` that fits in `max_units` UTF-16 code units.
fn truncate_utf16(text: &str, max_units: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        used += ch.len_utf16();
        if used > max_units {
            return &text[..idx];
        }
    }
    text
}
