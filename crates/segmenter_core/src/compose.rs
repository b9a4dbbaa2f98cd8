use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{compute_segmentation, utf16_len, SegmentationResult};

/// Longest message body the dashboards accept, in UTF-16 code units.
pub const DEFAULT_MAX_CHARS: usize = 2000;

/// Caller-side limits applied before a message can be saved or sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposePolicy {
    pub max_chars: usize,
    pub max_segments: Option<usize>,
}

impl Default for ComposePolicy {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            max_segments: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("message text is required")]
    Empty,
    #[error("message text is {len} characters, limit is {max}")]
    TooLong { len: usize, max: usize },
    #[error("message needs {segments} segments, limit is {max}")]
    TooManySegments { segments: usize, max: usize },
}

/// Check `text` against `policy` and return its segmentation when accepted.
pub fn validate_message(
    text: &str,
    policy: &ComposePolicy,
) -> Result<SegmentationResult, ComposeError> {
    if text.trim().is_empty() {
        return Err(ComposeError::Empty);
    }

    let len = utf16_len(text);
    if len > policy.max_chars {
        return Err(ComposeError::TooLong {
            len,
            max: policy.max_chars,
        });
    }

    let result = compute_segmentation(text);
    if let Some(max) = policy.max_segments {
        if result.segment_count > max {
            return Err(ComposeError::TooManySegments {
                segments: result.segment_count,
                max,
            });
        }
    }
    Ok(result)
}
