use segmenter_core::Encoding;
use segmenter_logging::seg_debug;
use serde::Serialize;
use thiserror::Error;

use crate::SegmentCounter;

/// Credits a campaign send will consume: one credit per segment per recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditEstimate {
    pub recipients: u64,
    pub segments_per_message: u64,
    pub encoding: Encoding,
    pub credits_required: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillingError {
    #[error("cannot bill an empty message")]
    EmptyMessage,
    #[error("credit total overflows: {segments} segments x {recipients} recipients")]
    Overflow { segments: u64, recipients: u64 },
    #[error("insufficient credits: {required} required, {available} available")]
    InsufficientCredits { required: u64, available: u64 },
}

impl CreditEstimate {
    pub fn ensure_affordable(&self, available: u64) -> Result<(), BillingError> {
        if available < self.credits_required {
            return Err(BillingError::InsufficientCredits {
                required: self.credits_required,
                available,
            });
        }
        Ok(())
    }
}

/// Price `text` for `recipients` using the same segmentation as the composer.
pub fn estimate_credits(
    counter: &dyn SegmentCounter,
    text: &str,
    recipients: u64,
) -> Result<CreditEstimate, BillingError> {
    let result = counter.segment(text);
    if result.segment_count == 0 {
        return Err(BillingError::EmptyMessage);
    }

    let segments = u64::try_from(result.segment_count).map_err(|_| BillingError::Overflow {
        segments: u64::MAX,
        recipients,
    })?;
    let credits_required = segments
        .checked_mul(recipients)
        .ok_or(BillingError::Overflow {
            segments,
            recipients,
        })?;

    seg_debug!(
        "credit estimate encoding={} units={} segments={} recipients={} credits={}",
        result.encoding,
        result.units,
        segments,
        recipients,
        credits_required
    );

    Ok(CreditEstimate {
        recipients,
        segments_per_message: segments,
        encoding: result.encoding,
        credits_required,
    })
}
