use std::fmt;

use serde::{Deserialize, Serialize};

use crate::charset::classify;

/// Septets in a single GSM-7 segment.
pub const GSM7_SINGLE_CAPACITY: usize = 160;
/// Septets per segment once a concatenation header is needed.
pub const GSM7_MULTI_CAPACITY: usize = 153;
/// UTF-16 code units in a single UCS-2 segment.
pub const UCS2_SINGLE_CAPACITY: usize = 70;
/// UTF-16 code units per segment once a concatenation header is needed.
pub const UCS2_MULTI_CAPACITY: usize = 67;

/// Transport encoding chosen for a whole message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Encoding {
    Gsm7,
    Ucs2,
}

impl Encoding {
    pub const fn single_capacity(self) -> usize {
        match self {
            Encoding::Gsm7 => GSM7_SINGLE_CAPACITY,
            Encoding::Ucs2 => UCS2_SINGLE_CAPACITY,
        }
    }

    pub const fn multi_capacity(self) -> usize {
        match self {
            Encoding::Gsm7 => GSM7_MULTI_CAPACITY,
            Encoding::Ucs2 => UCS2_MULTI_CAPACITY,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Gsm7 => write!(f, "GSM-7"),
            Encoding::Ucs2 => write!(f, "UCS-2"),
        }
    }
}

/// Encoding, unit count and segment layout of one message body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationResult {
    pub encoding: Encoding,
    /// Septets for GSM-7, UTF-16 code units for UCS-2.
    pub units: usize,
    pub segment_count: usize,
    /// Units allowed per segment under the current segment count.
    pub per_segment_capacity: usize,
    /// Units allowed if the whole message fit in one segment.
    pub single_segment_capacity: usize,
}

impl SegmentationResult {
    /// Lay out `units` of the given encoding into segments.
    pub fn from_units(encoding: Encoding, units: usize) -> Self {
        let single = encoding.single_capacity();
        let multi = encoding.multi_capacity();
        let (segment_count, per_segment_capacity) = match units {
            0 => (0, single),
            n if n <= single => (1, single),
            n => (n.div_ceil(multi), multi),
        };
        Self {
            encoding,
            units,
            segment_count,
            per_segment_capacity,
            single_segment_capacity: single,
        }
    }

    pub fn is_multipart(&self) -> bool {
        self.segment_count > 1
    }

    /// Units the current segments can carry; an empty message still reports one segment's worth.
    pub fn total_capacity(&self) -> usize {
        self.per_segment_capacity * self.segment_count.max(1)
    }

    /// Units left before one more segment is needed.
    pub fn remaining_in_current(&self) -> usize {
        self.total_capacity().saturating_sub(self.units)
    }

    /// Units left before a second segment is needed; negative once past it.
    pub fn remaining_single(&self) -> i64 {
        let single = i64::try_from(self.single_segment_capacity).unwrap_or(i64::MAX);
        let units = i64::try_from(self.units).unwrap_or(i64::MAX);
        single.saturating_sub(units)
    }
}

/// Classify `text` and count its SMS transport units and segments.
///
/// Total over all inputs. A single character outside both GSM-7 tables moves
/// the whole message to UCS-2, and the units are then recounted as UTF-16 code
/// units; the partial septet count is dropped.
pub fn compute_segmentation(text: &str) -> SegmentationResult {
    let (encoding, units) = match count_septets(text) {
        Some(septets) => (Encoding::Gsm7, septets),
        None => (Encoding::Ucs2, utf16_len(text)),
    };
    SegmentationResult::from_units(encoding, units)
}

/// Septets needed for `text`, or `None` at the first non-GSM-7 character.
fn count_septets(text: &str) -> Option<usize> {
    let mut septets = 0usize;
    for ch in text.chars() {
        septets += classify(ch).septets()?;
    }
    Some(septets)
}

/// Length of `text` in UTF-16 code units (what a browser reports as `length`).
pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

#[cfg(test)]
mod tests {
    use super::{count_septets, utf16_len, Encoding, SegmentationResult};

    #[test]
    fn septet_scan_stops_at_first_non_gsm_char() {
        assert_eq!(count_septets("abc€"), Some(5));
        assert_eq!(count_septets("abc€✓def"), None);
        assert_eq!(count_septets(""), Some(0));
    }

    #[test]
    fn utf16_len_counts_surrogate_pairs() {
        assert_eq!(utf16_len(""), 0);
        assert_eq!(utf16_len("héllo"), 5);
        assert_eq!(utf16_len("🦀"), 2);
        assert_eq!(utf16_len("a🦀b"), 4);
    }

    #[test]
    fn from_units_boundaries_gsm7() {
        let at = SegmentationResult::from_units(Encoding::Gsm7, 306);
        assert_eq!((at.segment_count, at.per_segment_capacity), (2, 153));
        let over = SegmentationResult::from_units(Encoding::Gsm7, 307);
        assert_eq!((over.segment_count, over.per_segment_capacity), (3, 153));
    }

    #[test]
    fn from_units_boundaries_ucs2() {
        let at = SegmentationResult::from_units(Encoding::Ucs2, 134);
        assert_eq!(at.segment_count, 2);
        let over = SegmentationResult::from_units(Encoding::Ucs2, 135);
        assert_eq!(over.segment_count, 3);
    }

    #[test]
    fn remaining_single_goes_negative() {
        let result = SegmentationResult::from_units(Encoding::Gsm7, 170);
        assert_eq!(result.remaining_single(), -10);
        assert_eq!(result.remaining_in_current(), 306 - 170);
    }
}
