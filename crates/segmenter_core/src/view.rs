use std::fmt;

use crate::{compute_segmentation, Encoding, SegmentationResult};

/// Composer counter line: "X/Y characters, Z segment(s)".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterView {
    pub characters: usize,
    pub capacity: usize,
    pub segments: usize,
    pub unicode: bool,
    pub remaining_single: i64,
}

impl CounterView {
    pub fn from_result(result: &SegmentationResult) -> Self {
        Self {
            characters: result.units,
            capacity: result.total_capacity(),
            segments: result.segment_count,
            unicode: result.encoding == Encoding::Ucs2,
            remaining_single: result.remaining_single(),
        }
    }

    pub fn label(&self) -> String {
        let plural = if self.segments == 1 { "" } else { "s" };
        let mut label = format!(
            "{}/{} characters, {} segment{plural}",
            self.characters, self.capacity, self.segments
        );
        if self.unicode {
            label.push_str(" (Unicode)");
        }
        label
    }
}

impl fmt::Display for CounterView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

pub fn counter_view(text: &str) -> CounterView {
    CounterView::from_result(&compute_segmentation(text))
}
