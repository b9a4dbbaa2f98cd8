use segmenter_core::{compute_segmentation, SegmentationResult};

pub trait SegmentCounter: Send + Sync {
    fn segment(&self, text: &str) -> SegmentationResult;
}

/// GSM 03.38 segmenter shared by the composer counter and the charge path.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardSegmentCounter;

impl SegmentCounter for StandardSegmentCounter {
    fn segment(&self, text: &str) -> SegmentationResult {
        compute_segmentation(text)
    }
}
