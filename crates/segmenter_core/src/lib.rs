//! Segmenter core: GSM-7/UCS-2 classification and SMS segment arithmetic.
mod charset;
mod compose;
mod segment;
mod view;

pub use charset::{classify, CharClass};
pub use compose::{validate_message, ComposeError, ComposePolicy, DEFAULT_MAX_CHARS};
pub use segment::{
    compute_segmentation, utf16_len, Encoding, SegmentationResult, GSM7_MULTI_CAPACITY,
    GSM7_SINGLE_CAPACITY, UCS2_MULTI_CAPACITY, UCS2_SINGLE_CAPACITY,
};
pub use view::{counter_view, CounterView};
