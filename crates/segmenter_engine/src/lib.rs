//! Segmenter engine: campaign-side use of the segmenter (credits, footers, reports).
mod billing;
mod counter;
mod footer;
mod report;

pub use billing::{estimate_credits, BillingError, CreditEstimate};
pub use counter::{SegmentCounter, StandardSegmentCounter};
pub use footer::{append_unsubscribe_footer, FooterOutcome, MAX_CONCATENATED_LEN};
pub use report::{message_preview, render_json, write_report, ReportError, SegmentationReport};
