use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use segmenter_core::{CounterView, SegmentationResult};
use segmenter_logging::seg_info;
use serde::Serialize;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::CreditEstimate;

const PREVIEW_CHARS: usize = 40;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("report directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// JSON document handed to the composer UI or archived next to a campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationReport {
    pub generated_utc: String,
    pub message_preview: String,
    pub result: SegmentationResult,
    pub view_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<CreditEstimate>,
    pub footer_truncated: bool,
}

impl SegmentationReport {
    pub fn new(generated_utc: impl Into<String>, message: &str, result: SegmentationResult) -> Self {
        Self {
            generated_utc: generated_utc.into(),
            message_preview: message_preview(message),
            result,
            view_label: CounterView::from_result(&result).label(),
            credits: None,
            footer_truncated: false,
        }
    }

    pub fn with_credits(mut self, credits: CreditEstimate) -> Self {
        self.credits = Some(credits);
        self
    }

    pub fn with_footer_truncated(mut self, truncated: bool) -> Self {
        self.footer_truncated = truncated;
        self
    }
}

/// First characters of the message for log lines and reports.
pub fn message_preview(message: &str) -> String {
    let mut chars = message.chars();
    let preview: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{preview}…")
    } else {
        preview
    }
}

pub fn render_json(report: &SegmentationReport) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Atomically write the report to `path` via a temp file in the same directory.
pub fn write_report(path: &Path, report: &SegmentationReport) -> Result<PathBuf, ReportError> {
    let content = render_json(report)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !dir.is_dir() {
        fs::create_dir_all(&dir).map_err(|e| ReportError::OutputDir(e.to_string()))?;
    }

    let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| ReportError::OutputDir(e.to_string()))?;
    tmp.write_all(content.as_bytes())?;
    tmp.write_all(b"\n")?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(path).map_err(|e| ReportError::Io(e.error))?;

    seg_info!("Wrote segmentation report to {:?}", path);
    Ok(path.to_path_buf())
}
