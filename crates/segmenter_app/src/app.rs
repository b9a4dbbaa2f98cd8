use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use chrono::Utc;
use segmenter_core::validate_message;
use segmenter_engine::{
    append_unsubscribe_footer, estimate_credits, message_preview, render_json, write_report,
    SegmentationReport, StandardSegmentCounter,
};
use segmenter_logging::seg_info;

use crate::cli::Args;
use crate::config;

pub fn run(args: &Args) -> Result<()> {
    let config = config::load(args.config.as_deref());
    let raw = read_message(args)?;
    validate_message(&raw, &config.compose).context("message rejected")?;

    let (message, footer_truncated) = match &args.unsubscribe_url {
        Some(url) => {
            let outcome = append_unsubscribe_footer(&raw, url, config.footer_limit);
            (outcome.text, outcome.truncated)
        }
        None => (raw, false),
    };

    let result = validate_message(&message, &config.compose).context("message rejected")?;
    seg_info!(
        "Segmented message {:?}: encoding={} units={} segments={}",
        message_preview(&message),
        result.encoding,
        result.units,
        result.segment_count
    );

    let mut report = SegmentationReport::new(Utc::now().to_rfc3339(), &message, result)
        .with_footer_truncated(footer_truncated);

    if let Some(recipients) = args.recipients {
        let estimate = estimate_credits(&StandardSegmentCounter, &message, recipients)
            .context("credit estimate failed")?;
        if let Some(available) = args.available_credits {
            estimate
                .ensure_affordable(available)
                .context("campaign cannot be sent")?;
        }
        report = report.with_credits(estimate);
    }

    if let Some(out) = &args.out {
        write_report(out, &report)
            .with_context(|| format!("failed to write report to {}", out.display()))?;
    }

    if args.json {
        println!("{}", render_json(&report)?);
    } else {
        for line in summary_lines(&report) {
            println!("{line}");
        }
    }
    Ok(())
}

fn read_message(args: &Args) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    let raw = match &args.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read message from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read message from stdin")?;
            buf
        }
    };
    Ok(strip_trailing_newline(raw))
}

/// Editors and shells end files with a newline that is not part of the message.
fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

fn summary_lines(report: &SegmentationReport) -> Vec<String> {
    let result = &report.result;
    let mut lines = vec![report.view_label.clone()];
    lines.push(format!(
        "encoding {}, {} remaining before the next segment",
        result.encoding,
        result.remaining_in_current()
    ));
    if report.footer_truncated {
        lines.push("message was shortened to fit the unsubscribe footer".to_string());
    }
    if let Some(credits) = &report.credits {
        lines.push(format!(
            "{} credits for {} recipients ({} per message)",
            credits.credits_required, credits.recipients, credits.segments_per_message
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use segmenter_core::{compute_segmentation, ComposeError};
    use segmenter_engine::{estimate_credits, SegmentationReport, StandardSegmentCounter};

    use super::{run, strip_trailing_newline, summary_lines};
    use crate::cli::Args;
    use crate::logging::LogDestination;

    fn args_for(text: &str) -> Args {
        Args {
            text: Some(text.to_string()),
            file: None,
            json: false,
            recipients: Some(5),
            available_credits: None,
            unsubscribe_url: Some("https://astr.io/u/abc123".to_string()),
            config: None,
            out: None,
            log: LogDestination::Off,
        }
    }

    #[test]
    fn blank_body_is_rejected_before_footer_is_added() {
        let err = run(&args_for("   ")).unwrap_err();
        assert_eq!(err.downcast_ref::<ComposeError>(), Some(&ComposeError::Empty));
    }

    #[test]
    fn body_with_footer_runs_to_completion() {
        assert!(run(&args_for("Flash sale today!")).is_ok());
    }

    #[test]
    fn trailing_newline_is_dropped_once() {
        assert_eq!(strip_trailing_newline("hi\n".to_string()), "hi");
        assert_eq!(strip_trailing_newline("hi\r\n".to_string()), "hi");
        assert_eq!(strip_trailing_newline("hi\n\n".to_string()), "hi\n");
        assert_eq!(strip_trailing_newline("hi".to_string()), "hi");
    }

    #[test]
    fn summary_without_credits() {
        let report = SegmentationReport::new("t", "Hello", compute_segmentation("Hello"));
        assert_eq!(
            summary_lines(&report),
            vec![
                "5/160 characters, 1 segment".to_string(),
                "encoding GSM-7, 155 remaining before the next segment".to_string(),
            ]
        );
    }

    #[test]
    fn summary_with_credits_and_truncation() {
        let text = "a".repeat(200);
        let credits = estimate_credits(&StandardSegmentCounter, &text, 12).unwrap();
        let report = SegmentationReport::new("t", &text, compute_segmentation(&text))
            .with_credits(credits)
            .with_footer_truncated(true);
        let lines = summary_lines(&report);
        assert_eq!(lines[0], "200/306 characters, 2 segments");
        assert_eq!(lines[2], "message was shortened to fit the unsubscribe footer");
        assert_eq!(lines[3], "24 credits for 12 recipients (2 per message)");
    }
}
