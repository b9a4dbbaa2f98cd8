use std::path::PathBuf;

use clap::Parser;

use crate::logging::LogDestination;

/// Count SMS encoding units, segments and campaign credits for a message.
#[derive(Parser, Debug)]
#[command(name = "smscount", version, about, long_about = None)]
pub struct Args {
    /// Message text; read from --file or stdin when omitted
    pub text: Option<String>,

    /// Read the message body from a file
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Print the full JSON report instead of the counter line
    #[arg(long)]
    pub json: bool,

    /// Number of recipients to price the send for
    #[arg(short, long)]
    pub recipients: Option<u64>,

    /// Fail when the send needs more credits than this
    #[arg(long, requires = "recipients")]
    pub available_credits: Option<u64>,

    /// Append an unsubscribe footer with this link before counting
    #[arg(long)]
    pub unsubscribe_url: Option<String>,

    /// RON config file (default: ./smscount.ron when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Also write the JSON report to this path
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Where diagnostics go
    #[arg(long, value_enum, default_value_t = LogDestination::Off)]
    pub log: LogDestination,
}
