mod app;
mod cli;
mod config;
mod logging;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    logging::initialize(args.log);
    app::run(&args)
}
