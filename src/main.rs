use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use duim::{
    commands::Cli,
    config::Settings,
    report::{self, Outcome},
    size_source::DuCommand,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;
    let options = cli.report_options(&settings);
    let target = cli.target();
    debug!(?options, target = %target.display(), "starting report");

    let source = DuCommand::new(settings.du_command.as_str());
    let mut out = io::stdout().lock();
    let outcome = report::run(&source, &target, &options, &mut out)?;
    out.flush()?;

    Ok(match outcome {
        Outcome::Reported | Outcome::NoData => ExitCode::SUCCESS,
        Outcome::SourceUnavailable => ExitCode::FAILURE,
    })
}
