use std::path::PathBuf;

use clap::Parser;

use crate::{
    config::Settings,
    report::{PercentBase, ReportOptions},
    units::SizeStyle,
};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "DU Improved -- See Disk Usage Report with bar charts",
    long_about = None
)]
pub struct Cli {
    /// The directory to scan [default: .]
    pub target: Option<PathBuf>,

    /// Print sizes in human readable format, e.g. 1.00 KiB 23.00 MiB 2.00 GiB
    /// (already the default unless `human_readable: false` is set in config)
    #[arg(short = 'H', long)]
    pub human_readable: bool,

    /// Length of the bar graph [default: 20]
    #[arg(short, long, allow_negative_numbers = true)]
    pub length: Option<i64>,

    /// Percentages of the grand total instead of the running total
    #[arg(short = 't', long)]
    pub of_total: bool,

    /// Settings file to use instead of the default one
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Target with `~` expanded, or `.` when none was given.
    pub fn target(&self) -> PathBuf {
        match &self.target {
            Some(target) => {
                PathBuf::from(shellexpand::tilde(&target.to_string_lossy()).into_owned())
            }
            None => PathBuf::from("."),
        }
    }

    /// Flags win over settings.
    pub fn report_options(&self, settings: &Settings) -> ReportOptions {
        let size_style = if self.human_readable || settings.human_readable {
            SizeStyle::Human
        } else {
            SizeStyle::Kibibytes
        };
        let percent_base = if self.of_total || settings.of_total {
            PercentBase::Total
        } else {
            PercentBase::Running
        };

        ReportOptions {
            bar_length: self.length.unwrap_or(settings.bar_length),
            bar_style: settings.bar,
            size_style,
            percent_base,
        }
    }
}
