use std::{fmt, io::Write, path::Path};

use color_eyre::{Result, owo_colors::OwoColorize};
use tracing::debug;

use crate::{
    bar::{BarStyle, bar_or_blank},
    parser::{DirSize, parse_lines},
    size_source::{SizeSource, collect_lines},
    units::SizeStyle,
};

pub const NO_DATA: &str = "No data received.";
pub const DEFAULT_BAR_LENGTH: i64 = 20;

/// What each line's percentage is relative to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PercentBase {
    /// Sum of this entry and every entry before it. The first line is
    /// always 100%.
    #[default]
    Running,
    /// Sum of all entries.
    Total,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    pub bar_length: i64,
    pub bar_style: BarStyle,
    pub size_style: SizeStyle,
    pub percent_base: PercentBase,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            bar_length: DEFAULT_BAR_LENGTH,
            bar_style: BarStyle::default(),
            size_style: SizeStyle::default(),
            percent_base: PercentBase::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportLine {
    pub percent: u8,
    pub bar: String,
    pub size: String,
    pub path: String,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>3}% [{}] {} {}",
            self.percent, self.bar, self.size, self.path
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub lines: Vec<ReportLine>,
    pub total_kib: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Reported,
    NoData,
    /// The size source could not be launched at all.
    SourceUnavailable,
}

fn percent_of(part: u64, base: u64) -> u8 {
    if base == 0 {
        return 0;
    }
    (part as f64 / base as f64 * 100.0).round_ties_even() as u8
}

/// Builds report lines in input order.
pub fn build_report(entries: &[DirSize], options: &ReportOptions) -> Report {
    let grand_total = entries
        .iter()
        .fold(0u64, |acc, e| acc.saturating_add(e.kib));
    let mut running_total = 0u64;

    let lines = entries
        .iter()
        .map(|entry| {
            running_total = running_total.saturating_add(entry.kib);
            let base = match options.percent_base {
                PercentBase::Running => running_total,
                PercentBase::Total => grand_total,
            };
            let percent = percent_of(entry.kib, base);

            ReportLine {
                percent,
                bar: bar_or_blank(percent.into(), options.bar_length, &options.bar_style),
                size: options.size_style.render(entry.kib),
                path: entry.path.clone(),
            }
        })
        .collect();

    Report {
        lines,
        total_kib: running_total,
    }
}

pub fn write_report(
    report: &Report,
    target: &Path,
    options: &ReportOptions,
    out: &mut impl Write,
) -> Result<()> {
    for line in &report.lines {
        writeln!(out, "{line}")?;
    }
    writeln!(
        out,
        "Total: {} {}",
        options.size_style.render(report.total_kib),
        target.display()
    )?;
    Ok(())
}

/// Collects, parses and prints a report for `target`.
///
/// Every failure before printing degrades to a single `No data received.`
/// line; only I/O errors on `out` are returned.
pub fn run(
    source: &dyn SizeSource,
    target: &Path,
    options: &ReportOptions,
    out: &mut impl Write,
) -> Result<Outcome> {
    let lines = match collect_lines(source, target) {
        Ok(lines) => lines,
        Err(err) => {
            eprintln!(
                "{} {:#}",
                "Error occurred:".red().bold(),
                err.red().italic()
            );
            writeln!(out, "{NO_DATA}")?;
            return Ok(Outcome::SourceUnavailable);
        }
    };

    let entries = match parse_lines(&lines) {
        Ok(entries) => entries,
        Err(err) => {
            debug!("discarding unparsable size output");
            eprintln!(
                "{} {:#}",
                "Could not parse size output:".red().bold(),
                err.yellow()
            );
            Vec::new()
        }
    };

    if entries.is_empty() {
        writeln!(out, "{NO_DATA}")?;
        return Ok(Outcome::NoData);
    }

    let report = build_report(&entries, options);
    debug!(lines = report.lines.len(), total_kib = report.total_kib, "built report");
    write_report(&report, target, options, out)?;
    Ok(Outcome::Reported)
}
