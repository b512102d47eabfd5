use std::path::Path;

use claims::assert_ok;
use color_eyre::{Result, eyre};
use duim::{
    report::{self, NO_DATA, Outcome, PercentBase, ReportOptions},
    size_source::{SizeSource, SourceOutput},
    units::SizeStyle,
};

struct FakeSource {
    output: SourceOutput,
}

impl FakeSource {
    fn ok(stdout: &str) -> Self {
        Self {
            output: SourceOutput {
                success: true,
                code: Some(0),
                stdout: stdout.to_string(),
                stderr: String::new(),
            },
        }
    }

    fn failing(stderr: &str) -> Self {
        Self {
            output: SourceOutput {
                success: false,
                code: Some(1),
                stdout: String::new(),
                stderr: stderr.to_string(),
            },
        }
    }
}

impl SizeSource for FakeSource {
    fn list(&self, _target: &Path) -> Result<SourceOutput> {
        Ok(self.output.clone())
    }
}

struct MissingCommand;

impl SizeSource for MissingCommand {
    fn list(&self, _target: &Path) -> Result<SourceOutput> {
        Err(eyre::eyre!("No such file or directory (os error 2)"))
    }
}

fn run_report(source: &dyn SizeSource, options: &ReportOptions) -> (Outcome, String) {
    let mut out = Vec::new();
    let outcome = assert_ok!(report::run(source, Path::new("/data"), options, &mut out));
    (outcome, String::from_utf8(out).unwrap())
}

#[test]
fn two_directories() {
    let (outcome, text) = run_report(&FakeSource::ok("10 /a\n20 /b\n"), &ReportOptions::default());
    assert_eq!(outcome, Outcome::Reported);

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], format!("100% [{}] 10.00 KiB /a", "~".repeat(20)));
    assert_eq!(
        lines[1],
        format!(" 67% [{}{}] 20.00 KiB /b", "~".repeat(13), " ".repeat(7))
    );
    assert_eq!(lines[2], "Total: 30.00 KiB /data");
}

#[test]
fn order_is_kept() {
    let (_, text) = run_report(
        &FakeSource::ok("1\t/z\n4096\t/a\n2\t/m\n"),
        &ReportOptions::default(),
    );
    let paths: Vec<&str> = text
        .lines()
        .take(3)
        .map(|line| line.rsplit(' ').next().unwrap())
        .collect();
    assert_eq!(paths, vec!["/z", "/a", "/m"]);
}

#[test]
fn empty_output_means_no_data() {
    let (outcome, text) = run_report(&FakeSource::ok("\n\n"), &ReportOptions::default());
    assert_eq!(outcome, Outcome::NoData);
    assert_eq!(text, format!("{NO_DATA}\n"));
}

#[test]
fn malformed_output_means_no_data() {
    let (outcome, text) = run_report(
        &FakeSource::ok("10 /a\nabc /b\n"),
        &ReportOptions::default(),
    );
    assert_eq!(outcome, Outcome::NoData);
    assert_eq!(text, "No data received.\n");
}

#[test]
fn failed_command_means_no_data() {
    let (outcome, text) = run_report(
        &FakeSource::failing("du: cannot access '/data': No such file or directory"),
        &ReportOptions::default(),
    );
    assert_eq!(outcome, Outcome::NoData);
    assert_eq!(text, "No data received.\n");
}

#[test]
fn missing_command_is_reported() {
    let (outcome, text) = run_report(&MissingCommand, &ReportOptions::default());
    assert_eq!(outcome, Outcome::SourceUnavailable);
    assert_eq!(text, "No data received.\n");
}

#[test]
fn bad_length_blanks_bars() {
    let options = ReportOptions {
        bar_length: -5,
        ..ReportOptions::default()
    };
    let (outcome, text) = run_report(&FakeSource::ok("10 /a\n"), &options);
    assert_eq!(outcome, Outcome::Reported);
    assert_eq!(text, "100% [] 10.00 KiB /a\nTotal: 10.00 KiB /data\n");
}

#[test]
fn grand_total_and_raw_sizes() {
    let options = ReportOptions {
        bar_length: 4,
        size_style: SizeStyle::Kibibytes,
        percent_base: PercentBase::Total,
        ..ReportOptions::default()
    };
    let (_, text) = run_report(&FakeSource::ok("25 /a\n75 /b\n"), &options);
    assert_eq!(
        text,
        " 25% [~   ] 25 KiB /a\n 75% [~~~ ] 75 KiB /b\nTotal: 100 KiB /data\n"
    );
}

#[test]
fn overflowing_sizes_still_report() {
    let (outcome, text) = run_report(
        &FakeSource::ok("18446744073709551615 /a\n1 /b\n"),
        &ReportOptions::default(),
    );
    assert_eq!(outcome, Outcome::Reported);
    assert_eq!(text.lines().count(), 3);
    assert!(text.lines().nth(1).unwrap().starts_with("  0% ["));
}

#[test]
fn oversized_length_blanks_bars() {
    let options = ReportOptions {
        bar_length: i64::MAX,
        ..ReportOptions::default()
    };
    let (outcome, text) = run_report(&FakeSource::ok("10 /a\n"), &options);
    assert_eq!(outcome, Outcome::Reported);
    assert_eq!(text, "100% [] 10.00 KiB /a\nTotal: 10.00 KiB /data\n");
}
