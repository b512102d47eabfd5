use std::path::Path;

use color_eyre::{Result, owo_colors::OwoColorize};
use tracing::{debug, warn};

/// What a size source printed and how it exited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl SourceOutput {
    /// Non-blank stdout lines, in order.
    pub fn lines(&self) -> Vec<String> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Anything that can report `<kibibytes> <path>` lines for the immediate
/// subdirectories of a target.
pub trait SizeSource {
    /// Errors only when the source could not be run at all.
    fn list(&self, target: &Path) -> Result<SourceOutput>;
}

/// Runs `source` and returns its output lines.
///
/// A source that ran but failed is not an error here: its stderr is echoed
/// and the result is empty.
pub fn collect_lines(source: &dyn SizeSource, target: &Path) -> Result<Vec<String>> {
    let output = source.list(target)?;

    if !output.success {
        warn!(code = ?output.code, target = %target.display(), "size source failed");
        eprintln!("{} {}", "Error:".red().bold(), output.stderr.trim_end());
        return Ok(Vec::new());
    }

    let lines = output.lines();
    debug!(count = lines.len(), "collected size lines");
    Ok(lines)
}
