use color_eyre::{
    Result,
    eyre::{self, WrapErr},
};

/// One line of size-source output: a path and its size in kibibytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirSize {
    pub path: String,
    pub kib: u64,
}

impl DirSize {
    pub fn new(path: impl Into<String>, kib: u64) -> Self {
        Self {
            path: path.into(),
            kib,
        }
    }
}

/// Parses `<size><whitespace><path>`. Only the first whitespace run
/// separates the two, so the path may contain spaces.
pub fn parse_line(line: &str) -> Result<DirSize> {
    let (size, path) = line
        .trim_start()
        .split_once(char::is_whitespace)
        .ok_or_else(|| eyre::eyre!("expected `<size> <path>`, got {line:?}"))?;

    let path = path.trim_start();
    if path.is_empty() {
        return Err(eyre::eyre!("missing path in line {line:?}"));
    }

    let kib = size
        .parse::<u64>()
        .with_context(|| format!("invalid size {size:?} in line {line:?}"))?;

    Ok(DirSize::new(path, kib))
}

/// Parses every line in order. The first bad line fails the whole batch.
pub fn parse_lines<I, S>(lines: I) -> Result<Vec<DirSize>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| parse_line(line.as_ref()))
        .collect()
}
