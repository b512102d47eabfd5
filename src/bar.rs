use color_eyre::{Result, eyre, owo_colors::OwoColorize};
use serde::Deserialize;

/// Widest bar `render_bar` will draw.
pub const MAX_BAR_WIDTH: i64 = u16::MAX as i64;

/// Characters used to draw a bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct BarStyle {
    pub filled: char,
    pub empty: char,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            filled: '~',
            empty: ' ',
        }
    }
}

/// Renders `percent` (0..=100) as a bar exactly `width` chars long.
///
/// The filled part is `percent / 100 * width` rounded to the nearest integer,
/// ties to even.
pub fn render_bar(percent: i64, width: i64, style: &BarStyle) -> Result<String> {
    if !(0..=100).contains(&percent) {
        return Err(eyre::eyre!("Percent must be between 0 and 100."));
    }
    if width <= 0 {
        return Err(eyre::eyre!("Total characters must be a positive integer."));
    }
    if width > MAX_BAR_WIDTH {
        return Err(eyre::eyre!(
            "Total characters must be at most {MAX_BAR_WIDTH}, got {width}."
        ));
    }

    let width = width as usize;
    let filled = (percent as f64 / 100.0 * width as f64).round_ties_even() as usize;
    let filled = filled.min(width);
    let empty = width - filled;

    let mut bar = String::with_capacity(width);
    bar.extend(std::iter::repeat_n(style.filled, filled));
    bar.extend(std::iter::repeat_n(style.empty, empty));
    Ok(bar)
}

/// Same as [`render_bar`] but reports a bad percent or width on stderr and
/// yields an empty bar, so one bad line never aborts a report.
pub fn bar_or_blank(percent: i64, width: i64, style: &BarStyle) -> String {
    match render_bar(percent, width, style) {
        Ok(bar) => bar,
        Err(err) => {
            eprintln!("{} {:#}", "invalid bar:".red().bold(), err.red().italic());
            String::new()
        }
    }
}
