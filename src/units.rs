use serde::Deserialize;

pub const SUFFIXES: [&str; 5] = ["KiB", "MiB", "GiB", "TiB", "PiB"];
pub const HUMAN_DECIMALS: usize = 2;

/// Turns a kibibyte count into e.g. `"1.50 MiB"`.
///
/// A value moves to the next unit only while it is strictly above 1024, so
/// `1024` stays `"1024.00 KiB"`. Anything past PiB is still shown in PiB.
pub fn humanize(kibibytes: u64, decimals: usize) -> String {
    let mut value = kibibytes as f64;
    let mut unit = 0;
    while value > 1024.0 && unit < SUFFIXES.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.decimals$} {}", SUFFIXES[unit])
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeStyle {
    #[default]
    Human,
    Kibibytes,
}

impl SizeStyle {
    pub fn render(&self, kibibytes: u64) -> String {
        match self {
            SizeStyle::Human => humanize(kibibytes, HUMAN_DECIMALS),
            SizeStyle::Kibibytes => format!("{kibibytes} KiB"),
        }
    }
}
