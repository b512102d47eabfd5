pub mod du;
pub mod source;

pub use du::DuCommand;
pub use source::{SizeSource, SourceOutput, collect_lines};
