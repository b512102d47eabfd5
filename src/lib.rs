pub mod bar;
pub mod commands;
pub mod config;
pub mod parser;
pub mod report;
pub mod size_source;
pub mod units;
