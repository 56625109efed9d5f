#![doc = include_str!("../README.md")]

pub mod v_cli;
pub use v_cli::Cli;
pub mod v_extract;
pub use v_extract::{scan_codes, CodeEntry, Entry};
pub mod v_resolve;
pub use v_resolve::{resolve, Category, SOURCE_CORPUS};
pub mod v_format;
pub use v_format::{format_description, format_list_item};
