use clap::Parser;
use std::path::PathBuf;

use crate::v_resolve::Category;

#[derive(Parser, Debug)]
#[command(author, version, about = "Print the DocBook list of verification codes in one category.", long_about = None)]
pub struct Cli {
    /// Path to the verification library's source tree.
    pub tree: PathBuf,

    /// Which category of codes to list.
    #[arg(value_enum)]
    pub category: Category,
}
