// src/v_resolve.rs

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Source files searched for usage evidence, relative to the library tree.
/// Order matters: the first file containing a code's name wins.
pub const SOURCE_CORPUS: [&str; 3] = ["src/verify_j2k.cc", "src/dcp.cc", "src/verify.cc"];

/// Classification of a verification code, derived from the marker token found
/// next to the code's first use in the source.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// An error mandated by the Bv2.1 specification.
    #[value(name = "SPEC_ERROR")]
    SpecError,
    #[value(name = "ERROR")]
    Error,
    #[value(name = "WARNING")]
    Warning,
}

impl Category {
    /// The marker token as it appears at usage sites.
    pub fn marker(self) -> &'static str {
        match self {
            Category::SpecError => "SPEC_ERROR",
            Category::Error => "ERROR",
            Category::Warning => "WARNING",
        }
    }
}

// SPEC_ERROR is checked first so that a window containing it never classifies
// as the plain ERROR its marker contains as a substring.
const PRIORITY: [Category; 3] = [Category::SpecError, Category::Error, Category::Warning];

/// Searches the corpus under `tree` for the first use of `name` and returns
/// the category of the marker token found on that line or the line before it.
///
/// The name search is a plain substring match, not a token match; the corpus
/// conventions rely on this being permissive.  Markers are conventionally
/// placed on the line preceding the use, hence the two-line window.
///
/// A use with no nearby marker, or a name that appears in no corpus file, is
/// an inconsistency in the library and fails the run.
pub fn resolve(tree: &Path, name: &str) -> Result<Category> {
    for source in SOURCE_CORPUS {
        let path = tree.join(source);
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let mut previous = "";
        for line in contents.lines() {
            if line.contains(name) {
                let window = format!("{previous}{line}");
                for category in PRIORITY {
                    if window.contains(category.marker()) {
                        debug!(
                            code = name,
                            source,
                            category = category.marker(),
                            "classified"
                        );
                        return Ok(category);
                    }
                }
                bail!(
                    "no category marker near the first use of `{name}` in {}",
                    path.display()
                );
            }
            previous = line;
        }
    }
    bail!("`{name}` is not used in any corpus source file");
}
