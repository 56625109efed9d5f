// src/v_extract.rs

/// One member of the verification code enumeration, in declaration order.
///
/// `description` is the text of the doc comment directly above the member,
/// collapsed to a single line; it is empty when the member has no doc comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEntry {
    pub name: String,
    pub description: String,
}

/// An item found inside the enumeration body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A standalone block comment (e.g. a section divider).  It has no
    /// category of its own and the driver skips it.
    Section(String),
    /// A code declaration.
    Code(CodeEntry),
}

const OPEN_MARKER: &str = "enum class Code {";
const CLOSE_MARKER: &str = "};";

/// Lazy scanner over a header's text which yields the entries of the
/// `enum class Code {` declaration in order.  Restart by constructing a new
/// scanner with [`scan_codes`].
pub struct CodeScanner<'a> {
    lines: std::str::Lines<'a>,
    active: bool,
    pending_doc: Option<String>,
}

/// Scans `header` for the code enumeration and yields its entries.
///
/// The enumeration is located textually: a trimmed line equal to
/// `enum class Code {` opens it and a trimmed `};` closes it.  Nested
/// constructs using the same markers are not modelled.
///
/// # Example
/// ```
/// use verifier_doc::v_extract::{scan_codes, CodeEntry, Entry};
///
/// let header = "enum class Code {\n\t/** Sound is too loud */\n\tLOUD_SOUND,\n};\n";
/// let entries: Vec<_> = scan_codes(header).collect();
/// assert_eq!(
///     entries,
///     vec![
///         Entry::Section("Sound is too loud".to_string()),
///         Entry::Code(CodeEntry {
///             name: "LOUD_SOUND".to_string(),
///             description: "Sound is too loud".to_string(),
///         }),
///     ]
/// );
/// ```
pub fn scan_codes(header: &str) -> CodeScanner<'_> {
    CodeScanner {
        lines: header.lines(),
        active: false,
        pending_doc: None,
    }
}

/// Strips comment delimiters and `*` decoration from one line of a block
/// comment.
fn clean_comment_line(line: &str) -> &str {
    line.trim_start_matches("/**")
        .trim_end_matches("*/")
        .trim()
        .trim_start_matches('*')
        .trim()
}

impl<'a> CodeScanner<'a> {
    /// Collapses a block comment starting at `first` into one space-joined
    /// string, consuming continuation lines up to the closing `*/`.
    fn collect_comment(&mut self, first: &str) -> String {
        let mut parts = Vec::new();
        let cleaned = clean_comment_line(first);
        if !cleaned.is_empty() {
            parts.push(cleaned);
        }
        let mut closed = first.ends_with("*/");
        while !closed {
            let Some(line) = self.lines.next() else {
                break;
            };
            let strip = line.trim();
            closed = strip.ends_with("*/");
            let cleaned = clean_comment_line(strip);
            if !cleaned.is_empty() {
                parts.push(cleaned);
            }
        }
        parts.join(" ")
    }
}

impl<'a> Iterator for CodeScanner<'a> {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        while let Some(line) = self.lines.next() {
            let strip = line.trim();
            if !self.active {
                if strip == OPEN_MARKER {
                    self.active = true;
                }
                continue;
            }
            if strip == CLOSE_MARKER {
                self.active = false;
                continue;
            }
            if strip.starts_with("/**") {
                let text = self.collect_comment(strip);
                // The comment doubles as the doc for a directly following
                // declaration.
                self.pending_doc = Some(text.clone());
                return Some(Entry::Section(text));
            }
            if !strip.starts_with("/*")
                && !strip.starts_with('*')
                && !strip.starts_with("//")
                && strip.ends_with(',')
            {
                let name = strip[..strip.len() - 1].to_string();
                let description = self.pending_doc.take().unwrap_or_default();
                return Some(Entry::Code(CodeEntry { name, description }));
            }
            // Blank line or stray comment: whatever follows has no doc.
            self.pending_doc = None;
        }
        None
    }
}
