//! Forum formatting for map codes
//!
//! Forum code blocks need map codes broken across lines. Breaks only ever fall
//! right after a `.`, so removing the line breaks gives back the exact code.

use std::fmt;

use crate::io::configuration::{DEFAULT_FORUM_LINE_WIDTH, FORUM_NEWLINE, MAP_EDITOR_URL};
use crate::spatial::grid::MapGrid;

/// Split a map code into lines of at most `width` characters
///
/// Tokens (text up to and including each `.`) are packed greedily. A token
/// longer than `width` gets a line of its own.
pub fn wrap_map_code(code: &str, width: usize) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut line_start = 0;
    let mut line_end = 0;
    let mut line_chars = 0;

    for token in code.split_inclusive('.') {
        let token_chars = token.chars().count();
        if line_chars > 0 && line_chars + token_chars > width {
            lines.push(code.get(line_start..line_end).unwrap_or_default());
            line_start = line_end;
            line_chars = 0;
        }
        line_end += token.len();
        line_chars += token_chars;
    }

    if line_start < code.len() {
        lines.push(code.get(line_start..).unwrap_or_default());
    }
    lines
}

/// Wrap a map code for a forum code block, lines joined by `\n`
pub fn forum_map_code(code: &str, width: usize) -> String {
    wrap_map_code(code, width).join("\n")
}

/// Map editor link that opens `code`
pub fn editor_url(code: &str) -> String {
    format!("{MAP_EDITOR_URL}?code={code}")
}

impl MapGrid {
    /// This grid's map code wrapped for a forum code block
    pub fn forum_map_code(&self, width: usize) -> String {
        forum_map_code(&self.to_map_code(), width)
    }

    /// Map editor link for this grid
    pub fn editor_url(&self) -> String {
        editor_url(&self.to_map_code())
    }
}

/// One map in a forum post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForumEntry {
    /// Map name
    pub name: String,
    /// Unwrapped map code
    pub code: String,
    /// Link shown in the clickable links section
    pub link: String,
}

/// Daily forum post listing several maps
///
/// Renders a names line, a spoiler with one code block per map, a spoiler of
/// links and a placeholder spoiler for max scores. Lines end in `\r\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForumPost {
    date: String,
    line_width: usize,
    entries: Vec<ForumEntry>,
}

impl ForumPost {
    /// Start an empty post for `date`
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            line_width: DEFAULT_FORUM_LINE_WIDTH,
            entries: Vec::new(),
        }
    }

    /// Change the code block line width
    #[must_use]
    pub const fn with_line_width(mut self, width: usize) -> Self {
        self.line_width = width;
        self
    }

    /// Add a map, linking to the map editor
    pub fn add_map(&mut self, grid: &MapGrid) {
        let code = grid.to_map_code();
        let link = editor_url(&code);
        self.entries.push(ForumEntry {
            name: grid.name().to_string(),
            code,
            link,
        });
    }

    /// Add a prepared entry, e.g. with a shortened link
    pub fn add_entry(&mut self, entry: ForumEntry) {
        self.entries.push(entry);
    }

    /// Entries in posting order
    pub fn entries(&self) -> &[ForumEntry] {
        &self.entries
    }

    /// Render the post text
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ForumPost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nl = FORUM_NEWLINE;

        let names: Vec<&str> = self.entries.iter().map(|entry| entry.name.as_str()).collect();
        write!(f, "Map types for the day: {nl}{}{nl}", names.join(", "))?;

        write!(f, "[spoiler=Maps for {}]{nl}", self.date)?;
        for entry in &self.entries {
            let code = wrap_map_code(&entry.code, self.line_width).join(nl);
            write!(f, "{}:{nl}[code]{nl}{code}{nl}[/code]{nl}{nl}", entry.name)?;
        }
        write!(f, "[/spoiler]{nl}")?;

        write!(f, "[spoiler=Clickable links]{nl}")?;
        for entry in &self.entries {
            write!(f, "{}: {}{nl}", entry.name, entry.link)?;
        }
        write!(f, "[/spoiler]{nl}")?;

        let placeholders = vec!["?"; self.entries.len()].join(" ");
        write!(
            f,
            "[spoiler=Unofficial Current Max Scores]{nl}{placeholders}{nl}[/spoiler]{nl}"
        )
    }
}
