//! Knuth's `.dlx` text format (component G, ambient): one problem per file,
//! primary items then an optional `|`-separated secondary list on the first
//! non-comment line, one option per line after that.

use std::fmt;

/// The parsed contents of a `.dlx` file, ready to hand to [`crate::Builder`]
/// or [`crate::covers`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DlxFile {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
    pub options: Vec<Vec<String>>,
}

/// A parse failure reading a `.dlx` file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DlxParseError {
    #[error("file has no header line")]
    MissingHeader,
}

fn is_comment(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('|') || trimmed.starts_with('/')
}

/// Parses `.dlx`-formatted text.
pub fn read(text: &str) -> Result<DlxFile, DlxParseError> {
    let mut lines = text.lines();
    let header = loop {
        match lines.next() {
            Some(line) if is_comment(line) => continue,
            Some(line) => break line,
            None => return Err(DlxParseError::MissingHeader),
        }
    };

    let mut sides = header.trim().splitn(2, '|');
    let primary: Vec<String> = sides
        .next()
        .unwrap_or("")
        .split_whitespace()
        .map(str::to_string)
        .collect();
    let secondary: Vec<String> = sides
        .next()
        .map(|s| s.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default();

    let options = lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split_whitespace().map(str::to_string).collect())
        .collect();

    Ok(DlxFile {
        primary,
        secondary,
        options,
    })
}

/// Writes `.dlx`-formatted text. `item_to_string` controls how each token is
/// rendered; pass `ToString::to_string` for plain string items.
pub fn write<T>(
    options: &[Vec<T>],
    primary: &[String],
    secondary: &[String],
    item_to_string: impl Fn(&T) -> String,
) -> String {
    let mut out = String::new();
    out.push_str(&primary.join(" "));
    if !secondary.is_empty() {
        out.push_str(" | ");
        out.push_str(&secondary.join(" "));
    }
    out.push('\n');
    for option in options {
        let rendered: Vec<String> = option.iter().map(&item_to_string).collect();
        out.push_str(&rendered.join(" "));
        out.push('\n');
    }
    out
}

impl fmt::Display for DlxFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            write(
                &self.options,
                &self.primary,
                &self.secondary,
                |s: &String| s.clone(),
            )
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_colored_problem() {
        let text = "p q r | x y\np q x y:A\np r x:A y\n";
        let parsed = read(text).unwrap();
        assert_eq!(parsed.primary, ["p", "q", "r"]);
        assert_eq!(parsed.secondary, ["x", "y"]);
        assert_eq!(parsed.options.len(), 2);
        assert_eq!(parsed.options[0], ["p", "q", "x", "y:A"]);

        let rendered = parsed.to_string();
        assert_eq!(read(&rendered).unwrap(), parsed);
    }

    #[test]
    fn skips_comment_and_blank_lines() {
        let text = "| a comment\n\np q\np q\n";
        let parsed = read(text).unwrap();
        assert_eq!(parsed.primary, ["p", "q"]);
        assert_eq!(parsed.options, vec![vec!["p".to_string(), "q".to_string()]]);
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(read(""), Err(DlxParseError::MissingHeader));
    }
}
