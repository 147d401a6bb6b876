//! Line formatting and JSON serialization for CLI output.

use std::process::ExitCode;

use serde::Serialize;

use super::EXIT_ERROR;

/// Display name used for standard input.
pub const STDIN_NAME: &str = "(standard input)";

/// A selected input line.
#[derive(Debug, Clone, Serialize)]
pub struct MatchedLine {
    /// File the line came from, or `(standard input)`.
    pub source: String,
    /// 1-based line number.
    pub line_number: usize,
    /// Line text without its terminator.
    pub line: String,
}

/// JSON output for `strq match`.
#[derive(Serialize)]
pub struct JsonMatchOutput<'a> {
    /// The query string as given.
    pub query: &'a str,
    /// The parsed query as a statement.
    pub statement: String,
    /// Whether non-matching lines were selected.
    pub inverted: bool,
    /// Selected lines in input order.
    pub lines: &'a [MatchedLine],
    /// Number of selected lines.
    pub total: usize,
}

/// Formats one selected line with optional source and line-number prefixes.
pub fn format_line(line: &MatchedLine, show_source: bool, show_line_number: bool) -> String {
    let mut out = String::new();
    if show_source {
        out.push_str(&line.source);
        out.push(':');
    }
    if show_line_number {
        out.push_str(&line.line_number.to_string());
        out.push(':');
    }
    out.push_str(&line.line);
    out
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), ExitCode> {
    match serde_json::to_string_pretty(value) {
        Ok(json_str) => {
            println!("{json_str}");
            Ok(())
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            Err(ExitCode::from(EXIT_ERROR))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> MatchedLine {
        MatchedLine {
            source: "notes.txt".into(),
            line_number: 7,
            line: "rust and cargo".into(),
        }
    }

    #[test]
    fn plain_line() {
        assert_eq!(format_line(&line(), false, false), "rust and cargo");
    }

    #[test]
    fn prefixed_line() {
        assert_eq!(format_line(&line(), true, false), "notes.txt:rust and cargo");
        assert_eq!(format_line(&line(), false, true), "7:rust and cargo");
        assert_eq!(format_line(&line(), true, true), "notes.txt:7:rust and cargo");
    }

    #[test]
    fn json_shape() {
        let lines = vec![line()];
        let output = JsonMatchOutput {
            query: "rust & cargo",
            statement: "(rust and cargo)".into(),
            inverted: false,
            lines: &lines,
            total: lines.len(),
        };
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["total"], 1);
        assert_eq!(value["lines"][0]["line_number"], 7);
        assert_eq!(value["statement"], "(rust and cargo)");
    }
}
