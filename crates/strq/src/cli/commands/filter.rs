//! Implementation of `strq match`.

use std::{
    fs,
    io::{self, Read},
    path::Path,
    process::ExitCode,
};

use log::debug;

use crate::cli::{
    EXIT_ERROR,
    args::MatchCommand,
    context::CommandContext,
    output::{JsonMatchOutput, MatchedLine, STDIN_NAME, format_line, print_json},
};

/// Reads all lines from a file, or from standard input for `-`.
///
/// Invalid UTF-8 is replaced rather than rejected.
fn read_lines(path: Option<&Path>) -> io::Result<Vec<String>> {
    let bytes = match path {
        Some(path) if path != Path::new("-") => fs::read(path)?,
        _ => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            buf
        }
    };
    Ok(String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::to_string)
        .collect())
}

/// Display name for an input.
fn source_name(path: Option<&Path>) -> String {
    match path {
        Some(path) if path != Path::new("-") => path.display().to_string(),
        _ => STDIN_NAME.to_string(),
    }
}

/// Prints the lines of each input that match (or, inverted, fail) the query.
pub fn run(ctx: &CommandContext, cmd: &MatchCommand) -> ExitCode {
    let separators = match ctx.separators(&cmd.separators) {
        Ok(s) => s,
        Err(code) => return code,
    };
    let query = match ctx.parse_query(&cmd.query, &separators) {
        Ok(q) => q,
        Err(code) => return code,
    };

    let settings = &ctx.config.settings;
    let ignore_blank = settings.ignore_blank && !cmd.keep_blank;
    let show_line_number = cmd.line_number || settings.line_numbers;
    let show_source = cmd.files.len() > 1;

    let inputs: Vec<Option<&Path>> = if cmd.files.is_empty() {
        vec![None]
    } else {
        cmd.files.iter().map(|p| Some(p.as_path())).collect()
    };

    let mut selected = Vec::new();
    let mut counts = Vec::new();
    for input in inputs {
        let source = source_name(input);
        let lines = match read_lines(input) {
            Ok(lines) => lines,
            Err(e) => {
                eprintln!("error: failed to read {source}: {e}");
                return ExitCode::from(EXIT_ERROR);
            }
        };

        let before = selected.len();
        for (idx, line) in lines.into_iter().enumerate() {
            if ignore_blank && line.trim().is_empty() {
                continue;
            }
            if query.matches(&line) != cmd.invert {
                selected.push(MatchedLine {
                    source: source.clone(),
                    line_number: idx + 1,
                    line,
                });
            }
        }
        debug!("{source}: {} lines selected", selected.len() - before);
        counts.push((source, selected.len() - before));
    }

    if cmd.json {
        let output = JsonMatchOutput {
            query: &cmd.query,
            statement: query.to_statement(),
            inverted: cmd.invert,
            lines: &selected,
            total: selected.len(),
        };
        if let Err(code) = print_json(&output) {
            return code;
        }
    } else if cmd.count {
        if show_source {
            for (source, count) in &counts {
                println!("{source}:{count}");
            }
        } else {
            println!("{}", selected.len());
        }
    } else {
        for line in &selected {
            println!("{}", format_line(line, show_source, show_line_number));
        }
    }

    if selected.is_empty() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
