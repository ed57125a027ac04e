//! Terminal and JSON output for query results

use crate::dawg::{DawgReader, DawgStats, TERMINATOR};
use crate::grid::board::tile_label;
use crate::grid::{Grid, Position};
use crate::solver::Solution;
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Everything the dictionary knows about one letter sequence
#[derive(Debug, Clone, Serialize)]
pub struct LookupReport {
    pub letters: String,
    pub path_present: bool,
    pub is_word: bool,
    pub children: Vec<char>,
}

impl LookupReport {
    pub fn new(reader: &DawgReader, letters: &str) -> Self {
        Self {
            letters: letters.to_string(),
            path_present: reader.is_path_present(letters),
            is_word: reader.is_word(letters),
            children: reader.children(letters),
        }
    }
}

/// Result of tracing one word on a board
#[derive(Debug, Clone, Serialize)]
pub struct TraceReport {
    pub grid: String,
    pub word: String,
    pub traceable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<Vec<Position>>>,
}

/// Result of checking a submitted word
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub word: String,
    pub accepted: bool,
    pub score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

fn stdout(color: ColorChoice) -> StandardStream {
    StandardStream::stdout(color)
}

/// Pretty-print any report as JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Print the board, one row per line
pub fn print_board(grid: &Grid, color: ColorChoice) -> io::Result<()> {
    let mut stdout = stdout(color);
    for row in grid.tiles().chunks(grid.side()) {
        for (i, &tile) in row.iter().enumerate() {
            if i > 0 {
                write!(stdout, " ")?;
            }
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
            write!(stdout, "{}", tile_label(tile))?;
            stdout.reset()?;
        }
        writeln!(stdout)?;
    }
    Ok(())
}

/// Print a lookup: path, word status and continuation letters
pub fn print_lookup(report: &LookupReport, color: ColorChoice) -> io::Result<()> {
    let mut stdout = stdout(color);

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    writeln!(stdout, "{}", display_letters(&report.letters))?;
    stdout.reset()?;

    print_flag(&mut stdout, "prefix", report.path_present)?;
    print_flag(&mut stdout, "word", report.is_word)?;

    write!(stdout, "  next:   ")?;
    print_letters(&mut stdout, &report.children)?;
    Ok(())
}

/// Print continuation letters of a prefix
pub fn print_children(letters: &[char], color: ColorChoice) -> io::Result<()> {
    let mut stdout = stdout(color);
    print_letters(&mut stdout, letters)
}

/// Print the outcome of a trace and, when requested, each path
pub fn print_trace(report: &TraceReport, color: ColorChoice) -> io::Result<()> {
    let mut stdout = stdout(color);
    print_verdict(&mut stdout, &report.word, report.traceable)?;
    writeln!(stdout)?;

    for path in report.paths.iter().flatten() {
        let steps: Vec<String> = path.iter().map(|p| format!("({},{})", p.x, p.y)).collect();
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "  ")?;
        stdout.reset()?;
        writeln!(stdout, "{}", steps.join(" -> "))?;
    }
    Ok(())
}

/// Print whether a submitted word scores
pub fn print_check(report: &CheckReport, color: ColorChoice) -> io::Result<()> {
    let mut stdout = stdout(color);
    print_verdict(&mut stdout, &report.word, report.accepted)?;
    match &report.reason {
        Some(reason) => writeln!(stdout, ": {}", reason)?,
        None => writeln!(stdout, ": +{} points", report.score)?,
    }
    Ok(())
}

/// Print every word of a solution with its score and a summary line
pub fn print_solution(solution: &Solution, color: ColorChoice) -> io::Result<()> {
    let mut stdout = stdout(color);

    for scored in &solution.words {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "{:>3}", scored.score)?;
        stdout.reset()?;
        writeln!(stdout, "  {}", scored.word)?;
    }

    writeln!(stdout)?;
    stdout.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(
        stdout,
        "{} words, {} points",
        solution.words.len(),
        solution.total_score
    )?;
    stdout.reset()?;
    Ok(())
}

/// Print dictionary statistics
pub fn print_stats(stats: &DawgStats, color: ColorChoice) -> io::Result<()> {
    let mut stdout = stdout(color);
    writeln!(stdout, "Dictionary Statistics")?;
    writeln!(stdout, "=====================")?;
    writeln!(stdout)?;
    writeln!(stdout, "Records:          {}", stats.record_count)?;
    writeln!(stdout, "Size:             {}", format_size(stats.byte_size as u64))?;
    write!(stdout, "First letters:    ")?;
    print_letters(&mut stdout, &stats.root_letters)?;
    Ok(())
}

fn print_flag(stdout: &mut StandardStream, label: &str, value: bool) -> io::Result<()> {
    write!(stdout, "  {:<7} ", format!("{}:", label))?;
    let color = if value { Color::Green } else { Color::Red };
    stdout.set_color(ColorSpec::new().set_fg(Some(color)))?;
    writeln!(stdout, "{}", if value { "yes" } else { "no" })?;
    stdout.reset()
}

fn print_verdict(stdout: &mut StandardStream, word: &str, ok: bool) -> io::Result<()> {
    let color = if ok { Color::Green } else { Color::Red };
    stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(stdout, "{}", if ok { "yes" } else { "no" })?;
    stdout.reset()?;
    write!(stdout, " {}", word)
}

/// Letters on one line, the word terminator highlighted
fn print_letters(stdout: &mut StandardStream, letters: &[char]) -> io::Result<()> {
    for (i, &letter) in letters.iter().enumerate() {
        if i > 0 {
            write!(stdout, " ")?;
        }
        if letter == TERMINATOR as char {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
            write!(stdout, "{}", letter)?;
            stdout.reset()?;
        } else {
            write!(stdout, "{}", letter)?;
        }
    }
    writeln!(stdout)
}

fn display_letters(letters: &str) -> &str {
    if letters.is_empty() { "(root)" } else { letters }
}

/// Format byte size to human readable
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dawg::DawgRecord;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(12), "12 bytes");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn test_lookup_report() {
        // "a" is a word, "ab" is a word
        let reader = DawgReader::from_records(&[
            DawgRecord::new(b'a', 1, false),
            DawgRecord::new(b'$', 0, true),
            DawgRecord::new(b'b', 3, false),
            DawgRecord::new(b'$', 0, false),
        ])
        .unwrap();

        let report = LookupReport::new(&reader, "a");
        assert!(report.path_present);
        assert!(report.is_word);
        assert_eq!(report.children, vec!['$', 'b']);

        let report = LookupReport::new(&reader, "b");
        assert!(!report.path_present);
        assert!(!report.is_word);
        assert!(report.children.is_empty());
    }

    #[test]
    fn test_trace_report_json() {
        let report = TraceReport {
            grid: "abcdefghijklmnop".into(),
            word: "afk".into(),
            traceable: true,
            paths: None,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["traceable"], true);
        assert!(json.get("paths").is_none());
    }
}
