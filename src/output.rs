//! Output formatting for query results

use crate::index::types::Position;
use crate::index::Streeng;
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// One reported corpus position
#[derive(Debug, Clone, Serialize)]
pub struct PositionMatch<'a> {
    pub position: Position,
    pub word: &'a str,
}

/// Attach words to positions, sorted into corpus order
pub fn position_matches<'a>(index: &'a Streeng, positions: &[Position]) -> Vec<PositionMatch<'a>> {
    let mut sorted = positions.to_vec();
    sorted.sort_unstable();
    sorted
        .into_iter()
        .map(|position| PositionMatch {
            position,
            word: index.word(position),
        })
        .collect()
}

fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print `position:word` lines, one per match
pub fn print_positions(matches: &[PositionMatch<'_>], color: bool) -> io::Result<()> {
    let mut stdout = stdout(color);

    for m in matches {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "{}", m.position)?;
        stdout.reset()?;
        write!(stdout, ":")?;
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(stdout, "{}", m.word)?;
        stdout.reset()?;
        writeln!(stdout)?;
    }

    Ok(())
}

/// Print a count line followed by the matches
pub fn print_summary(label: &str, matches: &[PositionMatch<'_>], color: bool) -> io::Result<()> {
    let mut stdout = stdout(color);
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    write!(stdout, "{}", label)?;
    stdout.reset()?;
    writeln!(stdout, ": {} match(es)", matches.len())?;
    drop(stdout);
    print_positions(matches, color)
}

/// Print `frequency term` lines
pub fn print_terms(terms: &[(String, usize)], color: bool) -> io::Result<()> {
    let mut stdout = stdout(color);
    let width = terms.first().map(|(_, n)| n.to_string().len()).unwrap_or(1);

    for (term, count) in terms {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(stdout, "{:>width$}", count, width = width)?;
        stdout.reset()?;
        writeln!(stdout, " {}", term)?;
    }

    Ok(())
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value).map_err(io::Error::other)?;
    writeln!(out)
}

/// Result payload used for `--json` output of position queries
#[derive(Debug, Serialize)]
pub struct QueryOutput<'a> {
    pub query: &'a str,
    pub kind: &'a str,
    pub count: usize,
    pub matches: Vec<PositionMatch<'a>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_matches_sorted() {
        let s = Streeng::new(["b", "a", "b"]);
        let matches = position_matches(&s, &[2, 0]);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].position, 0);
        assert_eq!(matches[0].word, "b");
        assert_eq!(matches[1].position, 2);
    }

    #[test]
    fn test_query_output_json() {
        let s = Streeng::new(["cat", "cats"]);
        let out = QueryOutput {
            query: "cat",
            kind: "prefix",
            count: 2,
            matches: position_matches(&s, &s.start_with("cat")),
        };
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["count"], 2);
        assert_eq!(json["matches"][1]["word"], "cats");
    }
}
