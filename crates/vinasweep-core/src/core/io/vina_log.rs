use crate::core::models::results::EnergySeries;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Line fragment Vina writes once a job has finished and its poses are on disk.
pub const COMPLETION_MARKER: &str = "Writing output ... done.";

const TABLE_HEADER_TOKEN: &str = "mode";
const TABLE_TERMINATOR_TOKEN: &str = "Writing";
const HEADER_FILLER_LINES: usize = 2;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("No results table header ('mode') found")]
    MissingHeader,
    #[error("Results table ends before the closing 'Writing' line")]
    Truncated,
    #[error("Malformed results row on line {line}: '{content}'")]
    MalformedRow { line: usize, content: String },
}

/// Whether the log at `log_path` shows that its job finished.
///
/// A missing or unreadable log counts as not finished. Only the presence of
/// [`COMPLETION_MARKER`] is checked; the rest of the log is not validated and
/// need not be valid UTF-8.
pub fn is_complete(log_path: &Path) -> bool {
    let Ok(file) = File::open(log_path) else {
        return false;
    };
    let marker = COMPLETION_MARKER.as_bytes();
    BufReader::new(file)
        .split(b'\n')
        .map_while(Result::ok)
        .any(|line| line.windows(marker.len()).any(|w| w == marker))
}

/// Reads the binding-mode energies from a Vina log file.
pub fn parse_energies(log_path: &Path) -> Result<EnergySeries, LogError> {
    let file = File::open(log_path)?;
    parse_energies_from(&mut BufReader::new(file))
}

/// Reads the binding-mode energies from a Vina log.
///
/// The results table starts at the first line whose first token is `mode`, is
/// followed by two heading lines, and ends at a line whose first token is
/// `Writing`. Each row in between carries the energy in its second column.
pub fn parse_energies_from(reader: &mut impl BufRead) -> Result<EnergySeries, LogError> {
    let mut lines = reader.lines().enumerate();

    loop {
        let Some((_, line)) = lines.next() else {
            return Err(LogError::MissingHeader);
        };
        if first_token(&line?) == Some(TABLE_HEADER_TOKEN) {
            break;
        }
    }

    for _ in 0..HEADER_FILLER_LINES {
        lines.next().ok_or(LogError::Truncated)?.1?;
    }

    let mut energies = Vec::new();
    for (line_num, line) in lines {
        let line = line?;
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some(TABLE_TERMINATOR_TOKEN) => return Ok(energies),
            Some(_) => {}
            None => {
                return Err(LogError::MalformedRow {
                    line: line_num + 1,
                    content: line,
                });
            }
        }
        let energy = tokens
            .next()
            .and_then(|token| token.parse::<f64>().ok())
            .ok_or_else(|| LogError::MalformedRow {
                line: line_num + 1,
                content: line.clone(),
            })?;
        energies.push(energy);
    }

    Err(LogError::Truncated)
}

fn first_token(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;

    const VINA_LOG: &str = "\
AutoDock Vina v1.2.5
Scoring function : vina
Rigid receptor: receptor.pdbqt
Ligand: ligand.pdbqt
Grid center: X 1.5 Y -2 Z 0
Grid size  : X 10 Y 10 Z 10
Exhaustiveness: 8

Performing docking (random seed: 42) ...
0%   10   20   30   40   50   60   70   80   90   100%
|----|----|----|----|----|----|----|----|----|----|
***************************************************

mode |   affinity | dist from best mode
     | (kcal/mol) | rmsd l.b.| rmsd u.b.
-----+------------+----------+----------
   1       -7.215          0          0
   2       -6.903      1.842      2.557
   3       -6.118      2.004      6.731
Writing output ... done.
";

    fn parse(text: &str) -> Result<EnergySeries, LogError> {
        parse_energies_from(&mut Cursor::new(text.as_bytes()))
    }

    #[test]
    fn parses_energies_from_a_vina_log() {
        assert_eq!(parse(VINA_LOG).unwrap(), vec![-7.215, -6.903, -6.118]);
    }

    #[test]
    fn synthetic_table_returns_second_column_in_order() {
        let energies = [-150.5, -42.0, 3.25, 0.0];
        let mut text = String::from("preamble\nmode\nfiller one\nfiller two\n");
        for (i, e) in energies.iter().enumerate() {
            text.push_str(&format!("{} {} 0.0 0.0\n", i + 1, e));
        }
        text.push_str("Writing output ... done.\n");

        assert_eq!(parse(&text).unwrap(), energies.to_vec());
    }

    #[test]
    fn empty_table_yields_no_energies() {
        assert!(parse("mode\na\nb\nWriting output ... done.\n").unwrap().is_empty());
    }

    #[test]
    fn missing_header_is_an_error() {
        let result = parse("Performing docking ...\n0%   10   20\n");
        assert!(matches!(result, Err(LogError::MissingHeader)));
    }

    #[test]
    fn header_token_must_be_the_first_token() {
        let result = parse("best mode\nx\ny\n1 -5.0\nWriting\n");
        assert!(matches!(result, Err(LogError::MissingHeader)));
    }

    #[test]
    fn log_cut_off_inside_the_table_is_truncated() {
        assert!(matches!(parse("mode\nfiller\n"), Err(LogError::Truncated)));
        let partial = "mode\na\nb\n   1   -7.2  0  0\n";
        assert!(matches!(parse(partial), Err(LogError::Truncated)));
    }

    #[test]
    fn unparsable_rows_are_malformed() {
        let result = parse("mode\na\nb\n   1   n/a  0  0\nWriting\n");
        match result {
            Err(LogError::MalformedRow { line, .. }) => assert_eq!(line, 4),
            other => panic!("expected MalformedRow, got {other:?}"),
        }
        assert!(matches!(
            parse("mode\na\nb\n   1\nWriting\n"),
            Err(LogError::MalformedRow { .. })
        ));
        assert!(matches!(
            parse("mode\na\nb\n\nWriting\n"),
            Err(LogError::MalformedRow { .. })
        ));
    }

    #[test]
    fn is_complete_checks_for_the_marker() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.log");
        assert!(!is_complete(&missing));

        let running = dir.path().join("running.log");
        fs::write(&running, "Performing docking (random seed: 1) ...\n").unwrap();
        assert!(!is_complete(&running));

        let done = dir.path().join("done.log");
        fs::write(&done, VINA_LOG).unwrap();
        assert!(is_complete(&done));

        let marker_mid_line = dir.path().join("mid.log");
        fs::write(&marker_mid_line, "stuff Writing output ... done. trailing\n").unwrap();
        assert!(is_complete(&marker_mid_line));
    }

    #[test]
    fn is_complete_tolerates_invalid_utf8_before_the_marker() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("7.log");
        let mut bytes = b"Ligand: lig\xff\xfe.pdbqt\n".to_vec();
        bytes.extend_from_slice(VINA_LOG.as_bytes());
        fs::write(&path, bytes).unwrap();
        assert!(is_complete(&path));
    }

    #[test]
    fn parse_energies_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("0.log");
        fs::write(&path, VINA_LOG).unwrap();
        assert_eq!(parse_energies(&path).unwrap().len(), 3);
        assert!(matches!(
            parse_energies(&dir.path().join("nope.log")),
            Err(LogError::Io(_))
        ));
    }
}
