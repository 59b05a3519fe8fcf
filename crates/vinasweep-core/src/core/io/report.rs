use crate::core::models::results::AggregatedResult;
use std::io::Write;

/// Writes aggregated results as a tab-separated table with a `File Index Energy`
/// header, one row per result in the given order.
pub fn write_report(results: &[AggregatedResult], writer: impl Write) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(["File", "Index", "Energy"])?;
    for result in results {
        wtr.serialize(result)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_and_rows_tab_separated() {
        let results = vec![
            AggregatedResult {
                job_name: "a".to_string(),
                mode_index: 0,
                energy: -150.0,
            },
            AggregatedResult {
                job_name: "b".to_string(),
                mode_index: 2,
                energy: -7.25,
            },
        ];

        let mut buf = Vec::new();
        write_report(&results, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "File\tIndex\tEnergy");
        assert_eq!(lines[1].split('\t').collect::<Vec<_>>(), vec!["a", "0", "-150.0"]);
        assert_eq!(lines[2].split('\t').collect::<Vec<_>>(), vec!["b", "2", "-7.25"]);
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn empty_results_still_write_the_header() {
        let mut buf = Vec::new();
        write_report(&[], &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "File\tIndex\tEnergy\n");
    }
}
