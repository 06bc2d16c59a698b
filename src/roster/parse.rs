use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::RosterError;
use crate::model::Worker;

const BOM: char = '\u{feff}';

/// Parse a CSV roster.
///
/// Columns are `name, role, technologies, experience`; the last two are
/// optional and colon-joined. A header row starting with `name` is skipped,
/// as are blank rows and `#` comments. Quoted fields may span lines.
pub fn parse_roster_csv(content: &str) -> Result<Vec<Worker>, RosterError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let mut workers = Vec::new();
    let mut seen_row = false;

    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        if record.iter().all(str::is_empty) {
            continue;
        }

        let line = record_line(&record);
        if !seen_row {
            seen_row = true;
            if is_header(&record) {
                continue;
            }
        }

        workers.push(parse_row(&record, line)?);
    }

    Ok(workers)
}

fn record_line(record: &StringRecord) -> usize {
    record.position().map(|p| p.line() as usize).unwrap_or(0)
}

fn csv_error(err: csv::Error) -> RosterError {
    let line = err.position().map(|p| p.line() as usize).unwrap_or(0);
    RosterError::Parse {
        line,
        reason: err.to_string(),
    }
}

fn is_header(record: &StringRecord) -> bool {
    record
        .get(0)
        .map(|f| f.trim_start_matches(BOM).trim().eq_ignore_ascii_case("name"))
        .unwrap_or(false)
}

fn parse_row(record: &StringRecord, line: usize) -> Result<Worker, RosterError> {
    if record.len() < 2 || record.len() > 4 {
        return Err(RosterError::Parse {
            line,
            reason: format!("expected 2 to 4 columns, found {}", record.len()),
        });
    }

    let name = record[0].trim_start_matches(BOM).trim();
    if name.is_empty() {
        return Err(RosterError::Parse {
            line,
            reason: "worker name is empty".to_string(),
        });
    }

    let role = &record[1];
    let technologies = record.get(2).unwrap_or("");
    let experience = record.get(3).unwrap_or("");
    Ok(Worker::from_columns(name, role, technologies, experience))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_fields() {
        let workers = parse_roster_csv(r#""Doe, Jane","QA ""Lead""",Selenium,3"#).unwrap();
        assert_eq!(workers[0].name, "Doe, Jane");
        assert_eq!(workers[0].role, "QA \"Lead\"");
        assert_eq!(workers[0].technologies(), ["Selenium"]);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let workers = parse_roster_csv("Alice, Backend Developer ,Java:SQL, 4:5").unwrap();
        assert_eq!(workers[0].role, "Backend Developer");
        assert_eq!(workers[0].experience(), [4.0, 5.0]);
    }

    #[test]
    fn test_byte_order_mark_header_is_skipped() {
        let content = "\u{feff}Name,Role,Technologies,Experience\nAlice,Backend Developer,Java,4\n";
        let workers = parse_roster_csv(content).unwrap();
        assert_eq!(workers.len(), 1);
        assert_eq!(workers[0].name, "Alice");
    }

    #[test]
    fn test_byte_order_mark_without_header() {
        let workers = parse_roster_csv("\u{feff}Alice,Backend Developer,Java,4\n").unwrap();
        assert_eq!(workers[0].name, "Alice");
    }

    #[test]
    fn test_quoted_field_spans_lines() {
        let content = "Name,Role\n\"Alice\",\"Backend\nDeveloper\",Java,4\nBob,Frontend Developer\n";
        let workers = parse_roster_csv(content).unwrap();
        assert_eq!(workers.len(), 2);
        assert_eq!(workers[0].role, "Backend\nDeveloper");
        assert_eq!(workers[1].name, "Bob");
    }
}
