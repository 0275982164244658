//! Parse pasted CSV marks (`student_id,subject,score,date`).

use chrono::NaiveDate;
use serde::Deserialize;
use shared_types::{AppError, Mark};

pub const EXPECTED_HEADER: [&str; 4] = ["student_id", "subject", "score", "date"];
pub const MAX_SCORE: u8 = 100;

/// A row that passed every check.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedMark {
    pub student_id: String,
    pub mark: Mark,
}

/// A rejected row with its 1-based line number in the input.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    pub line: u64,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarksImport {
    pub accepted: Vec<ImportedMark>,
    pub rejected: Vec<RowError>,
}

#[derive(Debug, Deserialize)]
struct RawRow {
    student_id: String,
    subject: String,
    score: String,
    date: String,
}

/// Parse and check every row. `is_known_student` decides which ids exist.
///
/// Fails as a whole only when the header is missing a column.
pub fn parse_marks_csv(
    input: &str,
    is_known_student: impl Fn(&str) -> bool,
) -> Result<MarksImport, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| AppError::bad_request(format!("Could not read CSV header: {e}")))?
        .clone();
    let missing: Vec<&str> = EXPECTED_HEADER
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h.eq_ignore_ascii_case(col)))
        .collect();
    if !missing.is_empty() {
        return Err(AppError::bad_request(format!(
            "CSV header is missing: {}",
            missing.join(", ")
        )));
    }
    let headers = csv::StringRecord::from(
        headers
            .iter()
            .map(|h| h.to_ascii_lowercase())
            .collect::<Vec<_>>(),
    );

    let mut import = MarksImport::default();
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                import.rejected.push(RowError {
                    line,
                    message: e.to_string(),
                });
                continue;
            }
        };
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        match record
            .deserialize::<RawRow>(Some(&headers))
            .map_err(|e| e.to_string())
            .and_then(|row| check_row(row, &is_known_student))
        {
            Ok(mark) => import.accepted.push(mark),
            Err(message) => import.rejected.push(RowError { line, message }),
        }
    }

    tracing::debug!(
        accepted = import.accepted.len(),
        rejected = import.rejected.len(),
        "marks csv parsed"
    );
    Ok(import)
}

fn check_row(row: RawRow, is_known_student: &impl Fn(&str) -> bool) -> Result<ImportedMark, String> {
    if !is_known_student(&row.student_id) {
        return Err(format!("Unknown student id '{}'", row.student_id));
    }
    if row.subject.is_empty() {
        return Err("Subject is empty".to_string());
    }
    let score: u8 = row
        .score
        .parse()
        .ok()
        .filter(|s| *s <= MAX_SCORE)
        .ok_or_else(|| format!("Score '{}' must be a whole number from 0 to 100", row.score))?;
    let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d")
        .map_err(|_| format!("Date '{}' must look like YYYY-MM-DD", row.date))?;

    Ok(ImportedMark {
        student_id: row.student_id,
        mark: Mark {
            subject: row.subject,
            score,
            date,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn known(id: &str) -> bool {
        matches!(id, "student-1" | "student-2")
    }

    #[test]
    fn accepts_valid_rows() {
        let csv = "student_id,subject,score,date\nstudent-1, Algorithms ,81,2023-11-20\n";
        let import = parse_marks_csv(csv, known).unwrap();
        assert_eq!(import.rejected, vec![]);
        assert_eq!(
            import.accepted,
            vec![ImportedMark {
                student_id: "student-1".into(),
                mark: Mark::new("Algorithms", 81, NaiveDate::from_ymd_opt(2023, 11, 20).unwrap()),
            }]
        );
    }

    #[test]
    fn reports_each_bad_row_with_line() {
        let csv = "\
student_id,subject,score,date
student-1,Algorithms,101,2023-11-20
student-9,Databases,70,2023-11-20
student-2,Python,88,20/11/2023
student-2,Python,88,2023-11-21
";
        let import = parse_marks_csv(csv, known).unwrap();
        assert_eq!(import.accepted.len(), 1);
        let lines: Vec<u64> = import.rejected.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![2, 3, 4]);
        assert!(import.rejected[0].message.contains("0 to 100"));
        assert!(import.rejected[1].message.contains("student-9"));
        assert!(import.rejected[2].message.contains("YYYY-MM-DD"));
    }

    #[test]
    fn header_columns_are_required() {
        let err = parse_marks_csv("student_id,score\nstudent-1,80\n", known).unwrap_err();
        assert_eq!(err.message, "CSV header is missing: subject, date");
    }

    #[test]
    fn header_is_case_insensitive_and_blank_lines_skipped() {
        let csv = "Student_ID,Subject,Score,Date\n\nstudent-2,Stats,90,2023-12-01\n";
        let import = parse_marks_csv(csv, known).unwrap();
        assert_eq!(import.accepted.len(), 1);
        assert!(import.rejected.is_empty());
    }
}
