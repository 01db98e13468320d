use std::io::Read;
use std::path::Path;

use super::domain::AnswerSet;
use super::repository::RespondentId;

/// One respondent's answers read from a batch answer sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSheetRow {
    pub respondent_id: RespondentId,
    pub answers: AnswerSet,
}

#[derive(Debug)]
pub enum AnswerSheetImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    MissingRespondentColumn,
    InvalidHeader { column: usize, value: String },
    InvalidAnswer { row: usize, column: String, value: String },
}

impl std::fmt::Display for AnswerSheetImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerSheetImportError::Io(err) => write!(f, "failed to read answer sheet: {}", err),
            AnswerSheetImportError::Csv(err) => write!(f, "invalid answer sheet CSV: {}", err),
            AnswerSheetImportError::MissingRespondentColumn => {
                write!(f, "answer sheet must start with a 'respondent' column")
            }
            AnswerSheetImportError::InvalidHeader { column, value } => write!(
                f,
                "header column {} ('{}') is not a question id",
                column, value
            ),
            AnswerSheetImportError::InvalidAnswer { row, column, value } => write!(
                f,
                "row {} question {}: '{}' is not a whole number",
                row, column, value
            ),
        }
    }
}

impl std::error::Error for AnswerSheetImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnswerSheetImportError::Io(err) => Some(err),
            AnswerSheetImportError::Csv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AnswerSheetImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for AnswerSheetImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Reads `respondent,<question id>,...` answer sheets. Blank cells are unanswered.
pub struct AnswerSheetImporter;

impl AnswerSheetImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<AnswerSheetRow>, AnswerSheetImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<AnswerSheetRow>, AnswerSheetImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let mut columns = headers.iter();
        match columns.next() {
            Some(first) if first.eq_ignore_ascii_case("respondent") => {}
            _ => return Err(AnswerSheetImportError::MissingRespondentColumn),
        }

        let question_ids = columns
            .enumerate()
            .map(|(index, value)| {
                value
                    .trim_start_matches(['q', 'Q'])
                    .parse::<u32>()
                    .map_err(|_| AnswerSheetImportError::InvalidHeader {
                        column: index + 2,
                        value: value.to_string(),
                    })
            })
            .collect::<Result<Vec<u32>, _>>()?;

        let mut rows = Vec::new();
        for (index, record) in csv_reader.records().enumerate() {
            let record = record?;
            // Data rows are numbered from 1, after the header line.
            let row = index + 1;
            let respondent_id = RespondentId(record.get(0).unwrap_or_default().to_string());

            let mut answers = AnswerSet::new();
            for (question_id, cell) in question_ids.iter().zip(record.iter().skip(1)) {
                if cell.is_empty() {
                    continue;
                }
                let value = cell
                    .parse::<i32>()
                    .map_err(|_| AnswerSheetImportError::InvalidAnswer {
                        row,
                        column: question_id.to_string(),
                        value: cell.to_string(),
                    })?;
                answers.insert(*question_id, value);
            }

            rows.push(AnswerSheetRow {
                respondent_id,
                answers,
            });
        }

        Ok(rows)
    }
}
