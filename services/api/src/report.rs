use clap::Args;
use energy_profile::assessment::{
    interpret, AnswerSet, AnswerSheetImporter, AnswerSheetRow, AssessmentEngine,
    AssessmentResult, Interpretation, QuestionBank,
};
use energy_profile::error::AppError;
use serde::Serialize;
use serde_json::Value;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file holding the answers, either `{"1": 4, ...}` or `{"answers": {...}}`
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Attach the narrative interpretation to the printed result
    #[arg(long)]
    pub(crate) interpret: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV answer sheet with a `respondent` column followed by question ids
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Include the reverse-scored validation questions
    #[arg(long)]
    pub(crate) include_validation: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreReport {
    pub(crate) result: AssessmentResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) interpretation: Option<Interpretation>,
}

/// Verifies the compiled-in question bank before any scoring happens.
fn checked_engine() -> Result<AssessmentEngine, AppError> {
    QuestionBank::load()?;
    Ok(AssessmentEngine::default())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let engine = checked_engine()?;
    let raw = std::fs::read_to_string(&args.answers)?;
    let report = score_json(&engine, &raw, args.interpret)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let engine = checked_engine()?;
    let rows = AnswerSheetImporter::from_path(&args.csv)?;
    let stdout = io::stdout();
    render_batch(&engine, &rows, &mut stdout.lock())?;
    Ok(())
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let bank = QuestionBank::load()?;
    let stdout = io::stdout();
    render_questions(&bank, args.include_validation, &mut stdout.lock())?;
    Ok(())
}

pub(crate) fn score_json(
    engine: &AssessmentEngine,
    raw: &str,
    include_interpretation: bool,
) -> Result<ScoreReport, serde_json::Error> {
    let answers = parse_answer_file(raw)?;
    let result = engine.assess(&answers);
    let interpretation = include_interpretation.then(|| interpret(&result));
    Ok(ScoreReport {
        result,
        interpretation,
    })
}

/// Accepts a bare `{"<id>": value}` map or a submission body with an `answers` key.
fn parse_answer_file(raw: &str) -> Result<AnswerSet, serde_json::Error> {
    let answers = match serde_json::from_str::<Value>(raw)? {
        Value::Object(mut body) if body.contains_key("answers") => {
            body.remove("answers").unwrap_or_default()
        }
        other => other,
    };
    serde_json::from_value(answers)
}

pub(crate) fn render_batch<W: Write>(
    engine: &AssessmentEngine,
    rows: &[AnswerSheetRow],
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Scored {} answer sheet(s)", rows.len())?;

    let mut flagged = 0;
    for row in rows {
        let result = engine.assess(&row.answers);
        let primary = result
            .primary_category()
            .map(|category| category.label())
            .unwrap_or("none");
        let status = if result.validity.is_valid {
            "valid"
        } else {
            flagged += 1;
            "flagged"
        };
        writeln!(
            out,
            "- {}: {} | {} style | primary {} | {} | {:.0}% answered",
            row.respondent_id,
            result.patterns.blend_type,
            result.dominant_style.label(),
            primary,
            status,
            result.validity.completion_rate * 100.0
        )?;
        for warning in &result.validity.warnings {
            writeln!(out, "    ! {}", warning)?;
        }
    }

    if flagged > 0 {
        writeln!(out, "{} sheet(s) flagged for review", flagged)?;
    }
    Ok(())
}

pub(crate) fn render_questions<W: Write>(
    bank: &QuestionBank,
    include_validation: bool,
    out: &mut W,
) -> io::Result<()> {
    for question in bank.all_questions(include_validation) {
        let marker = if question.reversed { ", reversed" } else { "" };
        writeln!(
            out,
            "{:>3}. [{}{}] {}",
            question.id,
            question.category.label(),
            marker,
            question.text
        )?;
    }
    Ok(())
}
