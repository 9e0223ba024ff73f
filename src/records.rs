use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Category assigned when the classifier leaves one blank
pub const DEFAULT_CATEGORY: &str = "other";

const CONFIDENCE_MAX: Decimal = dec!(100);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("record {index}: negative amount {amount}")]
    NegativeAmount { index: usize, amount: Decimal },
    #[error("record {index}: confidence {confidence} outside [0, 100]")]
    ConfidenceOutOfRange { index: usize, confidence: Decimal },
}

/// Input root for expense JSON
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExpenseInput {
    pub records: Vec<ExpenseRecord>,
}

/// A classified expense transaction.
///
/// Classification (category, deductibility, confidence) is assigned
/// upstream; records are never mutated once constructed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExpenseRecord {
    /// Transaction date (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Free-text description from the source statement
    pub description: String,
    /// Transaction amount, must be non-negative
    #[schemars(with = "f64")]
    pub amount: Decimal,
    /// Category label assigned by the classifier ("other" when blank)
    #[serde(default)]
    pub category: String,
    /// Whether the classifier flagged this as tax deductible
    pub tax_deductible: bool,
    /// Classification confidence 0-100, informational only
    #[serde(default)]
    #[schemars(with = "f64")]
    pub confidence: Decimal,
}

impl ExpenseRecord {
    /// Batch-level validation issues for one record
    fn issues(&self, index: usize) -> Vec<RecordError> {
        let mut issues = Vec::new();
        if self.amount < Decimal::ZERO {
            issues.push(RecordError::NegativeAmount {
                index,
                amount: self.amount,
            });
        }
        if self.confidence < Decimal::ZERO || self.confidence > CONFIDENCE_MAX {
            issues.push(RecordError::ConfidenceOutOfRange {
                index,
                confidence: self.confidence,
            });
        }
        issues
    }
}

/// Reject the whole batch on the first malformed record.
///
/// A negative amount would corrupt every downstream sum, so nothing is
/// clamped or skipped; the caller gets the error and fixes the input.
pub fn validate_batch(records: &[ExpenseRecord]) -> Result<(), RecordError> {
    match collect_issues(records).into_iter().next() {
        Some(issue) => Err(issue),
        None => Ok(()),
    }
}

/// All validation issues in the batch, in record order
pub fn collect_issues(records: &[ExpenseRecord]) -> Vec<RecordError> {
    records
        .iter()
        .enumerate()
        .flat_map(|(index, record)| record.issues(index))
        .collect()
}

/// Read expense records from CSV
pub fn read_records_csv<R: Read>(reader: R) -> anyhow::Result<Vec<ExpenseRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for result in csv_reader.deserialize() {
        let record: ExpenseRecord = result?;
        records.push(normalize(record));
    }
    log::info!("Read {} expense records from CSV", records.len());
    Ok(records)
}

/// Read expense records from JSON (`{"records": [...]}`)
pub fn read_records_json<R: Read>(reader: R) -> anyhow::Result<Vec<ExpenseRecord>> {
    let input: ExpenseInput = serde_json::from_reader(reader)?;
    let records: Vec<_> = input.records.into_iter().map(normalize).collect();
    log::info!("Read {} expense records from JSON", records.len());
    Ok(records)
}

/// Blank categories become "other" at ingestion so the engine only
/// ever sees non-empty labels.
fn normalize(mut record: ExpenseRecord) -> ExpenseRecord {
    let trimmed = record.category.trim();
    if trimmed.is_empty() {
        record.category = DEFAULT_CATEGORY.to_string();
    } else if trimmed.len() != record.category.len() {
        record.category = trimmed.to_string();
    }
    record
}
