//! Validate command - surface batch validation issues without running the engine

use crate::cmd::read_records;
use crate::records::{collect_issues, ExpenseRecord, RecordError};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ValidateCommand {
    /// CSV or JSON file containing classified expense records (or "-" for stdin)
    #[arg(short, long)]
    records: PathBuf,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// A validation issue for output
#[derive(Debug, Serialize)]
struct ValidationIssue {
    index: usize,
    date: String,
    description: String,
    message: String,
}

/// JSON output structure
#[derive(Debug, Serialize)]
struct ValidationOutput {
    record_count: usize,
    issue_count: usize,
    issues: Vec<ValidationIssue>,
}

impl ValidateCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let records = read_records(&self.records)?;
        let issues: Vec<ValidationIssue> = collect_issues(&records)
            .into_iter()
            .map(|issue| build_issue(&records, issue))
            .collect();

        if self.json {
            let output = ValidationOutput {
                record_count: records.len(),
                issue_count: issues.len(),
                issues,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
            if output.issue_count > 0 {
                std::process::exit(1);
            }
        } else {
            self.print_text(&records, &issues);
            if !issues.is_empty() {
                std::process::exit(1);
            }
        }
        Ok(())
    }

    fn print_text(&self, records: &[ExpenseRecord], issues: &[ValidationIssue]) {
        if issues.is_empty() {
            println!("{} records, no issues found", records.len());
            return;
        }
        println!("{} records, {} issue(s):", records.len(), issues.len());
        for issue in issues {
            println!(
                "  [{}] {} {}: {}",
                issue.index, issue.date, issue.description, issue.message
            );
        }
    }
}

fn build_issue(records: &[ExpenseRecord], issue: RecordError) -> ValidationIssue {
    let index = match issue {
        RecordError::NegativeAmount { index, .. } => index,
        RecordError::ConfidenceOutOfRange { index, .. } => index,
    };
    let record = &records[index];
    ValidationIssue {
        index,
        date: record.date.format("%Y-%m-%d").to_string(),
        description: record.description.clone(),
        message: issue.to_string(),
    }
}
