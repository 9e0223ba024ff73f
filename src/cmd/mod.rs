pub mod analyze;
pub mod categories;
pub mod chat;
pub mod schema;
pub mod validate;

use crate::records::{self, ExpenseRecord};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Read expense records from a CSV or JSON file (or stdin with "-",
/// JSON only). The format is keyed off the file extension.
pub fn read_records(path: &Path) -> anyhow::Result<Vec<ExpenseRecord>> {
    if path.as_os_str() == "-" {
        return read_from_stdin();
    }
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => records::read_records_csv(reader),
        _ => records::read_records_json(reader),
    }
}

fn read_from_stdin() -> anyhow::Result<Vec<ExpenseRecord>> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
    }

    records::read_records_json(io::Cursor::new(buffer))
}

/// Fixed two-decimal display for currency amounts
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

/// Ratio rendered as a percentage with one decimal place
pub fn format_pct(ratio: Decimal) -> String {
    format!("{:.1}%", (ratio * Decimal::ONE_HUNDRED).round_dp(1))
}
