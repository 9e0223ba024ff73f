//! Schema command - print expected input formats

use crate::records::ExpenseInput;
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format: json-schema or csv-header
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the input format
    JsonSchema,
    /// CSV header row with column names
    CsvHeader,
    /// CSV column descriptions
    CsvFields,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => self.print_json_schema(),
            SchemaFormat::CsvHeader => self.print_csv_header(),
            SchemaFormat::CsvFields => self.print_csv_fields(),
        }
    }

    fn print_json_schema(&self) -> anyhow::Result<()> {
        let schema = schema_for!(ExpenseInput);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }

    fn print_csv_header(&self) -> anyhow::Result<()> {
        println!("{}", CSV_COLUMNS.join(","));
        Ok(())
    }

    fn print_csv_fields(&self) -> anyhow::Result<()> {
        println!("CSV Input Format");
        println!("================");
        println!();
        for (name, required, description) in CSV_FIELD_DESCRIPTIONS {
            let req = if *required { "required" } else { "optional" };
            println!("{:16} ({:8})  {}", name, req, description);
        }
        Ok(())
    }
}

const CSV_COLUMNS: &[&str] = &[
    "date",
    "description",
    "amount",
    "category",
    "tax_deductible",
    "confidence",
];

const CSV_FIELD_DESCRIPTIONS: &[(&str, bool, &str)] = &[
    ("date", true, "Transaction date (YYYY-MM-DD)"),
    ("description", true, "Free-text description"),
    ("amount", true, "Expense amount, non-negative"),
    (
        "category",
        false,
        "Category label assigned by the classifier (blank becomes \"other\")",
    ),
    ("tax_deductible", true, "true/false deductibility flag"),
    (
        "confidence",
        false,
        "Classification confidence 0-100, not used in tax math",
    ),
];
