//! Categories command - per-category breakdown of a batch of expenses

use crate::cmd::{format_amount, read_records};
use crate::engine::{aggregate, CategoryStat};
use clap::Args;
use std::io;
use std::path::PathBuf;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct CategoriesCommand {
    /// CSV or JSON file containing classified expense records (or "-" for stdin)
    #[arg(short, long)]
    records: PathBuf,

    /// Output as CSV instead of formatted table
    #[arg(long)]
    csv: bool,
}

/// Row for the category table output
#[derive(Debug, Clone, Tabled, serde::Serialize)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,

    #[tabled(rename = "Amount")]
    amount: String,

    #[tabled(rename = "Records")]
    count: usize,

    #[tabled(rename = "Deductible")]
    deductible: String,

    #[tabled(rename = "Share")]
    share: String,
}

impl CategoriesCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let records = read_records(&self.records)?;
        let stats = aggregate(&records);
        let rows: Vec<CategoryRow> = stats.iter().map(build_row).collect();

        if self.csv {
            self.write_csv(&rows)
        } else {
            self.print_table(&rows);
            Ok(())
        }
    }

    fn print_table(&self, rows: &[CategoryRow]) {
        if rows.is_empty() {
            println!("No expense records found");
            return;
        }

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
    }

    fn write_csv(&self, rows: &[CategoryRow]) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_writer(io::stdout());
        for row in rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

fn build_row(stat: &CategoryStat) -> CategoryRow {
    CategoryRow {
        category: stat.category.clone(),
        amount: format_amount(stat.amount),
        count: stat.count,
        deductible: format_amount(stat.deductible),
        share: format!("{:.1}%", stat.percentage.round_dp(1)),
    }
}
