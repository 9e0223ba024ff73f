//! Analyze command - full tax analysis over a batch of classified expenses

use crate::cmd::{format_amount, format_pct, read_records};
use crate::config::{AnalysisConfig, DEFAULT_GROSS_INCOME, DEFAULT_TAX_RATE};
use crate::engine::{
    aggregate, analyze, derive_metrics, monthly_trend, recommend, CategoryStat, DerivedMetrics,
    MonthlyTrendPoint, TaxAnalysis,
};
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct AnalyzeCommand {
    /// CSV or JSON file containing classified expense records (or "-" for stdin)
    #[arg(short, long)]
    records: PathBuf,

    /// Gross income assumption
    #[arg(long, default_value_t = DEFAULT_GROSS_INCOME)]
    gross_income: Decimal,

    /// Flat tax rate as a fraction (e.g. 0.30)
    #[arg(long, default_value_t = DEFAULT_TAX_RATE)]
    tax_rate: Decimal,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// Bundle the dashboard consumer expects
#[derive(Debug, Serialize)]
struct AnalysisReport {
    #[serde(flatten)]
    analysis: TaxAnalysis,
    category_breakdown: Vec<CategoryStat>,
    monthly_trend: Vec<MonthlyTrendPoint>,
    derived: DerivedMetrics,
    recommendations: Vec<String>,
}

impl AnalyzeCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let config = AnalysisConfig::new(self.gross_income, self.tax_rate)?;
        let records = read_records(&self.records)?;

        let analysis = analyze(&records, &config)?;
        let category_breakdown = aggregate(&records);
        let derived = derive_metrics(&analysis);
        let recommendations = recommend(&analysis, &derived);

        let report = AnalysisReport {
            analysis,
            category_breakdown,
            monthly_trend: monthly_trend(&analysis),
            derived,
            recommendations,
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            self.print_report(&report);
        }
        Ok(())
    }

    fn print_report(&self, report: &AnalysisReport) {
        let analysis = &report.analysis;
        let derived = &report.derived;

        println!();
        println!("TAX ANALYSIS");
        println!("  Total Expenses: {}", format_amount(analysis.total_expenses));
        println!(
            "  Deductible: {} | Non-Deductible: {}",
            format_amount(analysis.deductible_expenses),
            format_amount(analysis.non_deductible_expenses)
        );
        println!(
            "  Tax Without Deductions: {} | With Deductions: {}",
            format_amount(analysis.tax_without_deductions),
            format_amount(analysis.tax_with_deductions)
        );
        println!(
            "  Potential Savings: {}",
            format_amount(analysis.potential_savings)
        );
        println!(
            "  Profit (without/with deductions): {} / {}",
            format_amount(analysis.profit_without_tax),
            format_amount(analysis.profit_with_tax)
        );
        println!();

        println!("DERIVED METRICS");
        println!(
            "  Effective Tax Rate: {} | Deductible Ratio: {} | Savings Rate: {}",
            format_pct(derived.tax_rate),
            format_pct(derived.deductible_ratio),
            format_pct(derived.savings_rate)
        );
        println!(
            "  After-Tax Expense: {} | Cash Outflow: {} (vs {} undeducted)",
            format_amount(derived.after_tax_expense),
            format_amount(derived.cash_outflow_after_tax),
            format_amount(derived.cash_outflow_without_deductions)
        );
        println!(
            "  Cash Outflow Reduction: {}",
            format_amount(derived.cash_outflow_reduction)
        );
        println!();

        println!("ASSESSMENT: {}", derived.assessment.verdict);
        println!("  {}", derived.assessment.detail);
        if !report.recommendations.is_empty() {
            println!();
            println!("RECOMMENDATIONS");
            for recommendation in &report.recommendations {
                println!("  - {}", recommendation);
            }
        }
        println!();

        if !report.category_breakdown.is_empty() {
            println!("CATEGORIES");
            for stat in &report.category_breakdown {
                println!(
                    "  {}: {} across {} records ({} of total, {} deductible)",
                    stat.category,
                    format_amount(stat.amount),
                    stat.count,
                    format!("{:.1}%", stat.percentage.round_dp(1)),
                    format_amount(stat.deductible)
                );
            }
        }
    }
}
