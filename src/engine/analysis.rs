use crate::config::{AnalysisConfig, ConfigError};
use crate::engine::scenario::compute_scenario;
use crate::records::{self, ExpenseRecord, RecordError};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error(transparent)]
    Record(#[from] RecordError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Aggregate result of one analysis pass over a batch of records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxAnalysis {
    pub total_expenses: Decimal,
    pub deductible_expenses: Decimal,
    pub non_deductible_expenses: Decimal,
    pub potential_savings: Decimal,
    pub tax_with_deductions: Decimal,
    pub tax_without_deductions: Decimal,
    pub profit_with_tax: Decimal,
    pub profit_without_tax: Decimal,
}

/// Single-entry time series the dashboard consumer expects
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyTrendPoint {
    pub month: String,
    pub expenses: Decimal,
    pub savings: Decimal,
    pub deductions: Decimal,
}

/// Run the two tax scenarios over a validated batch of records.
///
/// Rejects the batch on the first malformed record and rejects bad
/// assumptions before any arithmetic runs. An empty batch is a
/// legitimate state and produces a fully zeroed analysis.
pub fn analyze(
    records: &[ExpenseRecord],
    config: &AnalysisConfig,
) -> Result<TaxAnalysis, AnalysisError> {
    config.validate()?;
    records::validate_batch(records)?;

    let total_expenses: Decimal = records.iter().map(|r| r.amount).sum();
    let deductible_expenses: Decimal = records
        .iter()
        .filter(|r| r.tax_deductible)
        .map(|r| r.amount)
        .sum();
    let non_deductible_expenses = total_expenses - deductible_expenses;

    let without = compute_scenario(
        config.gross_income,
        Decimal::ZERO,
        total_expenses,
        config.tax_rate,
    );
    let with = compute_scenario(
        config.gross_income,
        deductible_expenses,
        total_expenses,
        config.tax_rate,
    );
    let potential_savings = without.tax_amount - with.tax_amount;

    log::debug!(
        "analyzed {} records: total {}, deductible {}, savings {}",
        records.len(),
        total_expenses,
        deductible_expenses,
        potential_savings
    );

    let analysis = TaxAnalysis {
        total_expenses,
        deductible_expenses,
        non_deductible_expenses,
        potential_savings,
        tax_with_deductions: with.tax_amount,
        tax_without_deductions: without.tax_amount,
        profit_with_tax: with.profit_after_tax,
        profit_without_tax: without.profit_after_tax,
    };

    // The derived-metrics layer recovers gross income from this
    // identity; if it ever diverges from the configured assumption
    // there is a consistency bug in the formulas above.
    debug_assert_eq!(
        analysis.profit_without_tax + analysis.tax_without_deductions + analysis.total_expenses,
        config.gross_income
    );

    Ok(analysis)
}

/// Thin presentational adapter over a completed analysis
pub fn monthly_trend(analysis: &TaxAnalysis) -> Vec<MonthlyTrendPoint> {
    vec![MonthlyTrendPoint {
        month: "Current".to_string(),
        expenses: analysis.total_expenses,
        savings: analysis.potential_savings,
        deductions: analysis.deductible_expenses,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn record(amount: Decimal, deductible: bool) -> ExpenseRecord {
        ExpenseRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            description: "test expense".to_string(),
            amount,
            category: "other".to_string(),
            tax_deductible: deductible,
            confidence: dec!(90),
        }
    }

    fn sample_batch() -> Vec<ExpenseRecord> {
        vec![
            record(dec!(2450), true),
            record(dec!(1800), true),
            record(dec!(3200), false),
            record(dec!(5000), true),
            record(dec!(15000), true),
            record(dec!(2500), false),
        ]
    }

    #[test]
    fn sample_batch_analysis() {
        let analysis = analyze(&sample_batch(), &AnalysisConfig::default()).unwrap();
        assert_eq!(analysis.total_expenses, dec!(29950));
        assert_eq!(analysis.deductible_expenses, dec!(24250));
        assert_eq!(analysis.non_deductible_expenses, dec!(5700));
        assert_eq!(analysis.tax_without_deductions, dec!(30000));
        assert_eq!(analysis.tax_with_deductions, dec!(22725));
        assert_eq!(analysis.potential_savings, dec!(7275));
        assert_eq!(analysis.profit_without_tax, dec!(40050));
        assert_eq!(analysis.profit_with_tax, dec!(47325));
    }

    #[test]
    fn totals_conserve() {
        let analysis = analyze(&sample_batch(), &AnalysisConfig::default()).unwrap();
        assert_eq!(
            analysis.deductible_expenses + analysis.non_deductible_expenses,
            analysis.total_expenses
        );
    }

    #[test]
    fn deductions_never_increase_liability() {
        let analysis = analyze(&sample_batch(), &AnalysisConfig::default()).unwrap();
        assert!(analysis.tax_with_deductions <= analysis.tax_without_deductions);
        assert!(analysis.profit_with_tax >= analysis.profit_without_tax);
    }

    #[test]
    fn empty_batch_is_zeroed_and_repeatable() {
        let config = AnalysisConfig::default();
        let first = analyze(&[], &config).unwrap();
        let second = analyze(&[], &config).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.total_expenses, Decimal::ZERO);
        assert_eq!(first.deductible_expenses, Decimal::ZERO);
        assert_eq!(first.potential_savings, Decimal::ZERO);
        // With no expenses both scenarios are the plain income tax
        assert_eq!(first.tax_with_deductions, dec!(30000));
        assert_eq!(first.profit_with_tax, dec!(70000));
    }

    #[test]
    fn negative_amount_rejected_before_computation() {
        let batch = vec![record(dec!(-100), true)];
        let err = analyze(&batch, &AnalysisConfig::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::Record(_)));
    }

    #[test]
    fn bad_config_rejected_before_computation() {
        let config = AnalysisConfig {
            gross_income: dec!(100000),
            tax_rate: dec!(2),
        };
        let err = analyze(&sample_batch(), &config).unwrap_err();
        assert!(matches!(err, AnalysisError::Config(_)));
    }

    #[test]
    fn trend_wraps_the_analysis() {
        let analysis = analyze(&sample_batch(), &AnalysisConfig::default()).unwrap();
        let trend = monthly_trend(&analysis);
        assert_eq!(trend.len(), 1);
        assert_eq!(trend[0].month, "Current");
        assert_eq!(trend[0].expenses, dec!(29950));
        assert_eq!(trend[0].savings, dec!(7275));
        assert_eq!(trend[0].deductions, dec!(24250));
    }
}
