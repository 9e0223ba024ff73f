use crate::engine::analysis::TaxAnalysis;
use crate::engine::metrics::{DerivedMetrics, GOOD_SAVINGS_RATE};
use rust_decimal::Decimal;

pub const RECOMMEND_RECLASSIFY: &str =
    "Reclassify legitimate business expenses to reduce non-deductible share.";
pub const RECOMMEND_TIMING: &str =
    "Time large purchases near year-end to maximize current year deductions.";
pub const RECOMMEND_DOCUMENTATION: &str =
    "Ensure receipts and business purpose documentation for all deductibles.";

/// Rule-based recommendations off a completed analysis.
///
/// Each rule fires independently, in a fixed order; none are mutually
/// exclusive, so anywhere from zero to all three strings may appear.
pub fn recommend(analysis: &TaxAnalysis, derived: &DerivedMetrics) -> Vec<String> {
    let mut recommendations = Vec::new();
    if analysis.non_deductible_expenses > analysis.deductible_expenses {
        recommendations.push(RECOMMEND_RECLASSIFY.to_string());
    }
    if derived.savings_rate < GOOD_SAVINGS_RATE {
        recommendations.push(RECOMMEND_TIMING.to_string());
    }
    if analysis.deductible_expenses > Decimal::ZERO {
        recommendations.push(RECOMMEND_DOCUMENTATION.to_string());
    }
    recommendations
}
