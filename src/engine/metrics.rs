use crate::engine::analysis::TaxAnalysis;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Savings rate at or above this qualifies as "Good"
pub const GOOD_SAVINGS_RATE: Decimal = dec!(0.2);
/// Deductible ratio at or above this qualifies as "Good"
pub const GOOD_DEDUCTIBLE_RATIO: Decimal = dec!(0.6);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Good,
    #[serde(rename = "Can Improve")]
    CanImprove,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Good => "Good",
            Verdict::CanImprove => "Can Improve",
        }
    }

    /// Fixed guidance text keyed by verdict
    pub fn detail(&self) -> &'static str {
        match self {
            Verdict::Good => {
                "Your deductions are effectively reducing tax. \
                 Maintain documentation and look for minor optimizations."
            }
            Verdict::CanImprove => {
                "You may be overpaying. \
                 Reclassify eligible expenses and time purchases to increase deductions."
            }
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub verdict: Verdict,
    pub detail: String,
}

/// Second-order metrics computed from a completed analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedMetrics {
    pub gross_income: Decimal,
    /// Effective tax rate, 0 when gross income is not positive
    pub tax_rate: Decimal,
    /// Cost of expenses net of the deduction tax shield
    pub after_tax_expense: Decimal,
    pub taxes_paid: Decimal,
    pub taxes_without_deductions: Decimal,
    pub tax_savings: Decimal,
    pub cash_outflow_after_tax: Decimal,
    pub cash_outflow_without_deductions: Decimal,
    pub cash_outflow_reduction: Decimal,
    /// Deductible share of total expenses, 0 when there are no expenses
    pub deductible_ratio: Decimal,
    /// Savings as a share of the undeducted liability, 0 when that is 0
    pub savings_rate: Decimal,
    pub assessment: Assessment,
}

/// Derive ratios and the qualitative assessment from an analysis.
///
/// Gross income is recovered from the analysis itself rather than
/// threaded through as a separate assumption; the identity holds
/// exactly under the scenario formulas. Every ratio short-circuits
/// to zero on a zero denominator.
pub fn derive_metrics(analysis: &TaxAnalysis) -> DerivedMetrics {
    let gross_income =
        analysis.profit_without_tax + analysis.tax_without_deductions + analysis.total_expenses;
    let tax_rate = if gross_income > Decimal::ZERO {
        analysis.tax_without_deductions / gross_income
    } else {
        Decimal::ZERO
    };
    let after_tax_expense =
        analysis.non_deductible_expenses + analysis.deductible_expenses * (Decimal::ONE - tax_rate);
    let taxes_paid = analysis.tax_with_deductions;
    let taxes_without_deductions = analysis.tax_without_deductions;
    let tax_savings = (taxes_without_deductions - taxes_paid).max(Decimal::ZERO);
    let cash_outflow_after_tax = analysis.total_expenses + taxes_paid;
    let cash_outflow_without_deductions = analysis.total_expenses + taxes_without_deductions;
    let cash_outflow_reduction =
        (cash_outflow_without_deductions - cash_outflow_after_tax).max(Decimal::ZERO);
    let deductible_ratio = if analysis.total_expenses > Decimal::ZERO {
        analysis.deductible_expenses / analysis.total_expenses
    } else {
        Decimal::ZERO
    };
    let savings_rate = if taxes_without_deductions > Decimal::ZERO {
        tax_savings / taxes_without_deductions
    } else {
        Decimal::ZERO
    };

    // OR, not AND: a high deductible ratio qualifies on its own even
    // when the savings rate is modest, and vice versa.
    let verdict = if savings_rate >= GOOD_SAVINGS_RATE || deductible_ratio >= GOOD_DEDUCTIBLE_RATIO
    {
        Verdict::Good
    } else {
        Verdict::CanImprove
    };

    DerivedMetrics {
        gross_income,
        tax_rate,
        after_tax_expense,
        taxes_paid,
        taxes_without_deductions,
        tax_savings,
        cash_outflow_after_tax,
        cash_outflow_without_deductions,
        cash_outflow_reduction,
        deductible_ratio,
        savings_rate,
        assessment: Assessment {
            verdict,
            detail: verdict.detail().to_string(),
        },
    }
}
