use rust_decimal::Decimal;
use serde::Serialize;

/// One tax scenario: the same expense total taxed either with or
/// without deductions reducing the taxable base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxScenario {
    pub gross_income: Decimal,
    pub deductions: Decimal,
    pub tax_rate: Decimal,
    pub tax_amount: Decimal,
    pub net_income: Decimal,
    pub profit_after_tax: Decimal,
}

/// Compute one scenario from the configured assumptions.
///
/// Tax is clamped at zero when deductions exceed gross income; the
/// raw arithmetic would otherwise produce a negative liability.
pub fn compute_scenario(
    gross_income: Decimal,
    deductions: Decimal,
    total_expenses: Decimal,
    tax_rate: Decimal,
) -> TaxScenario {
    let tax_amount = ((gross_income - deductions) * tax_rate).max(Decimal::ZERO);
    let net_income = gross_income - tax_amount;
    let profit_after_tax = net_income - total_expenses;
    TaxScenario {
        gross_income,
        deductions,
        tax_rate,
        tax_amount,
        net_income,
        profit_after_tax,
    }
}
