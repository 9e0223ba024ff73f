use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Default monthly gross income assumption
pub const DEFAULT_GROSS_INCOME: Decimal = dec!(100000);
/// Default flat tax rate
pub const DEFAULT_TAX_RATE: Decimal = dec!(0.30);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("flat tax rate {0} outside [0, 1]")]
    TaxRateOutOfRange(Decimal),
    #[error("gross income assumption {0} must be positive")]
    NonPositiveGrossIncome(Decimal),
}

/// External assumptions for one analysis pass.
///
/// Both values are configuration, never literals inside the formulas,
/// so the engine can be run against arbitrary scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnalysisConfig {
    pub gross_income: Decimal,
    pub tax_rate: Decimal,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            gross_income: DEFAULT_GROSS_INCOME,
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}

impl AnalysisConfig {
    pub fn new(gross_income: Decimal, tax_rate: Decimal) -> Result<Self, ConfigError> {
        let config = AnalysisConfig {
            gross_income,
            tax_rate,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject nonsensical assumptions before any computation runs
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tax_rate < Decimal::ZERO || self.tax_rate > Decimal::ONE {
            return Err(ConfigError::TaxRateOutOfRange(self.tax_rate));
        }
        if self.gross_income <= Decimal::ZERO {
            return Err(ConfigError::NonPositiveGrossIncome(self.gross_income));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_assumptions() {
        let config = AnalysisConfig::default();
        assert_eq!(config.gross_income, dec!(100000));
        assert_eq!(config.tax_rate, dec!(0.30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn tax_rate_must_be_a_fraction() {
        assert_eq!(
            AnalysisConfig::new(dec!(100000), dec!(1.5)),
            Err(ConfigError::TaxRateOutOfRange(dec!(1.5)))
        );
        assert_eq!(
            AnalysisConfig::new(dec!(100000), dec!(-0.1)),
            Err(ConfigError::TaxRateOutOfRange(dec!(-0.1)))
        );
        assert!(AnalysisConfig::new(dec!(100000), Decimal::ZERO).is_ok());
        assert!(AnalysisConfig::new(dec!(100000), Decimal::ONE).is_ok());
    }

    #[test]
    fn gross_income_must_be_positive() {
        assert_eq!(
            AnalysisConfig::new(Decimal::ZERO, dec!(0.30)),
            Err(ConfigError::NonPositiveGrossIncome(Decimal::ZERO))
        );
        assert_eq!(
            AnalysisConfig::new(dec!(-1), dec!(0.30)),
            Err(ConfigError::NonPositiveGrossIncome(dec!(-1)))
        );
    }
}
