use crate::records::ExpenseRecord;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::collections::HashMap;

/// Per-category totals for one batch of records
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStat {
    pub category: String,
    pub amount: Decimal,
    pub count: usize,
    /// Sum of amounts flagged deductible within the category
    pub deductible: Decimal,
    /// Share of the whole batch, 0 when the batch total is 0
    pub percentage: Decimal,
}

/// Group records by category, in first-seen order.
///
/// Percentages are computed against the whole-batch total once all
/// records have been folded in, so the stats always sum back to the
/// batch total exactly.
pub fn aggregate(records: &[ExpenseRecord]) -> Vec<CategoryStat> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut stats: Vec<CategoryStat> = Vec::new();

    for record in records {
        let i = *index.entry(record.category.as_str()).or_insert_with(|| {
            stats.push(CategoryStat {
                category: record.category.clone(),
                amount: Decimal::ZERO,
                count: 0,
                deductible: Decimal::ZERO,
                percentage: Decimal::ZERO,
            });
            stats.len() - 1
        });
        stats[i].amount += record.amount;
        stats[i].count += 1;
        if record.tax_deductible {
            stats[i].deductible += record.amount;
        }
    }

    let total: Decimal = stats.iter().map(|s| s.amount).sum();
    if total > Decimal::ZERO {
        for stat in &mut stats {
            stat.percentage = stat.amount / total * dec!(100);
        }
    }
    log::debug!("aggregated {} records into {} categories", records.len(), stats.len());

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(amount: Decimal, category: &str, deductible: bool) -> ExpenseRecord {
        ExpenseRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            description: "test expense".to_string(),
            amount,
            category: category.to_string(),
            tax_deductible: deductible,
            confidence: dec!(90),
        }
    }

    #[test]
    fn empty_input_yields_no_stats() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn groups_in_first_seen_order() {
        let records = vec![
            record(dec!(100), "travel", true),
            record(dec!(50), "meals", false),
            record(dec!(200), "travel", false),
            record(dec!(25), "software", true),
        ];
        let stats = aggregate(&records);
        let categories: Vec<_> = stats.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(categories, vec!["travel", "meals", "software"]);
    }

    #[test]
    fn sums_counts_and_deductible_subtotals() {
        let records = vec![
            record(dec!(100), "travel", true),
            record(dec!(200), "travel", false),
            record(dec!(50), "meals", true),
        ];
        let stats = aggregate(&records);

        assert_eq!(stats[0].amount, dec!(300));
        assert_eq!(stats[0].count, 2);
        assert_eq!(stats[0].deductible, dec!(100));

        assert_eq!(stats[1].amount, dec!(50));
        assert_eq!(stats[1].count, 1);
        assert_eq!(stats[1].deductible, dec!(50));
    }

    #[test]
    fn amounts_conserve_batch_total() {
        let records = vec![
            record(dec!(2450), "office-supplies", true),
            record(dec!(1800), "meals", true),
            record(dec!(3200), "other", false),
            record(dec!(5000), "software", true),
        ];
        let total: Decimal = records.iter().map(|r| r.amount).sum();
        let stats = aggregate(&records);
        let stat_total: Decimal = stats.iter().map(|s| s.amount).sum();
        assert_eq!(stat_total, total);
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let records = vec![
            record(dec!(100), "travel", true),
            record(dec!(200), "meals", false),
            record(dec!(700), "software", true),
        ];
        let stats = aggregate(&records);
        let sum: Decimal = stats.iter().map(|s| s.percentage).sum();
        assert_eq!(sum, dec!(100));
        assert_eq!(stats[0].percentage, dec!(10));
        assert_eq!(stats[1].percentage, dec!(20));
        assert_eq!(stats[2].percentage, dec!(70));
    }

    #[test]
    fn zero_total_gives_zero_percentages() {
        let records = vec![record(Decimal::ZERO, "travel", true)];
        let stats = aggregate(&records);
        assert_eq!(stats[0].percentage, Decimal::ZERO);
    }
}
