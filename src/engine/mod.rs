pub mod analysis;
pub mod categories;
pub mod metrics;
pub mod policy;
pub mod scenario;

pub use analysis::{analyze, monthly_trend, AnalysisError, MonthlyTrendPoint, TaxAnalysis};
pub use categories::{aggregate, CategoryStat};
pub use metrics::{derive_metrics, Assessment, DerivedMetrics, Verdict};
pub use policy::recommend;
pub use scenario::{compute_scenario, TaxScenario};
