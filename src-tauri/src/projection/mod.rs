#[cfg(feature = "desktop")]
pub mod commands;
pub mod aggregates;
pub mod catalog;
pub mod format;

pub use aggregates::{
    breakdown_rows, compliance_overview, cost_overview, optimization_rows, percentage_of,
    total_cost, total_savings, BreakdownRow, ComplianceOverview, CostOverview, SuggestionRow,
};
pub use catalog::{
    ComplianceItem, ComplianceStatus, CostCategory, OptimizationSuggestion, COMPLIANCE_ITEMS,
    COST_BREAKDOWN, OPTIMIZATION_SUGGESTIONS,
};
