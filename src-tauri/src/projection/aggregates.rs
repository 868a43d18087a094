use serde::Serialize;

use super::{
    catalog::{
        ComplianceItem, ComplianceStatus, COMPLIANCE_ITEMS, COST_BREAKDOWN,
        OPTIMIZATION_SUGGESTIONS,
    },
    format::{format_currency, format_percentage},
};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownRow {
    pub category: &'static str,
    pub amount: u64,
    pub amount_label: String,
    pub percentage: f64,
    pub percentage_label: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRow {
    pub title: &'static str,
    pub description: &'static str,
    pub savings: u64,
    pub savings_label: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CostOverview {
    pub total_cost: u64,
    pub total_cost_label: String,
    pub rows: Vec<BreakdownRow>,
    pub potential_savings: u64,
    pub potential_savings_label: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceOverview {
    pub passed: usize,
    pub warnings: usize,
    pub total: usize,
    pub items: Vec<ComplianceItem>,
}

/// Sum of every category amount.
pub fn total_cost() -> u64 {
    COST_BREAKDOWN.iter().map(|row| row.amount).sum()
}

/// Share of the total, recomputed from raw amounts.
pub fn percentage_of(amount: u64) -> f64 {
    let total = total_cost();
    if total == 0 {
        return 0.0;
    }
    amount as f64 / total as f64 * 100.0
}

pub fn breakdown_rows() -> Vec<BreakdownRow> {
    COST_BREAKDOWN
        .iter()
        .map(|row| {
            let percentage = percentage_of(row.amount);
            BreakdownRow {
                category: row.category,
                amount: row.amount,
                amount_label: format_currency(row.amount),
                percentage,
                percentage_label: format_percentage(percentage),
            }
        })
        .collect()
}

pub fn total_savings() -> u64 {
    OPTIMIZATION_SUGGESTIONS.iter().map(|s| s.savings).sum()
}

pub fn optimization_rows() -> Vec<SuggestionRow> {
    OPTIMIZATION_SUGGESTIONS
        .iter()
        .map(|s| SuggestionRow {
            title: s.title,
            description: s.description,
            savings: s.savings,
            savings_label: format_currency(s.savings),
        })
        .collect()
}

pub fn cost_overview() -> CostOverview {
    let total = total_cost();
    let savings = total_savings();
    CostOverview {
        total_cost: total,
        total_cost_label: format_currency(total),
        rows: breakdown_rows(),
        potential_savings: savings,
        potential_savings_label: format_currency(savings),
    }
}

pub fn compliance_overview() -> ComplianceOverview {
    let passed = COMPLIANCE_ITEMS
        .iter()
        .filter(|item| item.status == ComplianceStatus::Passed)
        .count();
    ComplianceOverview {
        passed,
        warnings: COMPLIANCE_ITEMS.len() - passed,
        total: COMPLIANCE_ITEMS.len(),
        items: COMPLIANCE_ITEMS.to_vec(),
    }
}
