//! Reference tables behind the cost & compliance page. Read-only.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CostCategory {
    pub category: &'static str,
    pub amount: u64,
    /// Share as printed on the page. Display code derives its own from
    /// `amount`; this is kept to cross-check the table.
    pub percentage: u32,
}

pub const COST_BREAKDOWN: [CostCategory; 7] = [
    CostCategory {
        category: "Foundation & Structure",
        amount: 85_000,
        percentage: 17,
    },
    CostCategory {
        category: "Framing & Roofing",
        amount: 120_000,
        percentage: 24,
    },
    CostCategory {
        category: "Electrical & Plumbing",
        amount: 75_000,
        percentage: 15,
    },
    CostCategory {
        category: "Interior Finishes",
        amount: 95_000,
        percentage: 19,
    },
    CostCategory {
        category: "Exterior & Landscaping",
        amount: 65_000,
        percentage: 13,
    },
    CostCategory {
        category: "HVAC & Insulation",
        amount: 35_000,
        percentage: 7,
    },
    CostCategory {
        category: "Permits & Fees",
        amount: 25_000,
        percentage: 5,
    },
];

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ComplianceStatus {
    Passed,
    Warning,
}

impl ComplianceStatus {
    /// Badge text.
    pub fn label(&self) -> &'static str {
        match self {
            ComplianceStatus::Passed => "Passed",
            ComplianceStatus::Warning => "Review",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceItem {
    pub item: &'static str,
    pub status: ComplianceStatus,
    pub description: &'static str,
}

pub const COMPLIANCE_ITEMS: [ComplianceItem; 8] = [
    ComplianceItem {
        item: "Building Codes",
        status: ComplianceStatus::Passed,
        description: "Meets all local building regulations",
    },
    ComplianceItem {
        item: "Zoning Requirements",
        status: ComplianceStatus::Passed,
        description: "Compliant with residential zoning",
    },
    ComplianceItem {
        item: "Fire Safety",
        status: ComplianceStatus::Passed,
        description: "All fire safety standards met",
    },
    ComplianceItem {
        item: "Electrical Standards",
        status: ComplianceStatus::Passed,
        description: "NEC 2023 compliant",
    },
    ComplianceItem {
        item: "Plumbing Codes",
        status: ComplianceStatus::Passed,
        description: "IPC standards satisfied",
    },
    ComplianceItem {
        item: "Energy Efficiency",
        status: ComplianceStatus::Warning,
        description: "Consider solar panels for better rating",
    },
    ComplianceItem {
        item: "Accessibility",
        status: ComplianceStatus::Passed,
        description: "ADA compliant design",
    },
    ComplianceItem {
        item: "Environmental Impact",
        status: ComplianceStatus::Passed,
        description: "Green building standards met",
    },
];

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationSuggestion {
    pub title: &'static str,
    pub savings: u64,
    pub description: &'static str,
}

pub const OPTIMIZATION_SUGGESTIONS: [OptimizationSuggestion; 4] = [
    OptimizationSuggestion {
        title: "Smart Home Integration",
        savings: 15_000,
        description: "Add smart systems for long-term energy savings",
    },
    OptimizationSuggestion {
        title: "Sustainable Materials",
        savings: 8_000,
        description: "Use eco-friendly materials for tax incentives",
    },
    OptimizationSuggestion {
        title: "Solar Panel Installation",
        savings: 25_000,
        description: "Reduce energy costs by 70% over 10 years",
    },
    OptimizationSuggestion {
        title: "Bulk Material Purchase",
        savings: 12_000,
        description: "Order materials in bulk for better pricing",
    },
];
