//! Design report preview and the toast-only actions around it.
//!
//! Nothing here writes files; every action resolves to a [`Notification`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{events::Notification, requirements::HouseStyle};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportSection {
    pub id: &'static str,
    pub title: &'static str,
    pub pages: u32,
}

pub const REPORT_SECTIONS: [ReportSection; 6] = [
    ReportSection {
        id: "summary",
        title: "Executive Summary",
        pages: 2,
    },
    ReportSection {
        id: "design",
        title: "Design Specifications",
        pages: 5,
    },
    ReportSection {
        id: "floorplans",
        title: "Floor Plans",
        pages: 3,
    },
    ReportSection {
        id: "cost",
        title: "Cost Analysis",
        pages: 4,
    },
    ReportSection {
        id: "compliance",
        title: "Compliance Report",
        pages: 2,
    },
    ReportSection {
        id: "timeline",
        title: "Construction Timeline",
        pages: 1,
    },
];

pub fn report_page_count() -> u32 {
    REPORT_SECTIONS.iter().map(|s| s.pages).sum()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Ppt,
    Dwg,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Ppt => "ppt",
            ExportFormat::Dwg => "dwg",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportOverview {
    pub title: String,
    pub generated_on: NaiveDate,
    pub page_count: u32,
    pub sections: Vec<ReportSection>,
}

impl ReportOverview {
    pub fn new(style: HouseStyle, now: DateTime<Utc>) -> Self {
        Self {
            title: format!("{} House Design Report", style.label()),
            generated_on: now.date_naive(),
            page_count: report_page_count(),
            sections: REPORT_SECTIONS.to_vec(),
        }
    }
}

pub fn design_report_downloaded() -> Notification {
    Notification::new(
        "Report Downloaded",
        "Your design report has been downloaded successfully.",
    )
}

pub fn report_downloaded(format: ExportFormat) -> Notification {
    let upper = format.as_str().to_uppercase();
    Notification::new(
        format!("{upper} Downloaded"),
        format!("Your report has been downloaded as {upper}."),
    )
}

pub fn report_shared() -> Notification {
    Notification::new(
        "Report Shared",
        "A shareable link has been copied to your clipboard.",
    )
}

pub fn print_dialog_opened() -> Notification {
    Notification::new("Print Dialog Opened", "Your report is ready to print.")
}

pub fn optimizations_applied() -> Notification {
    Notification::new(
        "Optimization Applied",
        "Cost-saving suggestions have been applied to your design.",
    )
}

pub fn cost_report_exported() -> Notification {
    Notification::new(
        "Report Exported",
        "Detailed cost & compliance report has been downloaded.",
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn sections_add_up_to_seventeen_pages() {
        assert_eq!(report_page_count(), 17);
    }

    #[test]
    fn overview_is_titled_after_the_style() {
        let now = Utc.with_ymd_and_hms(2025, 3, 9, 12, 0, 0).unwrap();
        let overview = ReportOverview::new(HouseStyle::Mediterranean, now);
        assert_eq!(overview.title, "Mediterranean House Design Report");
        assert_eq!(
            overview.generated_on,
            NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
        );
        assert_eq!(overview.sections.len(), 6);
    }

    #[test]
    fn download_toast_names_the_format() {
        let toast = report_downloaded(ExportFormat::Dwg);
        assert_eq!(toast.title, "DWG Downloaded");
        assert_eq!(toast.description, "Your report has been downloaded as DWG.");

        let format: ExportFormat = serde_json::from_str("\"ppt\"").expect("deserialize");
        assert_eq!(format, ExportFormat::Ppt);
    }
}
