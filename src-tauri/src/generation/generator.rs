use anyhow::Result;
use chrono::Utc;

use crate::{
    projection::format::{format_area, format_currency},
    requirements::HouseRequirements,
};

use super::result::{
    DesignStats, GeneratedResult, SceneParameters, COMPLIANCE_APPROVED, ENERGY_RATING,
    FLOOR_PLAN_ASSET,
};

/// Produces a design once the simulated delay has elapsed.
///
/// The controller owns scheduling and state; implementations only turn a
/// requirements snapshot into a result. An `Err` sends the request back to
/// idle with the message surfaced to the caller.
pub trait DesignGenerator: Send + Sync + 'static {
    fn generate(&self, request_id: &str, requirements: &HouseRequirements)
        -> Result<GeneratedResult>;
}

/// Canned generation: a fixed floor plan and stand-in 3D model, with area and
/// cost echoed from the request. Never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockDesignGenerator;

impl DesignGenerator for MockDesignGenerator {
    fn generate(
        &self,
        request_id: &str,
        requirements: &HouseRequirements,
    ) -> Result<GeneratedResult> {
        Ok(GeneratedResult {
            request_id: request_id.to_string(),
            floor_plan: FLOOR_PLAN_ASSET.to_string(),
            scene: SceneParameters::for_requirements(requirements),
            stats: DesignStats {
                sqft: requirements.sqft,
                area_label: format_area(requirements.sqft),
                budget: requirements.budget,
                cost_label: format_currency(requirements.budget),
                compliance: COMPLIANCE_APPROVED.to_string(),
                energy_rating: ENERGY_RATING.to_string(),
            },
            generated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::HouseStyle;

    #[test]
    fn stats_echo_area_and_budget() {
        let requirements = HouseRequirements {
            sqft: 3_400,
            budget: 1_250_000,
            ..HouseRequirements::default()
        };
        let result = MockDesignGenerator
            .generate("req-1", &requirements)
            .expect("mock never fails");

        assert_eq!(result.request_id, "req-1");
        assert_eq!(result.stats.sqft, 3_400);
        assert_eq!(result.stats.area_label, "3,400 sqft");
        assert_eq!(result.stats.budget, 1_250_000);
        assert_eq!(result.stats.cost_label, "$1,250,000");
        assert_eq!(result.stats.compliance, "Approved");
        assert_eq!(result.stats.energy_rating, "A+");
    }

    #[test]
    fn floor_plan_and_geometry_ignore_input() {
        let small = HouseRequirements::default();
        let large = HouseRequirements {
            rooms: 6,
            floors: 3,
            sqft: 5_000,
            style: HouseStyle::Colonial,
            garage: false,
            ..HouseRequirements::default()
        };

        let a = MockDesignGenerator.generate("a", &small).expect("mock");
        let b = MockDesignGenerator.generate("b", &large).expect("mock");

        assert_eq!(a.floor_plan, b.floor_plan);
        assert_eq!(a.scene.body, b.scene.body);
        assert_eq!(a.scene.roof, b.scene.roof);
        assert_eq!(a.scene.camera, b.scene.camera);
        assert_eq!(b.scene.style, HouseStyle::Colonial);
        assert_eq!(b.scene.floors, 3);
        assert!(!b.scene.garage);
    }
}
