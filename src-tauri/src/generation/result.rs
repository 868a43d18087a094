use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::requirements::{HouseRequirements, HouseStyle};

pub const FLOOR_PLAN_ASSET: &str = "floor-plan.jpg";
pub const COMPLIANCE_APPROVED: &str = "Approved";
pub const ENERGY_RATING: &str = "A+";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoofParameters {
    pub radius: f32,
    pub height: f32,
    pub sides: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CameraParameters {
    pub position: [f32; 3],
    pub fov: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub auto_rotate_speed: f32,
}

/// What the 3D viewer needs to draw a design. The geometry is a fixed
/// stand-in model; only the tags echo the request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SceneParameters {
    pub style: HouseStyle,
    pub floors: u32,
    pub garage: bool,
    pub body: Dimensions,
    pub roof: RoofParameters,
    pub garage_block: Dimensions,
    pub camera: CameraParameters,
}

impl SceneParameters {
    pub fn for_requirements(requirements: &HouseRequirements) -> Self {
        Self {
            style: requirements.style,
            floors: requirements.floors,
            garage: requirements.garage,
            body: Dimensions {
                width: 8.0,
                height: 5.0,
                depth: 10.0,
            },
            roof: RoofParameters {
                radius: 7.0,
                height: 3.0,
                sides: 4,
            },
            garage_block: Dimensions {
                width: 4.0,
                height: 3.0,
                depth: 4.0,
            },
            camera: CameraParameters {
                position: [15.0, 10.0, 15.0],
                fov: 50.0,
                min_distance: 5.0,
                max_distance: 30.0,
                auto_rotate_speed: 0.5,
            },
        }
    }
}

/// Stat cards under the preview.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DesignStats {
    pub sqft: u32,
    pub area_label: String,
    pub budget: u64,
    pub cost_label: String,
    pub compliance: String,
    pub energy_rating: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedResult {
    pub request_id: String,
    pub floor_plan: String,
    pub scene: SceneParameters,
    pub stats: DesignStats,
    pub generated_at: DateTime<Utc>,
}
