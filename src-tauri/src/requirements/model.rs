use serde::{Deserialize, Serialize};
use std::fmt;

use super::bounds::{BATHROOMS, BUDGET, FLOORS, ROOMS, SQFT};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HouseStyle {
    Modern,
    Traditional,
    Contemporary,
    Colonial,
    Minimalist,
    Mediterranean,
}

impl Default for HouseStyle {
    fn default() -> Self {
        HouseStyle::Modern
    }
}

impl HouseStyle {
    pub const ALL: [HouseStyle; 6] = [
        HouseStyle::Modern,
        HouseStyle::Traditional,
        HouseStyle::Contemporary,
        HouseStyle::Colonial,
        HouseStyle::Minimalist,
        HouseStyle::Mediterranean,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HouseStyle::Modern => "modern",
            HouseStyle::Traditional => "traditional",
            HouseStyle::Contemporary => "contemporary",
            HouseStyle::Colonial => "colonial",
            HouseStyle::Minimalist => "minimalist",
            HouseStyle::Mediterranean => "mediterranean",
        }
    }

    /// Human-facing name, as shown in the style picker.
    pub fn label(&self) -> &'static str {
        match self {
            HouseStyle::Modern => "Modern",
            HouseStyle::Traditional => "Traditional",
            HouseStyle::Contemporary => "Contemporary",
            HouseStyle::Colonial => "Colonial",
            HouseStyle::Minimalist => "Minimalist",
            HouseStyle::Mediterranean => "Mediterranean",
        }
    }
}

impl fmt::Display for HouseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The design form's input. Numeric fields always sit inside the ranges in
/// [`super::bounds`]; only [`RequirementsModel`] mutates a live instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HouseRequirements {
    pub rooms: u32,
    pub bathrooms: f64,
    pub floors: u32,
    pub style: HouseStyle,
    pub budget: u64,
    pub location: String,
    pub sqft: u32,
    pub garage: bool,
}

impl Default for HouseRequirements {
    fn default() -> Self {
        Self {
            rooms: 3,
            bathrooms: 2.0,
            floors: 1,
            style: HouseStyle::Modern,
            budget: 500_000,
            location: "San Francisco, CA".into(),
            sqft: 2_000,
            garage: true,
        }
    }
}

/// A single form edit. Numeric payloads are wide and signed so that any
/// slider or text value can be expressed before clamping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum RequirementUpdate {
    Rooms(i64),
    Bathrooms(f64),
    Floors(i64),
    Style(HouseStyle),
    Budget(i64),
    Sqft(i64),
    Location(String),
    Garage(bool),
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldUpdate {
    pub requirements: HouseRequirements,
    /// True when the stored value differs from the one requested.
    pub adjusted: bool,
}

#[derive(Debug, Default)]
pub struct RequirementsModel {
    current: HouseRequirements,
}

impl RequirementsModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> HouseRequirements {
        self.current.clone()
    }

    /// Applies one edit. Out-of-range numbers are clamped and snapped, never
    /// rejected.
    pub fn set(&mut self, update: RequirementUpdate) -> FieldUpdate {
        let adjusted = match update {
            RequirementUpdate::Rooms(value) => {
                let stored = ROOMS.normalize_int(value);
                self.current.rooms = stored as u32;
                stored != value
            }
            RequirementUpdate::Bathrooms(value) => {
                let stored = BATHROOMS.normalize(value);
                self.current.bathrooms = stored;
                stored != value
            }
            RequirementUpdate::Floors(value) => {
                let stored = FLOORS.normalize_int(value);
                self.current.floors = stored as u32;
                stored != value
            }
            RequirementUpdate::Budget(value) => {
                let stored = BUDGET.normalize_int(value);
                self.current.budget = stored as u64;
                stored != value
            }
            RequirementUpdate::Sqft(value) => {
                let stored = SQFT.normalize_int(value);
                self.current.sqft = stored as u32;
                stored != value
            }
            RequirementUpdate::Style(style) => {
                self.current.style = style;
                false
            }
            RequirementUpdate::Location(location) => {
                self.current.location = location;
                false
            }
            RequirementUpdate::Garage(garage) => {
                self.current.garage = garage;
                false
            }
        };

        FieldUpdate {
            requirements: self.get(),
            adjusted,
        }
    }

    pub fn reset(&mut self) -> HouseRequirements {
        self.current = HouseRequirements::default();
        self.get()
    }
}
