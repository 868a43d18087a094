#[cfg(feature = "desktop")]
pub mod commands;
pub mod bounds;
pub mod model;

pub use bounds::{Bounds, BATHROOMS, BUDGET, FLOORS, ROOMS, SQFT};
pub use model::{FieldUpdate, HouseRequirements, HouseStyle, RequirementUpdate, RequirementsModel};
