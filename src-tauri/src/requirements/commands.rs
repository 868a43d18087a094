use tauri::State;

use crate::desktop::AppState;

use super::{FieldUpdate, HouseRequirements, RequirementUpdate};

#[tauri::command]
pub async fn get_requirements(state: State<'_, AppState>) -> Result<HouseRequirements, String> {
    Ok(state.session().await.requirements().await)
}

#[tauri::command]
pub async fn update_requirement(
    state: State<'_, AppState>,
    update: RequirementUpdate,
) -> Result<FieldUpdate, String> {
    Ok(state.session().await.update_requirement(update).await)
}

#[tauri::command]
pub async fn reset_requirements(state: State<'_, AppState>) -> Result<HouseRequirements, String> {
    Ok(state.session().await.reset_requirements().await)
}
