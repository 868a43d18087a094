use tauri::State;

use crate::desktop::AppState;

use super::{GenerationState, TriggerOutcome};

#[tauri::command]
pub async fn generate_design(state: State<'_, AppState>) -> Result<TriggerOutcome, String> {
    Ok(state.session().await.generate().await)
}

#[tauri::command]
pub async fn get_generation(state: State<'_, AppState>) -> Result<GenerationState, String> {
    Ok(state.session().await.generation_state().await)
}

#[tauri::command]
pub async fn download_design_report(state: State<'_, AppState>) -> Result<(), String> {
    state
        .session()
        .await
        .download_design_report()
        .await
        .map_err(|e| e.to_string())
}
