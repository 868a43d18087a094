use tauri::State;

use crate::desktop::AppState;

use super::{
    compliance_overview, cost_overview, optimization_rows, ComplianceOverview, CostOverview,
    SuggestionRow,
};

#[tauri::command]
pub fn get_cost_overview() -> CostOverview {
    cost_overview()
}

#[tauri::command]
pub fn get_compliance_overview() -> ComplianceOverview {
    compliance_overview()
}

#[tauri::command]
pub fn get_optimization_suggestions() -> Vec<SuggestionRow> {
    optimization_rows()
}

#[tauri::command]
pub async fn apply_optimizations(state: State<'_, AppState>) -> Result<(), String> {
    state.session().await.apply_optimizations();
    Ok(())
}

#[tauri::command]
pub async fn export_cost_report(state: State<'_, AppState>) -> Result<(), String> {
    state.session().await.export_cost_report();
    Ok(())
}
