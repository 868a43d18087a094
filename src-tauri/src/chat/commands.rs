use tauri::State;

use crate::desktop::AppState;

use super::{ChatSnapshot, SubmitOutcome};

#[tauri::command]
pub async fn get_chat(state: State<'_, AppState>) -> Result<ChatSnapshot, String> {
    Ok(state.session().await.chat().await)
}

#[tauri::command]
pub async fn set_chat_input(
    state: State<'_, AppState>,
    input: String,
) -> Result<ChatSnapshot, String> {
    Ok(state.session().await.set_chat_input(input).await)
}

#[tauri::command]
pub async fn send_chat_message(
    state: State<'_, AppState>,
    text: String,
) -> Result<SubmitOutcome, String> {
    Ok(state.session().await.send_chat_message(text).await)
}

#[tauri::command]
pub async fn send_chat_input(state: State<'_, AppState>) -> Result<SubmitOutcome, String> {
    Ok(state.session().await.send_chat_input().await)
}

#[tauri::command]
pub async fn send_suggested_question(
    state: State<'_, AppState>,
    index: usize,
) -> Result<SubmitOutcome, String> {
    state
        .session
        .read()
        .await
        .send_suggested_question(index)
        .await
        .map_err(|e| e.to_string())
}
