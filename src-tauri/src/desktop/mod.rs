use std::sync::Arc;

use tauri::{AppHandle, Emitter, Manager, State};

use crate::{
    chat::commands::{
        get_chat, send_chat_input, send_chat_message, send_suggested_question, set_chat_input,
    },
    events::{EventSink, SessionEvent},
    generation::commands::{download_design_report, generate_design, get_generation},
    projection::commands::{
        apply_optimizations, export_cost_report, get_compliance_overview, get_cost_overview,
        get_optimization_suggestions,
    },
    report::{ExportFormat, ReportOverview},
    requirements::commands::{get_requirements, reset_requirements, update_requirement},
    session::SessionHost,
    settings::SimulationSettings,
    utils::init_logging,
};

const ENABLE_LOGS: bool = true;

use crate::{log_info, log_warn};

pub type AppState = SessionHost;

/// Forwards session output to the webview as Tauri events.
struct TauriEventSink {
    app_handle: AppHandle,
}

impl EventSink for TauriEventSink {
    fn emit(&self, event: SessionEvent) {
        let name = event.name();
        if let Err(err) = self.app_handle.emit(name, &event) {
            log_warn!("failed to emit {name}: {err}");
        }
    }
}

#[tauri::command]
async fn get_report_overview(state: State<'_, AppState>) -> Result<ReportOverview, String> {
    Ok(state.session().await.report_overview().await)
}

#[tauri::command]
async fn download_report(state: State<'_, AppState>, format: ExportFormat) -> Result<(), String> {
    state.session().await.download_report(format);
    Ok(())
}

#[tauri::command]
async fn share_report(state: State<'_, AppState>) -> Result<(), String> {
    state.session().await.share_report();
    Ok(())
}

#[tauri::command]
async fn print_report(state: State<'_, AppState>) -> Result<(), String> {
    state.session().await.print_report();
    Ok(())
}

#[tauri::command]
async fn reset_session(state: State<'_, AppState>) -> Result<String, String> {
    Ok(state.reset().await)
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    init_logging();

    log::info!("AI House Designer starting up...");

    tauri::Builder::default()
        .setup(|app| {
            let result = (|| -> anyhow::Result<()> {
                let config_dir = app
                    .path()
                    .app_config_dir()
                    .map_err(|err| anyhow::anyhow!(err))?;
                let settings = SimulationSettings::load(&config_dir.join("settings.json"))?;
                log_info!(
                    "simulated delays: generation {}ms, chat reply {}ms",
                    settings.generation_delay_ms,
                    settings.reply_delay_ms
                );

                let sink: Arc<dyn EventSink> = Arc::new(TauriEventSink {
                    app_handle: app.handle().clone(),
                });
                app.manage(AppState::new(settings, sink));
                Ok(())
            })();

            result.map_err(|err| err.into())
        })
        .invoke_handler(tauri::generate_handler![
            get_requirements,
            update_requirement,
            reset_requirements,
            generate_design,
            get_generation,
            download_design_report,
            get_chat,
            set_chat_input,
            send_chat_message,
            send_chat_input,
            send_suggested_question,
            get_cost_overview,
            get_compliance_overview,
            get_optimization_suggestions,
            apply_optimizations,
            export_cost_report,
            get_report_overview,
            download_report,
            share_report,
            print_report,
            reset_session,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
