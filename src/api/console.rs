use crate::error::ConsoleError;
use crate::models::{AppState, CreateAppointmentForm};
use crate::services::{AppointmentForm, Console};
use crate::views::render_console;
use axum::{
    extract::{Path, State},
    response::Html,
    Form,
};
use std::sync::Arc;

async fn render(console: &Console) -> Result<Html<String>, ConsoleError> {
    let state = console.snapshot().await;
    Ok(Html(render_console(&state)?))
}

/// Page load: fetch the list, then render.
pub async fn console_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, ConsoleError> {
    state.console.refresh().await;
    render(&state.console).await
}

pub async fn refresh_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ConsoleError> {
    state.console.refresh().await;
    render(&state.console).await
}

pub async fn create_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CreateAppointmentForm>,
) -> Result<Html<String>, ConsoleError> {
    state
        .console
        .update_form(AppointmentForm {
            name: form.name,
            phone: form.phone,
            scheduled_at: form.scheduled_at,
        })
        .await;
    state.console.create().await;
    render(&state.console).await
}

pub async fn send_reminder_handler(
    State(state): State<Arc<AppState>>,
    Path(appointment_id): Path<i64>,
) -> Result<Html<String>, ConsoleError> {
    state.console.send_reminder(appointment_id).await;
    render(&state.console).await
}
