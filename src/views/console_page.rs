use crate::error::ConsoleError;
use crate::services::ConsoleState;
use crate::utils::display_schedule;
use serde::Serialize;
use tera::{Context, Tera};

const CONSOLE_TEMPLATE: &str = include_str!("../../templates/console.html");

#[derive(Serialize)]
struct FormView<'a> {
    name: &'a str,
    phone: &'a str,
    scheduled_at: &'a str,
}

#[derive(Serialize)]
struct RowView {
    id: i64,
    customer_name: String,
    phone_e164: String,
    scheduled: String,
    status: String,
    last_reply: String,
    reminder_enabled: bool,
}

#[derive(Serialize)]
struct PageView<'a> {
    form: FormView<'a>,
    error: Option<&'a str>,
    busy: bool,
    rows: Vec<RowView>,
}

pub fn render_console(state: &ConsoleState) -> Result<String, ConsoleError> {
    let rows = state
        .sorted()
        .into_iter()
        .map(|appointment| RowView {
            reminder_enabled: state.reminder_enabled(&appointment),
            scheduled: display_schedule(&appointment.scheduled_at),
            last_reply: appointment
                .last_inbound_text
                .unwrap_or_else(|| "-".to_string()),
            id: appointment.id,
            customer_name: appointment.customer_name,
            phone_e164: appointment.phone_e164,
            status: appointment.status,
        })
        .collect();

    let view = PageView {
        form: FormView {
            name: &state.form.name,
            phone: &state.form.phone,
            scheduled_at: &state.form.scheduled_at,
        },
        error: state.error.as_deref(),
        busy: state.busy,
        rows,
    };

    let context = Context::from_serialize(&view)?;
    Ok(Tera::one_off(CONSOLE_TEMPLATE, &context, true)?)
}
