// src/models/mod.rs

pub mod api;
pub mod app;
pub mod appointments;

pub use api::{CreateAppointmentForm, RelayParams};
pub use app::AppState;
pub use appointments::{Appointment, NewAppointment, ReminderRequest};
