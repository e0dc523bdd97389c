pub mod client;
pub mod console;

pub use client::{BackendApi, RelayClient};
pub use console::{AppointmentForm, Console, ConsoleState};
