pub mod appointment_service;

pub use appointment_service::{
    AppointmentForm, BackendApi, Console, ConsoleState, RelayClient,
};
