pub mod params;

pub use params::{CreateAppointmentForm, RelayParams};
