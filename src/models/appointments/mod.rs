pub mod appointment;

pub use appointment::{Appointment, NewAppointment, ReminderRequest, STATUS_OPT_OUT};
