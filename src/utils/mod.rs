pub mod time_utils;

pub use time_utils::{default_schedule_input, display_schedule, local_input_to_utc};
