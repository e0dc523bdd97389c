use serde::{Deserialize, Serialize};

// Status tags issued by the backend. The field itself stays an open string;
// only `opt_out` changes console behaviour.
pub const STATUS_SCHEDULED: &str = "scheduled";
pub const STATUS_REMINDED: &str = "reminded";
pub const STATUS_CONFIRMED: &str = "confirmed";
pub const STATUS_RESCHEDULE: &str = "reschedule";
pub const STATUS_OPT_OUT: &str = "opt_out";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub customer_name: String,
    pub phone_e164: String,
    /// ISO 8601; sorting compares the raw string.
    pub scheduled_at: String,
    pub status: String,
    #[serde(default)]
    pub last_inbound_text: Option<String>,
    #[serde(default)]
    pub updated_at: String,
}

impl Appointment {
    pub fn is_opted_out(&self) -> bool {
        self.status == STATUS_OPT_OUT
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub customer_name: String,
    pub phone_e164: String,
    pub scheduled_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderRequest {
    pub appointment_id: i64,
}
