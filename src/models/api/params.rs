use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RelayParams {
    pub path: Option<String>,
}

/// Fields posted by the console's create form.
#[derive(Debug, Deserialize)]
pub struct CreateAppointmentForm {
    pub name: String,
    pub phone: String,
    pub scheduled_at: String,
}
