use crate::error::ConsoleError;
use crate::models::{Appointment, NewAppointment, ReminderRequest};
use async_trait::async_trait;
use reqwest::{header::CACHE_CONTROL, Client, Response};
use serde::{de::DeserializeOwned, Serialize};

pub const APPOINTMENTS_PATH: &str = "/appointments";
pub const SEND_REMINDER_PATH: &str = "/send-reminder";

/// Backend operations the console depends on.
#[async_trait]
pub trait BackendApi: Send + Sync {
    async fn list_appointments(&self) -> Result<Vec<Appointment>, ConsoleError>;
    async fn create_appointment(&self, payload: &NewAppointment) -> Result<(), ConsoleError>;
    async fn send_reminder(&self, payload: &ReminderRequest) -> Result<(), ConsoleError>;
}

/// Talks to the backend through the relay endpoint, passing the backend path
/// in the `path` query parameter.
pub struct RelayClient {
    http: Client,
    relay_url: String,
}

impl RelayClient {
    pub fn new(http: Client, relay_url: impl Into<String>) -> Self {
        RelayClient {
            http,
            relay_url: relay_url.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ConsoleError> {
        let response = self
            .http
            .get(&self.relay_url)
            .query(&[("path", path)])
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?;
        read_json(response).await
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<serde_json::Value, ConsoleError> {
        let response = self
            .http
            .post(&self.relay_url)
            .query(&[("path", path)])
            .json(payload)
            .send()
            .await?;
        read_json(response).await
    }
}

/// Non-2xx responses become `ConsoleError::Status` carrying the body text.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ConsoleError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(ConsoleError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(serde_json::from_str(&body)?)
}

#[async_trait]
impl BackendApi for RelayClient {
    async fn list_appointments(&self) -> Result<Vec<Appointment>, ConsoleError> {
        self.get_json(APPOINTMENTS_PATH).await
    }

    async fn create_appointment(&self, payload: &NewAppointment) -> Result<(), ConsoleError> {
        self.post_json(APPOINTMENTS_PATH, payload).await?;
        Ok(())
    }

    async fn send_reminder(&self, payload: &ReminderRequest) -> Result<(), ConsoleError> {
        self.post_json(SEND_REMINDER_PATH, payload).await?;
        Ok(())
    }
}
