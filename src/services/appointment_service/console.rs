use crate::error::ConsoleError;
use crate::models::{Appointment, NewAppointment, ReminderRequest};
use crate::services::appointment_service::client::BackendApi;
use crate::utils::{default_schedule_input, local_input_to_utc};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tokio::sync::RwLock;
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentForm {
    pub name: String,
    pub phone: String,
    /// `datetime-local` value, no timezone.
    pub scheduled_at: String,
}

impl Default for AppointmentForm {
    fn default() -> Self {
        AppointmentForm {
            name: "Taro".to_string(),
            phone: "+81".to_string(),
            scheduled_at: default_schedule_input(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConsoleState {
    pub appointments: Vec<Appointment>,
    pub form: AppointmentForm,
    pub error: Option<String>,
    pub busy: bool,
}

impl ConsoleState {
    /// Appointments soonest first. Recomputed on every call.
    pub fn sorted(&self) -> Vec<Appointment> {
        let mut sorted = self.appointments.clone();
        sorted.sort_by(|a, b| a.scheduled_at.cmp(&b.scheduled_at));
        sorted
    }

    pub fn reminder_enabled(&self, appointment: &Appointment) -> bool {
        !self.busy && !appointment.is_opted_out()
    }
}

/// In-memory console state plus the backend it mutates through.
///
/// The lock is held only for state transitions, never across a backend call,
/// so a render during an operation observes `busy`.
pub struct Console {
    backend: Arc<dyn BackendApi>,
    state: RwLock<ConsoleState>,
    // Kept outside the lock so `BusyGuard` can reset it synchronously.
    busy: AtomicBool,
}

/// Clears the busy flag when dropped, including when the operation's future
/// is cancelled mid-flight.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Console {
    pub fn new(backend: Arc<dyn BackendApi>) -> Self {
        Console {
            backend,
            state: RwLock::new(ConsoleState::default()),
            busy: AtomicBool::new(false),
        }
    }

    pub async fn snapshot(&self) -> ConsoleState {
        let mut snapshot = self.state.read().await.clone();
        snapshot.busy = self.busy.load(Ordering::Acquire);
        snapshot
    }

    pub async fn update_form(&self, form: AppointmentForm) {
        self.state.write().await.form = form;
    }

    /// Replaces the list wholesale; on failure the previous list stays.
    pub async fn refresh(&self) {
        self.state.write().await.error = None;
        match self.backend.list_appointments().await {
            Ok(appointments) => self.state.write().await.appointments = appointments,
            Err(e) => self.fail("refresh", e).await,
        }
    }

    pub async fn create(&self) {
        let Some((_guard, form)) = self.begin().await else {
            return;
        };

        match self.submit_create(&form).await {
            Ok(()) => self.refresh().await,
            Err(e) => self.fail("create", e).await,
        }
    }

    pub async fn send_reminder(&self, appointment_id: i64) {
        let Some((_guard, _)) = self.begin().await else {
            return;
        };

        let payload = ReminderRequest { appointment_id };
        match self.backend.send_reminder(&payload).await {
            Ok(()) => self.refresh().await,
            Err(e) => self.fail("send_reminder", e).await,
        }
    }

    async fn submit_create(&self, form: &AppointmentForm) -> Result<(), ConsoleError> {
        let payload = NewAppointment {
            customer_name: form.name.clone(),
            phone_e164: form.phone.clone(),
            scheduled_at: local_input_to_utc(&form.scheduled_at)?,
        };
        self.backend.create_appointment(&payload).await
    }

    /// Marks the console busy and returns the guard with the current form,
    /// or `None` when another operation already holds the flag.
    async fn begin(&self) -> Option<(BusyGuard<'_>, AppointmentForm)> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return None;
        }
        let guard = BusyGuard(&self.busy);

        let mut state = self.state.write().await;
        state.error = None;
        Some((guard, state.form.clone()))
    }

    async fn fail(&self, operation: &str, error: ConsoleError) {
        warn!(operation, error = %error, "console operation failed");
        self.state.write().await.error = Some(error.to_string());
    }
}
