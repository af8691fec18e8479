//! Test doubles shared by the unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use bookwatch_shared::api::{PollResp, rest::RestError};
use bookwatch_shared::domain::{Record, Ucn};

use crate::notify::{NotificationBackend, NotifyError, Permission};
use crate::source::RecordSource;
use crate::surface::{Surface, Toggle};
use crate::widget::status::Status;
use crate::widget::table::Row;

pub fn record(ucn: u64, name: &str, facility: &str, book_date: &str) -> Record {
    Record {
        ucn: Ucn::from(ucn),
        name: name.to_string(),
        facility: facility.to_string(),
        book_date: book_date.to_string(),
    }
}

/// Serves queued responses in order; an empty queue serves an empty list.
/// With a delay, each fetch takes its response at call time and resolves
/// `delay` later.
#[derive(Default)]
pub struct FakeSource {
    responses: Mutex<VecDeque<Result<PollResp, RestError>>>,
    calls: AtomicUsize,
    delay: Option<Duration>,
}

impl FakeSource {
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn push_ok(&self, records: Vec<Record>) {
        self.responses.lock().unwrap().push_back(Ok(records));
    }

    pub fn push_err(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(RestError::Http(message.to_string())));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordSource for FakeSource {
    async fn fetch(&self) -> Result<PollResp, RestError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        response
    }
}

pub struct FakeBackend {
    permission: Mutex<Permission>,
    fail: bool,
    shown: Mutex<Vec<(String, String)>>,
    requests: AtomicUsize,
}

impl FakeBackend {
    pub fn with_permission(permission: Permission) -> Self {
        Self {
            permission: Mutex::new(permission),
            fail: false,
            shown: Mutex::new(Vec::new()),
            requests: AtomicUsize::new(0),
        }
    }

    pub fn granted() -> Self {
        Self::with_permission(Permission::Granted)
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn shown(&self) -> Vec<(String, String)> {
        self.shown.lock().unwrap().clone()
    }

    pub fn bodies(&self) -> Vec<String> {
        self.shown().into_iter().map(|(_, body)| body).collect()
    }

    pub fn permission_requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NotificationBackend for FakeBackend {
    fn permission(&self) -> Permission {
        *self.permission.lock().unwrap()
    }

    async fn request_permission(&self) -> Permission {
        self.requests.fetch_add(1, Ordering::SeqCst);
        let mut permission = self.permission.lock().unwrap();
        if *permission == Permission::Default {
            *permission = Permission::Granted;
        }
        *permission
    }

    async fn show(&self, title: &str, body: &str) -> Result<(), NotifyError> {
        if self.fail {
            return Err(NotifyError::Backend("no server".into()));
        }
        self.shown
            .lock()
            .unwrap()
            .push((title.to_string(), body.to_string()));
        Ok(())
    }
}

/// Remembers everything the widget rendered.
#[derive(Default)]
pub struct RecordingSurface {
    statuses: Mutex<Vec<Status>>,
    rows: Mutex<Vec<Row>>,
    toggles: Mutex<Vec<Toggle>>,
    interval_enabled: Mutex<Option<bool>>,
    alerts: Mutex<Vec<String>>,
}

impl RecordingSurface {
    pub fn statuses(&self) -> Vec<Status> {
        self.statuses.lock().unwrap().clone()
    }

    pub fn rows(&self) -> Vec<Row> {
        self.rows.lock().unwrap().clone()
    }

    pub fn last_toggle(&self) -> Option<Toggle> {
        self.toggles.lock().unwrap().last().copied()
    }

    pub fn interval_enabled(&self) -> Option<bool> {
        *self.interval_enabled.lock().unwrap()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Surface for RecordingSurface {
    fn show_status(&self, status: &Status) {
        self.statuses.lock().unwrap().push(status.clone());
    }

    fn show_rows(&self, rows: &[Row]) {
        *self.rows.lock().unwrap() = rows.to_vec();
    }

    fn show_toggle(&self, toggle: Toggle) {
        self.toggles.lock().unwrap().push(toggle);
    }

    fn set_interval_enabled(&self, enabled: bool) {
        *self.interval_enabled.lock().unwrap() = Some(enabled);
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}
