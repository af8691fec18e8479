//! The poller widget: interval field, Go/Stop toggle, status label and a
//! result table fed by a repeating poll of the record source.

pub mod interval;
pub mod seen;
pub mod status;
pub mod table;
pub mod timer;

use std::sync::{Arc, Weak};

use bookwatch_shared::domain::{Record, Ucn};
use chrono::Local;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::notify::{NotificationBackend, Notifier};
use crate::source::RecordSource;
use crate::surface::{Surface, Toggle};
use interval::{IntervalError, resolve_interval};
use seen::SeenSet;
use status::Status;
use table::{ResultTable, Row, RowId};
use timer::PollTimer;

/// Result of activating the Go/Stop control.
#[derive(Debug)]
pub enum Toggled {
    /// Polling started; the handle tracks the immediate, notification-free poll.
    Started(JoinHandle<PollOutcome>),
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    Updated { received: usize, fresh: usize },
    Failed,
}

/// The timer exists exactly while `running` is set.
#[derive(Debug, Default)]
struct RunState {
    running: bool,
    timer: PollTimer,
}

#[derive(Debug)]
struct WidgetState {
    interval_input: Option<String>,
    interval_enabled: bool,
    run: RunState,
    seen: SeenSet,
    table: ResultTable,
    status: Status,
}

struct Inner {
    state: Mutex<WidgetState>,
    source: Arc<dyn RecordSource>,
    notifier: Notifier,
    surface: Arc<dyn Surface>,
}

/// Handle to the widget; clones share the same state.
#[derive(Clone)]
pub struct Widget {
    inner: Arc<Inner>,
}

impl Widget {
    /// Build the widget and request notification permission in the
    /// background. Must be called inside a tokio runtime.
    pub fn new(
        source: Arc<dyn RecordSource>,
        backend: Arc<dyn NotificationBackend>,
        surface: Arc<dyn Surface>,
    ) -> Self {
        let notifier = Notifier::new(backend, surface.clone());
        notifier.request_permission();

        surface.show_toggle(Toggle::Go);
        surface.set_interval_enabled(true);
        surface.show_status(&Status::Idle);

        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(WidgetState {
                    interval_input: None,
                    interval_enabled: true,
                    run: RunState::default(),
                    seen: SeenSet::new(),
                    table: ResultTable::new(),
                    status: Status::Idle,
                }),
                source,
                notifier,
                surface,
            }),
        }
    }

    /// Edit the interval field. Ignored (returns false) while the field is
    /// disabled during a run.
    pub async fn set_interval_input(&self, raw: Option<String>) -> bool {
        let mut st = self.inner.state.lock().await;
        if !st.interval_enabled {
            debug!("interval input is disabled while polling");
            return false;
        }
        st.interval_input = raw;
        true
    }

    /// Go/Stop activation.
    pub async fn on_toggle(&self) -> Result<Toggled, IntervalError> {
        let mut st = self.inner.state.lock().await;
        if st.run.running {
            st.run.timer.stop();
            st.run.running = false;
            st.interval_enabled = true;
            self.inner.surface.show_toggle(Toggle::Go);
            self.inner.surface.set_interval_enabled(true);
            info!("polling stopped");
            return Ok(Toggled::Stopped);
        }

        let resolved = resolve_interval(st.interval_input.as_deref());
        let period = match resolved {
            Ok(p) => p,
            Err(e) => {
                drop(st);
                warn!(error=%e, "refusing to start polling");
                self.inner.surface.alert(&e.to_string());
                return Err(e);
            }
        };

        let weak = Arc::downgrade(&self.inner);
        st.run.timer.start(period, move || tick(weak.clone()));
        st.run.running = true;
        st.interval_enabled = false;
        self.inner.surface.show_toggle(Toggle::Stop);
        self.inner.surface.set_interval_enabled(false);
        drop(st);
        info!(?period, "polling started");

        let widget = self.clone();
        Ok(Toggled::Started(tokio::spawn(
            async move { widget.poll(true).await },
        )))
    }

    /// Remove every result row. Seen UCNs stay seen.
    pub async fn on_clear(&self) {
        let mut st = self.inner.state.lock().await;
        st.table.clear();
        self.inner.surface.show_rows(st.table.rows());
        debug!("results cleared");
    }

    /// Remove control of a single row.
    pub async fn on_row_remove(&self, id: RowId) -> bool {
        let mut st = self.inner.state.lock().await;
        let removed = st.table.remove_row(id);
        if removed {
            self.inner.surface.show_rows(st.table.rows());
        }
        removed
    }

    /// One fetch-and-render cycle. `first_run` records every UCN without
    /// notifying.
    pub async fn poll(&self, first_run: bool) -> PollOutcome {
        self.set_status(Status::Updating).await;

        let records = match self.inner.source.fetch().await {
            Ok(records) => records,
            Err(e) => {
                warn!(error=%e, "poll failed");
                self.set_status(Status::Failed(Local::now())).await;
                return PollOutcome::Failed;
            }
        };
        let received = records.len();

        // Dedup and SeenSet growth happen under one lock so overlapping polls
        // cannot both treat the same UCN as new.
        let fresh: Vec<Record> = {
            let mut st = self.inner.state.lock().await;
            let mut fresh = Vec::new();
            for record in records {
                let is_new = st.seen.insert(record.ucn.clone());
                if is_new && !first_run {
                    fresh.push(record);
                }
            }
            fresh
        };

        for record in &fresh {
            self.inner.notifier.notify(&record.text()).await;
            let mut st = self.inner.state.lock().await;
            let id = st.table.add_result(record.clone());
            self.inner.surface.show_rows(st.table.rows());
            debug!(ucn=%record.ucn, row=%id, "new record");
        }

        self.set_status(Status::Polled(Local::now())).await;
        info!(received, fresh = fresh.len(), first_run, "poll complete");
        PollOutcome::Updated {
            received,
            fresh: fresh.len(),
        }
    }

    /// Stop the timer if it is running.
    pub async fn shutdown(&self) {
        let mut st = self.inner.state.lock().await;
        if st.run.running {
            st.run.timer.stop();
            st.run.running = false;
            info!("polling stopped on shutdown");
        }
    }

    pub async fn is_running(&self) -> bool {
        let st = self.inner.state.lock().await;
        debug_assert_eq!(st.run.running, st.run.timer.is_active());
        st.run.running
    }

    pub async fn interval_enabled(&self) -> bool {
        self.inner.state.lock().await.interval_enabled
    }

    pub async fn interval_input(&self) -> Option<String> {
        self.inner.state.lock().await.interval_input.clone()
    }

    pub async fn has_seen(&self, ucn: &Ucn) -> bool {
        self.inner.state.lock().await.seen.contains(ucn)
    }

    pub async fn seen_count(&self) -> usize {
        self.inner.state.lock().await.seen.len()
    }

    pub async fn rows(&self) -> Vec<Row> {
        self.inner.state.lock().await.table.rows().to_vec()
    }

    pub async fn status(&self) -> Status {
        self.inner.state.lock().await.status.clone()
    }

    async fn set_status(&self, status: Status) {
        let mut st = self.inner.state.lock().await;
        self.inner.surface.show_status(&status);
        st.status = status;
    }
}

async fn tick(inner: Weak<Inner>) {
    if let Some(inner) = inner.upgrade() {
        Widget { inner }.poll(false).await;
    }
}
