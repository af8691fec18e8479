use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::surface::Surface;

pub const NOTIFICATION_TITLE: &str = "New Record Found!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Not asked yet, or the answer is still pending.
    Default,
    Granted,
    Denied,
    /// The platform has no notification capability.
    Unsupported,
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification backend: {0}")]
    Backend(String),
}

/// Platform desktop notification capability.
#[async_trait]
pub trait NotificationBackend: Send + Sync {
    fn permission(&self) -> Permission;
    async fn request_permission(&self) -> Permission;
    async fn show(&self, title: &str, body: &str) -> Result<(), NotifyError>;
}

/// How a notification reached the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Desktop,
    Alert,
}

/// Desktop notifications with a blocking-alert fallback.
pub struct Notifier {
    backend: Arc<dyn NotificationBackend>,
    surface: Arc<dyn Surface>,
}

impl Notifier {
    pub fn new(backend: Arc<dyn NotificationBackend>, surface: Arc<dyn Surface>) -> Self {
        Self { backend, surface }
    }

    /// Ask for permission in the background; callers do not wait for the answer.
    pub fn request_permission(&self) {
        let backend = self.backend.clone();
        tokio::spawn(async move {
            let permission = backend.request_permission().await;
            info!(?permission, "notification permission resolved");
        });
    }

    pub async fn notify(&self, text: &str) -> Delivery {
        let permission = self.backend.permission();
        if permission != Permission::Granted {
            debug!(?permission, "desktop notifications unavailable; alerting");
            self.surface.alert(text);
            return Delivery::Alert;
        }
        match self.backend.show(NOTIFICATION_TITLE, text).await {
            Ok(()) => Delivery::Desktop,
            Err(e) => {
                warn!(error=%e, "desktop notification failed; alerting instead");
                self.surface.alert(text);
                Delivery::Alert
            }
        }
    }
}
