use std::sync::Mutex;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::notify::{NotificationBackend, NotifyError, Permission};

const APP_NAME: &str = "bookwatch";

/// notify-rust backed notifications. Permission is granted once the
/// notification server answers a capability query.
#[derive(Debug)]
pub struct DesktopBackend {
    permission: Mutex<Permission>,
}

impl Default for DesktopBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopBackend {
    pub fn new() -> Self {
        debug!("desktop notification backend created");
        Self {
            permission: Mutex::new(Permission::Default),
        }
    }

    fn set_permission(&self, permission: Permission) {
        *self.permission.lock().unwrap_or_else(|e| e.into_inner()) = permission;
    }
}

#[async_trait]
impl NotificationBackend for DesktopBackend {
    fn permission(&self) -> Permission {
        *self.permission.lock().unwrap_or_else(|e| e.into_inner())
    }

    async fn request_permission(&self) -> Permission {
        let permission = query_server().await;
        self.set_permission(permission);
        permission
    }

    async fn show(&self, title: &str, body: &str) -> Result<(), NotifyError> {
        debug!(summary = %title, "show: building notification");
        show_notification(title, body).await
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
async fn show_notification(title: &str, body: &str) -> Result<(), NotifyError> {
    notify_rust::Notification::new()
        .appname(APP_NAME)
        .summary(title)
        .body(body)
        .show_async()
        .await
        .map(|_| ())
        .map_err(|e| NotifyError::Backend(e.to_string()))
}

#[cfg(target_os = "macos")]
async fn show_notification(title: &str, body: &str) -> Result<(), NotifyError> {
    let (title, body) = (title.to_string(), body.to_string());
    tokio::task::spawn_blocking(move || {
        notify_rust::Notification::new()
            .appname(APP_NAME)
            .summary(&title)
            .body(&body)
            .show()
            .map(|_| ())
            .map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| NotifyError::Backend(e.to_string()))?
    .map_err(NotifyError::Backend)
}

#[cfg(all(unix, not(target_os = "macos")))]
async fn query_server() -> Permission {
    let res = tokio::task::spawn_blocking(|| {
        notify_rust::get_server_information()
            .map(|info| format!("{} {} ({})", info.name, info.version, info.vendor))
            .map_err(|e| e.to_string())
    })
    .await;
    match res {
        Ok(Ok(server)) => {
            debug!(%server, "notification server found");
            Permission::Granted
        }
        Ok(Err(e)) => {
            warn!(error=%e, "no notification server; new records will be alerted");
            Permission::Unsupported
        }
        Err(e) => {
            warn!(error=%e, "notification server query failed");
            Permission::Unsupported
        }
    }
}

#[cfg(target_os = "macos")]
async fn query_server() -> Permission {
    Permission::Granted
}
