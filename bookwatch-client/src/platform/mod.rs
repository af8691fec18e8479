#[cfg(not(target_os = "windows"))]
pub mod desktop;
pub mod fallback;

use std::sync::Arc;

use crate::notify::NotificationBackend;

/// Notification backend for the current platform.
pub fn default_backend() -> Arc<dyn NotificationBackend> {
    #[cfg(not(target_os = "windows"))]
    {
        Arc::new(desktop::DesktopBackend::new())
    }
    #[cfg(target_os = "windows")]
    {
        tracing::info!("desktop notifications not available on windows; using alerts");
        Arc::new(fallback::AlertOnlyBackend)
    }
}
