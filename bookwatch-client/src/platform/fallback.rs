use async_trait::async_trait;
use tracing::info;

use crate::notify::{NotificationBackend, NotifyError, Permission};

/// Backend for platforms without desktop notifications; every record ends up
/// in the alert fallback.
#[derive(Debug, Default)]
pub struct AlertOnlyBackend;

#[async_trait]
impl NotificationBackend for AlertOnlyBackend {
    fn permission(&self) -> Permission {
        Permission::Unsupported
    }

    async fn request_permission(&self) -> Permission {
        info!("desktop notifications unsupported; records will be alerted");
        Permission::Unsupported
    }

    async fn show(&self, _title: &str, _body: &str) -> Result<(), NotifyError> {
        Err(NotifyError::Backend(
            "desktop notifications are not supported on this platform".into(),
        ))
    }
}
