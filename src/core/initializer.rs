use crate::domain::ports::LiftoffSdk;
use crate::utils::error::{AdapterError, Result};
use tokio::sync::Mutex;

/// One-time Liftoff SDK initialization, keyed by app id.
///
/// The lock is held across the SDK call so concurrent requests cannot race
/// into a double initialization.
pub struct Initializer {
    initialized_app_id: Mutex<Option<String>>,
}

impl Initializer {
    pub fn new() -> Self {
        Self {
            initialized_app_id: Mutex::new(None),
        }
    }

    /// Initializes the SDK on first use. Later calls with the same app id are
    /// no-ops; a different app id after initialization is an error.
    pub async fn ensure_initialized<S: LiftoffSdk + ?Sized>(
        &self,
        sdk: &S,
        app_id: &str,
    ) -> Result<()> {
        let mut initialized = self.initialized_app_id.lock().await;
        match initialized.as_deref() {
            Some(current) if current == app_id => Ok(()),
            Some(current) => Err(AdapterError::InitializationFailed {
                message: format!(
                    "SDK already initialized with app id {}, cannot reinitialize with {}",
                    current, app_id
                ),
            }),
            None => {
                tracing::info!(app_id, "initializing Liftoff SDK");
                sdk.initialize(app_id)
                    .await
                    .map_err(|e| AdapterError::InitializationFailed {
                        message: e.to_string(),
                    })?;
                *initialized = Some(app_id.to_string());
                Ok(())
            }
        }
    }
}

impl Default for Initializer {
    fn default() -> Self {
        Self::new()
    }
}
