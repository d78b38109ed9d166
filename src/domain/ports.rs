use crate::domain::model::{AdConfig, LiftoffAdSize};
use crate::utils::error::{AdapterError, Result};
use async_trait::async_trait;

/// Port to the concrete Liftoff Monetize SDK binding.
///
/// The adapter drives initialization and ad loading through this trait; tests
/// substitute a fake.
#[async_trait]
pub trait LiftoffSdk: Send + Sync {
    async fn initialize(&self, app_id: &str) -> Result<()>;

    /// Pushes the COPPA child-directed-treatment flag to the SDK. Called
    /// before initialization on every request.
    fn update_coppa_status(&self, tagged_for_child_directed_treatment: bool);

    async fn load_banner(&self, placement_id: &str, size: LiftoffAdSize) -> Result<()>;

    async fn load_interstitial(&self, placement_id: &str, ad_config: AdConfig) -> Result<()>;
}

/// Ad lifecycle callbacks forwarded to the mediation host.
///
/// All callbacks default to no-ops so hosts only implement the events they
/// care about.
pub trait AdEventHandler: Send + Sync {
    fn on_ad_loaded(&self) {}
    fn on_ad_opened(&self) {}
    fn on_ad_clicked(&self) {}
    fn on_ad_closed(&self) {}
    fn on_ad_left_application(&self) {}
    fn on_ad_failed_to_load(&self, _error: &AdapterError) {}
}
