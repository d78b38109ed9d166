use crate::config::BannerAdRequest;
use crate::core::banner_size::liftoff_banner_size_for;
use crate::core::initializer::Initializer;
use crate::domain::model::{AdFormat, LiftoffAdSize};
use crate::domain::ports::{AdEventHandler, LiftoffSdk};
use crate::utils::error::{AdapterError, Result};

/// A banner ad loaded through the Liftoff SDK, ready for the host to attach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedBannerAd {
    pub placement_id: String,
    pub size: LiftoffAdSize,
}

pub struct BannerAdapter<S: LiftoffSdk> {
    sdk: S,
    initializer: Initializer,
}

impl<S: LiftoffSdk> BannerAdapter<S> {
    pub fn new(sdk: S) -> Self {
        Self {
            sdk,
            initializer: Initializer::new(),
        }
    }

    pub fn sdk(&self) -> &S {
        &self.sdk
    }

    /// Validates the request, resolves the Liftoff banner size, initializes
    /// the SDK if needed and loads the banner. Failures are forwarded to the
    /// event handler before being returned.
    pub async fn request_banner_ad(
        &self,
        request: &BannerAdRequest,
        events: &dyn AdEventHandler,
    ) -> Result<LoadedBannerAd> {
        let placement = request
            .server_parameters
            .resolve(AdFormat::Banner)
            .map_err(|e| fail(events, e))?;

        self.sdk
            .update_coppa_status(request.tagged_for_child_directed_treatment);

        let size = liftoff_banner_size_for(request.requested_size, &placement.placement_id);
        tracing::debug!(
            placement_id = %placement.placement_id,
            size = %size,
            "requesting banner ad"
        );

        self.initializer
            .ensure_initialized(&self.sdk, &placement.app_id)
            .await
            .map_err(|e| fail(events, e))?;

        self.sdk
            .load_banner(&placement.placement_id, size)
            .await
            .map_err(|e| fail(events, e))?;

        events.on_ad_loaded();
        Ok(LoadedBannerAd {
            placement_id: placement.placement_id,
            size,
        })
    }
}

fn fail(events: &dyn AdEventHandler, error: AdapterError) -> AdapterError {
    tracing::warn!("{}", error);
    events.on_ad_failed_to_load(&error);
    error
}
