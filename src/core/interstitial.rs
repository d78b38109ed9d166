use crate::config::InterstitialAdRequest;
use crate::core::initializer::Initializer;
use crate::domain::model::{AdConfig, AdFormat};
use crate::domain::ports::{AdEventHandler, LiftoffSdk};
use crate::utils::error::{AdapterError, Result};

/// An interstitial ad loaded through the Liftoff SDK.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedInterstitialAd {
    pub placement_id: String,
    pub ad_config: AdConfig,
}

pub struct InterstitialAdapter<S: LiftoffSdk> {
    sdk: S,
    initializer: Initializer,
}

impl<S: LiftoffSdk> InterstitialAdapter<S> {
    pub fn new(sdk: S) -> Self {
        Self {
            sdk,
            initializer: Initializer::new(),
        }
    }

    pub fn sdk(&self) -> &S {
        &self.sdk
    }

    /// Validates the request, builds the ad configuration from mediation
    /// extras, initializes the SDK if needed and loads the interstitial.
    /// Failures are forwarded to the event handler before being returned.
    pub async fn request_interstitial_ad(
        &self,
        request: &InterstitialAdRequest,
        events: &dyn AdEventHandler,
    ) -> Result<LoadedInterstitialAd> {
        let placement = request
            .server_parameters
            .resolve(AdFormat::Interstitial)
            .map_err(|e| fail(events, e))?;

        self.sdk
            .update_coppa_status(request.tagged_for_child_directed_treatment);

        let ad_config = AdConfig {
            orientation: request.mediation_extras.orientation(),
        };
        tracing::debug!(
            placement_id = %placement.placement_id,
            orientation = ?ad_config.orientation,
            "requesting interstitial ad"
        );

        self.initializer
            .ensure_initialized(&self.sdk, &placement.app_id)
            .await
            .map_err(|e| fail(events, e))?;

        self.sdk
            .load_interstitial(&placement.placement_id, ad_config)
            .await
            .map_err(|e| fail(events, e))?;

        events.on_ad_loaded();
        Ok(LoadedInterstitialAd {
            placement_id: placement.placement_id,
            ad_config,
        })
    }
}

fn fail(events: &dyn AdEventHandler, error: AdapterError) -> AdapterError {
    tracing::warn!("{}", error);
    events.on_ad_failed_to_load(&error);
    error
}
