use crate::domain::model::{AdFormat, AdSize, Orientation};
use crate::utils::error::{AdapterError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_required_field, Validate};
use serde::{Deserialize, Serialize};

/// Bundle key for the Liftoff application id.
pub const KEY_APP_ID: &str = "appid";
/// Bundle key for the Liftoff placement id.
pub const KEY_PLACEMENT_ID: &str = "placementID";
/// Mediation-extras key for the interstitial orientation code.
pub const KEY_ORIENTATION: &str = "adOrientation";

/// Server parameters configured for an ad source instance in the mediation
/// host's UI, delivered to the adapter as a key-value bundle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerParameters {
    #[serde(default, rename = "appid")]
    pub app_id: Option<String>,
    #[serde(default, rename = "placementID")]
    pub placement_id: Option<String>,
}

impl ServerParameters {
    pub fn new(app_id: impl Into<String>, placement_id: impl Into<String>) -> Self {
        Self {
            app_id: Some(app_id.into()),
            placement_id: Some(placement_id.into()),
        }
    }

    /// Parses the host-supplied bundle. Unknown keys are ignored.
    pub fn from_bundle(bundle: &serde_json::Value) -> Result<Self> {
        let parameters = serde_json::from_value(bundle.clone())?;
        Ok(parameters)
    }

    /// Validates both ids and produces the placement configuration used to
    /// drive the request, with a host-facing message on failure.
    pub fn resolve(&self, format: AdFormat) -> Result<PlacementConfig> {
        let app_id = required(KEY_APP_ID, &self.app_id)
            .map_err(|_| waterfall_error(format, "App ID"))?;
        let placement_id = required(KEY_PLACEMENT_ID, &self.placement_id)
            .map_err(|_| waterfall_error(format, "Placement ID"))?;

        Ok(PlacementConfig {
            app_id: app_id.to_string(),
            placement_id: placement_id.to_string(),
        })
    }
}

impl Validate for ServerParameters {
    fn validate(&self) -> Result<()> {
        required(KEY_APP_ID, &self.app_id)?;
        required(KEY_PLACEMENT_ID, &self.placement_id)?;
        Ok(())
    }
}

fn required<'a>(field_name: &str, value: &'a Option<String>) -> Result<&'a str> {
    let value = validate_required_field(field_name, value)?;
    validate_non_empty_string(field_name, value)?;
    Ok(value)
}

fn waterfall_error(format: AdFormat, what: &str) -> AdapterError {
    AdapterError::InvalidServerParameters {
        message: format!(
            "Failed to load waterfall {} ad from Liftoff Monetize. \
             Missing or invalid {} configured for this ad source instance \
             in the mediation UI.",
            format, what
        ),
    }
}

/// Validated (app id, placement id) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementConfig {
    pub app_id: String,
    pub placement_id: String,
}

/// Network-specific extras the host may attach to a request.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MediationExtras {
    #[serde(default, rename = "adOrientation")]
    pub ad_orientation: Option<i32>,
}

impl MediationExtras {
    pub fn from_bundle(bundle: &serde_json::Value) -> Result<Self> {
        let extras = serde_json::from_value(bundle.clone())?;
        Ok(extras)
    }

    pub fn orientation(&self) -> Orientation {
        self.ad_orientation
            .map(Orientation::from_code)
            .unwrap_or_default()
    }
}

/// A banner ad request from the mediation host.
#[derive(Debug, Clone)]
pub struct BannerAdRequest {
    pub server_parameters: ServerParameters,
    pub requested_size: AdSize,
    pub tagged_for_child_directed_treatment: bool,
}

/// An interstitial ad request from the mediation host.
#[derive(Debug, Clone)]
pub struct InterstitialAdRequest {
    pub server_parameters: ServerParameters,
    pub mediation_extras: MediationExtras,
    pub tagged_for_child_directed_treatment: bool,
}
