pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{
    BannerAdRequest, InterstitialAdRequest, MediationExtras, PlacementConfig, ServerParameters,
};
pub use crate::core::banner::{BannerAdapter, LoadedBannerAd};
pub use crate::core::banner_size::liftoff_banner_size_for;
pub use crate::core::interstitial::{InterstitialAdapter, LoadedInterstitialAd};
pub use crate::domain::model::{AdConfig, AdFormat, AdSize, LiftoffAdSize, Orientation};
pub use crate::domain::ports::{AdEventHandler, LiftoffSdk};
pub use crate::utils::error::{AdapterError, Result};
