pub mod banner;
pub mod banner_size;
pub mod initializer;
pub mod interstitial;

pub use crate::domain::model::{AdConfig, AdFormat, AdSize, LiftoffAdSize, Orientation};
pub use crate::domain::ports::{AdEventHandler, LiftoffSdk};
pub use crate::utils::error::Result;
