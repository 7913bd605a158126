pub mod config;
pub mod constants;
pub mod geo;

pub use config::{PickerOptions, PinAppearance};
pub use geo::{LatLng, LatLngBounds};
