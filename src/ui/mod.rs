pub mod controller;
pub mod picker;
pub mod pin;

pub use controller::PickerController;
pub use picker::{CustomIndicator, IndicatorLayer, LocationPicker};
pub use pin::{
    BounceCurve, PinFrame, PinIndicator, PinMode, PinSignal, PinState, ShadowGeometry,
};
