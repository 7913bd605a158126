//! The seam between the picker overlay and the map it wraps
//!
//! The map itself (tiles, projection, gesture recognition) lives outside this
//! crate. Anything that can draw itself into a rect and report camera
//! notifications can be wrapped by [`crate::ui::picker::LocationPicker`].

pub mod callbacks;
pub mod options;

pub use callbacks::MapCallbacks;
pub use options::{MapCircle, MapMarker, MapOptions, MapPolygon, MapPolyline, MapType, TileOverlay};

use crate::core::geo::LatLng;
use crate::input::events::MapEvent;
use egui::{Rect, Response, Ui};

/// A pannable map widget that the picker can wrap
pub trait MapSurface {
    /// Current camera center
    fn center(&self) -> LatLng;

    /// Receive the host's pass-through options, unmodified
    fn apply_options(&mut self, options: &MapOptions);

    /// Draw the map into `rect` and report this frame's notifications in order
    fn show(&mut self, ui: &mut Ui, rect: Rect) -> MapOutput;
}

/// What a map surface produced during one frame
pub struct MapOutput {
    pub response: Response,
    pub events: Vec<MapEvent>,
}

impl MapOutput {
    pub fn new(response: Response) -> Self {
        Self {
            response,
            events: Vec::new(),
        }
    }

    pub fn with_events(mut self, events: Vec<MapEvent>) -> Self {
        self.events = events;
        self
    }
}
