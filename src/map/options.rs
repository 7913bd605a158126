//! Pass-through map configuration
//!
//! The picker never interprets these options; it hands them to the wrapped
//! surface unchanged. The struct, its defaults and the field list are all
//! generated from the single table in the `map_options!` invocation below.

use crate::core::geo::{LatLng, LatLngBounds};
use egui::Color32;
use serde::{Deserialize, Serialize};

/// Base map flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MapType {
    None,
    Normal,
    Satellite,
    Terrain,
    Hybrid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub id: String,
    pub position: LatLng,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPolygon {
    pub id: String,
    pub points: Vec<LatLng>,
    pub fill_color: Color32,
    pub stroke_color: Color32,
    pub stroke_width: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPolyline {
    pub id: String,
    pub points: Vec<LatLng>,
    pub color: Color32,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapCircle {
    pub id: String,
    pub center: LatLng,
    pub radius_meters: f64,
    pub fill_color: Color32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileOverlay {
    pub id: String,
    pub url_template: String,
    pub z_index: i32,
    pub transparency: f32,
}

macro_rules! map_options {
    ($( $(#[$meta:meta])* $field:ident : $ty:ty = $default:expr, )*) => {
        /// Configuration forwarded verbatim to the wrapped map surface
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct MapOptions {
            $( $(#[$meta])* pub $field: $ty, )*
        }

        impl Default for MapOptions {
            fn default() -> Self {
                Self {
                    $( $field: $default, )*
                }
            }
        }

        impl MapOptions {
            /// Every forwarded field, in table order
            pub const FIELD_NAMES: &'static [&'static str] = &[$( stringify!($field) ),*];

            /// Names of the fields whose values differ from `other`
            pub fn changed_fields(&self, other: &MapOptions) -> Vec<&'static str> {
                let mut changed = Vec::new();
                $(
                    if self.$field != other.$field {
                        changed.push(stringify!($field));
                    }
                )*
                changed
            }
        }
    };
}

map_options! {
    /// Camera center before any gesture
    initial_center: LatLng = LatLng::new(37.7749, -122.4194),
    initial_zoom: f64 = 12.0,
    map_type: MapType = MapType::Normal,
    min_zoom: Option<f64> = None,
    max_zoom: Option<f64> = None,
    /// Limits where the camera target may go
    camera_target_bounds: Option<LatLngBounds> = None,
    compass_enabled: bool = true,
    map_toolbar_enabled: bool = true,
    rotate_gestures_enabled: bool = true,
    scroll_gestures_enabled: bool = true,
    zoom_controls_enabled: bool = true,
    zoom_gestures_enabled: bool = true,
    tilt_gestures_enabled: bool = true,
    lite_mode_enabled: bool = false,
    my_location_enabled: bool = false,
    my_location_button_enabled: bool = true,
    indoor_view_enabled: bool = false,
    traffic_enabled: bool = false,
    buildings_enabled: bool = true,
    /// Left, top, right, bottom
    padding: [f32; 4] = [0.0; 4],
    /// Custom style document understood by the surface
    style: Option<String> = None,
    markers: Vec<MapMarker> = Vec::new(),
    polygons: Vec<MapPolygon> = Vec::new(),
    polylines: Vec<MapPolyline> = Vec::new(),
    circles: Vec<MapCircle> = Vec::new(),
    tile_overlays: Vec<TileOverlay> = Vec::new(),
}
