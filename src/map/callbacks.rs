use crate::core::geo::LatLng;
use crate::input::events::MapEvent;

/// Host callbacks attached to the wrapped map
///
/// The picker dispatches every map notification here after its own
/// handling, whether or not the picker acted on it.
#[derive(Default)]
pub struct MapCallbacks {
    pub on_camera_move_started: Option<Box<dyn FnMut()>>,
    pub on_camera_move: Option<Box<dyn FnMut(LatLng)>>,
    pub on_camera_idle: Option<Box<dyn FnMut()>>,
    pub on_tap: Option<Box<dyn FnMut(LatLng)>>,
    pub on_long_press: Option<Box<dyn FnMut(LatLng)>>,
}

impl MapCallbacks {
    pub fn dispatch(&mut self, event: &MapEvent) {
        match event {
            MapEvent::CameraMoveStarted => {
                if let Some(callback) = self.on_camera_move_started.as_mut() {
                    callback();
                }
            }
            MapEvent::CameraMove { center } => {
                if let Some(callback) = self.on_camera_move.as_mut() {
                    callback(*center);
                }
            }
            MapEvent::CameraIdle { .. } => {
                if let Some(callback) = self.on_camera_idle.as_mut() {
                    callback();
                }
            }
            MapEvent::Tap { position } => {
                if let Some(callback) = self.on_tap.as_mut() {
                    callback(*position);
                }
            }
            MapEvent::LongPress { position } => {
                if let Some(callback) = self.on_long_press.as_mut() {
                    callback(*position);
                }
            }
        }
    }
}

impl std::fmt::Debug for MapCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapCallbacks")
            .field("on_camera_move_started", &self.on_camera_move_started.is_some())
            .field("on_camera_move", &self.on_camera_move.is_some())
            .field("on_camera_idle", &self.on_camera_idle.is_some())
            .field("on_tap", &self.on_tap.is_some())
            .field("on_long_press", &self.on_long_press.is_some())
            .finish()
    }
}
