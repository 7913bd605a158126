use crate::core::geo::LatLng;

/// Notifications emitted by the wrapped map surface
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// The camera started moving because of a pan gesture
    CameraMoveStarted,
    /// The camera moved; carries the current map center
    CameraMove { center: LatLng },
    /// The camera stopped moving. Surfaces that know the final center report it here.
    CameraIdle { center: Option<LatLng> },
    /// Single tap on the map
    Tap { position: LatLng },
    /// Long press on the map
    LongPress { position: LatLng },
}

impl MapEvent {
    /// Gets the map center carried by this event, if any
    pub fn center(&self) -> Option<LatLng> {
        match self {
            MapEvent::CameraMove { center } => Some(*center),
            MapEvent::CameraIdle { center } => *center,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_center() {
        let center = LatLng::new(37.7749, -122.4194);
        assert_eq!(MapEvent::CameraMove { center }.center(), Some(center));
        assert_eq!(
            MapEvent::CameraIdle {
                center: Some(center)
            }
            .center(),
            Some(center)
        );
        assert_eq!(MapEvent::CameraIdle { center: None }.center(), None);
        assert_eq!(MapEvent::Tap { position: center }.center(), None);
    }
}
