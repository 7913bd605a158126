use egui::{pos2, vec2, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Ui, Vec2};
use pinlet::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Demo location picker application
fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_title("Pinlet - Location Picker Demo"),
        ..Default::default()
    };

    eframe::run_native(
        "pinlet-app",
        options,
        Box::new(|cc| Box::new(PinletApp::new(cc))),
    )?;

    Ok(())
}

/// Web mercator world size in pixels at `zoom`
fn world_size(zoom: f64) -> f64 {
    256.0 * 2_f64.powf(zoom)
}

fn project(at: LatLng, zoom: f64) -> (f64, f64) {
    let size = world_size(zoom);
    let x = (at.lng + 180.0) / 360.0 * size;
    let lat = at.lat.to_radians();
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / std::f64::consts::PI) / 2.0 * size;
    (x, y)
}

fn unproject(x: f64, y: f64, zoom: f64) -> LatLng {
    let size = world_size(zoom);
    let lng = x / size * 360.0 - 180.0;
    let n = std::f64::consts::PI * (1.0 - 2.0 * y / size);
    let lat = n.sinh().atan().to_degrees();
    LatLng::new(lat.clamp(-85.0511, 85.0511), wrap_lng(lng))
}

fn wrap_lng(lng: f64) -> f64 {
    (lng + 180.0).rem_euclid(360.0) - 180.0
}

/// Graticule map that pans with the mouse and reports camera notifications
struct GridMap {
    center: LatLng,
    zoom: f64,
    options: MapOptions,
}

impl GridMap {
    fn new(center: LatLng, zoom: f64) -> Self {
        Self {
            center,
            zoom,
            options: MapOptions::default(),
        }
    }

    fn screen_to_lat_lng(&self, rect: Rect, pos: Pos2) -> LatLng {
        let (cx, cy) = project(self.center, self.zoom);
        let offset = pos - rect.center();
        unproject(cx + offset.x as f64, cy + offset.y as f64, self.zoom)
    }

    fn lat_lng_to_screen(&self, rect: Rect, at: LatLng) -> Pos2 {
        let (cx, cy) = project(self.center, self.zoom);
        let (x, y) = project(at, self.zoom);
        rect.center() + vec2((x - cx) as f32, (y - cy) as f32)
    }

    fn pan_by(&mut self, delta: Vec2) {
        let (cx, cy) = project(self.center, self.zoom);
        self.center = unproject(cx - delta.x as f64, cy - delta.y as f64, self.zoom);
        if let Some(bounds) = self.options.camera_target_bounds {
            self.center = bounds.clamp(self.center);
        }
    }

    fn zoom_by(&mut self, steps: f64) {
        let min = self.options.min_zoom.unwrap_or(1.0);
        let max = self.options.max_zoom.unwrap_or(18.0);
        self.zoom = (self.zoom + steps).clamp(min, max);
    }

    fn paint(&self, ui: &Ui, rect: Rect) {
        let painter = ui.painter_at(rect);
        let background = match self.options.map_type {
            MapType::Satellite | MapType::Hybrid => Color32::from_rgb(38, 52, 44),
            MapType::Terrain => Color32::from_rgb(222, 214, 190),
            MapType::None => Color32::from_gray(250),
            MapType::Normal => Color32::from_rgb(232, 236, 226),
        };
        painter.rect_filled(rect, 0.0, background);

        let step = grid_step(self.zoom);
        let line = Stroke::new(1.0, Color32::from_black_alpha(40));
        let top_left = self.screen_to_lat_lng(rect, rect.left_top());
        let bottom_right = self.screen_to_lat_lng(rect, rect.right_bottom());

        let mut lng = (top_left.lng / step).floor() * step;
        while lng <= bottom_right.lng {
            let x = self.lat_lng_to_screen(rect, LatLng::new(self.center.lat, lng)).x;
            painter.line_segment([pos2(x, rect.top()), pos2(x, rect.bottom())], line);
            lng += step;
        }
        let mut lat = (bottom_right.lat / step).floor() * step;
        while lat <= top_left.lat {
            let y = self.lat_lng_to_screen(rect, LatLng::new(lat, self.center.lng)).y;
            painter.line_segment([pos2(rect.left(), y), pos2(rect.right(), y)], line);
            lat += step;
        }

        for marker in &self.options.markers {
            let pos = self.lat_lng_to_screen(rect, marker.position);
            painter.circle_filled(pos, 5.0, Color32::from_rgb(30, 136, 229));
            if let Some(title) = &marker.title {
                painter.text(
                    pos + vec2(8.0, 0.0),
                    Align2::LEFT_CENTER,
                    title,
                    FontId::proportional(12.0),
                    Color32::from_gray(40),
                );
            }
        }
    }
}

/// Graticule spacing in degrees that keeps lines roughly 100px apart
fn grid_step(zoom: f64) -> f64 {
    let degrees_per_100px = 100.0 * 360.0 / world_size(zoom);
    [0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0, 10.0, 30.0]
        .into_iter()
        .find(|step| *step >= degrees_per_100px)
        .unwrap_or(30.0)
}

impl MapSurface for GridMap {
    fn center(&self) -> LatLng {
        self.center
    }

    fn apply_options(&mut self, options: &MapOptions) {
        if self.options.initial_center != options.initial_center {
            self.center = options.initial_center;
        }
        if self.options.initial_zoom != options.initial_zoom {
            self.zoom = options.initial_zoom;
        }
        self.options = options.clone();
        self.zoom_by(0.0);
    }

    fn show(&mut self, ui: &mut Ui, rect: Rect) -> MapOutput {
        let response = ui.allocate_rect(rect, Sense::click_and_drag());
        let mut events = Vec::new();

        if self.options.scroll_gestures_enabled {
            if response.drag_started() {
                events.push(MapEvent::CameraMoveStarted);
            }
            if response.dragged() {
                let delta = response.drag_delta();
                if delta.length_sq() > 0.0 {
                    self.pan_by(delta);
                    events.push(MapEvent::CameraMove {
                        center: self.center,
                    });
                }
            }
            if response.drag_released() {
                events.push(MapEvent::CameraIdle {
                    center: Some(self.center),
                });
            }
        }

        if self.options.zoom_gestures_enabled && response.hovered() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                self.zoom_by(scroll as f64 / 120.0);
            }
        }

        if let Some(pos) = response.interact_pointer_pos() {
            if response.clicked() {
                events.push(MapEvent::Tap {
                    position: self.screen_to_lat_lng(rect, pos),
                });
            } else if response.secondary_clicked() {
                events.push(MapEvent::LongPress {
                    position: self.screen_to_lat_lng(rect, pos),
                });
            }
        }

        self.paint(ui, rect);
        MapOutput::new(response).with_events(events)
    }
}

/// The main application struct
struct PinletApp {
    picker: LocationPicker<GridMap>,
    controller: PickerController,
    picked: Rc<RefCell<Vec<LatLng>>>,
    advanced: bool,
    elevated: bool,
}

impl PinletApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let center = LatLng::new(37.7749, -122.4194);
        let controller = PickerController::new();
        let picked = Rc::new(RefCell::new(Vec::new()));

        let mut map_options = MapOptions::default();
        map_options.initial_center = center;
        map_options.min_zoom = Some(3.0);
        map_options.markers.push(MapMarker {
            id: "ferry-building".to_string(),
            position: LatLng::new(37.7955, -122.3937),
            title: Some("Ferry Building".to_string()),
        });

        let sink = picked.clone();
        let picker = LocationPicker::new(GridMap::new(center, 13.0))
            .controller(controller.clone())
            .enabled(true)
            .map_options(map_options)
            .on_location_picked(move |at| {
                log::info!("picked {}", at);
                sink.borrow_mut().push(at);
            })
            .on_tap(|at| log::info!("tapped {}", at));

        Self {
            picker,
            controller,
            picked,
            advanced: false,
            elevated: false,
        }
    }

    fn side_panel(&mut self, ui: &mut Ui) {
        ui.heading("Location picker");
        ui.separator();

        ui.horizontal(|ui| {
            if ui.button("Enable").clicked() {
                self.controller.enable();
            }
            if ui.button("Disable").clicked() {
                self.controller.disable();
            }
        });
        ui.label(format!("Picking: {}", self.controller.is_enabled()));
        ui.label(format!("Panning: {}", self.picker.is_panning()));

        ui.separator();
        ui.checkbox(&mut self.advanced, "Explicit pin state");
        ui.add_enabled(
            self.advanced,
            egui::Checkbox::new(&mut self.elevated, "Elevated"),
        );
        let state = self.advanced.then_some(if self.elevated {
            PinState::Elevated
        } else {
            PinState::Idle
        });
        self.picker.set_pin_state(state);

        ui.separator();
        egui::ComboBox::from_label("Map type")
            .selected_text(format!("{:?}", self.picker.map_options_mut().map_type))
            .show_ui(ui, |ui| {
                let map_type = &mut self.picker.map_options_mut().map_type;
                for kind in [MapType::Normal, MapType::Terrain, MapType::Satellite, MapType::None] {
                    ui.selectable_value(map_type, kind, format!("{:?}", kind));
                }
            });

        ui.separator();
        ui.label("Picked locations:");
        egui::ScrollArea::vertical().show(ui, |ui| {
            for at in self.picked.borrow().iter().rev() {
                ui.monospace(at.to_string());
            }
        });
    }
}

impl eframe::App for PinletApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("picker_panel")
            .resizable(true)
            .show(ctx, |ui| self.side_panel(ui));

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(format!("Center: {}", self.picker.last_center()));
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.picker.show(ui);
            });
    }
}
