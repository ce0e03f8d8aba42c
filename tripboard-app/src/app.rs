//! Main application structure for Tripboard.
//!
//! Implements `eframe::App` for the dashboard: the panel grid in the central
//! area, its splitter handles, and the control bar at the bottom. All layout
//! decisions are delegated to `tripboard_core`; this module only turns them
//! into egui calls.

use crate::content::{CalendarView, MapView, TravelView, WeatherView};
use eframe::egui;
use tripboard_core::storage::FileStorage;
use tripboard_core::{
    compute_geometry, Bounds, Config, ContentKind, DragAxis, DragController, DragOutcome,
    LayoutState, LayoutStore, PanelId, PanelMode,
};
use tripboard_panel_api::ContentView;

/// Gap between panels and around the grid, in points
const PANEL_GAP: f32 = 4.0;
const HEADER_HEIGHT: f32 = 24.0;

/// Main Tripboard application state
pub struct Dashboard {
    /// Layout of the panel grid
    layout: LayoutState,
    /// Splitter gesture in progress
    drag: DragController,
    /// Application configuration
    config: Config,
    travel: TravelView,
    calendar: CalendarView,
    weather: WeatherView,
    map: MapView,
}

impl Dashboard {
    /// Create the dashboard, loading the saved layout unless persistence is
    /// disabled. With `reset_layout` the saved layout is replaced by the
    /// default one.
    pub fn new(config: Config, reset_layout: bool) -> Self {
        let mut layout = open_layout(&config);
        if reset_layout {
            layout.reset_all();
        }

        Self {
            layout,
            drag: DragController::new(),
            config,
            travel: TravelView::new(),
            calendar: CalendarView::default(),
            weather: WeatherView::new(),
            map: MapView::new(),
        }
    }

    /// Render the grid of visible panels with its splitter handles.
    fn render_grid(&mut self, ui: &mut egui::Ui) {
        let area = ui.available_rect_before_wrap();
        let bounds = to_bounds(area);
        let visible: Vec<PanelId> = self.layout.visible_panels().to_vec();

        if visible.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label("All panels are closed. Use the controls below to bring them back.");
            });
            return;
        }

        let geometry = compute_geometry(visible.len(), self.layout.cols(), self.layout.rows());
        for (id, cell) in visible.iter().zip(geometry.resolve(bounds)) {
            self.render_panel(ui, *id, to_rect(cell).shrink(PANEL_GAP));
        }

        let thickness = f64::from(self.config.ui.splitter_thickness);
        for handle in geometry.handles(bounds, thickness) {
            let rect = to_rect(handle.rect);
            let response = ui
                .interact(rect, egui::Id::new(("splitter", handle.axis)), egui::Sense::drag())
                .on_hover_cursor(cursor_for(handle.axis));

            if response.drag_started() {
                self.drag.begin(handle.axis, bounds);
            }
            if response.hovered() || self.drag.axis() == Some(handle.axis) {
                ui.painter()
                    .rect_filled(rect, 2.0, ui.visuals().selection.bg_fill.gamma_multiply(0.6));
            }
        }

        self.track_drag(ui.ctx());
    }

    /// Feed pointer moves into the drag controller until the button is released.
    fn track_drag(&mut self, ctx: &egui::Context) {
        if !self.drag.is_dragging() {
            return;
        }

        let (down, moving, position) = ctx.input(|input| {
            (
                input.pointer.primary_down(),
                input.pointer.is_moving(),
                input.pointer.interact_pos(),
            )
        });

        if !down {
            self.drag.end();
            return;
        }

        if let (true, Some(position)) = (moving, position) {
            let outcome = self
                .drag
                .drag_to(&mut self.layout, f64::from(position.x), f64::from(position.y));
            if let DragOutcome::Maximized(id) = outcome {
                tracing::info!("Panel {} maximized by drag", id);
                self.drag.end();
            }
        }
    }

    /// Render one panel: frame, header with close button, and body.
    fn render_panel(&mut self, ui: &mut egui::Ui, id: PanelId, rect: egui::Rect) {
        let Some(panel) = self.layout.panel(id).cloned() else {
            // Visible id without a roster entry
            ui.painter().rect_stroke(
                rect,
                6.0,
                ui.visuals().widgets.noninteractive.bg_stroke,
                egui::StrokeKind::Inside,
            );
            return;
        };

        let is_active = self.layout.active_panel_id() == Some(id);
        let visuals = ui.visuals().clone();
        let stroke = if is_active {
            egui::Stroke::new(2.0, visuals.selection.bg_fill)
        } else {
            visuals.widgets.noninteractive.bg_stroke
        };

        let focus = ui.interact(rect, egui::Id::new(("panel", id)), egui::Sense::click());
        ui.painter().rect_filled(rect, 6.0, visuals.panel_fill);
        ui.painter()
            .rect_stroke(rect, 6.0, stroke, egui::StrokeKind::Inside);

        let inner = rect.shrink(6.0);
        let mut child = ui.new_child(
            egui::UiBuilder::new()
                .max_rect(inner)
                .id_salt(("panel_body", id))
                .layout(egui::Layout::top_down(egui::Align::Min)),
        );
        child.set_clip_rect(inner);

        let mut close = false;
        let mut activate = focus.clicked();
        child.allocate_ui_with_layout(
            egui::vec2(inner.width(), HEADER_HEIGHT),
            egui::Layout::left_to_right(egui::Align::Center),
            |ui| {
                let icon = panel.content.map(|kind| kind.icon()).unwrap_or("▫");
                if ui
                    .add(egui::Label::new(format!("{} {}", icon, panel.title())).sense(egui::Sense::click()))
                    .clicked()
                {
                    activate = true;
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✕").on_hover_text("Close panel").clicked() {
                        close = true;
                    }
                    ui.menu_button("⚙", |ui| self.render_panel_settings(ui, id));
                });
            },
        );
        child.separator();

        child.push_id(("content", id), |ui| match panel.content {
            Some(ContentKind::Travel) => self.travel.render(ui),
            Some(ContentKind::Calendar) => self.calendar.render(ui),
            Some(ContentKind::Weather) => self.weather.render(ui),
            Some(ContentKind::Map) => self.map.render(ui),
            None => {
                ui.centered_and_justified(|ui| {
                    ui.weak("No content selected for this panel.");
                });
            }
        });

        if close {
            self.layout.close_panel(id);
        } else if activate && !is_active {
            self.layout.set_active(id);
        }
    }

    /// Content kind and url of panel `id`.
    fn render_panel_settings(&mut self, ui: &mut egui::Ui, id: PanelId) {
        let Some(panel) = self.layout.panel(id).cloned() else {
            return;
        };

        ui.label("Content");
        let mut content = panel.content;
        ui.radio_value(&mut content, None, "None");
        for kind in ContentKind::all() {
            ui.radio_value(&mut content, Some(kind), format!("{} {}", kind.icon(), kind.display_name()));
        }
        if content != panel.content {
            self.layout.set_panel_content(id, content);
        }

        ui.separator();
        ui.label("Link");
        let mut url = panel.url.clone();
        if ui.text_edit_singleline(&mut url).changed() {
            self.layout.set_panel_url(id, url);
        }
    }

    /// Render the control bar.
    fn render_controls(&mut self, ctx: &egui::Context) {
        if !self.config.ui.show_controls {
            return;
        }

        egui::TopBottomPanel::bottom("panel_controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Show all").clicked() {
                    self.layout.reset_all();
                }
                ui.separator();

                let panels: Vec<(PanelId, String)> = self
                    .layout
                    .panels()
                    .iter()
                    .map(|panel| (panel.id, panel.title()))
                    .collect();
                for (id, title) in panels {
                    let open = self.layout.is_visible(id);
                    let label = if open {
                        title
                    } else {
                        format!("{} (closed)", title)
                    };
                    if ui.selectable_label(open, label).clicked() {
                        self.layout.show_only(id);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Tripboard v{}", env!("CARGO_PKG_VERSION")));
                    ui.separator();
                    match self.layout.mode() {
                        PanelMode::All => ui.label("All panels"),
                        PanelMode::Single => ui.label(format!(
                            "Focus: panel {}",
                            self.layout.active_panel_id().unwrap_or_default()
                        )),
                    };
                    if self.config.advanced.debug_mode {
                        ui.separator();
                        ui.monospace(format!(
                            "cols {:.2}/{:.2} rows {:.2}/{:.2}",
                            self.layout.cols().leading(),
                            self.layout.cols().trailing(),
                            self.layout.rows().leading(),
                            self.layout.rows().trailing()
                        ));
                    }
                });
            });
        });
    }
}

impl eframe::App for Dashboard {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let views: [&mut dyn ContentView; 4] = [
            &mut self.travel,
            &mut self.calendar,
            &mut self.weather,
            &mut self.map,
        ];
        for view in views {
            if let Err(e) = view.update() {
                tracing::error!("{} view update error: {}", view.title(), e);
            }
        }

        self.render_controls(ctx);
        egui::CentralPanel::default().show(ctx, |ui| self.render_grid(ui));
    }
}

/// Open the layout from the configured storage, or in memory only.
fn open_layout(config: &Config) -> LayoutState {
    if !config.storage.enabled {
        tracing::info!("Layout persistence disabled");
        return LayoutState::detached();
    }

    match config.storage_directory() {
        Ok(directory) => {
            tracing::info!("Layout storage in {}", directory.display());
            LayoutState::new(LayoutStore::new(
                FileStorage::new(directory),
                config.storage.key.clone(),
            ))
        }
        Err(e) => {
            tracing::warn!("Layout will not be saved: {}", e);
            LayoutState::detached()
        }
    }
}

fn cursor_for(axis: DragAxis) -> egui::CursorIcon {
    match axis {
        DragAxis::Vertical => egui::CursorIcon::ResizeColumn,
        DragAxis::Horizontal => egui::CursorIcon::ResizeRow,
        DragAxis::Both => egui::CursorIcon::ResizeNwSe,
    }
}

fn to_bounds(rect: egui::Rect) -> Bounds {
    Bounds::new(
        f64::from(rect.left()),
        f64::from(rect.top()),
        f64::from(rect.width()),
        f64::from(rect.height()),
    )
}

fn to_rect(bounds: Bounds) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(bounds.left as f32, bounds.top as f32),
        egui::vec2(bounds.width as f32, bounds.height as f32),
    )
}
