//! Lines Intersection Editor.
//!
//! Linien per Drag zeichnen, Schnittpunkte live markieren und alle Linien
//! per "Collapse lines" zur Mitte hin zusammenziehen.

use eframe::egui;
use lines_intersection::{render, ui, AppController, AppIntent, AppState, EditorOptions};
use std::time::Instant;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Lines Intersection Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        // Canvas plus Toolbar und Status-Bar
        let window_size = [
            editor_options.canvas_width + 32.0,
            editor_options.canvas_height + 96.0,
        ];

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(window_size)
                .with_title("Lines Intersection"),
            ..Default::default()
        };

        eframe::run_native(
            "Lines Intersection",
            options,
            Box::new(move |_cc| {
                let mut state = AppState::with_options(editor_options);
                state.options_path = config_path;
                Ok(Box::new(EditorApp::new(state)))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl EditorApp {
    fn new(state: AppState) -> Self {
        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Fehler bei der Event-Verarbeitung: {:#}", e);
            }
        }
    }

    /// Fordert den nächsten Repaint an, solange ein Kollaps-Frame geplant ist.
    fn maybe_request_repaint(&self, ctx: &egui::Context, now: Instant) {
        if let Some(wait) = self.state.scheduler.time_until_due(now) {
            ctx.request_repaint_after(wait);
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        let mut events = ui::render_toolbar(ctx, &self.state);
        ui::render_status_bar(ctx, &self.state);
        events.push(AppIntent::FrameElapsed { now });

        egui::CentralPanel::default().show(ctx, |ui| {
            let [width, height] = self.state.surface.size();
            let (rect, response) =
                ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::click_and_drag());

            events.extend(ui::collect_keyboard_intents(ui));
            events.extend(self.input.collect_canvas_events(ui, &response));
            self.process_events(std::mem::take(&mut events));

            render::paint_surface(&ui.painter_at(rect), rect.min, &self.state.surface);
        });

        self.maybe_request_repaint(ctx, now);
    }
}
