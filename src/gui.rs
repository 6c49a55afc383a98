// DietView - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the UI panels, resolves the effective theme on the first
// frame, and drives the export lifecycle.

use crate::app::export::ExportManager;
use crate::app::state::AppState;
use crate::core::model::ExportProgress;
use crate::core::pdf::ExportOptions;
use crate::core::view::Theme;
use crate::ui;
use crate::util::constants;

/// The DietView application.
pub struct DietViewApp {
    pub state: AppState,
    pub export_manager: ExportManager,

    /// Whether the effective theme has been resolved. Resolution needs the
    /// system preference signal, which is only available once the first
    /// frame's input arrives.
    theme_resolved: bool,

    /// Visuals applied to the egui context, to avoid resetting every frame.
    applied_theme: Option<Theme>,

    /// Font size applied to the egui context.
    applied_font_size: Option<f32>,
}

impl DietViewApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            export_manager: ExportManager::new(),
            theme_resolved: false,
            applied_theme: None,
            applied_font_size: None,
        }
    }

    /// Resolve the effective theme: stored preference, else the system
    /// dark-mode signal, else light. Runs exactly once.
    fn resolve_theme(&mut self, ctx: &egui::Context) {
        let system_dark = ctx
            .input(|i| i.raw.system_theme)
            .map(|t| t == egui::Theme::Dark);
        let theme = Theme::resolve(self.state.stored_theme, system_dark);
        self.state.view.theme = theme;
        self.theme_resolved = true;
        tracing::info!(
            theme = theme.as_str(),
            stored = ?self.state.stored_theme.map(Theme::as_str),
            system_dark = ?system_dark,
            "Theme resolved"
        );
    }

    /// Open the save dialog and start the export if a destination is chosen.
    fn handle_export_request(&mut self) {
        if self.export_manager.in_flight() {
            self.state.status_message = "Export already in progress.".to_string();
            return;
        }

        let mut dialog = rfd::FileDialog::new()
            .add_filter("PDF", &["pdf"])
            .set_file_name(constants::EXPORT_FILE_NAME);
        if let Some(dir) = &self.state.export_default_dir {
            dialog = dialog.set_directory(dir);
        }

        if let Some(dest) = dialog.save_file() {
            if self.export_manager.start(
                &self.state.plan,
                &mut self.state.view,
                dest,
                ExportOptions::default(),
            ) {
                self.state.status_message = "Exporting PDF...".to_string();
            }
        }
    }
}

impl eframe::App for DietViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_resolved {
            self.resolve_theme(ctx);
        }

        // Poll the export outcome. The manager restores the view snapshot
        // (panels, theme, floating controls) on success and failure alike;
        // the failure branch additionally surfaces a modal alert.
        if let Some(msg) = self.export_manager.poll(&mut self.state.view) {
            match msg {
                ExportProgress::Completed { path, bytes } => {
                    self.state.status_message =
                        format!("Exported PDF to '{}' ({bytes} bytes).", path.display());
                }
                ExportProgress::Failed { error } => {
                    self.state.status_message = "PDF export failed.".to_string();
                    self.state.export_alert = Some(error);
                }
            }
        }

        // ---- Handle flags set by panels ----
        if self.state.request_toggle_theme {
            self.state.request_toggle_theme = false;
            self.state.toggle_theme();
        }
        if self.state.request_export {
            self.state.request_export = false;
            self.handle_export_request();
        }

        // Apply visuals and font size when they change.
        if self.applied_theme != Some(self.state.view.theme) {
            ctx.set_visuals(ui::theme::visuals(self.state.view.theme));
            self.applied_theme = Some(self.state.view.theme);
        }
        if self.applied_font_size != Some(self.state.ui_font_size) {
            let mut style = (*ctx.style()).clone();
            if let Some(body) = style.text_styles.get_mut(&egui::TextStyle::Body) {
                body.size = self.state.ui_font_size;
            }
            ctx.set_style(style);
            self.applied_font_size = Some(self.state.ui_font_size);
        }

        // Header
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui::panels::header::render(ui, &mut self.state);
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if self.export_manager.in_flight() {
                        ui.spinner();
                    }
                    ui.label(&self.state.status_message);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if !self.state.warnings.is_empty() {
                            ui.label(format!("{} warning(s)", self.state.warnings.len()))
                                .on_hover_text(self.state.warnings.join("\n"));
                        }
                    });
                });
            });

        // Central panel (meal sections)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::meals::render(ui, &mut self.state);
        });

        // Floating controls and modal alert
        ui::panels::floating::render(ctx, &mut self.state);
        ui::panels::alert::render(ctx, &mut self.state);

        // Keep repainting while the export runs so the outcome is picked up
        // promptly even without user input.
        if self.export_manager.in_flight() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
