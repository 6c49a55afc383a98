// DietView - ui/panels/floating.rs
//
// Floating quick-action controls, anchored to the bottom-right corner.
// Hidden for the duration of a PDF export so they never appear in the
// captured document state.

use crate::app::state::AppState;
use crate::ui::panels::header::theme_toggle_affordance;
use crate::ui::theme::FLOATING_OFFSET;

pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.view.floating_visible {
        return;
    }

    egui::Window::new("quick_actions")
        .title_bar(false)
        .resizable(false)
        .anchor(
            egui::Align2::RIGHT_BOTTOM,
            [-FLOATING_OFFSET, -FLOATING_OFFSET],
        )
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let (icon, hover) = theme_toggle_affordance(state.view.theme);
                if ui.button(icon).on_hover_text(hover).clicked() {
                    state.request_toggle_theme = true;
                }
                if ui
                    .button("\u{1F4C4}") // page facing up
                    .on_hover_text("Exportar PDF")
                    .clicked()
                {
                    state.request_export = true;
                }
            });
        });
}
