// DietView - ui/panels/header.rs
//
// Header bar: plan title plus the theme-toggle and export controls.
// The toggle icon shows the *opposite* action: a sun while dark mode is
// active (offering light), a moon while light is active (offering dark).

use crate::app::state::AppState;
use crate::core::view::Theme;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.heading(&state.plan.title);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let (icon, hover) = theme_toggle_affordance(state.view.theme);
            if ui.button(icon).on_hover_text(hover).clicked() {
                state.request_toggle_theme = true;
            }
            if ui
                .button("Exportar PDF")
                .on_hover_text("Salvar o plano completo como PDF")
                .clicked()
            {
                state.request_export = true;
            }
        });
    });
}

/// Icon and tooltip for the toggle control, both naming the opposite theme.
pub fn theme_toggle_affordance(theme: Theme) -> (&'static str, &'static str) {
    match theme {
        Theme::Dark => ("\u{2600}", "Modo claro"),  // sun
        Theme::Light => ("\u{1F319}", "Modo escuro"), // moon
    }
}
