// DietView - ui/panels/alert.rs
//
// Modal alert shown after a failed export. The document state has already
// been restored by the export manager; this is the user-facing notice.

use crate::app::state::AppState;

pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let Some(message) = state.export_alert.clone() else {
        return;
    };

    let mut dismissed = false;
    egui::Window::new("Falha na exportação")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Houve um erro ao gerar o PDF. Por favor, tente novamente.");
            ui.add_space(4.0);
            ui.label(egui::RichText::new(&message).small().weak());
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

    if dismissed {
        state.export_alert = None;
    }
}
