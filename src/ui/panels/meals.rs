// DietView - ui/panels/meals.rs
//
// Central panel: meal sections with their option tabs and food items.
// Tab clicks are collected during the draw pass and applied to the view
// afterwards, so the switch is an explicit (group, option) update.

use crate::app::state::AppState;
use crate::core::model::{panel_id, FoodItem, MealOption, MealSection};
use crate::core::view::Theme;
use crate::ui::theme;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let mut clicked: Option<(String, String)> = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for meal in &state.plan.meals {
                render_section(ui, state, meal, &mut clicked);
            }
            ui.add_space(theme::STATUS_BAR_HEIGHT);
        });

    if let Some((group, option)) = clicked {
        state.view.select_option(&state.plan, &group, &option);
        tracing::debug!(group = %group, option = %option, "Tab switched");
    }
}

fn render_section(
    ui: &mut egui::Ui,
    state: &AppState,
    meal: &MealSection,
    clicked: &mut Option<(String, String)>,
) {
    ui.add_space(12.0);
    ui.heading(&meal.title);
    ui.add_space(4.0);

    // Tab row. The selected tab follows the view even when the selected
    // option has no panel in the plan.
    ui.horizontal(|ui| {
        for option in &meal.options {
            let selected = state.view.selected_tab(&meal.key) == Some(option.key.as_str());
            if ui.selectable_label(selected, &option.label).clicked() {
                *clicked = Some((meal.key.clone(), option.key.clone()));
            }
        }
    });

    // At most one panel per group is active outside of export.
    for option in &meal.options {
        if state.view.is_panel_active(&panel_id(&meal.key, &option.key)) {
            render_panel(ui, state.view.theme, option);
        }
    }
    ui.add_space(4.0);
    ui.separator();
}

fn render_panel(ui: &mut egui::Ui, theme: Theme, option: &MealOption) {
    ui.indent(&option.key, |ui| {
        for item in &option.items {
            render_item(ui, theme, item);
        }
    });
}

fn render_item(ui: &mut egui::Ui, theme: Theme, item: &FoodItem) {
    let frame = if item.total {
        egui::Frame::NONE
            .fill(theme::total_row_fill(theme))
            .inner_margin(egui::Margin::same(4))
    } else {
        egui::Frame::NONE.inner_margin(egui::Margin::same(2))
    };

    frame.show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.add_space(theme::ITEM_INDENT);
            let name = if item.total {
                egui::RichText::new(&item.name).strong()
            } else {
                egui::RichText::new(&item.name)
            };
            ui.label(name);
            if let Some(portion) = &item.portion {
                ui.label(egui::RichText::new(portion).weak().small());
            }
        });

        let has_macros = item.protein.is_some()
            || item.carbs.is_some()
            || item.fat.is_some()
            || item.calories.is_some();
        if has_macros {
            ui.horizontal(|ui| {
                ui.add_space(theme::ITEM_INDENT * 2.0);
                if let Some(protein) = &item.protein {
                    ui.label(
                        egui::RichText::new(protein)
                            .small()
                            .color(theme::accent(theme)),
                    );
                }
                for macro_text in [&item.carbs, &item.fat, &item.calories].into_iter().flatten() {
                    ui.label(
                        egui::RichText::new(macro_text)
                            .small()
                            .color(theme::muted(theme)),
                    );
                }
            });
        }
    });
}
