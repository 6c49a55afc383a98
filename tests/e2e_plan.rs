// DietView - tests/e2e_plan.rs
//
// End-to-end tests for the plan pipeline: loading, validation, protein
// sorting, view-state initialisation, and the full PDF export lifecycle.
//
// These tests exercise the real filesystem, real TOML parsing, real PDF
// rendering, and the real export worker thread — no mocks, no stubs.

use dietview::app::export::ExportManager;
use dietview::app::plan_mgr;
use dietview::core::nutrition::protein_grams;
use dietview::core::pdf::ExportOptions;
use dietview::core::plan;
use dietview::core::sort;
use dietview::core::view::{Theme, ViewState};
use std::time::{Duration, Instant};
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

/// Drive an `ExportManager` until a terminal message arrives or `deadline`
/// elapses, restoring the view exactly as the GUI update loop would.
fn poll_until_done(
    manager: &mut ExportManager,
    view: &mut ViewState,
    deadline: Duration,
) -> dietview::core::model::ExportProgress {
    let start = Instant::now();
    loop {
        if let Some(msg) = manager.poll(view) {
            return msg;
        }
        assert!(
            start.elapsed() < deadline,
            "export did not complete within {deadline:?}"
        );
        std::thread::sleep(Duration::from_millis(10));
    }
}

// =============================================================================
// Plan loading E2E
// =============================================================================

/// The built-in plan must load, validate, and carry the expected title.
#[test]
fn e2e_builtin_plan_loads() {
    let plan = plan_mgr::load(None).unwrap();
    assert_eq!(plan.title, "Minha Dieta Personalizada");
    assert!(!plan.meals.is_empty());
}

/// A plan written to disk round-trips through the file loader.
#[test]
fn e2e_plan_file_loads_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plan.toml");
    std::fs::write(
        &path,
        r#"
title = "Plano de Teste"

[[meal]]
key = "lunch"
title = "Almoco"

[[meal.option]]
key = "opt1"
label = "Opcao 1"

[[meal.option.item]]
name = "Frango grelhado"
protein = "31g Proteína"
"#,
    )
    .unwrap();

    let plan = plan_mgr::load(Some(&path)).unwrap();
    assert_eq!(plan.title, "Plano de Teste");
    assert_eq!(plan.meals.len(), 1);
    assert_eq!(plan.meals[0].options[0].items[0].name, "Frango grelhado");
}

// =============================================================================
// Sorting E2E
// =============================================================================

/// After the startup sort, every sortable option lists items by descending
/// protein, with total rows kept at the bottom.
#[test]
fn e2e_builtin_plan_sorts_by_protein() {
    let mut plan = plan::builtin_plan();
    sort::sort_plan(&mut plan);

    for meal in plan.meals.iter().filter(|m| m.sortable) {
        for option in &meal.options {
            let foods: Vec<f64> = option
                .items
                .iter()
                .filter(|i| !i.total)
                .map(|i| protein_grams(i.protein.as_deref()))
                .collect();
            for pair in foods.windows(2) {
                assert!(
                    pair[0] >= pair[1],
                    "meal '{}' option '{}' is not protein-descending: {foods:?}",
                    meal.key,
                    option.key
                );
            }

            // Total rows, if present, must trail the food rows.
            let first_total = option.items.iter().position(|i| i.total);
            if let Some(idx) = first_total {
                assert!(
                    option.items[idx..].iter().all(|i| i.total),
                    "meal '{}' option '{}' has a food row after a total row",
                    meal.key,
                    option.key
                );
            }
        }
    }
}

/// Supplements are flagged non-sortable in the built-in plan and must keep
/// their authored order.
#[test]
fn e2e_supplements_keep_authored_order() {
    let original = plan::builtin_plan();
    let mut sorted = plan::builtin_plan();
    sort::sort_plan(&mut sorted);

    let before = original.meals.iter().find(|m| m.key == "supplements").unwrap();
    let after = sorted.meals.iter().find(|m| m.key == "supplements").unwrap();
    assert!(!before.sortable);

    for (b, a) in before.options.iter().zip(after.options.iter()) {
        let before_names: Vec<_> = b.items.iter().map(|i| &i.name).collect();
        let after_names: Vec<_> = a.items.iter().map(|i| &i.name).collect();
        assert_eq!(before_names, after_names);
    }
}

// =============================================================================
// View state E2E
// =============================================================================

/// On startup exactly one panel per meal group is active: the first option.
#[test]
fn e2e_initial_view_activates_first_option_per_group() {
    let plan = plan::builtin_plan();
    let view = ViewState::from_plan(&plan, Theme::Light);

    for meal in &plan.meals {
        let active: Vec<_> = meal
            .options
            .iter()
            .filter(|o| view.is_panel_active(&dietview::core::model::panel_id(&meal.key, &o.key)))
            .collect();
        assert_eq!(
            active.len(),
            1,
            "meal '{}' should have exactly one active panel",
            meal.key
        );
        assert_eq!(active[0].key, meal.options[0].key);
        assert_eq!(view.selected_tab(&meal.key), Some(meal.options[0].key.as_str()));
    }
    assert!(view.floating_visible);
}

// =============================================================================
// Export E2E
// =============================================================================

/// The full export pipeline: a dark-themed view with a non-default tab
/// selection exports a real PDF file and is restored exactly afterwards.
#[test]
fn e2e_export_writes_pdf_and_restores_view() {
    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("Minha-Dieta-Personalizada.pdf");

    let mut plan = plan::builtin_plan();
    sort::sort_plan(&mut plan);

    let mut view = ViewState::from_plan(&plan, Theme::Light);
    view.toggle_theme();
    // Pick a non-default tab so restoration is observable.
    let meal = &plan.meals[0];
    let second = meal.options[1].key.clone();
    view.select_option(&plan, &meal.key, &second);

    let before = view.clone();

    let mut manager = ExportManager::new();
    assert!(manager.start(&plan, &mut view, dest.clone(), ExportOptions::default()));
    assert!(manager.in_flight());

    // While in flight: light theme forced, all panels active, controls hidden.
    assert_eq!(view.theme, Theme::Light);
    assert!(!view.floating_visible);

    let outcome = poll_until_done(&mut manager, &mut view, Duration::from_secs(30));
    match outcome {
        dietview::core::model::ExportProgress::Completed { path, bytes } => {
            assert_eq!(path, dest);
            assert!(bytes > 1000, "suspiciously small PDF: {bytes} bytes");
        }
        dietview::core::model::ExportProgress::Failed { error } => {
            panic!("export failed: {error}")
        }
    }

    let written = std::fs::read(&dest).unwrap();
    assert!(written.starts_with(b"%PDF"), "output is not a PDF file");

    // Exact restoration: dark theme, prior selection, floating controls back.
    assert_eq!(view, before);
    assert!(!manager.in_flight());
}

/// A failing export (unwritable destination) still restores the view and
/// reports the failure instead of panicking.
#[test]
fn e2e_failed_export_restores_view() {
    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("missing-subdir").join("out.pdf");

    let plan = plan::builtin_plan();
    let mut view = ViewState::from_plan(&plan, Theme::Dark);
    let before = view.clone();

    let mut manager = ExportManager::new();
    assert!(manager.start(&plan, &mut view, dest, ExportOptions::default()));

    let outcome = poll_until_done(&mut manager, &mut view, Duration::from_secs(30));
    match outcome {
        dietview::core::model::ExportProgress::Failed { error } => {
            assert!(!error.is_empty());
        }
        dietview::core::model::ExportProgress::Completed { .. } => {
            panic!("export into a missing directory should fail")
        }
    }

    assert_eq!(view, before);
    assert!(!manager.in_flight());
}

/// A second export request while one is running must be rejected.
#[test]
fn e2e_reentrant_export_is_rejected() {
    let dir = TempDir::new().unwrap();

    let plan = plan::builtin_plan();
    let mut view = ViewState::from_plan(&plan, Theme::Light);

    let mut manager = ExportManager::new();
    assert!(manager.start(
        &plan,
        &mut view,
        dir.path().join("first.pdf"),
        ExportOptions::default(),
    ));

    // The manager stays in flight until poll() consumes the outcome, so the
    // second start is deterministically rejected.
    assert!(!manager.start(
        &plan,
        &mut view,
        dir.path().join("second.pdf"),
        ExportOptions::default(),
    ));

    poll_until_done(&mut manager, &mut view, Duration::from_secs(30));
    assert!(!manager.in_flight());
}
