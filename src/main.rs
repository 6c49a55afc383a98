// DietView - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration and logging initialisation (debug mode support)
// 3. Diet plan loading and initial protein sort
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use dietview::app;

pub use dietview::core;
pub use dietview::platform;
pub use dietview::ui;
pub use dietview::util;

use clap::Parser;
use std::path::PathBuf;

/// DietView - Desktop viewer and PDF exporter for personal diet plans.
///
/// Shows a diet plan as tabbed meal sections with light and dark themes,
/// sorts each meal option by protein content, and exports the full plan
/// to a print-ready A4 PDF.
#[derive(Parser, Debug)]
#[command(name = "DietView", version, about)]
struct Cli {
    /// Diet plan TOML file (uses the built-in plan if omitted).
    plan: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and load configuration before logging so the
    // configured log level can take part in filter resolution.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    // Initialise logging subsystem
    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "DietView starting"
    );

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Configuration warning");
    }

    // Load the diet plan: CLI-provided file, else the built-in plan.
    let mut plan = match app::plan_mgr::load(cli.plan.as_deref()) {
        Ok(plan) => plan,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load diet plan");
            eprintln!("Error: Failed to load diet plan: {e}");
            std::process::exit(1);
        }
    };

    // Order each meal option by protein content before first paint.
    core::sort::sort_plan(&mut plan);

    // Load the persisted theme preference, if any.
    let stored_theme = app::prefs::load(&app::prefs::prefs_path(&platform_paths.data_dir))
        .and_then(|prefs| prefs.stored_theme());

    tracing::info!(
        meals = plan.meals.len(),
        stored_theme = ?stored_theme.map(core::view::Theme::as_str),
        "Ready to launch GUI"
    );

    // Create application state
    let mut state = app::state::AppState::new(
        plan,
        stored_theme,
        platform_paths.data_dir.clone(),
        cli.debug,
    );
    state.ui_font_size = config.font_size;
    state.export_default_dir = config.export_default_dir.clone();
    state.warnings = config_warnings;

    // Launch the GUI
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::DietViewApp::new(state)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch DietView GUI: {e}");
        std::process::exit(1);
    }
}
