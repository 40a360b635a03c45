//! Kurven-Editor.
//!
//! Headless-Demo der Engine: baut die Saat-Geometrie auf, spielt eine kurze
//! Bearbeitungssequenz ein und tastet alle Kurven ab. Fenster, Renderer und
//! Tastatur-Dispatch sind bewusst externe Kollaborateure und nicht Teil der
//! Engine.

use kurven_editor::{AppCommand, AppController, AppState, EditorOptions, MoveAxis};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Kurven-Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = EditorOptions::config_path();
    let mut state = AppState::new();
    state.options = EditorOptions::load_from_file(&config_path);

    let mut controller = AppController::new();

    // Beispiel-Sequenz: Endpunkt des ersten Segments nach rechts und oben
    // schieben; die Stetigkeit zum Folgesegment wird dabei gepflegt.
    let step = state.options.move_step;
    let script = [
        AppCommand::SelectCurve { index: 0 },
        AppCommand::SelectPoint { index: 3 },
        AppCommand::MoveSelectedPoint {
            axis: MoveAxis::X,
            step,
        },
        AppCommand::MoveSelectedPoint {
            axis: MoveAxis::Y,
            step,
        },
    ];
    for command in script {
        if let Err(e) = controller.handle_command(&mut state, command) {
            log::error!("Command fehlgeschlagen: {:#}", e);
        }
    }

    let scene = controller.build_render_scene(&state)?;
    for (i, curve) in scene.curves.iter().enumerate() {
        log::info!(
            "Kurve {}: {} Kurvenpunkte, {} Kontrollpunkte{}",
            i,
            curve.curve_points.len(),
            curve.control_points.len(),
            if curve.selected { " (selektiert)" } else { "" }
        );
    }
    if let Some(marker) = scene.selection_marker {
        log::info!(
            "Selektions-Marker bei ({}, {}, {}), Kantenlaenge {}",
            marker.position.x,
            marker.position.y,
            marker.position.z,
            marker.size
        );
    }

    Ok(())
}
