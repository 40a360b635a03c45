//! Application Controller fuer zentrale Command-Verarbeitung.

use crate::shared::RenderScene;

use super::{AppCommand, AppState};

/// Orchestriert Commands und Handler auf dem AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Fuehrt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            AppCommand::SelectPoint { index } => handlers::selection::select_point(state, index),
            AppCommand::SelectCurve { index } => handlers::selection::select_curve(state, index),
            AppCommand::MoveSelectedPoint { axis, step } => {
                handlers::selection::move_selected(state, axis, step)
            }
            AppCommand::SetEvaluationAlgorithm { algorithm } => {
                handlers::options::set_evaluation_algorithm(state, algorithm)
            }
            AppCommand::ApplyOptions { options } => handlers::options::apply(state, options),
            AppCommand::ResetOptions => handlers::options::reset(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene fuer den aktuellen Frame.
    pub fn build_render_scene(&self, state: &AppState) -> anyhow::Result<RenderScene> {
        Ok(super::render_scene::build(state)?)
    }
}
