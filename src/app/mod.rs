//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod render_scene;
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::AppCommand;
pub use render_scene::build as build_render_scene;
pub use state::{AppState, SelectionState};
