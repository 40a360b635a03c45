//! AppCommand-Enum fuer den Command-Datenfluss.

mod command;

pub use command::AppCommand;
