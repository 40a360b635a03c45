//! Feature-Handler fuer AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausfuehrung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod options;
pub mod selection;
