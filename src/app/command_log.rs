//! Ringpuffer ueber ausgefuehrte Commands fuer Diagnose-Ausgaben.

use std::collections::VecDeque;

use super::AppCommand;

/// Haelt die zuletzt ausgefuehrten Commands in Reihenfolge vor.
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
    capacity: usize,
}

impl CommandLog {
    /// Erstellt ein leeres Log mit Standard-Kapazitaet.
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Erstellt ein leeres Log, das hoechstens `capacity` Eintraege haelt.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Haengt einen ausgefuehrten Command an; der aelteste Eintrag faellt
    /// heraus, sobald die Kapazitaet erreicht ist.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(command.clone());
    }

    /// Anzahl der gehaltenen Commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurueck, wenn noch kein Command geloggt wurde.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt ausgefuehrter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }

    /// Iterator ueber alle Eintraege, aeltester zuerst.
    pub fn iter(&self) -> impl Iterator<Item = &AppCommand> {
        self.entries.iter()
    }
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}
