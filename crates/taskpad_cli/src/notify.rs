//! Terminal-backed notification capability.

use taskpad_core::{Notifier, PermissionState};

/// Prints reminders to the terminal with a bell.
///
/// Permission maps to the `--no-notify` flag: a denied session keeps the
/// sweep silent without changing engine behavior.
pub struct TerminalNotifier {
    permission: PermissionState,
}

impl TerminalNotifier {
    pub fn new(allowed: bool) -> Self {
        let permission = if allowed {
            PermissionState::NotDetermined
        } else {
            PermissionState::Denied
        };
        Self { permission }
    }
}

impl Notifier for TerminalNotifier {
    fn permission(&self) -> PermissionState {
        self.permission
    }

    fn request_permission(&mut self) -> PermissionState {
        // The terminal needs no user consent; a request resolves to granted.
        if self.permission == PermissionState::NotDetermined {
            self.permission = PermissionState::Granted;
        }
        self.permission
    }

    fn notify(&mut self, summary: &str, body: &str) {
        // \x07 rings the terminal bell.
        eprintln!("\x07[reminder] {summary} ({body})");
    }
}
