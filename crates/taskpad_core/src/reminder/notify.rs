//! Notification capability contract.

/// Permission state reported by a notification capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    /// The user has not been asked yet.
    NotDetermined,
    Granted,
    Denied,
}

/// Injected notification capability.
///
/// The engine requests permission once at startup when the state is
/// [`PermissionState::NotDetermined`] and emits only while the state is
/// exactly [`PermissionState::Granted`]. The engine itself holds no ambient
/// notification state; hosts and tests choose the implementation.
pub trait Notifier {
    /// Current permission state, queried at every sweep.
    fn permission(&self) -> PermissionState;

    /// Asks the user for permission; returns the resulting state.
    fn request_permission(&mut self) -> PermissionState;

    /// Posts one user-facing notification.
    fn notify(&mut self, summary: &str, body: &str);
}
