//! Capability to raise the game window when the clock starts.

/// Injected into the clock and invoked exactly once on the
/// Idle -> Running transition. Implementations fail silently when the
/// platform or the game window is unavailable.
pub trait GameFocus {
    fn bring_game_to_front(&self);
}

/// No-op focus for tests and unsupported platforms.
#[derive(Debug, Default)]
pub struct NoopFocus;

impl GameFocus for NoopFocus {
    fn bring_game_to_front(&self) {}
}
