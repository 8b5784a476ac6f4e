//! UI timings, in milliseconds.

/// Lifetime of a notification before it removes itself.
pub const NOTIFICATION_MS: u32 = 5_000;

/// Scale/opacity transition of a card leaving the grid.
pub const CARD_REMOVAL_MS: u32 = 300;

/// Fade applied to server-rendered flash messages before removal.
pub const FLASH_FADE_MS: u32 = 500;

/// Pause after the last keystroke before checking username availability.
pub const USERNAME_CHECK_DEBOUNCE_MS: u32 = 400;
