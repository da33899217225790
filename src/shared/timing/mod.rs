mod debouncer;

pub use debouncer::{DebounceRegistry, Debouncer};

use std::time::Duration;

/// Hover delay before a project card starts its preview video.
pub const HOVER_PREVIEW_DELAY: Duration = Duration::from_millis(500);

/// Hover delay before a rail card expands.
pub const CARD_HOVER_DELAY: Duration = Duration::from_millis(150);

/// Idle time after the last keystroke before search navigates.
pub const SEARCH_NAVIGATION_DELAY: Duration = Duration::from_millis(1500);
