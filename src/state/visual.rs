// Sidebar visual state.
// Collapsed/expanded flag, the transition window after a toggle, and the
// values the renderer derives from them.

use std::time::{Duration, Instant};

/// Default settle window after a collapse toggle.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(300);

/// Layout width budget when collapsed, in layout units.
pub const COLLAPSED_WIDTH_UNITS: u16 = 64;
/// Layout width budget when expanded, in layout units.
pub const EXPANDED_WIDTH_UNITS: u16 = 256;
/// Layout units per terminal column.
const UNITS_PER_COLUMN: u16 = 8;

/// The sidebar's own visual state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisualState {
    pub collapsed: bool,
    pub transitioning: bool,
}

impl VisualState {
    pub fn phase(&self) -> SidebarPhase {
        match (self.collapsed, self.transitioning) {
            (false, false) => SidebarPhase::Expanded,
            (true, false) => SidebarPhase::Collapsed,
            (true, true) => SidebarPhase::Collapsing,
            (false, true) => SidebarPhase::Expanding,
        }
    }

    pub fn text(&self) -> TextVisibility {
        TextVisibility::of(self)
    }

    pub fn width(&self) -> SidebarWidth {
        if self.collapsed {
            SidebarWidth::Collapsed
        } else {
            SidebarWidth::Expanded
        }
    }
}

/// Named states of the collapse state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarPhase {
    /// Expanded and stable (initial).
    Expanded,
    /// Collapsed and stable.
    Collapsed,
    /// Expanded → collapsed, inside the settle window.
    Collapsing,
    /// Collapsed → expanded, inside the settle window.
    Expanding,
}

/// Whether text labels are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextVisibility {
    Hidden,
    Visible,
}

impl TextVisibility {
    /// Labels hide while collapsed and during any transition, so text never
    /// wraps while the width changes.
    pub fn of(state: &VisualState) -> Self {
        if state.collapsed || state.transitioning {
            TextVisibility::Hidden
        } else {
            TextVisibility::Visible
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, TextVisibility::Visible)
    }
}

/// Layout width of the sidebar pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarWidth {
    Collapsed,
    Expanded,
}

impl SidebarWidth {
    pub fn units(&self) -> u16 {
        match self {
            SidebarWidth::Collapsed => COLLAPSED_WIDTH_UNITS,
            SidebarWidth::Expanded => EXPANDED_WIDTH_UNITS,
        }
    }

    /// Width in terminal columns.
    pub fn columns(&self) -> u16 {
        self.units() / UNITS_PER_COLUMN
    }

    pub fn for_collapsed(collapsed: bool) -> Self {
        if collapsed {
            SidebarWidth::Collapsed
        } else {
            SidebarWidth::Expanded
        }
    }
}

/// One-shot deadline that ends the transition window.
///
/// Arming again replaces the pending deadline, so only the latest toggle's
/// window counts. The deadline lives inside the owning sidebar and goes away
/// with it.
#[derive(Debug, Clone)]
pub struct SettleTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl SettleTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once, on the first call at or after the deadline.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for SettleTimer {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLE_DELAY)
    }
}
