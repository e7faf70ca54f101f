// Campaign sidebar state.
// Owns the collapse state machine and the row cursor; everything else
// (the campaign list, the selection) is borrowed from the parent view.

use std::time::{Duration, Instant};

use ratatui::widgets::ListState;

use crate::campaign::{Campaign, DateStyle, format_calendar_date};
use crate::config::Config;
use crate::session::SessionStore;

use super::navigation::Navigator;
use super::visual::{
    DEFAULT_SETTLE_DELAY, SettleTimer, SidebarPhase, SidebarWidth, TextVisibility, VisualState,
};

/// Inputs owned by the parent view, passed in on every call.
#[derive(Debug, Clone, Copy)]
pub struct SidebarProps<'a> {
    pub campaigns: &'a [Campaign],
    pub selected: Option<&'a Campaign>,
}

impl<'a> SidebarProps<'a> {
    pub fn new(campaigns: &'a [Campaign], selected: Option<&'a Campaign>) -> Self {
        Self {
            campaigns,
            selected,
        }
    }

    fn is_selected(&self, campaign: &Campaign) -> bool {
        self.selected.is_some_and(|s| s.same_as(campaign))
    }
}

/// Callbacks the parent view provides. The sidebar never edits campaigns itself.
pub trait SidebarHandler {
    fn select_campaign(&mut self, campaign: &Campaign);
    fn new_campaign(&mut self);
    /// Part of the contract; no sidebar control invokes it yet.
    fn delete_campaign(&mut self, campaign_id: &str);
    fn menu_collapse(&mut self, collapsed: bool);
}

/// Tunables for a sidebar instance.
#[derive(Debug, Clone)]
pub struct SidebarOptions {
    pub settle_delay: Duration,
    pub login_route: String,
    pub default_role: String,
    pub date_style: DateStyle,
}

impl Default for SidebarOptions {
    fn default() -> Self {
        Self {
            settle_delay: DEFAULT_SETTLE_DELAY,
            login_route: "/login".to_string(),
            default_role: "agency".to_string(),
            date_style: DateStyle::Us,
        }
    }
}

impl From<&Config> for SidebarOptions {
    fn from(config: &Config) -> Self {
        Self {
            settle_delay: config.settle_delay(),
            login_route: config.login_route.clone(),
            default_role: config.default_role.clone(),
            date_style: config.date_style(),
        }
    }
}

/// Display model for one campaign row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignRow {
    pub id: String,
    pub name: String,
    /// Calendar date of the last update, no time component.
    pub date: String,
    /// Client label badge; only for a non-empty client name.
    pub tag: Option<String>,
    pub selected: bool,
    /// Collapsed rows show only an icon.
    pub icon_only: bool,
}

/// What the settings menu needs to draw itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsMenuProps {
    pub role: String,
    pub collapsed: bool,
    pub transitioning: bool,
    pub text: TextVisibility,
}

/// The collapsible campaign sidebar.
///
/// The session store and navigator are handed in at construction, so the
/// component reads the signed-in user through `session` rather than from
/// global state.
#[derive(Debug)]
pub struct Sidebar<S, N> {
    visual: VisualState,
    settle: SettleTimer,
    cursor: ListState,
    session: S,
    navigator: N,
    options: SidebarOptions,
}

impl<S: SessionStore, N: Navigator> Sidebar<S, N> {
    pub fn new(session: S, navigator: N, options: SidebarOptions) -> Self {
        Self {
            visual: VisualState::default(),
            settle: SettleTimer::new(options.settle_delay),
            cursor: ListState::default(),
            session,
            navigator,
            options,
        }
    }

    pub fn visual(&self) -> VisualState {
        self.visual
    }

    pub fn phase(&self) -> SidebarPhase {
        self.visual.phase()
    }

    pub fn is_collapsed(&self) -> bool {
        self.visual.collapsed
    }

    pub fn width(&self) -> SidebarWidth {
        self.visual.width()
    }

    pub fn text(&self) -> TextVisibility {
        self.visual.text()
    }

    pub fn options(&self) -> &SidebarOptions {
        &self.options
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    /// Flip collapsed/expanded and open the settle window.
    ///
    /// The parent hears the new value before this returns. Returns the new
    /// collapsed value.
    pub fn toggle_collapse(&mut self, handler: &mut impl SidebarHandler, now: Instant) -> bool {
        let collapsed = !self.visual.collapsed;
        self.visual = VisualState {
            collapsed,
            transitioning: true,
        };
        handler.menu_collapse(collapsed);
        self.settle.arm(now);
        tracing::debug!(collapsed, phase = ?self.visual.phase(), "sidebar toggled");
        collapsed
    }

    /// Close the settle window once its deadline has passed. Returns true if
    /// the visual state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.settle.fire_if_due(now) {
            self.visual.transitioning = false;
            tracing::trace!(phase = ?self.visual.phase(), "sidebar settled");
            true
        } else {
            false
        }
    }

    /// Whether a settle deadline is still pending.
    pub fn is_settling(&self) -> bool {
        self.settle.is_armed()
    }

    pub fn select_campaign(&mut self, handler: &mut impl SidebarHandler, campaign: &Campaign) {
        tracing::info!(id = %campaign.id, "select campaign");
        handler.select_campaign(campaign);
    }

    pub fn request_new_campaign(&mut self, handler: &mut impl SidebarHandler) {
        tracing::info!("new campaign requested");
        handler.new_campaign();
    }

    pub fn delete_campaign(&mut self, handler: &mut impl SidebarHandler, campaign_id: &str) {
        tracing::info!(id = campaign_id, "delete campaign requested");
        handler.delete_campaign(campaign_id);
    }

    /// Sign out and move to the login route.
    pub fn logout(&mut self) {
        tracing::info!(route = %self.options.login_route, "logout");
        self.session.set_stored_user(None);
        self.navigator.navigate_to(&self.options.login_route);
    }

    /// Build one display row per campaign, in the order given.
    pub fn rows(&self, props: &SidebarProps<'_>) -> Vec<CampaignRow> {
        let icon_only = self.visual.collapsed;
        props
            .campaigns
            .iter()
            .map(|campaign| CampaignRow {
                id: campaign.id.clone(),
                name: campaign.name.clone(),
                date: format_calendar_date(&campaign.updated_at, self.options.date_style),
                tag: campaign.client_tag().map(str::to_string),
                selected: props.is_selected(campaign),
                icon_only,
            })
            .collect()
    }

    /// Props for the settings menu, reading the stored user now.
    pub fn settings_menu_props(&self) -> SettingsMenuProps {
        let role = self
            .session
            .stored_user()
            .and_then(|user| user.role)
            .filter(|role| !role.is_empty())
            .unwrap_or_else(|| self.options.default_role.clone());

        SettingsMenuProps {
            role,
            collapsed: self.visual.collapsed,
            transitioning: self.visual.transitioning,
            text: self.visual.text(),
        }
    }

    /// Row cursor state, for rendering.
    pub fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.cursor
    }

    /// Index of the row under the cursor.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor.selected()
    }

    /// Move the cursor down, stopping at the last row.
    pub fn cursor_next(&mut self, len: usize) {
        if len == 0 {
            self.cursor.select(None);
            return;
        }
        let i = match self.cursor.selected() {
            Some(i) if i + 1 >= len => len - 1,
            Some(i) => i + 1,
            None => 0,
        };
        self.cursor.select(Some(i));
    }

    /// Move the cursor up, stopping at the first row.
    pub fn cursor_prev(&mut self, len: usize) {
        if len == 0 {
            self.cursor.select(None);
            return;
        }
        let i = match self.cursor.selected() {
            Some(i) => i.saturating_sub(1).min(len - 1),
            None => 0,
        };
        self.cursor.select(Some(i));
    }

    /// Keep the cursor on a valid row after the list changed.
    pub fn clamp_cursor(&mut self, len: usize) {
        let clamped = match (self.cursor.selected(), len) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
        self.cursor.select(clamped);
    }

    /// Point the cursor at the campaign with `id`, if it is listed.
    pub fn focus_campaign(&mut self, campaigns: &[Campaign], id: &str) {
        if let Some(index) = campaigns.iter().position(|c| c.id == id) {
            self.cursor.select(Some(index));
        }
    }

    /// The campaign under the cursor.
    pub fn cursor_campaign<'a>(&self, campaigns: &'a [Campaign]) -> Option<&'a Campaign> {
        campaigns.get(self.cursor.selected()?)
    }
}
