// App state and main event loop.
// Owns the campaign list (the sidebar's parent view) and routes keys to the sidebar.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::prelude::*;

use crate::campaign::{Campaign, User};
use crate::config::Config;
use crate::session::SessionStore;
use crate::state::{
    Navigator, RouteHistory, Sidebar, SidebarHandler, SidebarOptions, SidebarProps,
};
use crate::ui;

/// Poll interval while idle.
const IDLE_POLL: Duration = Duration::from_millis(100);
/// Poll interval while a settle deadline is pending, so labels reappear on time.
const SETTLE_POLL: Duration = Duration::from_millis(20);

/// The parent view: owns campaigns and the current selection.
#[derive(Debug, Default)]
pub struct CampaignBoard {
    pub campaigns: Vec<Campaign>,
    pub selected: Option<Campaign>,
    /// Mirror of the sidebar's collapsed flag; drives the pane width.
    pub menu_collapsed: bool,
}

impl CampaignBoard {
    pub fn new(campaigns: Vec<Campaign>) -> Self {
        Self {
            campaigns,
            ..Default::default()
        }
    }

    pub fn props(&self) -> SidebarProps<'_> {
        SidebarProps::new(&self.campaigns, self.selected.as_ref())
    }
}

impl SidebarHandler for CampaignBoard {
    fn select_campaign(&mut self, campaign: &Campaign) {
        self.selected = Some(campaign.clone());
    }

    fn new_campaign(&mut self) {
        let campaign = Campaign::untitled();
        tracing::info!(id = %campaign.id, "created campaign");
        self.selected = Some(campaign.clone());
        self.campaigns.push(campaign);
    }

    fn delete_campaign(&mut self, campaign_id: &str) {
        self.campaigns.retain(|c| c.id != campaign_id);
        if self.selected.as_ref().is_some_and(|s| s.id == campaign_id) {
            self.selected = None;
        }
    }

    fn menu_collapse(&mut self, collapsed: bool) {
        self.menu_collapsed = collapsed;
    }
}

/// Main application state.
pub struct App<S> {
    pub board: CampaignBoard,
    pub sidebar: Sidebar<S, RouteHistory>,
    /// Whether the help overlay is shown.
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
    home_route: String,
    default_role: String,
}

impl<S: SessionStore> App<S> {
    pub fn new(config: &Config, session: S, campaigns: Vec<Campaign>) -> Self {
        let mut routes = RouteHistory::new(config.home_route.clone());
        if session.stored_user().is_none() {
            routes.navigate_to(&config.login_route);
        }

        Self {
            board: CampaignBoard::new(campaigns),
            sidebar: Sidebar::new(session, routes, SidebarOptions::from(config)),
            show_help: false,
            should_quit: false,
            home_route: config.home_route.clone(),
            default_role: config.default_role.clone(),
        }
    }

    /// Whether the signed-out screen is showing.
    pub fn signed_out(&self) -> bool {
        self.sidebar
            .navigator()
            .is_at(&self.sidebar.options().login_route)
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
            self.sidebar.tick(Instant::now());
        }
        Ok(())
    }

    /// How long to wait for input before the next tick.
    pub fn poll_timeout(&self) -> Duration {
        if self.sidebar.is_settling() {
            SETTLE_POLL
        } else {
            IDLE_POLL
        }
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_timeout())? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key, Instant::now());
                }
            }
        }
        Ok(())
    }

    /// Apply one key press.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }

        if self.signed_out() {
            match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Enter => self.sign_in(),
                _ => {}
            }
            return;
        }

        let len = self.board.campaigns.len();
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Up | KeyCode::Char('k') => self.sidebar.cursor_prev(len),
            KeyCode::Down | KeyCode::Char('j') => self.sidebar.cursor_next(len),
            KeyCode::Enter => {
                if let Some(campaign) = self.sidebar.cursor_campaign(&self.board.campaigns).cloned()
                {
                    self.sidebar.select_campaign(&mut self.board, &campaign);
                }
            }
            KeyCode::Char('n') => {
                self.sidebar.request_new_campaign(&mut self.board);
                if let Some(selected) = &self.board.selected {
                    self.sidebar.focus_campaign(&self.board.campaigns, &selected.id);
                }
            }
            KeyCode::Char('[') => {
                self.sidebar.toggle_collapse(&mut self.board, now);
            }
            KeyCode::Char('L') => self.sidebar.logout(),
            _ => {}
        }
    }

    /// Store a user with the default role and go home.
    fn sign_in(&mut self) {
        tracing::info!(role = %self.default_role, "sign in");
        self.sidebar
            .session_mut()
            .set_stored_user(Some(User::with_role(self.default_role.clone())));
        self.sidebar.navigator_mut().reset(self.home_route.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;
    use crate::state::SidebarPhase;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn campaign(id: &str, name: &str) -> Campaign {
        Campaign {
            id: id.to_string(),
            name: name.to_string(),
            updated_at: "2024-03-01".to_string(),
            settings: Default::default(),
        }
    }

    fn app() -> App<MemorySessionStore> {
        App::new(
            &Config::default(),
            MemorySessionStore::new(Some(User::with_role("admin"))),
            vec![campaign("a", "Spring Sale"), campaign("b", "Re-engage")],
        )
    }

    #[test]
    fn test_enter_selects_campaign_under_cursor() {
        let mut app = app();
        let now = Instant::now();

        app.handle_key(key(KeyCode::Down), now);
        app.handle_key(key(KeyCode::Enter), now);

        assert_eq!(app.board.selected.as_ref().unwrap().id, "a");

        app.handle_key(key(KeyCode::Char('j')), now);
        app.handle_key(key(KeyCode::Enter), now);
        assert_eq!(app.board.selected.as_ref().unwrap().id, "b");
    }

    #[test]
    fn test_new_campaign_is_appended_and_selected() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('n')), Instant::now());

        assert_eq!(app.board.campaigns.len(), 3);
        let selected = app.board.selected.as_ref().unwrap();
        assert_eq!(selected.name, "Untitled Campaign");
        assert_eq!(app.sidebar.cursor(), Some(2));
        assert_eq!(app.sidebar.phase(), SidebarPhase::Expanded);
    }

    #[test]
    fn test_toggle_keeps_parent_in_sync() {
        let mut app = app();
        let now = Instant::now();

        app.handle_key(key(KeyCode::Char('[')), now);
        assert!(app.board.menu_collapsed);
        assert_eq!(app.board.menu_collapsed, app.sidebar.is_collapsed());

        app.handle_key(key(KeyCode::Char('[')), now);
        assert!(!app.board.menu_collapsed);
        assert_eq!(app.board.menu_collapsed, app.sidebar.is_collapsed());
    }

    #[test]
    fn test_delete_clears_matching_selection() {
        let mut board = CampaignBoard::new(vec![campaign("a", "A"), campaign("b", "B")]);
        board.select_campaign(&campaign("a", "A"));

        board.delete_campaign("b");
        assert!(board.selected.is_some());

        board.delete_campaign("a");
        assert!(board.selected.is_none());
        assert!(board.campaigns.is_empty());
    }

    #[test]
    fn test_logout_then_sign_in() {
        let mut app = app();
        let now = Instant::now();

        app.handle_key(key(KeyCode::Char('L')), now);
        assert!(app.signed_out());
        assert!(app.sidebar.session().stored_user().is_none());

        // Sidebar keys are inert while signed out
        app.handle_key(key(KeyCode::Char('n')), now);
        assert_eq!(app.board.campaigns.len(), 2);

        app.handle_key(key(KeyCode::Enter), now);
        assert!(!app.signed_out());
        assert_eq!(app.sidebar.settings_menu_props().role, "agency");
        assert_eq!(app.sidebar.navigator().current(), "/campaigns");
    }

    #[test]
    fn test_polls_faster_while_settling() {
        let mut app = app();
        let start = Instant::now();
        assert_eq!(app.poll_timeout(), IDLE_POLL);

        app.handle_key(key(KeyCode::Char('[')), start);
        assert_eq!(app.poll_timeout(), SETTLE_POLL);

        app.sidebar.tick(start + Duration::from_millis(300));
        assert_eq!(app.poll_timeout(), IDLE_POLL);
    }

    #[test]
    fn test_starts_signed_out_without_stored_user() {
        let app = App::new(&Config::default(), MemorySessionStore::default(), Vec::new());
        assert!(app.signed_out());
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut app = app();
        let now = Instant::now();

        app.handle_key(key(KeyCode::Char('?')), now);
        assert!(app.show_help);

        app.handle_key(key(KeyCode::Char('[')), now);
        assert!(!app.board.menu_collapsed);

        app.handle_key(key(KeyCode::Esc), now);
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }
}
