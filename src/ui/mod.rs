// UI module for rendering the TUI.
// Lays out the campaign sidebar, the campaign detail pane, and the status bar.

mod modal;
mod settings_menu;
pub mod sidebar;

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::campaign::format_calendar_date;
use crate::session::SessionStore;
use crate::state::SidebarWidth;

/// Main draw function that renders the entire UI.
pub fn draw<S: SessionStore>(frame: &mut Frame, app: &mut App<S>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Sidebar + content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    if app.signed_out() {
        draw_signed_out(frame, rows[0]);
        draw_status_bar(frame, app, rows[1]);
        return;
    }

    // Pane width follows the parent's copy of the collapsed flag
    let width = SidebarWidth::for_collapsed(app.board.menu_collapsed).columns();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(width), Constraint::Min(1)])
        .split(rows[0]);

    let props = app.board.props();
    sidebar::draw_sidebar(frame, &mut app.sidebar, &props, columns[0]);
    draw_campaign_detail(frame, app, columns[1]);
    draw_status_bar(frame, app, rows[1]);

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        modal::draw_help_modal(frame);
    }
}

/// Draw the selected campaign, or a hint when nothing is selected.
fn draw_campaign_detail<S: SessionStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Campaign ");

    let Some(campaign) = &app.board.selected else {
        let text = Paragraph::new("Select a campaign with ↵ or press n to start a new one")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, area);
        return;
    };

    let label = |name: &'static str| Span::styled(name, Style::default().fg(Color::DarkGray));
    let date_style = app.sidebar.options().date_style;

    let mut lines = vec![
        Line::from(Span::styled(
            campaign.name.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            label("Updated  "),
            Span::raw(format_calendar_date(&campaign.updated_at, date_style)),
        ]),
        Line::from(vec![label("Id       "), Span::raw(campaign.id.clone())]),
    ];
    if let Some(client) = campaign.client_tag() {
        lines.push(Line::from(vec![
            label("Client   "),
            Span::styled(client.to_string(), Style::default().fg(Color::LightBlue)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw the signed-out screen shown on the login route.
fn draw_signed_out(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Signed out ");
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from("You have been signed out."),
        Line::from(vec![
            Span::styled("↵", Style::default().fg(Color::Yellow)),
            Span::raw(" sign in   "),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(" quit"),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(block);
    frame.render_widget(text, area);
}

/// Draw the status bar at the bottom of the screen.
fn draw_status_bar<S: SessionStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let hints = if app.signed_out() {
        vec![
            Span::raw(" ↵ "),
            Span::styled("Sign in", Style::default().fg(Color::DarkGray)),
            Span::raw("  q "),
            Span::styled("Quit", Style::default().fg(Color::DarkGray)),
        ]
    } else {
        vec![
            Span::raw(" ↑↓ "),
            Span::styled("Navigate", Style::default().fg(Color::DarkGray)),
            Span::raw("  ↵ "),
            Span::styled("Select", Style::default().fg(Color::DarkGray)),
            Span::raw("  n "),
            Span::styled("New", Style::default().fg(Color::DarkGray)),
            Span::raw("  [ "),
            Span::styled(
                if app.sidebar.is_collapsed() { "Expand" } else { "Collapse" },
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw("  L "),
            Span::styled("Logout", Style::default().fg(Color::DarkGray)),
            Span::raw("  ? "),
            Span::styled("Help", Style::default().fg(Color::DarkGray)),
            Span::raw("  q "),
            Span::styled("Quit", Style::default().fg(Color::DarkGray)),
        ]
    };

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}
