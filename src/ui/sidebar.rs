// Campaign sidebar rendering.
// Header with the collapse toggle, the campaign list, and the footer with
// the new-campaign action and the settings menu.

use ratatui::{prelude::*, widgets::*};

use crate::session::SessionStore;
use crate::state::{CampaignRow, Navigator, Sidebar, SidebarProps};

use super::settings_menu;

const MAIL_ICON: &str = "✉";
const TAG_ICON: &str = "⚑";
const NEW_ICON: &str = "⊕";
const EXPANDED_TOGGLE: &str = "«";
const COLLAPSED_TOGGLE: &str = "☰";

/// Draw the sidebar into `area`.
pub fn draw_sidebar<S: SessionStore, N: Navigator>(
    frame: &mut Frame,
    sidebar: &mut Sidebar<S, N>,
    props: &SidebarProps<'_>,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(1),    // Campaign list
            Constraint::Length(4), // New campaign + settings
        ])
        .split(inner);

    draw_header(frame, sidebar, chunks[0]);
    draw_campaigns(frame, sidebar, props, chunks[1]);
    draw_footer(frame, sidebar, chunks[2]);
}

fn draw_header<S: SessionStore, N: Navigator>(
    frame: &mut Frame,
    sidebar: &Sidebar<S, N>,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if sidebar.is_collapsed() {
        let toggle = Paragraph::new(COLLAPSED_TOGGLE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(toggle, inner);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(2)])
        .split(inner);

    // Mail icon and title fade out together with the other labels
    if sidebar.text().is_visible() {
        let title = Line::from(vec![
            Span::styled(format!(" {} ", MAIL_ICON), Style::default().fg(Color::Blue)),
            Span::styled(
                "My Campaigns",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(title), chunks[0]);
    }

    let toggle = Paragraph::new(EXPANDED_TOGGLE).style(Style::default().fg(Color::Gray));
    frame.render_widget(toggle, chunks[1]);
}

fn draw_campaigns<S: SessionStore, N: Navigator>(
    frame: &mut Frame,
    sidebar: &mut Sidebar<S, N>,
    props: &SidebarProps<'_>,
    area: Rect,
) {
    let rows = sidebar.rows(props);
    if rows.is_empty() {
        if sidebar.text().is_visible() {
            let text = Paragraph::new("No campaigns yet")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(text, area);
        }
        return;
    }

    sidebar.clamp_cursor(rows.len());
    let items: Vec<ListItem> = rows.iter().map(campaign_item).collect();

    // Icon-only rows have no room for a marker, so the cursor row is inverted
    let (highlight_style, highlight_symbol) = if sidebar.is_collapsed() {
        (Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED), "")
    } else {
        (Style::default().add_modifier(Modifier::BOLD), "> ")
    };
    let list_widget = List::new(items)
        .highlight_style(highlight_style)
        .highlight_symbol(highlight_symbol);

    frame.render_stateful_widget(list_widget, area, sidebar.list_state_mut());
}

/// Build the list item for one row.
fn campaign_item(row: &CampaignRow) -> ListItem<'static> {
    let row_style = if row.selected {
        Style::default().fg(Color::White).bg(Color::Blue)
    } else {
        Style::default().fg(Color::Gray)
    };

    if row.icon_only {
        return ListItem::new(Line::from(MAIL_ICON).alignment(Alignment::Center)).style(row_style);
    }

    let mut lines = vec![
        Line::from(Span::styled(
            row.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            row.date.clone(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    if let Some(tag) = &row.tag {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", TAG_ICON), Style::default().fg(Color::Cyan)),
            Span::styled(tag.clone(), Style::default().fg(Color::LightBlue)),
        ]));
    }
    // Spacer between rows
    lines.push(Line::from(""));

    ListItem::new(lines).style(row_style)
}

fn draw_footer<S: SessionStore, N: Navigator>(
    frame: &mut Frame,
    sidebar: &Sidebar<S, N>,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let mut spans = vec![Span::styled(
        format!(" {} ", NEW_ICON),
        Style::default().fg(Color::Blue),
    )];
    if sidebar.text().is_visible() {
        spans.push(Span::styled("New Campaign", Style::default().fg(Color::Blue)));
        spans.push(Span::styled(" (n)", Style::default().fg(Color::DarkGray)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    settings_menu::draw_settings_menu(frame, &sidebar.settings_menu_props(), chunks[1]);
}
