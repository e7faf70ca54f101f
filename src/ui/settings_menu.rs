// Settings menu at the foot of the sidebar.
// Shows the signed-in role and the logout key.

use ratatui::{prelude::*, widgets::*};

use crate::state::SettingsMenuProps;

const SETTINGS_ICON: &str = "⚙";

/// Draw the settings menu. Labels are dropped whenever text is hidden.
pub fn draw_settings_menu(frame: &mut Frame, props: &SettingsMenuProps, area: Rect) {
    let mut settings = vec![Span::styled(
        format!(" {} ", SETTINGS_ICON),
        Style::default().fg(Color::Gray),
    )];
    let mut lines = Vec::with_capacity(2);

    if props.text.is_visible() {
        settings.push(Span::styled("Settings", Style::default().fg(Color::White)));
        settings.push(Span::styled(
            format!(" · {}", props.role),
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::from(settings));
        lines.push(Line::from(vec![
            Span::styled("   L", Style::default().fg(Color::Yellow)),
            Span::styled(" Logout", Style::default().fg(Color::DarkGray)),
        ]));
    } else {
        lines.push(Line::from(settings));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
