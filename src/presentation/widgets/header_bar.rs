use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::domain::entities::SessionFlags;

trait SessionBadgeExt {
    fn indicator(self) -> &'static str;
}

impl SessionBadgeExt for SessionFlags {
    fn indicator(self) -> &'static str {
        if self.contains(Self::LOGGED_IN) {
            "●"
        } else if self.intersects(Self::GUEST.union(Self::SHOW_KYC)) {
            "◐"
        } else {
            "○"
        }
    }
}

pub struct HeaderBarStyle {
    pub background: Style,
    pub app_name: Style,
    pub version: Style,
    pub title: Style,
    pub verified: Style,
    pub guest: Style,
    pub signed_out: Style,
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            app_name: Style::default()
                .bg(Color::Rgb(0, 119, 139))
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            version: Style::default().bg(Color::Rgb(6, 30, 36)).fg(Color::White),
            title: Style::default()
                .fg(Color::Rgb(255, 199, 44))
                .add_modifier(Modifier::BOLD),
            verified: Style::default()
                .bg(Color::Green)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            guest: Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            signed_out: Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Top bar with app name, screen title and session badge.
pub struct HeaderBar<'a> {
    app_name: &'a str,
    version: &'a str,
    title: Option<&'a str>,
    session: SessionFlags,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(app_name: &'a str, version: &'a str) -> Self {
        Self {
            app_name,
            version,
            title: None,
            session: SessionFlags::empty(),
            style: HeaderBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn session(mut self, session: SessionFlags) -> Self {
        self.session = session;
        self
    }

    #[must_use]
    pub const fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    const fn badge_style(&self) -> Style {
        if self.session.contains(SessionFlags::LOGGED_IN) {
            self.style.verified
        } else if self.session.intersects(SessionFlags::GUEST.union(SessionFlags::SHOW_KYC)) {
            self.style.guest
        } else {
            self.style.signed_out
        }
    }

    fn badge_text(&self) -> String {
        format!(" {} {} ", self.session.indicator(), self.session.badge())
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let mut left_spans = vec![
            Span::styled(
                format!(" {} ", self.app_name.to_uppercase()),
                self.style.app_name,
            ),
            Span::raw(" "),
            Span::styled(format!(" v{} ", self.version), self.style.version),
        ];
        if let Some(title) = self.title {
            left_spans.push(Span::raw("  "));
            left_spans.push(Span::styled(title, self.style.title));
        }

        let left_line = Line::from(left_spans);
        let left_width = u16::try_from(left_line.width()).unwrap_or(u16::MAX);
        let left_area = Rect::new(area.x, area.y, left_width.min(area.width), 1);
        Paragraph::new(left_line).render(left_area, buf);

        let badge = self.badge_text();
        let badge_width = u16::try_from(badge.chars().count()).unwrap_or(u16::MAX);

        if badge_width < area.width.saturating_sub(left_width) {
            let right_x = area.right().saturating_sub(badge_width);
            let right_area = Rect::new(right_x, area.y, badge_width, 1);
            Paragraph::new(Span::styled(badge, self.badge_style())).render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_text() {
        let header = HeaderBar::new("bahamas-stack", "0.1.0").session(SessionFlags::GUEST);
        assert_eq!(header.badge_text(), " ◐ GUEST ");

        let header = HeaderBar::new("bahamas-stack", "0.1.0").session(SessionFlags::LOGGED_IN);
        assert_eq!(header.badge_text(), " ● VERIFIED ");
    }

    #[test]
    fn test_renders_name_and_badge() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);

        HeaderBar::new("bahamas-stack", "0.1.0")
            .session(SessionFlags::empty())
            .render(area, &mut buf);

        let line: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(line.starts_with(" BAHAMAS-STACK "));
        assert!(line.trim_end().ends_with("SIGNED OUT"));
    }
}
