use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Paragraph, Widget},
};
use tachyonfx::{Effect, Interpolation, fx};

use super::utils::centered_fixed;

const LOGO_TEXT: &str = r"
 ____    _    _   _    _    __  __    _    ____
| __ )  / \  | | | |  / \  |  \/  |  / \  / ___|
|  _ \ / _ \ | |_| | / _ \ | |\/| | / _ \ \___ \
| |_) / ___ \|  _  |/ ___ \| |  | |/ ___ \ ___) |
|____/_/   \_\_| |_/_/   \_\_|  |_/_/   \_\____/";

const TAGLINE: &str = "S  T  A  C  K";

const AQUAMARINE: Color = Color::Rgb(0, 171, 201);
const GOLD: Color = Color::Rgb(255, 199, 44);

/// How long the logo stays between the intro and outro effects.
const HOLD: Duration = Duration::from_millis(700);

#[derive(Default)]
pub struct SplashState {
    pub intro_finished: bool,
    pub held: Duration,
    pub animation_complete: bool,
}

/// Animated logo shown once at start-up.
pub struct SplashScreen {
    intro_effect: Effect,
    outro_effect: Effect,
    pub state: SplashState,
    pending_duration: Duration,
}

impl Default for SplashScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SplashScreen {
    #[must_use]
    pub fn new() -> Self {
        let intro_effect = fx::coalesce((800, Interpolation::CircOut));
        let outro_effect = fx::dissolve((600, Interpolation::CircIn));

        Self {
            intro_effect,
            outro_effect,
            state: SplashState::default(),
            pending_duration: Duration::ZERO,
        }
    }

    pub fn tick(&mut self, duration: Duration) {
        self.pending_duration = self.pending_duration.saturating_add(duration);
        if self.state.intro_finished {
            self.state.held = self.state.held.saturating_add(duration);
        }
    }

    /// Ends the animation immediately.
    pub fn skip(&mut self) {
        self.state.animation_complete = true;
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.state.animation_complete
    }

    fn logo() -> Text<'static> {
        let mut lines: Vec<Line<'static>> = LOGO_TEXT
            .trim_matches('\n')
            .lines()
            .map(|l| Line::styled(l, Style::default().fg(AQUAMARINE)))
            .collect();
        lines.push(Line::default());
        lines.push(Line::styled(
            TAGLINE,
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        ));
        Text::from(lines).centered()
    }
}

impl Widget for &mut SplashScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = SplashScreen::logo();

        let text_width = u16::try_from(text.width()).unwrap_or(0);
        let text_height = u16::try_from(text.height()).unwrap_or(0);

        let center_area = centered_fixed(text_width, text_height, area);

        Paragraph::new(text).render(center_area, buf);

        let duration = self.pending_duration;
        self.pending_duration = Duration::ZERO;

        if !self.state.intro_finished {
            let overflow = self.intro_effect.process(duration.into(), buf, center_area);
            if overflow.is_some() {
                self.state.intro_finished = true;
            }
        } else if self.state.held >= HOLD {
            let overflow = self.outro_effect.process(duration.into(), buf, center_area);
            if overflow.is_some() {
                self.state.animation_complete = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_completes() {
        let mut splash = SplashScreen::new();
        assert!(!splash.is_complete());
        splash.skip();
        assert!(splash.is_complete());
    }

    #[test]
    fn test_hold_counts_only_after_intro() {
        let mut splash = SplashScreen::new();
        splash.tick(Duration::from_millis(500));
        assert_eq!(splash.state.held, Duration::ZERO);

        splash.state.intro_finished = true;
        splash.tick(Duration::from_millis(500));
        assert_eq!(splash.state.held, Duration::from_millis(500));
    }

    #[test]
    fn test_plays_to_completion() {
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        let mut splash = SplashScreen::new();

        for _ in 0..200 {
            splash.tick(Duration::from_millis(33));
            (&mut splash).render(area, &mut buf);
            if splash.is_complete() {
                break;
            }
        }

        assert!(splash.is_complete());
    }
}
