use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::borrow::Cow;

/// Key hint shown in the footer bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: KeyEvent,
    pub label: Cow<'static, str>,
    pub visible_in_bar: bool,
}

impl Keybind {
    pub fn new(key: KeyEvent, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            label: label.into(),
            visible_in_bar: true,
        }
    }

    pub fn plain(code: KeyCode, label: impl Into<Cow<'static, str>>) -> Self {
        Self::new(KeyEvent::new(code, KeyModifiers::NONE), label)
    }

    pub fn ctrl(c: char, label: impl Into<Cow<'static, str>>) -> Self {
        Self::new(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL), label)
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }
}
