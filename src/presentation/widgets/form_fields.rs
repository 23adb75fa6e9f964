//! Vertical list of editable form fields.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::Widget,
};

use super::{SelectInput, TextInput};
use crate::domain::entities::{FieldKind, FieldSpec};

const FIELD_HEIGHT: u16 = 3;

#[derive(Debug, Clone)]
enum FieldEditor {
    Text(TextInput),
    Select(SelectInput),
}

impl FieldEditor {
    fn for_spec(spec: &FieldSpec) -> Self {
        let label = if spec.required {
            format!(" {} * ", spec.label)
        } else {
            format!(" {} ", spec.label)
        };

        match spec.kind {
            FieldKind::Select(options) => {
                Self::Select(SelectInput::new(label, options).placeholder(spec.placeholder))
            }
            FieldKind::Amount => {
                Self::Text(TextInput::new(label).placeholder(format!("$ {}", spec.placeholder)))
            }
            FieldKind::Text | FieldKind::Date => {
                Self::Text(TextInput::new(label).placeholder(spec.placeholder))
            }
        }
    }

    fn value(&self) -> &str {
        match self {
            Self::Text(input) => input.value(),
            Self::Select(select) => select.value(),
        }
    }

    fn set_focused(&mut self, focused: bool) {
        match self {
            Self::Text(input) => input.set_focused(focused),
            Self::Select(select) => select.set_focused(focused),
        }
    }

    fn clear(&mut self) {
        match self {
            Self::Text(input) => input.clear(),
            Self::Select(select) => select.clear(),
        }
    }

    /// Returns whether the value changed.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let before = self.value().to_string();
        match self {
            Self::Text(input) => match key.code {
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    input.input_char(c);
                }
                KeyCode::Backspace => input.backspace(),
                KeyCode::Delete => input.delete(),
                KeyCode::Left => input.move_left(),
                KeyCode::Right => input.move_right(),
                KeyCode::Home => input.move_start(),
                KeyCode::End => input.move_end(),
                _ => {}
            },
            Self::Select(select) => match key.code {
                KeyCode::Right | KeyCode::Char(' ') => select.next(),
                KeyCode::Left => select.previous(),
                KeyCode::Backspace | KeyCode::Delete => select.clear(),
                _ => {}
            },
        }
        self.value() != before
    }
}

/// Editors for a declared field set, with one focused at a time.
#[derive(Debug, Clone)]
pub struct FieldList {
    specs: &'static [FieldSpec],
    editors: Vec<FieldEditor>,
    focus: usize,
}

impl FieldList {
    /// Creates empty editors for `specs`, focusing the first.
    #[must_use]
    pub fn new(specs: &'static [FieldSpec]) -> Self {
        let mut list = Self {
            specs,
            editors: specs.iter().map(FieldEditor::for_spec).collect(),
            focus: 0,
        };
        list.sync_focus();
        list
    }

    /// Returns key of the focused field.
    #[must_use]
    pub fn focused_key(&self) -> Option<&'static str> {
        self.specs.get(self.focus).map(|spec| spec.key)
    }

    /// Returns value shown for `key`.
    #[must_use]
    pub fn value(&self, key: &str) -> &str {
        self.specs
            .iter()
            .position(|spec| spec.key == key)
            .map_or("", |i| self.editors[i].value())
    }

    /// Moves focus down, wrapping.
    pub fn focus_next(&mut self) {
        if !self.editors.is_empty() {
            self.focus = (self.focus + 1) % self.editors.len();
            self.sync_focus();
        }
    }

    /// Moves focus up, wrapping.
    pub fn focus_previous(&mut self) {
        if !self.editors.is_empty() {
            self.focus = self.focus.checked_sub(1).unwrap_or(self.editors.len() - 1);
            self.sync_focus();
        }
    }

    fn sync_focus(&mut self) {
        for (i, editor) in self.editors.iter_mut().enumerate() {
            editor.set_focused(i == self.focus);
        }
    }

    /// Empties every editor and refocuses the first.
    pub fn clear(&mut self) {
        for editor in &mut self.editors {
            editor.clear();
        }
        self.focus = 0;
        self.sync_focus();
    }

    /// Routes navigation and edit keys.
    ///
    /// Returns the field key and its new value when an edit changed it.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<(&'static str, String)> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_previous();
                None
            }
            _ => {
                let spec = self.specs.get(self.focus)?;
                let editor = self.editors.get_mut(self.focus)?;
                editor
                    .handle_key(key)
                    .then(|| (spec.key, editor.value().to_string()))
            }
        }
    }

    /// Rows needed to show every field.
    #[must_use]
    pub fn height(&self) -> u16 {
        u16::try_from(self.editors.len())
            .unwrap_or(u16::MAX)
            .saturating_mul(FIELD_HEIGHT)
    }
}

impl Widget for &FieldList {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible = usize::from(area.height / FIELD_HEIGHT).max(1);
        let first = (self.focus + 1).saturating_sub(visible);

        let mut y = area.y;
        for editor in self.editors.iter().skip(first).take(visible) {
            if y + FIELD_HEIGHT > area.bottom() {
                break;
            }
            let row = Rect::new(area.x, y, area.width, FIELD_HEIGHT);
            match editor {
                FieldEditor::Text(input) => input.render(row, buf),
                FieldEditor::Select(select) => select.render(row, buf),
            }
            y += FIELD_HEIGHT;
        }
    }
}
