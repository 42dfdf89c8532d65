//! Bordered single-line input rendered from a [`TextInput`].

use crate::styles::theme;
use crate::utils::text_input::TextInput;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// ```
/// use fitnourish::utils::TextInput;
/// use fitnourish::widgets::TextInputWidget;
///
/// let input = TextInput::with_text("demo");
/// let widget = TextInputWidget::new(&input)
///     .title("Username")
///     .placeholder("Enter username")
///     .focused(true);
/// // frame.render_text_input_widget(widget, area);
/// ```
pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    title: Option<&'a str>,
    placeholder: Option<&'a str>,
    /// Shown as the bottom border title, e.g. a field hint
    helper: Option<&'a str>,
    focused: bool,
    disabled: bool,
    masked: bool,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            title: None,
            placeholder: None,
            helper: None,
            focused: false,
            disabled: false,
            masked: false,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn helper(mut self, helper: Option<&'a str>) -> Self {
        self.helper = helper;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Render bullets instead of the text.
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    fn display_text(&self) -> String {
        if self.input.text().is_empty() {
            self.placeholder.unwrap_or_default().to_string()
        } else if self.masked {
            self.input.masked('•')
        } else {
            self.input.text().to_string()
        }
    }

    fn text_style(&self) -> Style {
        let t = theme();
        if self.disabled || self.input.text().is_empty() {
            t.disabled_style()
        } else {
            t.text_style()
        }
    }

    fn block(&self) -> Block<'a> {
        let t = theme();
        let border_style = if self.disabled {
            t.disabled_style()
        } else if self.focused {
            t.border_focused_style()
        } else {
            t.border_style()
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        if let Some(title) = self.title {
            let title_style = if self.focused {
                t.title_style()
            } else {
                t.text_style()
            };
            block = block.title(Line::styled(format!(" {} ", title), title_style));
        }
        if let Some(helper) = self.helper {
            block = block.title_bottom(Line::styled(format!(" {} ", helper), t.muted_style()));
        }
        block
    }

    /// Where the terminal cursor belongs, if it should be shown at all.
    fn cursor_position(&self, area: Rect) -> Option<Position> {
        if !self.focused || self.disabled {
            return None;
        }
        let inner = self.block().inner(area);
        let offset = u16::try_from(self.input.cursor()).unwrap_or(u16::MAX);
        Some(Position::new(
            inner.x + offset.min(inner.width.saturating_sub(1)),
            inner.y,
        ))
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.display_text())
            .block(self.block())
            .style(self.text_style())
            .render(area, buf);
    }
}

/// Render a [`TextInputWidget`] and place the terminal cursor in it.
pub trait TextInputWidgetExt {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect);
}

impl TextInputWidgetExt for Frame<'_> {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect) {
        let cursor = widget.cursor_position(area);
        self.render_widget(widget, area);
        if let Some(position) = cursor {
            self.set_cursor_position(position);
        }
    }
}
