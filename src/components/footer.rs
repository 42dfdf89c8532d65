use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Key hint bar. Text is `"Label: keys | Label: keys"`.
pub struct Footer;

impl Footer {
    /// Returns the height used (top border plus one line).
    pub fn render(frame: &mut Frame, area: Rect, text: &str) -> Result<u16> {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(theme().border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Self::line(text)).alignment(Alignment::Center),
            inner,
        );
        Ok(2)
    }

    /// Style each `label: keys` segment, separators muted.
    pub fn line(text: &str) -> Line<'_> {
        let t = theme();
        let mut spans = Vec::new();
        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", t.muted_style()));
            }
            match part.split_once(": ") {
                Some((label, keys)) => {
                    spans.push(Span::styled(format!("{}: ", label), t.text_style()));
                    spans.push(Span::styled(keys, t.accent_style()));
                }
                None => spans.push(Span::styled(part, t.text_style())),
            }
        }
        Line::from(spans)
    }
}
