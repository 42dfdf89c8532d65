use crate::styles::theme;
use crate::widgets::FitNourishLogo;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

/// Bordered header with the logo on the left and a description beside it.
pub struct Header;

impl Header {
    /// Render into `area` (3 rows is enough). Returns the height used.
    pub fn render(frame: &mut Frame, area: Rect, title: &str, description: &str) -> Result<u16> {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_focused_style())
            .title(format!(" {} ", title))
            .title_style(t.title_style())
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let logo = FitNourishLogo::small();
        let [logo_area, desc_area] =
            Layout::horizontal([Constraint::Length(logo.width() + 2), Constraint::Min(0)])
                .areas(inner);
        frame.render_widget(logo, logo_area);

        let lines = u16::try_from(description.lines().count()).unwrap_or(u16::MAX);
        let top = desc_area.height.saturating_sub(lines) / 2;
        let [_, desc_area] =
            Layout::vertical([Constraint::Length(top), Constraint::Min(0)]).areas(desc_area);
        frame.render_widget(
            Paragraph::new(description)
                .style(t.text_style())
                .wrap(Wrap { trim: true }),
            desc_area,
        );

        Ok(area.height)
    }
}
