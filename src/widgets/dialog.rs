//! Modal dialog: a title block stacked on a content block, borders merged,
//! centred over a cleared area.

use crate::state::{Dialog, DialogKind};
use crate::styles::theme;
use ratatui::layout::Spacing;
use ratatui::prelude::*;
use ratatui::symbols::merge::MergeStrategy;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Widget, Wrap};

pub struct DialogBox<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub kind: DialogKind,
    /// Hint shown in a third block, e.g. `"Enter: OK"`
    pub footer: Option<&'a str>,
    pub min_width: u16,
    pub max_width: u16,
}

impl<'a> DialogBox<'a> {
    pub fn new(title: &'a str, content: &'a str) -> Self {
        Self {
            title,
            content,
            kind: DialogKind::Info,
            footer: None,
            min_width: 40,
            max_width: 70,
        }
    }

    pub fn from_dialog(dialog: &'a Dialog) -> Self {
        Self::new(&dialog.title, &dialog.content).kind(dialog.kind)
    }

    pub fn kind(mut self, kind: DialogKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn footer(mut self, footer: &'a str) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Width from the longest line, clamped to the configured bounds and the
    /// available area.
    fn width_for(&self, area: Rect) -> u16 {
        let longest = self
            .content
            .lines()
            .chain(std::iter::once(self.title))
            .chain(self.footer)
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);
        let wanted = u16::try_from(longest).unwrap_or(u16::MAX).saturating_add(8);
        let upper = self.max_width.min(area.width.saturating_sub(4)).max(1);
        wanted.clamp(self.min_width.min(upper), upper)
    }

    fn border_style(&self) -> Style {
        let t = theme();
        match self.kind {
            DialogKind::Info => t.border_focused_style(),
            DialogKind::Success => t.success_style(),
            DialogKind::Warning => t.warning_style(),
            DialogKind::Error => t.error_style(),
        }
    }
}

impl Widget for DialogBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let width = self.width_for(area);
        let inner_width = width.saturating_sub(6).max(1) as usize;

        // Wrapped content lines, rough but enough to size the box.
        let content_lines: u16 = self
            .content
            .lines()
            .map(|l| (l.chars().count().max(1)).div_ceil(inner_width))
            .sum::<usize>()
            .try_into()
            .unwrap_or(u16::MAX);
        let content_height = content_lines.max(1).saturating_add(2);
        let footer_height: u16 = if self.footer.is_some() { 3 } else { 0 };
        let overlaps: u16 = if self.footer.is_some() { 2 } else { 1 };
        let height = (3 + footer_height - overlaps)
            .saturating_add(content_height)
            .min(area.height);

        let popup = crate::utils::center_fixed(area, width, height);
        Clear.render(popup, buf);

        let mut constraints = vec![Constraint::Length(3), Constraint::Min(3)];
        if self.footer.is_some() {
            constraints.push(Constraint::Length(3));
        }
        let chunks = Layout::vertical(constraints)
            .spacing(Spacing::Overlap(1))
            .split(popup);

        let block = || {
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(self.border_style())
                .padding(Padding::horizontal(2))
                .merge_borders(MergeStrategy::Exact)
        };

        let title_block = block();
        let title_area = title_block.inner(chunks[0]);
        title_block.render(chunks[0], buf);
        Paragraph::new(self.title)
            .alignment(Alignment::Center)
            .style(t.text_style().add_modifier(Modifier::BOLD))
            .render(title_area, buf);

        let content_block = block();
        let content_area = content_block.inner(chunks[1]);
        content_block.render(chunks[1], buf);
        Paragraph::new(self.content)
            .wrap(Wrap { trim: true })
            .style(t.text_style())
            .render(content_area, buf);

        if let Some(footer) = self.footer {
            let footer_block = block();
            let footer_area = footer_block.inner(chunks[2]);
            footer_block.render(chunks[2], buf);
            Paragraph::new(footer)
                .alignment(Alignment::Center)
                .style(t.muted_style())
                .render(footer_area, buf);
        }
    }
}
