//! Card-style menu: each item takes three rows (title, description, spacer)
//! and the selected one gets a bar and highlight background.

use crate::styles::theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

const ITEM_HEIGHT: u16 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl MenuItem {
    pub fn new(
        icon: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MenuState {
    selected: Option<usize>,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Move down, wrapping to the top.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| (i + 1) % len));
    }

    /// Move up, wrapping to the bottom.
    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(self.selected.map_or(len - 1, |i| (i + len - 1) % len));
    }
}

#[derive(Debug, Clone)]
pub struct Menu<'a> {
    items: &'a [MenuItem],
}

impl<'a> Menu<'a> {
    pub fn new(items: &'a [MenuItem]) -> Self {
        Self { items }
    }

    /// Rows needed to show every card.
    pub fn height(&self) -> u16 {
        u16::try_from(self.items.len())
            .unwrap_or(u16::MAX)
            .saturating_mul(ITEM_HEIGHT)
    }
}

impl StatefulWidget for Menu<'_> {
    type State = MenuState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let t = theme();
        for (i, item) in self.items.iter().enumerate() {
            let offset = u16::try_from(i).unwrap_or(u16::MAX).saturating_mul(ITEM_HEIGHT);
            let y = area.y.saturating_add(offset);
            if y.saturating_add(ITEM_HEIGHT - 1) > area.bottom() {
                break;
            }

            let selected = state.selected == Some(i);
            let base = if selected {
                t.highlight_style()
            } else {
                t.text_style()
            };
            let bar = if selected {
                Span::styled("▌ ", t.border_focused_style())
            } else {
                Span::raw("  ")
            };

            let width = area.width as usize;
            let pad = |line: Line<'static>, style: Style| {
                let used = line.width();
                let mut spans = line.spans;
                spans.push(Span::styled(" ".repeat(width.saturating_sub(used)), style));
                Line::from(spans)
            };

            let title = pad(
                Line::from(vec![
                    bar.clone(),
                    Span::styled(format!("{} ", item.icon), base),
                    Span::styled(item.title.clone(), base.add_modifier(Modifier::BOLD)),
                ]),
                base,
            );
            title.render(Rect::new(area.x, y, area.width, 1), buf);

            let description_style = if selected { base } else { t.muted_style() };
            let description = pad(
                Line::from(vec![
                    bar,
                    Span::styled(format!("   {}", item.description), description_style),
                ]),
                base,
            );
            description.render(Rect::new(area.x, y + 1, area.width, 1), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_wraps() {
        let mut state = MenuState::new();
        state.select_next(3);
        assert_eq!(state.selected(), Some(0));
        state.select_previous(3);
        assert_eq!(state.selected(), Some(2));
        state.select_next(3);
        assert_eq!(state.selected(), Some(0));
        state.select_next(0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_height() {
        let items = vec![
            MenuItem::new("🍽", "One", "first"),
            MenuItem::new("📜", "Two", "second"),
        ];
        assert_eq!(Menu::new(&items).height(), 6);
    }

    #[test]
    fn test_renders_titles() {
        let items = vec![MenuItem::new("⌚", "Sync Smartwatch", "Coming soon")];
        let mut state = MenuState::new();
        state.select(Some(0));
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        Menu::new(&items).render(area, &mut buf, &mut state);
        let row: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(row.contains("Sync Smartwatch"));
    }
}
