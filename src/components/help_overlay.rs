//! Help overlay listing the active key bindings.

use crate::keymap::{Keymap, KeymapPreset};
use crate::styles::theme;
use crate::utils::center_popup;
use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

const PRESETS: [KeymapPreset; 2] = [KeymapPreset::Standard, KeymapPreset::Vim];

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap, config_path: &str) -> Result<()> {
        let t = theme();
        let popup = center_popup(area, 80, 85);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .title(format!(" Keyboard Shortcuts - {} ", keymap.preset.name()))
            .title_alignment(Alignment::Center);
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let [presets_area, bindings_area, footer_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .areas(inner);

        let mut preset_spans = vec![Span::styled(" Preset: ", t.muted_style())];
        for (i, preset) in PRESETS.iter().enumerate() {
            let label = format!("{} {}  ", i + 1, preset.name());
            let style = if *preset == keymap.preset {
                t.highlight_style()
            } else {
                t.muted_style()
            };
            preset_spans.push(Span::styled(label, style));
        }
        frame.render_widget(Paragraph::new(Line::from(preset_spans)), presets_area);

        frame.render_widget(Paragraph::new(Self::binding_lines(keymap)), bindings_area);

        let footer = format!(
            "Overrides live in {}\n1/2 switch preset, any other key closes",
            config_path
        );
        frame.render_widget(
            Paragraph::new(footer)
                .style(t.muted_style())
                .alignment(Alignment::Center),
            footer_area,
        );
        Ok(())
    }

    /// Bindings grouped under their category headings, categories in order of
    /// first appearance.
    pub fn binding_lines(keymap: &Keymap) -> Vec<Line<'static>> {
        let t = theme();
        let bindings = keymap.all_bindings();
        let mut categories: Vec<&'static str> = Vec::new();
        for binding in &bindings {
            let category = binding.action.category();
            if !categories.contains(&category) {
                categories.push(category);
            }
        }

        let mut lines = Vec::new();
        for category in categories {
            if !lines.is_empty() {
                lines.push(Line::default());
            }
            lines.push(Line::styled(format!("  {}", category), t.title_style()));
            for binding in bindings.iter().filter(|b| b.action.category() == category) {
                lines.push(Line::from(vec![
                    Span::styled(format!("    {:14}", binding.display()), t.accent_style()),
                    Span::styled(binding.get_description().to_string(), t.text_style()),
                ]));
            }
        }
        lines
    }

    /// Preset chosen by a key press while the overlay is open.
    pub fn preset_for_key(code: KeyCode) -> Option<KeymapPreset> {
        match code {
            KeyCode::Char(c) => c
                .to_digit(10)
                .and_then(|d| d.checked_sub(1))
                .and_then(|i| PRESETS.get(i as usize).copied()),
            _ => None,
        }
    }
}
