//! Start-up branding. Leaves on its own when the splash timer fires.

use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::ScreenState;
use crate::styles::theme;
use crate::utils::center_fixed;
use crate::widgets::FitNourishLogo;
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

#[derive(Debug, Default)]
pub struct SplashScreen;

impl SplashScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for SplashScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let logo = FitNourishLogo::banner();
        let box_area = center_fixed(area, logo.width().max(44), logo.height() + 5);

        let [logo_row, _, tagline_row, _, loading_row] = Layout::vertical([
            Constraint::Length(logo.height()),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(box_area);

        let logo_area = center_fixed(logo_row, logo.width(), logo.height());
        frame.render_widget(logo, logo_area);
        frame.render_widget(
            Paragraph::new(ScreenState::Splash.subtitle())
                .style(t.text_style())
                .alignment(Alignment::Center),
            tagline_row,
        );
        frame.render_widget(
            Paragraph::new(Line::styled(
                format!("{} Loading FitNourish.AI...", ctx.spinner()),
                t.muted_style(),
            ))
            .alignment(Alignment::Center),
            loading_row,
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press
                && ctx.config.keymap.get_action(key.code, key.modifiers) == Some(Action::Quit)
            {
                return Ok(ScreenAction::Quit);
            }
        }
        Ok(ScreenAction::None)
    }
}
