//! Dashboard with the welcome card and quick actions.

use crate::components::{Footer, Header};
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::ScreenState;
use crate::styles::theme;
use crate::utils::create_standard_layout;
use crate::widgets::{Menu, MenuItem, MenuState, BRAND};
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};
use ratatui::Frame;

/// (label, value, note) shown on the welcome card.
const STATS: [(&str, &str, &str); 3] = [
    ("Steps", "7,500", "Goal 10,000"),
    ("Active", "60 min", "Good"),
    ("Stress", "55", "Moderate"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuickAction {
    Predict,
    History,
    Smartwatch,
    Logout,
}

impl QuickAction {
    const ALL: [QuickAction; 4] = [
        QuickAction::Predict,
        QuickAction::History,
        QuickAction::Smartwatch,
        QuickAction::Logout,
    ];

    fn item(self) -> MenuItem {
        match self {
            QuickAction::Predict => MenuItem::new(
                "🍽",
                "Calculate Daily Calories & Macros",
                "Personalised kcal, protein, carbs and fat targets",
            ),
            QuickAction::History => {
                MenuItem::new("📜", "View History", "Previous predictions and trends")
            }
            QuickAction::Smartwatch => {
                MenuItem::new("⌚", "Sync Smartwatch", "Import steps and heart rate")
            }
            QuickAction::Logout => MenuItem::new("⎋", "Logout", "Return to the sign in screen"),
        }
    }

    fn action(self) -> ScreenAction {
        match self {
            QuickAction::Predict => ScreenAction::OpenForm,
            QuickAction::History => ScreenAction::ShowMessage {
                title: "View History".to_string(),
                content: "This card is a UI demo for the presentation.".to_string(),
            },
            QuickAction::Smartwatch => ScreenAction::ShowMessage {
                title: "Sync Smartwatch".to_string(),
                content: "Wearable sync is shown as future integration.".to_string(),
            },
            QuickAction::Logout => ScreenAction::Logout,
        }
    }
}

pub struct HomeScreen {
    items: Vec<MenuItem>,
    menu: MenuState,
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeScreen {
    pub fn new() -> Self {
        let mut menu = MenuState::new();
        menu.select(Some(0));
        Self {
            items: QuickAction::ALL.iter().map(|a| a.item()).collect(),
            menu,
        }
    }

    fn selected(&self) -> QuickAction {
        self.menu
            .selected()
            .and_then(|i| QuickAction::ALL.get(i).copied())
            .unwrap_or(QuickAction::Predict)
    }

    fn render_welcome(frame: &mut Frame, area: Rect) {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .padding(Padding::horizontal(2));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [greeting, stats] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(3)]).areas(inner);
        frame.render_widget(
            Paragraph::new(vec![
                Line::styled("Welcome back, Demo User", t.title_style()),
                Line::styled("Here is how today is going.", t.muted_style()),
            ]),
            greeting,
        );

        let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(stats);
        for ((label, value, note), column) in STATS.iter().zip(columns.iter()) {
            frame.render_widget(
                Paragraph::new(vec![
                    Line::styled(*label, t.muted_style()),
                    Line::styled(*value, t.accent_style()),
                    Line::styled(*note, t.text_style()),
                ])
                .alignment(Alignment::Center),
                *column,
            );
        }
    }
}

impl Screen for HomeScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let (header, content, footer) = create_standard_layout(area, 3, 2);
        Header::render(frame, header, BRAND, ScreenState::Home.subtitle())?;

        let [welcome, heading, menu_area] = Layout::vertical([
            Constraint::Length(7),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .areas(content);

        Self::render_welcome(frame, welcome);
        frame.render_widget(
            Paragraph::new(Line::from(vec![Span::styled(" Quick Actions", t.title_style())])),
            heading,
        );
        frame.render_stateful_widget(Menu::new(&self.items), menu_area, &mut self.menu);

        let keymap = &ctx.config.keymap;
        let footer_text = format!(
            "Navigate: {}/{} | Open: {} | Help: {} | Quit: {}",
            keymap.key_display(Action::MoveUp),
            keymap.key_display(Action::MoveDown),
            keymap.key_display(Action::Confirm),
            keymap.key_display(Action::Help),
            keymap.key_display(Action::Quit),
        );
        Footer::render(frame, footer, &footer_text)?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(ScreenAction::None);
        }

        let Some(action) = ctx.config.keymap.get_action(key.code, key.modifiers) else {
            return Ok(ScreenAction::None);
        };
        match action {
            Action::MoveUp | Action::PrevField => {
                self.menu.select_previous(self.items.len());
                Ok(ScreenAction::None)
            }
            Action::MoveDown | Action::NextField => {
                self.menu.select_next(self.items.len());
                Ok(ScreenAction::None)
            }
            Action::Confirm => Ok(self.selected().action()),
            Action::Help => Ok(ScreenAction::ShowHelp),
            Action::Quit => Ok(ScreenAction::Quit),
            _ => Ok(ScreenAction::None),
        }
    }

    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        self.menu.select(Some(0));
        Ok(())
    }
}
