//! Credential entry.

use crate::components::{Footer, Header};
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::ScreenState;
use crate::styles::theme;
use crate::utils::{center_fixed, create_standard_layout, TextInput};
use crate::widgets::{TextInputWidget, TextInputWidgetExt, BRAND};
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};
use ratatui::Frame;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Focus {
    #[default]
    Username,
    Password,
    Button,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Username => Focus::Password,
            Focus::Password => Focus::Button,
            Focus::Button => Focus::Username,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Username => Focus::Button,
            Focus::Password => Focus::Username,
            Focus::Button => Focus::Password,
        }
    }
}

#[derive(Debug, Default)]
pub struct LoginScreen {
    username: TextInput,
    password: TextInput,
    focus: Focus,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            Focus::Username => Some(&mut self.username),
            Focus::Password => Some(&mut self.password),
            Focus::Button => None,
        }
    }

    /// Edit action for the focused field, reported back as the new value.
    fn edited(&self) -> ScreenAction {
        match self.focus {
            Focus::Username => ScreenAction::SetUsername(self.username.text().to_string()),
            Focus::Password => ScreenAction::SetPassword(self.password.text().to_string()),
            Focus::Button => ScreenAction::None,
        }
    }

    fn footer_text(ctx: &RenderContext) -> String {
        let keymap = &ctx.config.keymap;
        format!(
            "Next field: {} | Login: {} | Quit: Ctrl+C",
            keymap.key_display(Action::NextField),
            keymap.key_display(Action::Confirm),
        )
    }
}

impl Screen for LoginScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let (header, content, footer) = create_standard_layout(area, 3, 2);
        Header::render(frame, header, BRAND, ScreenState::Login.subtitle())?;

        let card = center_fixed(content, 52, 16);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style())
            .title(Line::styled(" Welcome Back ", t.title_style()))
            .title_alignment(Alignment::Center)
            .padding(Padding::new(2, 2, 1, 0));
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let [intro, user_row, pass_row, error_row, button_row, hint_row] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new("Sign in to continue your wellness journey").style(t.muted_style()),
            intro,
        );
        frame.render_text_input_widget(
            TextInputWidget::new(&self.username)
                .title("Username")
                .placeholder("Enter username")
                .focused(self.focus == Focus::Username),
            user_row,
        );
        frame.render_text_input_widget(
            TextInputWidget::new(&self.password)
                .title("Password")
                .placeholder("Enter password")
                .masked(true)
                .focused(self.focus == Focus::Password),
            pass_row,
        );
        if let Some(error) = ctx.controller.login_error() {
            frame.render_widget(Paragraph::new(error).style(t.error_style()), error_row);
        }

        let button_style = if self.focus == Focus::Button {
            t.button_style()
        } else {
            t.accent_style()
        };
        frame.render_widget(
            Paragraph::new(Line::styled("  Login  ", button_style)).alignment(Alignment::Center),
            button_row,
        );
        frame.render_widget(
            Paragraph::new("Use demo / 1234")
                .style(t.muted_style())
                .alignment(Alignment::Center),
            hint_row,
        );

        Footer::render(frame, footer, &Self::footer_text(ctx))?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(ScreenAction::None);
        }

        let keymap = &ctx.config.keymap;
        let action = if self.is_input_focused() {
            keymap.get_action_while_typing(key.code, key.modifiers)
        } else {
            keymap.get_action(key.code, key.modifiers)
        };

        match action {
            Some(Action::NextField | Action::MoveDown) => {
                self.focus = self.focus.next();
                Ok(ScreenAction::None)
            }
            Some(Action::PrevField | Action::MoveUp) => {
                self.focus = self.focus.prev();
                Ok(ScreenAction::None)
            }
            Some(Action::Confirm) => {
                if self.focus == Focus::Username {
                    self.focus = Focus::Password;
                    Ok(ScreenAction::None)
                } else {
                    Ok(ScreenAction::Login)
                }
            }
            Some(Action::Quit) => Ok(ScreenAction::Quit),
            Some(Action::Help) => Ok(ScreenAction::ShowHelp),
            Some(other) => {
                let handled = self
                    .focused_input()
                    .is_some_and(|input| input.handle_action(other));
                Ok(if handled { self.edited() } else { ScreenAction::None })
            }
            None => {
                let handled = self
                    .focused_input()
                    .is_some_and(|input| input.handle_key(key.code));
                Ok(if handled { self.edited() } else { ScreenAction::None })
            }
        }
    }

    fn is_input_focused(&self) -> bool {
        self.focus != Focus::Button
    }

    /// Show the controller's credentials; they reset to the demo pair on
    /// logout.
    fn on_enter(&mut self, ctx: &ScreenContext) -> Result<()> {
        let credentials = ctx.controller.credentials();
        self.username.set_text(credentials.username.clone());
        self.password.set_text(credentials.password.clone());
        self.focus = Focus::Username;
        Ok(())
    }
}
