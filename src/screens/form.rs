//! Prediction form: sectioned inputs, the submit button and the result card.

use crate::components::{Footer, Header};
use crate::keymap::Action;
use crate::nutrition::{FormField, PredictionResult, SECTIONS};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::ScreenState;
use crate::styles::theme;
use crate::utils::{create_standard_layout, TextInput};
use crate::widgets::{TextInputWidget, TextInputWidgetExt, BRAND};
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, BorderType, Borders, Padding, Paragraph, Scrollbar, ScrollbarOrientation,
    ScrollbarState, Wrap,
};
use ratatui::Frame;

const FIELD_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Field(FormField),
    Button,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Field(FormField::StressScore) => Focus::Button,
            Focus::Field(field) => Focus::Field(field.next()),
            Focus::Button => Focus::Field(FormField::Age),
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Field(FormField::Age) => Focus::Button,
            Focus::Field(field) => Focus::Field(field.prev()),
            Focus::Button => Focus::Field(FormField::StressScore),
        }
    }
}

/// One row of the scrolling field list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    SectionTitle(&'static str),
    SectionSubtitle(&'static str),
    Field(FormField),
    Gap,
}

impl Row {
    fn height(&self) -> u16 {
        match self {
            Row::Field(_) => FIELD_HEIGHT,
            _ => 1,
        }
    }
}

/// Rows of the field list with their offsets from the top.
fn rows() -> Vec<(u16, Row)> {
    let mut rows = Vec::new();
    let mut y = 0;
    let mut push = |row: Row| {
        rows.push((y, row));
        y += row.height();
    };
    for (i, section) in SECTIONS.iter().enumerate() {
        if i > 0 {
            push(Row::Gap);
        }
        push(Row::SectionTitle(section.title));
        push(Row::SectionSubtitle(section.subtitle));
        for field in section.fields {
            push(Row::Field(*field));
        }
    }
    rows
}

pub struct FormScreen {
    inputs: Vec<TextInput>,
    focus: Focus,
    scroll: u16,
    rows: Vec<(u16, Row)>,
}

impl Default for FormScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl FormScreen {
    pub fn new() -> Self {
        Self {
            inputs: FormField::ALL
                .iter()
                .map(|f| TextInput::with_text(f.default_value()))
                .collect(),
            focus: Focus::Field(FormField::Age),
            scroll: 0,
            rows: rows(),
        }
    }

    fn total_height(&self) -> u16 {
        self.rows.last().map_or(0, |(y, row)| y + row.height())
    }

    fn field_offset(&self, field: FormField) -> u16 {
        self.rows
            .iter()
            .find(|(_, row)| *row == Row::Field(field))
            .map_or(0, |(y, _)| *y)
    }

    /// Scroll so the focused field, and its section heading when it is the
    /// first of a section, is fully visible.
    fn scroll_to_focus(&mut self, viewport: u16) {
        let Focus::Field(field) = self.focus else {
            return;
        };
        let top = self.field_offset(field);
        let starts_section = SECTIONS.iter().any(|s| s.fields.first() == Some(&field));
        let wanted_top = if starts_section { top.saturating_sub(2) } else { top };
        let bottom = top + FIELD_HEIGHT;

        if wanted_top < self.scroll {
            self.scroll = wanted_top;
        } else if bottom > self.scroll + viewport {
            self.scroll = bottom.saturating_sub(viewport);
        }
        let max_scroll = self.total_height().saturating_sub(viewport);
        self.scroll = self.scroll.min(max_scroll);
    }

    fn input_mut(&mut self) -> Option<(FormField, &mut TextInput)> {
        match self.focus {
            Focus::Field(field) => Some((field, &mut self.inputs[field.index()])),
            Focus::Button => None,
        }
    }

    fn edit(&mut self, apply: impl FnOnce(&mut TextInput) -> bool) -> ScreenAction {
        let Some((field, input)) = self.input_mut() else {
            return ScreenAction::None;
        };
        if apply(input) {
            ScreenAction::UpdateField(field, input.text().to_string())
        } else {
            ScreenAction::None
        }
    }

    fn render_fields(&mut self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style())
            .title(Line::styled(" Your Details ", t.title_style()))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.scroll_to_focus(inner.height);
        let visible = self.scroll..self.scroll + inner.height;

        for (y, row) in &self.rows {
            if *y < visible.start || y + row.height() > visible.end {
                continue;
            }
            let rect = Rect::new(inner.x, inner.y + (y - self.scroll), inner.width, row.height());
            match row {
                Row::SectionTitle(title) => {
                    frame.render_widget(Paragraph::new(Line::styled(*title, t.title_style())), rect);
                }
                Row::SectionSubtitle(subtitle) => {
                    frame.render_widget(Paragraph::new(*subtitle).style(t.muted_style()), rect);
                }
                Row::Field(field) => {
                    let widget = TextInputWidget::new(&self.inputs[field.index()])
                        .title(field.label())
                        .placeholder(field.placeholder())
                        .helper(field.helper())
                        .focused(self.focus == Focus::Field(*field));
                    frame.render_text_input_widget(widget, rect);
                }
                Row::Gap => {}
            }
        }

        let mut scrollbar = ScrollbarState::new(
            self.total_height().saturating_sub(inner.height) as usize,
        )
        .position(self.scroll as usize);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area.inner(Margin::new(0, 1)),
            &mut scrollbar,
        );
    }

    fn render_button(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = theme();
        let loading = ctx.controller.is_loading();
        let (label, style) = if loading {
            (format!("{} Predicting...", ctx.spinner()), t.disabled_style())
        } else if self.focus == Focus::Button {
            ("Predict & Save".to_string(), t.button_style())
        } else {
            ("Predict & Save".to_string(), t.accent_style())
        };
        let border = if self.focus == Focus::Button && !loading {
            t.border_focused_style()
        } else {
            t.border_style()
        };
        frame.render_widget(
            Paragraph::new(vec![
                Line::styled(format!("  {}  ", label), style),
                Line::styled("Saves to your prediction history", t.muted_style()),
            ])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border),
            ),
            area,
        );
    }

    fn render_result(
        frame: &mut Frame,
        area: Rect,
        result: Option<&PredictionResult>,
        meals_key: &str,
    ) {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style())
            .title(Line::styled(" Result ", t.title_style()))
            .padding(Padding::new(2, 2, 1, 0));

        let Some(result) = result else {
            frame.render_widget(
                Paragraph::new("Fill in your details and choose Predict & Save to see your daily targets.")
                    .style(t.muted_style())
                    .wrap(Wrap { trim: true })
                    .block(block),
                area,
            );
            return;
        };

        let targets = &result.targets;
        let pill = |label: &'static str, value: f64| {
            Line::from(vec![
                Span::styled(format!("{:<8}", label), t.muted_style()),
                Span::styled(format!("{} g/day", value), t.accent_style()),
            ])
        };
        let lines = vec![
            Line::styled("Personalized Targets", t.muted_style()),
            Line::default(),
            Line::from(vec![
                Span::styled(format!("{}", targets.daily_kcal_need), t.title_style()),
                Span::styled(" kcal / day", t.text_style()),
            ]),
            Line::default(),
            pill("Protein", targets.protein_g_per_day),
            pill("Carbs", targets.carbs_g_per_day),
            pill("Fat", targets.fat_g_per_day),
            Line::default(),
            Line::styled(format!("Record ID: {}", result.saved_id), t.muted_style()),
            Line::default(),
            Line::from(vec![
                Span::styled(meals_key.to_string(), t.accent_style()),
                Span::styled(" Suggest meals for this target", t.muted_style()),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl Screen for FormScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let (header, content, footer) = create_standard_layout(area, 3, 2);
        Header::render(frame, header, BRAND, ScreenState::Form.subtitle())?;

        let [fields_area, side_area] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(content);
        self.render_fields(frame, fields_area);

        let [button_area, result_area] =
            Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(side_area);
        self.render_button(frame, button_area, ctx);
        let keymap = &ctx.config.keymap;
        Self::render_result(
            frame,
            result_area,
            ctx.controller.result(),
            &keymap.key_display(Action::SuggestMeals),
        );

        let footer_text = format!(
            "Next: {} | Predict & Save: {} | Back: {} | Quit: Ctrl+C",
            keymap.key_display(Action::NextField),
            keymap.key_display(Action::Submit),
            keymap.key_display(Action::Cancel),
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

        let keymap = &ctx.config.keymap;
        let action = if self.is_input_focused() {
            keymap.get_action_while_typing(key.code, key.modifiers)
        } else {
            keymap.get_action(key.code, key.modifiers)
        };

        let screen_action = match action {
            Some(Action::NextField | Action::MoveDown) => {
                self.focus = self.focus.next();
                ScreenAction::None
            }
            Some(Action::PrevField | Action::MoveUp) => {
                self.focus = self.focus.prev();
                ScreenAction::None
            }
            Some(Action::Confirm) => match self.focus {
                Focus::Button => ScreenAction::Submit,
                Focus::Field(_) => {
                    self.focus = self.focus.next();
                    ScreenAction::None
                }
            },
            Some(Action::Submit) => ScreenAction::Submit,
            Some(Action::SuggestMeals) => ScreenAction::SuggestMeals,
            Some(Action::Cancel) => ScreenAction::GoHome,
            Some(Action::Quit) => ScreenAction::Quit,
            Some(Action::Help) => ScreenAction::ShowHelp,
            Some(other) => self.edit(|input| input.handle_action(other)),
            None => self.edit(|input| input.handle_key(key.code)),
        };
        Ok(screen_action)
    }

    fn is_input_focused(&self) -> bool {
        matches!(self.focus, Focus::Field(_))
    }

    /// Mirror the controller's values; they survive trips back to Home.
    fn on_enter(&mut self, ctx: &ScreenContext) -> Result<()> {
        for (field, value) in ctx.controller.form().iter() {
            self.inputs[field.index()].set_text(value);
        }
        self.focus = Focus::Field(FormField::Age);
        self.scroll = 0;
        Ok(())
    }
}
