use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc::UnboundedSender;
use tui_textarea::TextArea;

use super::Component;
use crate::{
    action::Action,
    config::Config,
    measures::{convert, ConversionResult, Unit},
    mode::Mode,
    widgets::ConversionCard,
};

/// The conversion widget: a numeric input line, a source unit selector and
/// the derived equivalents.
///
/// The result is recomputed synchronously on every edit or unit change and
/// replaced wholesale; while the input does not parse to a positive number
/// the result stays empty and the results card is not drawn.
pub struct Converter {
    command_tx: Option<UnboundedSender<Action>>,
    config: Config,
    input: TextArea<'static>,
    unit: Unit,
    unit_state: ListState,
    result: ConversionResult,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    pub fn new() -> Self {
        let mut input = TextArea::default();
        input.set_block(Block::bordered().title("Valor"));
        input.set_placeholder_text("Digite um valor");
        input.set_cursor_line_style(Style::default());

        let mut unit_state = ListState::default();
        unit_state.select(Some(0));

        Self {
            command_tx: None,
            config: Config::default(),
            input,
            unit: Unit::default(),
            unit_state,
            result: ConversionResult::default(),
        }
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn result(&self) -> &ConversionResult {
        &self.result
    }

    /// Current input parsed as a number, accepting both `.` and `,` as the
    /// decimal separator.
    pub fn parsed_value(&self) -> Option<f64> {
        let text = self.input.lines().first()?.trim().replace(',', ".");
        text.parse::<f64>().ok()
    }

    fn set_unit(&mut self, unit: Unit) {
        self.unit = unit;
        let index = Unit::ALL.iter().position(|u| *u == unit);
        self.unit_state.select(index);
        self.recompute();
    }

    /// Re-run the conversion against the current input and unit, replacing
    /// the previous result wholesale.
    fn recompute(&mut self) {
        self.result = match self.parsed_value() {
            Some(value) => convert(value, self.unit),
            None => ConversionResult::default(),
        };
    }

    /// Keys the numeric field consumes. Everything else stays available for
    /// keybindings, so `q` quits instead of landing in the input.
    fn is_edit_key(key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => c.is_ascii_digit() || c == '.' || c == ',',
            KeyCode::Backspace
            | KeyCode::Delete
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Home
            | KeyCode::End => true,
            _ => false,
        }
    }

    fn highlight_style(&self) -> Style {
        self.config
            .styles
            .get(&Mode::Home)
            .and_then(|styles| styles.get("highlight"))
            .copied()
            .unwrap_or_else(|| Style::default().reversed())
    }
}

impl Component for Converter {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.command_tx = Some(tx);
        Ok(())
    }

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.config = config;
        Ok(())
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if Self::is_edit_key(&key) {
            self.input.input(key);
            self.recompute();
        }
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::NextUnit => self.set_unit(self.unit.next()),
            Action::PrevUnit => self.set_unit(self.unit.prev()),
            Action::SelectUnit(unit) => self.set_unit(unit),
            Action::Refresh => self.recompute(),
            Action::Export => {
                // The export action is only offered while there is a result.
                if let (Some(value), Some(tx)) = (self.parsed_value(), &self.command_tx) {
                    if !self.result.is_empty() {
                        tx.send(Action::SaveCsv {
                            value,
                            unit: self.unit,
                            result: self.result.clone(),
                        })?;
                    }
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let chunks = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(Unit::ALL.len() as u16 + 2),
                Constraint::Min(0),
                Constraint::Length(2),
            ],
        )
        .split(area);

        let heading = Paragraph::new(vec![
            Line::styled(
                "Conversor de Medidas de Arquivamento",
                Style::default().bold(),
            ),
            Line::raw("Preencha um valor e escolha a unidade para ver as conversões equivalentes."),
        ]);
        f.render_widget(heading, chunks[0]);

        f.render_widget(&self.input, chunks[1]);

        let units: Vec<ListItem> = Unit::ALL.iter().map(|u| ListItem::new(u.label())).collect();
        let selector = List::new(units)
            .block(Block::bordered().title("Unidade"))
            .highlight_style(self.highlight_style())
            .highlight_symbol("> ");
        f.render_stateful_widget(selector, chunks[2], &mut self.unit_state);

        if !self.result.is_empty() {
            f.render_widget(ConversionCard::new(&self.result), chunks[3]);
        }

        Ok(())
    }
}
