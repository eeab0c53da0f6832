use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

use super::Component;
use crate::{action::Action, config::Config, mode::Mode, tui::Frame};

const SHORT_HINT: &str = "digite um valor · ↑/↓ unidade · e exportar · ? ajuda · q sair";
const FULL_HINT: &str =
    "dígitos e , editam o valor · ↑/↓/tab/backtab trocam a unidade · e exporta CSV · ctrl-z suspende · q/ctrl-c sai";

/// Bottom bar: app identity on one line, transient messages or keybinding
/// hints on the other.
pub struct StatusBar {
    config: Config,
    message: Option<String>,
    is_error: bool,
    show_full_hint: bool,
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            message: None,
            is_error: false,
            show_full_hint: false,
        }
    }

    fn style(&self, key: &str, fallback: Style) -> Style {
        self.config
            .styles
            .get(&Mode::Home)
            .and_then(|styles| styles.get(key))
            .copied()
            .unwrap_or(fallback)
    }
}

impl Component for StatusBar {
    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.config = config;
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::SystemMessage(message) => {
                self.message = Some(message);
                self.is_error = false;
            }
            Action::Error(message) => {
                self.message = Some(message);
                self.is_error = true;
            }
            Action::Help => self.show_full_hint = !self.show_full_hint,
            _ => {}
        };

        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ],
        )
        .split(area);
        f.render_widget(Clear, layout[1]);
        f.render_widget(Clear, layout[2]);

        let hint_style = self.style("hint", Style::default().fg(Color::Gray).italic());
        let title = Span::styled(
            format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            hint_style,
        );
        let title_line = Paragraph::new(title).style(Style::default().bg(Color::Black));
        f.render_widget(title_line, layout[1]);

        let message_line = match &self.message {
            Some(message) if self.is_error => Paragraph::new(message.as_str())
                .style(self.style("error", Style::default().fg(Color::Red))),
            Some(message) => Paragraph::new(message.as_str()),
            None if self.show_full_hint => Paragraph::new(FULL_HINT).style(hint_style),
            None => Paragraph::new(SHORT_HINT).style(hint_style),
        };
        f.render_widget(message_line, layout[2]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_system_message_replaces_error() {
        let mut status_bar = StatusBar::new();

        status_bar
            .update(Action::Error("boom".into()))
            .expect("update");
        assert_eq!(status_bar.message.as_deref(), Some("boom"));
        assert!(status_bar.is_error);

        status_bar
            .update(Action::SystemMessage("[Exported] file.csv".into()))
            .expect("update");
        assert_eq!(status_bar.message.as_deref(), Some("[Exported] file.csv"));
        assert!(!status_bar.is_error);
    }

    #[test]
    fn test_help_toggles_hint() {
        let mut status_bar = StatusBar::new();
        assert!(!status_bar.show_full_hint);
        status_bar.update(Action::Help).expect("update");
        assert!(status_bar.show_full_hint);
        status_bar.update(Action::Help).expect("update");
        assert!(!status_bar.show_full_hint);
    }
}
