use ratatui::{prelude::*, widgets::*};

use crate::measures::ConversionResult;

/// The textual conversion rules shown under the results, verbatim from the
/// source publication.
const RULES: [&str; 8] = [
    "Caixa em Metros Lineares: multiplica-se por 0,14",
    "Metros Lineares em Metros Cúbicos: multiplica-se por 0,08",
    "Quilogramas em Metros Lineares: multiplica-se por 0,025",
    "Quilogramas em Metros Cúbicos: multiplica-se por 0,001",
    "Toneladas em Metros Lineares: multiplica-se por 25",
    "Toneladas em Metros Cúbicos: multiplica-se por 12",
    "Metros Cúbicos em Metros Lineares: multiplica-se por 12",
    "Metros Cúbicos em Quilogramas: multiplica-se por 600",
];

const CITATION: &str = "Fonte: Manual de identificação de acervos documentais para transferência \
e/ou recolhimento aos arquivos públicos - Publicação técnica nº 40, do Arquivo Nacional, 1985";

/// Results card: one row per converted unit, the static rule list and the
/// citation footer. Only drawn while the result is non-empty.
pub struct ConversionCard<'a> {
    result: &'a ConversionResult,
}

impl<'a> ConversionCard<'a> {
    pub fn new(result: &'a ConversionResult) -> Self {
        Self { result }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines: Vec<Line<'a>> = self
            .result
            .iter()
            .map(|(&unit, &value)| {
                Line::from(vec![
                    Span::styled(format!("{}: ", unit.label()), Style::default().bold()),
                    Span::raw(format!("{:.2}{}", value, unit.suffix())),
                ])
            })
            .collect();

        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "Regras de Conversão:",
            Style::default().bold(),
        ));
        for rule in RULES {
            lines.push(Line::raw(format!("• {rule}")));
        }
        lines.push(Line::raw(""));
        lines.push(Line::styled(CITATION, Style::default().dim().italic()));

        lines
    }
}

impl Widget for ConversionCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines())
            .wrap(Wrap { trim: true })
            .block(Block::bordered().title("Conversões"))
            .render(area, buf);
    }
}
