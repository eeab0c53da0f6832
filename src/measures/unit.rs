use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Archival storage unit.
///
/// The raw identifiers (`caixa`, `metroLinear`, ...) are the stable names
/// used in CSV exports and configuration files; [`Unit::label`] and
/// [`Unit::suffix`] carry the human-readable form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, Default,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Unit {
    /// Archival box, a count-based unit
    #[default]
    Caixa,
    /// Linear meter of occupied shelving
    MetroLinear,
    /// Cubic meter of storage volume
    MetroCubo,
    Quilograma,
    Tonelada,
}

impl Unit {
    /// All units, in selector order. `Caixa` comes first and is the default
    /// selection.
    pub const ALL: [Self; 5] = [
        Self::Caixa,
        Self::MetroLinear,
        Self::MetroCubo,
        Self::Quilograma,
        Self::Tonelada,
    ];

    /// Display label, pt-BR, as published by the source standard.
    pub fn label(self) -> &'static str {
        match self {
            Self::Caixa => "Caixas de arquivo",
            Self::MetroLinear => "Metros Lineares",
            Self::MetroCubo => "Metros Cúbicos",
            Self::Quilograma => "Quilogramas",
            Self::Tonelada => "Toneladas",
        }
    }

    /// Unit suffix appended to formatted values, leading space included.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Caixa => " cx",
            Self::MetroLinear => " m",
            Self::MetroCubo => " m³",
            Self::Quilograma => " kg",
            Self::Tonelada => " t",
        }
    }

    /// The unit after `self` in selector order, wrapping around.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|u| *u == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// The unit before `self` in selector order, wrapping around.
    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|u| *u == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Unit::Caixa, "caixa", "Caixas de arquivo", " cx")]
    #[case(Unit::MetroLinear, "metroLinear", "Metros Lineares", " m")]
    #[case(Unit::MetroCubo, "metroCubo", "Metros Cúbicos", " m³")]
    #[case(Unit::Quilograma, "quilograma", "Quilogramas", " kg")]
    #[case(Unit::Tonelada, "tonelada", "Toneladas", " t")]
    fn test_identifier_label_suffix(
        #[case] unit: Unit,
        #[case] identifier: &str,
        #[case] label: &str,
        #[case] suffix: &str,
    ) {
        assert_eq!(unit.to_string(), identifier);
        assert_eq!(unit.label(), label);
        assert_eq!(unit.suffix(), suffix);
    }

    #[test]
    fn test_default_is_caixa() {
        assert_eq!(Unit::default(), Unit::Caixa);
        assert_eq!(Unit::ALL[0], Unit::Caixa);
    }

    #[test]
    fn test_next_prev_cycle() {
        let mut unit = Unit::Caixa;
        for _ in 0..Unit::ALL.len() {
            unit = unit.next();
        }
        assert_eq!(unit, Unit::Caixa);
        assert_eq!(Unit::Caixa.prev(), Unit::Tonelada);
        assert_eq!(Unit::Tonelada.next(), Unit::Caixa);
    }

    #[test]
    fn test_serde_uses_raw_identifiers() {
        let json = serde_json::to_string(&Unit::MetroLinear).expect("serialize");
        assert_eq!(json, "\"metroLinear\"");
        let unit: Unit = serde_json::from_str("\"quilograma\"").expect("deserialize");
        assert_eq!(unit, Unit::Quilograma);
    }
}
