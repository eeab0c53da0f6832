use derive_deref::Deref;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::measures::Unit;

/// Conversion factors from the Arquivo Nacional's Publicação Técnica nº 40
/// (1985), keyed by source unit.
///
/// The table is asymmetric and not transitively closed: not every pair has
/// an inverse and no chains are derived (a box converts to linear meters
/// and to nothing else). Missing pairs are part of the published rule, not
/// gaps to fill.
pub fn factors(unit: Unit) -> &'static [(Unit, f64)] {
    match unit {
        Unit::Caixa => &[(Unit::MetroLinear, 0.14)],
        Unit::MetroLinear => &[(Unit::MetroCubo, 0.08)],
        Unit::MetroCubo => &[(Unit::MetroLinear, 12.0), (Unit::Quilograma, 600.0)],
        Unit::Quilograma => &[(Unit::MetroLinear, 0.025), (Unit::MetroCubo, 0.001)],
        Unit::Tonelada => &[(Unit::MetroLinear, 25.0), (Unit::MetroCubo, 12.0)],
    }
}

/// Outcome of one conversion: target unit → converted value, in table
/// order.
///
/// Built fresh on every [`convert`] call and replaced wholesale by the
/// shell; iteration order is part of the CSV contract, hence the ordered
/// map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Deref)]
pub struct ConversionResult(IndexMap<Unit, f64>);

impl FromIterator<(Unit, f64)> for ConversionResult {
    fn from_iter<I: IntoIterator<Item = (Unit, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Convert `value` of `unit` into every unit the factor table defines for
/// it.
///
/// Non-finite, zero and negative values yield an empty result. That is the
/// defined quiet-no-op policy for incomplete input, not an error: the UI
/// shows nothing rather than complaining while the user is still typing.
pub fn convert(value: f64, unit: Unit) -> ConversionResult {
    if !value.is_finite() || value <= 0.0 {
        return ConversionResult::default();
    }

    factors(unit)
        .iter()
        .map(|&(target, multiplier)| (target, value * multiplier))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_factor_table_entries() {
        assert_eq!(factors(Unit::Caixa), &[(Unit::MetroLinear, 0.14)]);
        assert_eq!(factors(Unit::MetroLinear), &[(Unit::MetroCubo, 0.08)]);
        assert_eq!(
            factors(Unit::MetroCubo),
            &[(Unit::MetroLinear, 12.0), (Unit::Quilograma, 600.0)]
        );
        assert_eq!(
            factors(Unit::Quilograma),
            &[(Unit::MetroLinear, 0.025), (Unit::MetroCubo, 0.001)]
        );
        assert_eq!(
            factors(Unit::Tonelada),
            &[(Unit::MetroLinear, 25.0), (Unit::MetroCubo, 12.0)]
        );
    }

    #[test]
    fn test_table_has_no_self_conversion() {
        for unit in Unit::iter() {
            assert!(
                factors(unit).iter().all(|&(target, _)| target != unit),
                "{unit} converts to itself"
            );
        }
    }

    #[test]
    fn test_table_factors_are_positive() {
        for unit in Unit::iter() {
            for &(_, multiplier) in factors(unit) {
                assert!(multiplier > 0.0);
            }
        }
    }

    /// Result keys are exactly the targets the table defines for the
    /// source, in table order, each equal to value * factor.
    #[test]
    fn test_completeness_and_exactness() {
        for unit in Unit::iter() {
            for value in [0.5, 1.0, 7.0, 1234.56] {
                let result = convert(value, unit);
                let expected: Vec<Unit> = factors(unit).iter().map(|&(t, _)| t).collect();
                let actual: Vec<Unit> = result.keys().copied().collect();
                assert_eq!(actual, expected);
                for &(target, multiplier) in factors(unit) {
                    assert_eq!(result[&target], value * multiplier);
                }
            }
        }
    }

    #[rstest]
    #[case(0.0)]
    #[case(-5.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn test_invalid_values_yield_empty_result(#[case] value: f64) {
        for unit in Unit::iter() {
            assert!(convert(value, unit).is_empty());
        }
    }

    #[test]
    fn test_convert_is_idempotent() {
        for unit in Unit::iter() {
            assert_eq!(convert(3.25, unit), convert(3.25, unit));
        }
    }

    #[test]
    fn test_ten_boxes() {
        let result = convert(10.0, Unit::Caixa);
        assert_eq!(result.len(), 1);
        assert_close(result[&Unit::MetroLinear], 1.4);
    }

    #[test]
    fn test_two_cubic_meters() {
        let result = convert(2.0, Unit::MetroCubo);
        assert_eq!(result.len(), 2);
        assert_close(result[&Unit::MetroLinear], 24.0);
        assert_close(result[&Unit::Quilograma], 1200.0);
    }

    #[test]
    fn test_hundred_kilograms() {
        let result = convert(100.0, Unit::Quilograma);
        assert_eq!(result.len(), 2);
        assert_close(result[&Unit::MetroLinear], 2.5);
        assert_close(result[&Unit::MetroCubo], 0.1);
    }

    #[test]
    fn test_boxes_have_no_mass_conversion() {
        let result = convert(10.0, Unit::Caixa);
        assert!(!result.contains_key(&Unit::Quilograma));
        assert!(!result.contains_key(&Unit::Tonelada));
        assert!(!result.contains_key(&Unit::MetroCubo));
    }
}
