use std::path::{Path, PathBuf};

use color_eyre::eyre::Result;

use crate::measures::{ConversionResult, Unit};

/// Fixed name of the exported file.
pub const EXPORT_FILENAME: &str = "conversao_arquivamento.csv";

/// Serialize one conversion to CSV text.
///
/// Line 1 is the literal header, line 2 carries the source unit's raw
/// identifier and the input value as typed, then one line per result entry
/// in result order, rounded to two decimals with the unit suffix. Every
/// line ends with a newline. An empty result still produces the header and
/// the data line.
pub fn to_csv(value: f64, unit: Unit, result: &ConversionResult) -> String {
    let mut csv = String::from("Unidade Origem,Valor\n");
    csv.push_str(&format!("{unit},{value}\n"));
    for (&target, &converted) in result.iter() {
        csv.push_str(&format!(
            "{},{:.2}{}\n",
            target.label(),
            converted,
            target.suffix()
        ));
    }
    csv
}

/// Serialize and write the export to [`EXPORT_FILENAME`] inside `dir`.
///
/// Returns the path written. This is the only place the core touches the
/// filesystem; [`to_csv`] stays pure.
pub fn save_csv(dir: &Path, value: f64, unit: Unit, result: &ConversionResult) -> Result<PathBuf> {
    let path = dir.join(EXPORT_FILENAME);
    std::fs::write(&path, to_csv(value, unit, result).as_bytes())?;
    Ok(path)
}
