use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::measures::{ConversionResult, Unit};

// No Eq: SaveCsv carries an f64.
#[derive(Debug, Clone, PartialEq, Serialize, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Refresh,
    Error(String),
    Help,
    Key(KeyEvent),
    NextUnit,
    PrevUnit,
    SelectUnit(Unit),
    /// User intent to export, bound to a key. The converter resolves it
    /// into a `SaveCsv` carrying the current conversion.
    Export,
    SaveCsv {
        value: f64,
        unit: Unit,
        result: ConversionResult,
    },
    SystemMessage(String),
}
