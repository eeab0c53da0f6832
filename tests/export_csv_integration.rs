use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use tokio::sync::mpsc;

use arqconv::{
    action::Action,
    components::{Component, Converter},
    measures::{csv::save_csv, to_csv, Unit, EXPORT_FILENAME},
};

fn type_str(converter: &mut Converter, text: &str) {
    for c in text.chars() {
        converter
            .handle_key_events(KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty()))
            .expect("key handling never fails");
    }
}

/// Full export pipeline: typed input → export intent → SaveCsv payload →
/// bytes on disk, matching the serializer output exactly.
#[test]
fn test_export_pipeline_writes_expected_bytes() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut converter = Converter::new();
    converter.register_action_handler(tx).expect("register");

    type_str(&mut converter, "10");
    converter.update(Action::Export).expect("update");

    let Ok(Action::SaveCsv {
        value,
        unit,
        result,
    }) = rx.try_recv()
    else {
        panic!("expected a SaveCsv action");
    };

    let dir = std::env::temp_dir().join("arqconv-export-test");
    std::fs::create_dir_all(&dir).expect("create export dir");
    let path = save_csv(&dir, value, unit, &result).expect("save");

    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some(EXPORT_FILENAME)
    );
    let written = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(
        written,
        "Unidade Origem,Valor\ncaixa,10\nMetros Lineares,1.40 m\n"
    );
    assert_eq!(written, to_csv(value, unit, &result));

    std::fs::remove_dir_all(&dir).expect("cleanup");
}

/// Exporting after switching units carries the unit that is selected at
/// export time, not the one the value was typed under.
#[test]
fn test_export_carries_current_unit() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut converter = Converter::new();
    converter.register_action_handler(tx).expect("register");

    type_str(&mut converter, "2");
    converter
        .update(Action::SelectUnit(Unit::Tonelada))
        .expect("update");
    converter.update(Action::Export).expect("update");

    let Ok(Action::SaveCsv { unit, result, .. }) = rx.try_recv() else {
        panic!("expected a SaveCsv action");
    };
    assert_eq!(unit, Unit::Tonelada);

    let csv = to_csv(2.0, unit, &result);
    assert_eq!(
        csv,
        "Unidade Origem,Valor\ntonelada,2\nMetros Lineares,50.00 m\nMetros Cúbicos,24.00 m³\n"
    );
}
