//! End-to-end tests for the select component, driven through key messages.

use super::*;
use crate::key::KeyMap as _;
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::{Arc, Mutex};

fn colors() -> Vec<SelectOption> {
    [
        ("Red", "red"),
        ("Green", "green"),
        ("Yellow", "yellow"),
        ("Blue", "blue"),
        ("Magenta", "magenta"),
        ("Cyan", "cyan"),
        ("White", "white"),
    ]
    .into_iter()
    .map(|(label, value)| SelectOption::new(label, value))
    .collect()
}

fn press(select: &mut Model, code: KeyCode, times: usize) {
    for _ in 0..times {
        let cmd = select.update(Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }));
        assert!(cmd.is_none());
    }
}

/// The rendered frame without ANSI styling.
fn frame(select: &Model) -> String {
    strip_ansi_escapes::strip_str(select.view())
}

fn recorder() -> (Arc<Mutex<Vec<String>>>, impl FnMut(&str) + Send + 'static) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    (calls, move |value: &str| {
        sink.lock().unwrap().push(value.to_string());
    })
}

#[test]
fn test_limit_number_of_visible_options() {
    let select = Model::new(colors()).with_visible_option_count(6);
    assert_eq!(
        frame(&select),
        ["❯ Red", "  Green", "  Yellow", "  Blue", "  Magenta", "  Cyan"].join("\n")
    );
}

#[test]
fn test_focus_next_option() {
    let mut select = Model::new(colors());
    press(&mut select, KeyCode::Down, 1);
    assert_eq!(
        frame(&select),
        ["  Red", "❯ Green", "  Yellow", "  Blue", "  Magenta"].join("\n")
    );
}

#[test]
fn test_focus_next_option_and_scroll_down() {
    let mut select = Model::new(colors());
    press(&mut select, KeyCode::Down, 6);
    assert_eq!(
        frame(&select),
        ["  Yellow", "  Blue", "  Magenta", "  Cyan", "❯ White"].join("\n")
    );
}

#[test]
fn test_no_scroll_past_last_option() {
    let mut select = Model::new(colors());
    press(&mut select, KeyCode::Down, 7);
    assert_eq!(select.focused_value(), "white");
    assert_eq!(
        frame(&select),
        ["  Yellow", "  Blue", "  Magenta", "  Cyan", "❯ White"].join("\n")
    );
}

#[test]
fn test_focus_previous_option() {
    let mut select = Model::new(colors());
    press(&mut select, KeyCode::Down, 1);
    press(&mut select, KeyCode::Up, 1);
    assert_eq!(
        frame(&select),
        ["❯ Red", "  Green", "  Yellow", "  Blue", "  Magenta"].join("\n")
    );
}

#[test]
fn test_scroll_up_and_stop_at_first_option() {
    let mut select = Model::new(colors());
    press(&mut select, KeyCode::Down, 6);
    press(&mut select, KeyCode::Up, 7);
    assert_eq!(select.focused_value(), "red");
    assert_eq!(
        frame(&select),
        ["❯ Red", "  Green", "  Yellow", "  Blue", "  Magenta"].join("\n")
    );
}

#[test]
fn test_ignore_input_when_disabled() {
    let (calls, on_change) = recorder();
    let mut select = Model::new(colors())
        .with_disabled(true)
        .with_on_change(on_change);

    let expected = ["  Red", "  Green", "  Yellow", "  Blue", "  Magenta"].join("\n");
    assert_eq!(frame(&select), expected);

    for code in [KeyCode::Down, KeyCode::Up, KeyCode::Enter] {
        press(&mut select, code, 2);
        assert_eq!(frame(&select), expected);
    }
    assert!(calls.lock().unwrap().is_empty());
    assert_eq!(select.value(), "");
}

#[test]
fn test_reenabling_restores_focus_indicator() {
    let mut select = Model::new(colors());
    press(&mut select, KeyCode::Down, 2);

    select.blur();
    assert!(!select.focused());
    assert!(frame(&select).lines().all(|line| line.starts_with("  ")));
    press(&mut select, KeyCode::Down, 3);

    assert!(select.focus().is_none());
    assert_eq!(select.focused_value(), "yellow");
    assert_eq!(
        frame(&select),
        ["  Red", "  Green", "❯ Yellow", "  Blue", "  Magenta"].join("\n")
    );
}

#[test]
fn test_select_focused_option() {
    let (calls, on_change) = recorder();
    let mut select = Model::new(colors()).with_on_change(on_change);

    press(&mut select, KeyCode::Enter, 1);
    assert_eq!(*calls.lock().unwrap(), ["red"]);
    assert_eq!(
        frame(&select),
        ["❯ Red ✔", "  Green", "  Yellow", "  Blue", "  Magenta"].join("\n")
    );

    press(&mut select, KeyCode::Down, 1);
    assert_eq!(
        frame(&select),
        ["  Red ✔", "❯ Green", "  Yellow", "  Blue", "  Magenta"].join("\n")
    );
    assert_eq!(*calls.lock().unwrap(), ["red"]);
}

#[test]
fn test_selected_option_by_default() {
    let select = Model::new(colors()).with_default_value("green");
    assert_eq!(
        frame(&select),
        ["❯ Red", "  Green ✔", "  Yellow", "  Blue", "  Magenta"].join("\n")
    );
}

#[test]
fn test_select_already_selected_option() {
    let (calls, on_change) = recorder();
    let mut select = Model::new(vec![
        SelectOption::new("Red", "red"),
        SelectOption::new("Green", "green"),
    ])
    .with_default_value("red")
    .with_on_change(on_change);

    press(&mut select, KeyCode::Enter, 3);
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn test_highlight_text_in_options() {
    let select = Model::new(colors()).with_highlight_text("l");
    assert_eq!(
        frame(&select),
        ["❯ Red", "  Green", "  Yellow", "  Blue", "  Magenta"].join("\n")
    );

    let rows = select.rows();
    assert_eq!(
        rows[2].label,
        LabelSegments::Highlighted {
            prefix: "Ye",
            matched: "l",
            suffix: "low",
        }
    );
    assert_eq!(
        rows[3].label,
        LabelSegments::Highlighted {
            prefix: "B",
            matched: "l",
            suffix: "ue",
        }
    );
    assert_eq!(rows[0].label, LabelSegments::Plain("Red"));
}

#[test]
fn test_other_keys_are_ignored() {
    let (calls, on_change) = recorder();
    let mut select = Model::new(vec![SelectOption::new("Red", "red")]).with_on_change(on_change);

    press(&mut select, KeyCode::Char('a'), 1);
    press(&mut select, KeyCode::Esc, 1);
    assert!(select.update(Box::new("not a key")).is_none());

    assert!(calls.lock().unwrap().is_empty());
    assert_eq!(frame(&select), "❯ Red");
}

#[test]
fn test_empty_options_render_nothing() {
    let (select, cmd) = Model::init();
    assert!(cmd.is_none());
    assert_eq!(select.view(), "");

    let (calls, on_change) = recorder();
    let mut select = Model::new(vec![]).with_on_change(on_change);
    press(&mut select, KeyCode::Down, 1);
    press(&mut select, KeyCode::Enter, 1);
    assert_eq!(select.view(), "");
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn test_duplicate_values_render_every_option() {
    let mut select = Model::new(vec![
        SelectOption::new("A", "1"),
        SelectOption::new("B", "1"),
        SelectOption::new("C", "2"),
    ]);
    assert_eq!(frame(&select), ["❯ A", "  B", "  C"].join("\n"));

    // Only the first entry carrying a value is focused or marked selected.
    press(&mut select, KeyCode::Enter, 1);
    assert_eq!(frame(&select), ["❯ A ✔", "  B", "  C"].join("\n"));

    press(&mut select, KeyCode::Down, 1);
    assert_eq!(select.focused_value(), "1");
    assert_eq!(frame(&select), ["❯ A ✔", "  B", "  C"].join("\n"));
}

#[test]
fn test_resizing_viewport_keeps_focus() {
    let mut select = Model::new(colors());
    press(&mut select, KeyCode::Down, 3);

    select.set_visible_option_count(3);
    assert_eq!(frame(&select), ["  Yellow", "❯ Blue", "  Magenta"].join("\n"));

    select.set_visible_option_count(0);
    assert_eq!(select.view(), "");
    assert_eq!(select.focused_value(), "blue");
}

#[test]
fn test_custom_theme() {
    struct Ascii;

    impl SelectTheme for Ascii {
        fn focus_indicator_glyph(&self) -> &str {
            ">"
        }

        fn selected_indicator_glyph(&self) -> &str {
            "*"
        }

        fn option(&self, props: ThemeProps) -> OptionLayout {
            OptionLayout {
                gap: 1,
                padding_left: if props.is_focused { 0 } else { 1 },
            }
        }
    }

    let mut select = Model::new(colors())
        .with_visible_option_count(2)
        .with_theme(Ascii);
    press(&mut select, KeyCode::Enter, 1);
    assert_eq!(frame(&select), ["> Red *", " Green"].join("\n"));
}

#[test]
fn test_help_reflects_disabled_state() {
    let mut select = Model::new(colors());
    assert_eq!(select.short_help().len(), 3);
    assert_eq!(select.full_help().len(), 2);

    select.set_disabled(true);
    assert!(select.short_help().is_empty());
    assert!(select.full_help().is_empty());
}
