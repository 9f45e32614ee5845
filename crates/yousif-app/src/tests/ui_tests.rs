use yousif_core::render::interactive_tokens;
use yousif_types::{SearchHistoryItem, Theme, UiEvent};

use super::definition_for;
use crate::ui::TerminalUi;

fn output(ui: TerminalUi<Vec<u8>>) -> String {
    String::from_utf8(ui.into_inner()).unwrap()
}

#[test]
fn test_card_marks_target_and_dictionary_words() {
    let mut ui = TerminalUi::new(Vec::new(), false);
    ui.handle(UiEvent::ShowDefinition(definition_for("ubiquitous")))
        .unwrap();

    let out = output(ui);
    assert!(out.contains("  1. It is UBIQUITOUS in _cities._"));
    assert!(out.contains("Simple Meaning\n  found everywhere"));
    assert!(!out.contains("Showing results for"));
}

#[test]
fn test_correction_banner() {
    let mut definition = definition_for("necessary");
    definition.suggested_word = Some("necessary".to_string());
    definition.is_correction = Some(true);

    let mut ui = TerminalUi::new(Vec::new(), false);
    ui.handle(UiEvent::ShowDefinition(definition)).unwrap();

    assert!(output(ui).contains("Showing results for \"necessary\""));
}

#[test]
fn test_tooltip_centred_over_word() {
    let definition = definition_for("ubiquitous");
    let target = interactive_tokens(&definition).remove(0);

    let mut ui = TerminalUi::new(Vec::new(), false);
    ui.handle(UiEvent::ShowDefinition(definition)).unwrap();
    ui.handle(UiEvent::ShowTooltip(target)).unwrap();

    let tooltip = ui.tooltips().current().cloned().unwrap();
    assert_eq!(tooltip.meaning, "har jagah");
    // "  1. " + "It is " puts the word at column 11, ten wide
    assert_eq!(tooltip.position().0, 16.0);

    ui.handle(UiEvent::HideTooltip).unwrap();
    assert!(ui.tooltips().current().is_none());

    let out = output(ui);
    assert!(out.contains(&format!("{}^ Meaning: har jagah", " ".repeat(16))));
}

#[test]
fn test_tooltip_ignored_without_card() {
    let definition = definition_for("ubiquitous");
    let target = interactive_tokens(&definition).remove(0);

    let mut ui = TerminalUi::new(Vec::new(), false);
    ui.handle(UiEvent::ShowTooltip(target)).unwrap();

    assert!(ui.tooltips().current().is_none());
}

#[test]
fn test_home_lists_recent_words() {
    let history = vec![
        SearchHistoryItem {
            word: "apple".to_string(),
            timestamp: 2,
        },
        SearchHistoryItem {
            word: "banana".to_string(),
            timestamp: 1,
        },
    ];

    let mut ui = TerminalUi::new(Vec::new(), false);
    ui.handle(UiEvent::ThemeChanged(Theme::Dark)).unwrap();
    ui.handle(UiEvent::Home { history }).unwrap();

    let out = output(ui);
    assert!(out.contains("Theme: dark"));
    assert!(out.contains("Recently Explored (:h <n>)\n  1. apple\n  2. banana"));
}

#[test]
fn test_prompt_shows_current_query_and_shutdown_stops() {
    let mut ui = TerminalUi::new(Vec::new(), false);
    ui.handle(UiEvent::QueryChanged("hello".to_string())).unwrap();
    ui.handle(UiEvent::FocusInput).unwrap();
    assert!(!ui.handle(UiEvent::Shutdown).unwrap());

    assert_eq!(output(ui), "search> hello");
}
