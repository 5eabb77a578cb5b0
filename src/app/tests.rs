use super::{Message, Model, ToastLevel, update};
use crate::model::IndentPolicy;

fn create_test_model() -> Model {
    Model::default()
}

fn create_trailing_model() -> Model {
    Model::new(IndentPolicy::TrailingLines, 2, true, (80, 24))
}

fn type_str(mut model: Model, text: &str) -> Model {
    for ch in text.chars() {
        model = update(model, Message::InsertChar(ch));
    }
    model
}

// --- Editing flow ---

#[test]
fn test_typing_syncs_line_model() {
    let model = type_str(create_test_model(), "hello");
    assert_eq!(model.session.lines().len(), 1);
    assert_eq!(model.session.lines()[0].text, "hello");
    assert_eq!(model.host.line_text(0), Some("hello".to_string()));
}

#[test]
fn test_new_line_creates_inheriting_line() {
    let mut model = type_str(create_test_model(), "top");
    model = update(model, Message::NewLine);
    assert_eq!(model.session.lines().len(), 2);
    assert_eq!(model.session.lines()[0].text, "top");
    assert_eq!(model.session.lines()[1].text, "");
    assert_eq!(model.session.lines()[1].indent, 0);
    assert_eq!(model.host.cursor().line, 1);
}

#[test]
fn test_mid_line_split_syncs_both_lines() {
    let mut model = type_str(create_test_model(), "helloworld");
    for _ in 0..5 {
        model = update(model, Message::MoveLeft);
    }
    model = update(model, Message::NewLine);
    assert_eq!(model.session.lines()[0].text, "hello");
    assert_eq!(model.session.lines()[1].text, "world");
}

#[test]
fn test_backspace_syncs_line_model() {
    let mut model = type_str(create_test_model(), "hey");
    model = update(model, Message::DeleteBack);
    assert_eq!(model.session.lines()[0].text, "he");
}

#[test]
fn test_backspace_at_line_start_changes_nothing() {
    let mut model = type_str(create_test_model(), "ab");
    model = update(model, Message::NewLine);
    model = update(model, Message::DeleteBack);
    assert_eq!(model.session.lines().len(), 2);
    assert_eq!(model.host.line_count(), 2);
}

// --- Indent policies ---

#[test]
fn test_scoped_indent_deepens_only_fresh_lines() {
    let mut model = create_test_model();
    model = type_str(model, "a");
    model = update(model, Message::NewLine);
    model = type_str(model, "b");
    model = update(model, Message::NewLine);
    model = type_str(model, "c");
    // Move to line 1 and indent: lines 1 and 2 are fresh this edit.
    model = update(model, Message::MoveUp);
    model = update(model, Message::Indent);
    let indents: Vec<usize> = model.session.lines().iter().map(|l| l.indent).collect();
    assert_eq!(indents, vec![0, 1, 1]);
}

#[test]
fn test_scoped_indent_spares_pre_existing_lines() {
    let mut model = create_test_model();
    model = type_str(model, "a");
    model = update(model, Message::NewLine);
    model = type_str(model, "b");
    // Typing back on line 0 ends the logical edit; nothing is fresh anymore.
    model = update(model, Message::MoveUp);
    model = type_str(model, "x");
    model = update(model, Message::Indent);
    let indents: Vec<usize> = model.session.lines().iter().map(|l| l.indent).collect();
    assert_eq!(indents, vec![0, 0]);
}

#[test]
fn test_trailing_indent_deepens_all_following_lines() {
    let mut model = create_trailing_model();
    model = type_str(model, "a");
    model = update(model, Message::NewLine);
    model = type_str(model, "b");
    model = update(model, Message::NewLine);
    model = type_str(model, "c");
    model = update(model, Message::MoveUp);
    model = update(model, Message::Indent);
    let indents: Vec<usize> = model.session.lines().iter().map(|l| l.indent).collect();
    assert_eq!(indents, vec![0, 1, 1]);
}

#[test]
fn test_new_line_after_indent_inherits_deepened_level() {
    let mut model = create_test_model();
    model = type_str(model, "a");
    model = update(model, Message::NewLine);
    model = type_str(model, "b");
    model = update(model, Message::Indent);
    model = update(model, Message::NewLine);
    assert_eq!(model.session.lines()[2].indent, 1);
}

// --- Focus and dropped events ---

#[test]
fn test_unfocused_typing_drops_event_with_toast() {
    let mut model = type_str(create_test_model(), "a");
    model = update(model, Message::ToggleFocus);
    let before = model.session.clone();
    model = update(model, Message::InsertChar('b'));
    assert_eq!(model.session, before, "dropped event must not touch the model");
    assert_eq!(model.host.line_text(0), Some("a".to_string()));
    let (message, level) = model.active_toast().expect("drop should raise a toast");
    assert!(message.contains("no active range"));
    assert_eq!(level, ToastLevel::Warning);
}

#[test]
fn test_refocusing_restores_editing() {
    let mut model = type_str(create_test_model(), "a");
    model = update(model, Message::ToggleFocus);
    model = update(model, Message::InsertChar('b'));
    model = update(model, Message::ToggleFocus);
    model = update(model, Message::InsertChar('c'));
    assert_eq!(model.session.lines()[0].text, "ac");
}

// --- Toast lifecycle ---

#[test]
fn test_toast_expires() {
    use std::time::{Duration, Instant};
    let mut model = create_test_model();
    model.show_toast(ToastLevel::Info, "hello");
    assert!(model.active_toast().is_some());
    assert!(!model.expire_toast(Instant::now()));
    assert!(model.expire_toast(Instant::now() + Duration::from_secs(10)));
    assert!(model.active_toast().is_none());
}

// --- Panes, window, application ---

#[test]
fn test_toggle_debug_panes() {
    let model = create_test_model();
    assert!(model.debug_visible);
    let model = update(model, Message::ToggleDebugPanes);
    assert!(!model.debug_visible);
}

#[test]
fn test_resize_updates_viewport() {
    let model = create_test_model();
    let model = update(model, Message::Resize(100, 43));
    assert_eq!(model.viewport.width(), 100);
    assert_eq!(model.viewport.height(), 40);
}

#[test]
fn test_quit_sets_flag() {
    let model = update(create_test_model(), Message::Quit);
    assert!(model.should_quit);
}

#[test]
fn test_caret_stays_visible_while_typing_new_lines() {
    let mut model = Model::new(IndentPolicy::default(), 2, true, (80, 8));
    for _ in 0..20 {
        model = type_str(model, "x");
        model = update(model, Message::NewLine);
    }
    let caret_line = model.host.cursor().line;
    assert!(model.viewport.visible_range().contains(&caret_line));
}
