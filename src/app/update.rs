use crate::app::Model;
use crate::session::EditKind;

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // Editing
    /// Insert a character at the caret
    InsertChar(char),
    /// Delete the character before the caret (Backspace)
    DeleteBack,
    /// Commit a new-line action at the caret (Enter)
    NewLine,
    /// Indent at the caret (Ctrl+])
    Indent,

    // Caret movement
    /// Move caret left
    MoveLeft,
    /// Move caret right
    MoveRight,
    /// Move caret up
    MoveUp,
    /// Move caret down
    MoveDown,
    /// Move caret to start of line (Home)
    MoveHome,
    /// Move caret to end of line (End)
    MoveEnd,

    // Navigation
    /// Scroll up by n lines
    ScrollUp(usize),
    /// Scroll down by n lines
    ScrollDown(usize),
    /// Scroll up one page
    PageUp,
    /// Scroll down one page
    PageDown,

    // Panes
    /// Toggle the debug pane column
    ToggleDebugPanes,
    /// Toggle surface focus (an unfocused surface reports no selection)
    ToggleFocus,

    // Window
    /// Terminal resized
    Resize(u16, u16),

    // Application
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// No side effects should occur in this function (the edit log write is
/// fire-and-forget and does not feed back into state).
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        // Editing. The host mutates itself first (it refuses when
        // unfocused), then the resulting event runs through the session;
        // a dropped event surfaces as a toast and changes nothing.
        Message::InsertChar(ch) => {
            model.host.insert_char(ch);
            model.apply_edit(EditKind::TextEdit);
            model.sync_viewport();
        }
        Message::DeleteBack => {
            if model.host.delete_back() {
                model.apply_edit(EditKind::TextEdit);
            }
        }
        Message::NewLine => {
            // The new-line event reports the selection of the line being
            // split, captured before the surface mutates.
            let at_split = model.host.selection_snapshot();
            let split = model.host.split_line();
            model.apply_edit_with(EditKind::NewLine, at_split);
            if split {
                // Sync the text that moved into the fresh container.
                model.apply_edit(EditKind::TextEdit);
            }
            model.sync_viewport();
        }
        Message::Indent => {
            model.apply_edit(EditKind::Indent);
        }

        // Caret movement
        Message::MoveLeft => {
            model.host.move_left();
            model.sync_viewport();
        }
        Message::MoveRight => {
            model.host.move_right();
            model.sync_viewport();
        }
        Message::MoveUp => {
            model.host.move_up();
            model.sync_viewport();
        }
        Message::MoveDown => {
            model.host.move_down();
            model.sync_viewport();
        }
        Message::MoveHome => model.host.move_home(),
        Message::MoveEnd => model.host.move_end(),

        // Navigation
        Message::ScrollUp(n) => model.viewport.scroll_up(n),
        Message::ScrollDown(n) => model.viewport.scroll_down(n),
        Message::PageUp => model.viewport.page_up(),
        Message::PageDown => model.viewport.page_down(),

        // Panes
        Message::ToggleDebugPanes => model.debug_visible = !model.debug_visible,
        Message::ToggleFocus => {
            let focused = model.host.is_focused();
            model.host.set_focused(!focused);
        }

        // Window
        Message::Resize(width, height) => {
            model
                .viewport
                .resize(width, height.saturating_sub(super::model::EDITOR_CHROME_ROWS));
            model.viewport.ensure_visible(model.host.cursor().line);
        }

        // Application
        Message::Quit => model.should_quit = true,
    }

    model
}
