use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;
use crate::model::{IndentPolicy, LineModel};

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let cursor = model.host.cursor();
    let policy = match model.session.policy() {
        IndentPolicy::TrailingLines => "trailing",
        IndentPolicy::ScopedLines => "scoped",
    };
    let fresh = model.session.scope().len();
    let fresh_info = if fresh > 0 {
        format!("  fresh:{fresh}")
    } else {
        String::new()
    };
    let focus_indicator = if model.host.is_focused() {
        ""
    } else {
        " [unfocused]"
    };

    let status = format!(
        " linescope  {} lines  {}:{}  policy:{}{}{}  F2:panes  ^]:indent  ^E:focus  ^Q:quit",
        model.session.lines().len(),
        LineModel::display_position(cursor.line),
        cursor.col + 1,
        policy,
        fresh_info,
        focus_indicator,
    );

    let status_bar =
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        crate::app::ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        crate::app::ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        crate::app::ToastLevel::Error => {
            ("[error]", Style::default().bg(Color::Red).fg(Color::White))
        }
    };
    let toast = Paragraph::new(format!("{} {}", prefix, message)).style(style);
    frame.render_widget(toast, area);
}
