use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::app::Model;
use crate::host::NodeId;
use crate::resolve::{self, RawRange, SelectionSnapshot};

use super::{DEBUG_WIDTH_PERCENT, EDITOR_WIDTH_PERCENT, status};

pub fn split_main_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(EDITOR_WIDTH_PERCENT),
            Constraint::Percentage(DEBUG_WIDTH_PERCENT),
        ])
        .split(area)
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    if model.debug_visible {
        let chunks = split_main_columns(rows[0]);
        render_editor(model, frame, chunks[0]);
        render_debug_column(model, frame, chunks[1]);
    } else {
        render_editor(model, frame, rows[0]);
    }

    if model.active_toast().is_some() {
        status::render_toast_bar(model, frame, rows[1]);
    } else {
        status::render_status_bar(model, frame, rows[1]);
    }
}

fn render_editor(model: &Model, frame: &mut Frame, area: Rect) {
    let focused = model.host.is_focused();
    let block = Block::default()
        .title(" editor ")
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        });
    let inner = block.inner(area);

    let guide_style = Style::default().fg(Color::DarkGray);
    let items: Vec<Line> = model
        .viewport
        .visible_range()
        .map(|index| {
            // Text comes from the surface; the indent guide comes from the
            // structural model, so a desync is immediately visible.
            let indent = model.session.lines().get(index).map_or(0, |l| l.indent);
            let text = model.host.line_text(index).unwrap_or_default();
            Line::from(vec![
                Span::styled(indent_prefix(indent, model.indent_width), guide_style),
                Span::raw(text),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(items).block(block), area);

    if focused {
        place_caret(model, frame, inner);
    }
}

fn place_caret(model: &Model, frame: &mut Frame, inner: Rect) {
    let cursor = model.host.cursor();
    if !model.viewport.visible_range().contains(&cursor.line) {
        return;
    }
    let row_in_view = cursor.line.saturating_sub(model.viewport.offset());
    let Ok(y_offset) = u16::try_from(row_in_view) else {
        return;
    };
    if y_offset >= inner.height {
        return;
    }

    let indent = model
        .session
        .lines()
        .get(cursor.line)
        .map_or(0, |l| l.indent);
    let prefix = indent_prefix(indent, model.indent_width);
    let before_caret: String = model
        .host
        .line_text(cursor.line)
        .unwrap_or_default()
        .chars()
        .take(cursor.col)
        .collect();
    let x_offset = prefix.width() + before_caret.width();
    let x = inner
        .x
        .saturating_add(u16::try_from(x_offset).unwrap_or(u16::MAX))
        .min(inner.x + inner.width.saturating_sub(1));

    frame.set_cursor_position((x, inner.y + y_offset));
}

fn indent_prefix(indent: usize, indent_width: u16) -> String {
    let unit_width = indent_width.max(1) as usize;
    let mut prefix = String::with_capacity(indent * unit_width);
    for _ in 0..indent {
        prefix.push('▏');
        for _ in 1..unit_width {
            prefix.push(' ');
        }
    }
    prefix
}

fn render_debug_column(model: &Model, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let snapshot = model.host.selection_snapshot();
    render_json_pane(frame, chunks[0], " lines ", &model.session.debug_view());
    render_json_pane(frame, chunks[1], " selection ", &snapshot);
    render_json_pane(frame, chunks[2], " range ", &range_debug(model, &snapshot));
}

fn render_json_pane<T: serde::Serialize>(frame: &mut Frame, area: Rect, title: &str, value: &T) {
    let body = serde_json::to_string_pretty(value)
        .unwrap_or_else(|err| format!("serialization failed: {err}"));
    let pane = Paragraph::new(body)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(pane, area);
}

/// What the resolver makes of the current selection, for the range pane.
#[derive(Debug, serde::Serialize)]
struct RangeDebug {
    active: Option<RawRange<NodeId>>,
    resolved_index: Option<usize>,
    line_text: Option<String>,
    error: Option<String>,
}

fn range_debug(model: &Model, snapshot: &SelectionSnapshot<NodeId>) -> RangeDebug {
    let root = model.host.root();
    match resolve::active_range(snapshot) {
        Ok(range) => match resolve::current_line_index(&model.host, root, &range.start) {
            Ok(index) => RangeDebug {
                active: Some(*range),
                resolved_index: Some(index),
                line_text: Some(resolve::current_line_text(&model.host, &range.start)),
                error: None,
            },
            Err(err) => RangeDebug {
                active: Some(*range),
                resolved_index: None,
                line_text: None,
                error: Some(err.to_string()),
            },
        },
        Err(err) => RangeDebug {
            active: None,
            resolved_index: None,
            line_text: None,
            error: Some(err.to_string()),
        },
    }
}
