use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use super::layout::AppLayout;
use crate::models::LookupResult;
use crate::query::SessionState;

const MUTED: Color = Color::Rgb(113, 113, 122);
const HIGHLIGHT_FG: Color = Color::Rgb(250, 250, 250);
const HIGHLIGHT_BG: Color = Color::Rgb(16, 185, 129);
const ERROR_FG: Color = Color::Rgb(239, 68, 68);

/// Snapshot of everything the renderer needs for one frame
pub struct RenderState<'a> {
    pub input: &'a str,
    pub history: &'a [String],
    pub history_selected: Option<usize>,
    pub session_state: &'a SessionState,
    pub status_message: Option<&'a str>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_input(frame, layout.input_area, state.input);
    render_history(frame, layout.history_area, state.history, state.history_selected);
    render_result(frame, layout.result_area, state.session_state);
    render_status_bar(frame, layout.status_area, state);
}

fn render_input(frame: &mut Frame, area: Rect, input: &str) {
    let paragraph = Paragraph::new(input).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(" Query "),
    );
    frame.render_widget(paragraph, area);

    frame.set_cursor_position((input_cursor_x(area, input), area.y + 1));
}

/// Column for the cursor at the end of the input, inside the border.
/// Clamped before any addition so oversized input cannot overflow u16.
fn input_cursor_x(area: Rect, input: &str) -> u16 {
    let rightmost = area.right().saturating_sub(2);
    let offset = input.chars().count().min(u16::MAX as usize) as u16;
    area.x.saturating_add(1).saturating_add(offset).min(rightmost)
}

fn render_history(frame: &mut Frame, area: Rect, entries: &[String], selected: Option<usize>) {
    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            // Long entries get a compact middle-elided form in the list
            let display = elide(entry, 24);
            let style = if Some(idx) == selected {
                Style::default().fg(HIGHLIGHT_FG).bg(HIGHLIGHT_BG).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED)
            };
            ListItem::new(display).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(" History "),
    );
    frame.render_widget(list, area);
}

fn render_result(frame: &mut Frame, area: Rect, state: &SessionState) {
    let lines = match state {
        SessionState::Idle => vec![Line::from(Span::styled(
            "Type a word and press Enter",
            Style::default().fg(MUTED),
        ))],
        SessionState::Querying => vec![Line::from(Span::styled(
            "Querying…",
            Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
        ))],
        SessionState::Failed(message) => {
            vec![Line::from(Span::styled(message.as_str(), Style::default().fg(ERROR_FG)))]
        }
        SessionState::Success(result) => result_lines(result),
    };

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(" Result "),
    );
    frame.render_widget(paragraph, area);
}

fn result_lines(result: &LookupResult) -> Vec<Line<'_>> {
    let mut lines = Vec::new();

    // Header: word + phonetic
    let mut header = vec![Span::styled(
        result.query.as_str(),
        Style::default().fg(HIGHLIGHT_FG).add_modifier(Modifier::BOLD),
    )];
    if let Some(phonetic) = &result.phonetic {
        header.push(Span::raw(" "));
        header.push(Span::styled(format!("[{}]", phonetic), Style::default().fg(MUTED)));
    }
    lines.push(Line::from(header));
    lines.push(Line::from(""));

    // Sense explanations, falling back to bare translations
    let senses = if result.explains.is_empty() { &result.translations } else { &result.explains };
    for sense in senses {
        lines.push(Line::from(format!("  {}", sense)));
    }

    if !result.web.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Web",
            Style::default().fg(MUTED).add_modifier(Modifier::UNDERLINED),
        )));
        for entry in &result.web {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}: ", entry.key), Style::default().fg(MUTED)),
                Span::raw(entry.values.join("; ")),
            ]));
        }
    }

    lines
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let text = if let Some(message) = state.status_message {
        message.to_string()
    } else {
        format!(
            "{} history entries | Enter: lookup | ↑/↓: history | Ctrl-Y: copy | Esc: clear/quit",
            state.history.len()
        )
    };

    let paragraph = Paragraph::new(text).style(Style::default().fg(MUTED));
    frame.render_widget(paragraph, area);
}

fn elide(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_string();
    }
    let head: String = trimmed.chars().take(max_chars.saturating_sub(4)).collect();
    let tail: String = trimmed.chars().rev().take(3).collect::<Vec<_>>().into_iter().rev().collect();
    format!("{}…{}", head, tail)
}
