use crate::highlight::Segment;
use crate::tui::app::{App, FocusTarget};
use crate::tui::colors;
use crate::tui::input::InputField;
use crate::{Dropdown, NO_RESULTS};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

const ENTRY_PLACEHOLDER: &str = "Input text";
const SEARCH_PLACEHOLDER: &str = "Search...";
const ADD_LABEL: &str = "[ Add ]";

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Entry form
            Constraint::Length(3), // Search bar
            Constraint::Min(3),    // Text list
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_entry_form(frame, app, chunks[0]);
    draw_search_bar(frame, app, chunks[1]);
    draw_text_list(frame, app, chunks[2]);
    draw_status_bar(frame, app, chunks[3]);

    // Dropdown overlays the list, directly under the search bar
    let dropdown_space = Rect::new(
        chunks[1].x,
        chunks[2].y,
        chunks[1].width,
        chunks[2].height,
    );
    draw_dropdown(frame, app, dropdown_space);
}

/// Split the entry row into the text field and the Add button
fn entry_layout(area: Rect) -> (Rect, Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(ADD_LABEL.len() as u16 + 2),
        ])
        .split(area);
    (cols[0], cols[1])
}

fn draw_entry_form(frame: &mut Frame, app: &App, area: Rect) {
    let (field_area, button_area) = entry_layout(area);
    let focused = app.focus == FocusTarget::Entry;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(colors::border(focused))
        .title(" Text Form ");
    frame.render_widget(field_paragraph(&app.entry, ENTRY_PLACEHOLDER).block(block), field_area);

    let button_focused = app.focus == FocusTarget::AddButton;
    let button = Paragraph::new(Span::styled(ADD_LABEL, colors::button(button_focused)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(colors::border(button_focused)),
        );
    frame.render_widget(button, button_area);

    if focused {
        set_field_cursor(frame, &app.entry, field_area);
    }
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == FocusTarget::Search;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(colors::border(focused))
        .title(" Search ");
    frame.render_widget(field_paragraph(&app.search, SEARCH_PLACEHOLDER).block(block), area);

    if focused {
        set_field_cursor(frame, &app.search, area);
    }
}

fn field_paragraph<'a>(field: &'a InputField, placeholder: &'static str) -> Paragraph<'a> {
    if field.value.is_empty() {
        Paragraph::new(Span::styled(placeholder, colors::placeholder()))
    } else {
        Paragraph::new(Span::styled(field.value.as_str(), colors::text()))
    }
}

fn set_field_cursor(frame: &mut Frame, field: &InputField, area: Rect) {
    // Inside the left border
    let max_x = area.x + area.width.saturating_sub(2);
    let cursor_x = (area.x + 1 + field.cursor_column()).min(max_x);
    frame.set_cursor_position(Position::new(cursor_x, area.y + 1));
}

fn draw_text_list(frame: &mut Frame, app: &App, area: Rect) {
    let items = app.form.items();
    let inner_height = area.height.saturating_sub(2) as usize;

    // Keep the newest entries visible
    let skip = items.len().saturating_sub(inner_height);
    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(i, item)| {
            Line::from(Span::styled(
                item.as_str(),
                colors::text().bg(colors::row_bg(i)),
            ))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(colors::border(false))
        .title(format!(" Text List ({}) ", items.len()));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Build a line from highlight segments, styling the matched ones
pub fn highlighted_line<'a>(segments: &[Segment<'a>]) -> Line<'a> {
    Line::from(
        segments
            .iter()
            .map(|segment| match segment {
                Segment::Plain(text) => Span::styled(*text, colors::text()),
                Segment::Highlight(text) => Span::styled(*text, colors::highlight()),
            })
            .collect::<Vec<_>>(),
    )
}

fn draw_dropdown(frame: &mut Frame, app: &App, space: Rect) {
    // Rows beyond the available height would be clipped anyway
    let max_rows = usize::from(space.height.saturating_sub(2));
    let lines: Vec<Line> = match app.form.dropdown() {
        Dropdown::Hidden => return,
        Dropdown::NoResults => vec![Line::from(Span::styled(NO_RESULTS, colors::no_results()))],
        Dropdown::Results(results) => results
            .iter()
            .take(max_rows)
            .map(|entry| match app.form.highlighter() {
                Some(highlighter) => highlighted_line(&highlighter.segments(entry)),
                None => Line::from(Span::styled(entry.as_str(), colors::text())),
            })
            .collect(),
    };

    let height = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(space.height);
    if height < 3 {
        return;
    }
    let popup_area = Rect::new(space.x, space.y, space.width, height);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(colors::POPUP_BG));

    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left_text = if app.form.has_pending_search() {
        " Searching...".to_string()
    } else {
        let count = match app.form.dropdown() {
            Dropdown::Results(results) => format!("{} match(es)", results.len()),
            _ => format!("{} entries", app.form.items().len()),
        };
        format!(" {} | {}", app.status_message, count)
    };

    let right_text = " Tab:Next  Enter:Add  /:Search  Esc:Leave  Ctrl+Q:Quit ";

    let available_width = area.width as usize;
    let left_len = left_text.chars().count();
    let right_len = right_text.len();

    let status_str = if left_len + right_len < available_width {
        let padding = available_width - left_len - right_len;
        format!("{}{:padding$}{}", left_text, "", right_text, padding = padding)
    } else {
        format!("{:width$}", left_text, width = available_width)
    };

    let status = Paragraph::new(status_str)
        .style(Style::default().fg(Color::White).bg(colors::STATUS_BG));

    frame.render_widget(status, area);
}
