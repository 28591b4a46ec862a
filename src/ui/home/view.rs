use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::data::{BottomTab, PLANTS, THEMES};
use crate::ui::home::state::HomeState;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BLOOM_GREEN, BLOOM_PINK, FIELD_BORDER, HEADER_SEPARATOR, HEADER_TEXT,
};

pub fn render_home(frame: &mut Frame<'_>, area: Rect, state: &HomeState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // search
            Constraint::Length(1), // themes title
            Constraint::Length(2), // theme strip
            Constraint::Length(1), // garden title
            Constraint::Min(1),    // plant list
            Constraint::Length(1), // bottom tabs
        ])
        .split(area);

    render_search(frame, rows[0], state);
    render_theme_strip(frame, rows[1], rows[2], state);
    render_plants(frame, rows[3], rows[4], state);
    render_tabs(frame, rows[5]);
}

fn render_search(frame: &mut Frame<'_>, area: Rect, state: &HomeState) {
    let border = if state.search_focused {
        BLOOM_PINK
    } else {
        FIELD_BORDER
    };
    let content = if state.keyword.is_empty() && !state.search_focused {
        Span::styled("🔍 Search", Style::default().fg(HEADER_SEPARATOR))
    } else {
        Span::styled(state.keyword.clone(), Style::default().fg(HEADER_TEXT))
    };
    frame.render_widget(
        Paragraph::new(Line::from(content)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        ),
        area,
    );

    if state.search_focused && area.width > 2 && area.height > 1 {
        let max_x = area.width.saturating_sub(2) as usize;
        let x = area.x + 1 + state.keyword.chars().count().min(max_x) as u16;
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn render_theme_strip(frame: &mut Frame<'_>, title_area: Rect, strip_area: Rect, state: &HomeState) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " Browse themes",
            Style::default().fg(BLOOM_GREEN).add_modifier(Modifier::BOLD),
        ))),
        title_area,
    );

    let mut spans = vec![Span::raw(" ")];
    for (idx, theme) in THEMES.iter().enumerate() {
        let selected = idx == state.theme_index;
        let style = if selected {
            Style::default().fg(BLOOM_GREEN).bg(ACTIVE_HIGHLIGHT)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        spans.push(Span::styled(format!(" {} ", theme.title), style));
        if idx + 1 < THEMES.len() {
            spans.push(Span::styled(" · ", Style::default().fg(HEADER_SEPARATOR)));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), strip_area);
}

fn render_plants(frame: &mut Frame<'_>, title_area: Rect, list_area: Rect, state: &HomeState) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " Design your home garden",
            Style::default().fg(BLOOM_GREEN).add_modifier(Modifier::BOLD),
        ))),
        title_area,
    );

    let visible_rows = list_area.height as usize;
    // Keep the selected row in view on short terminals.
    let offset = state.plant_index.saturating_sub(visible_rows.saturating_sub(1));

    let lines: Vec<Line> = PLANTS
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_rows)
        .map(|(idx, plant)| {
            let selected = idx == state.plant_index;
            let checked = state.checked.get(idx).copied().unwrap_or(false);
            let checkbox = if checked { "[x]" } else { "[ ]" };
            let row_style = if selected {
                Style::default().bg(ACTIVE_HIGHLIGHT)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(format!(" {} ", checkbox), row_style.fg(BLOOM_PINK)),
                Span::styled(format!("{:<12}", plant.title), row_style.fg(HEADER_TEXT)),
                Span::styled(
                    format!("  {}", plant.description),
                    row_style.fg(HEADER_SEPARATOR),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), list_area);
}

fn render_tabs(frame: &mut Frame<'_>, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for (idx, tab) in BottomTab::ALL.iter().enumerate() {
        let style = if *tab == BottomTab::Home {
            Style::default().fg(BLOOM_GREEN).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_SEPARATOR)
        };
        spans.push(Span::styled(tab.label(), style));
        if idx + 1 < BottomTab::ALL.len() {
            spans.push(Span::styled("  │  ", Style::default().fg(HEADER_SEPARATOR)));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
