use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, BLOOM_GREEN, BLOOM_PINK, HEADER_TEXT};
use crate::ui::welcome::state::{WelcomeButton, WelcomeState};

const CONTENT_WIDTH: u16 = 40;
const CONTENT_HEIGHT: u16 = 9;

pub fn render_welcome(frame: &mut Frame<'_>, area: Rect, state: &WelcomeState) {
    let content = centered_rect_by_size(area, CONTENT_WIDTH, CONTENT_HEIGHT);

    let lines = vec![
        Line::from(Span::styled(
            "❀ Bloom",
            Style::default().fg(BLOOM_GREEN).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Beautiful home garden solutions",
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(""),
        button_line("Create account", state.focused == WelcomeButton::CreateAccount),
        Line::from(""),
        button_line("Log in", state.focused == WelcomeButton::LogIn),
    ];

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, content);
}

fn button_line(label: &'static str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default()
            .fg(BLOOM_PINK)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    let marker = if focused { "▸ " } else { "  " };
    Line::from(vec![
        Span::styled(marker, style),
        Span::styled(format!("[ {} ]", label), style),
    ])
}
