use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::login::state::{LoginField, LoginState};
use crate::ui::theme::{ACTIVE_HIGHLIGHT, BLOOM_PINK, FIELD_BORDER, HEADER_TEXT};

const FORM_WIDTH: u16 = 44;
const FORM_HEIGHT: u16 = 14;
const FIELD_HEIGHT: u16 = 3;

pub fn render_login(frame: &mut Frame<'_>, area: Rect, state: &LoginState) {
    let form = centered_rect_by_size(area, FORM_WIDTH, FORM_HEIGHT);

    let title = Rect { height: 1.min(form.height), ..form };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Log in with email",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        title,
    );

    let email_area = field_rect(form, 2);
    render_field(
        frame,
        email_area,
        "Email address",
        &state.email,
        state.focused == LoginField::Email,
    );

    let password_area = field_rect(form, 2 + FIELD_HEIGHT);
    let masked: String = "•".repeat(state.password.chars().count());
    render_field(
        frame,
        password_area,
        "Password (8+ characters)",
        &masked,
        state.focused == LoginField::Password,
    );

    let notice_y = 2 + FIELD_HEIGHT * 2 + 1;
    if form.height > notice_y {
        let notice = Rect {
            x: form.x,
            y: form.y + notice_y,
            width: form.width,
            height: 2.min(form.height - notice_y),
        };
        frame.render_widget(
            Paragraph::new(vec![
                Line::from("By clicking below, you agree to our Terms"),
                Line::from("of Use and consent to our Privacy Policy."),
            ])
            .alignment(Alignment::Center)
            .style(Style::default().fg(FIELD_BORDER)),
            notice,
        );
    }

    let button_y = notice_y + 3;
    if form.height > button_y {
        let button = Rect {
            x: form.x,
            y: form.y + button_y,
            width: form.width,
            height: 1,
        };
        let focused = state.focused == LoginField::Submit;
        let style = if focused {
            Style::default()
                .fg(BLOOM_PINK)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("[ Log in ]", style)))
                .alignment(Alignment::Center),
            button,
        );
    }
}

fn field_rect(form: Rect, offset_y: u16) -> Rect {
    Rect {
        x: form.x,
        y: form.y + offset_y.min(form.height),
        width: form.width,
        height: FIELD_HEIGHT.min(form.height.saturating_sub(offset_y)),
    }
}

fn render_field(frame: &mut Frame<'_>, area: Rect, label: &str, value: &str, focused: bool) {
    if area.height == 0 {
        return;
    }
    let border = if focused { BLOOM_PINK } else { FIELD_BORDER };
    let block = Block::default()
        .title(Span::styled(label.to_string(), Style::default().fg(border)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let text = Paragraph::new(Line::from(Span::styled(
        value.to_string(),
        Style::default().fg(HEADER_TEXT),
    )))
    .block(block);
    frame.render_widget(text, area);

    if focused && area.width > 2 && area.height > 1 {
        // Place the terminal cursor at the end of the edited text.
        let max_x = area.width.saturating_sub(2) as usize;
        let x = area.x + 1 + value.chars().count().min(max_x) as u16;
        frame.set_cursor_position((x, area.y + 1));
    }
}
