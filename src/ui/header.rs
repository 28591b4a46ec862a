use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::nav::NavState;
use crate::ui::theme::{BLOOM_GREEN, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Title bar with the visited-screen trail, current screen last.
    pub fn widget(&self, nav: &NavState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let accent_style = Style::default().fg(BLOOM_GREEN);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("❀ Bloom", accent_style),
            Span::styled("  │  ", separator_style),
        ];
        let depth = nav.depth();
        for (idx, destination) in nav.entries().iter().enumerate() {
            let style = if idx + 1 == depth {
                accent_style
            } else {
                text_style
            };
            spans.push(Span::styled(destination.title(), style));
            if idx + 1 < depth {
                spans.push(Span::styled(" › ", separator_style));
            }
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
