use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::ui::layout::centered_rect;
use crate::ui::theme::Theme;
use crate::ui::viewport::wrap_line;

const BOX_MARGIN_X: u16 = 10;
const BOX_PADDING_X: u16 = 4;
const BOX_PADDING_Y: u16 = 2;

/// Centered error panel: glyph and label, the message, and a quit hint.
pub struct ErrorBox<'a> {
    message: &'a str,
    theme: &'a Theme,
}

impl<'a> ErrorBox<'a> {
    pub fn new(message: &'a str, theme: &'a Theme) -> Self {
        Self { message, theme }
    }
}

impl Widget for ErrorBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let box_width = area.width.saturating_sub(BOX_MARGIN_X).max(1);
        let text_width = box_width.saturating_sub(2 + BOX_PADDING_X * 2).max(1) as usize;
        let message_rows = self
            .message
            .lines()
            .map(|l| wrap_line(l.trim(), text_width).len())
            .sum::<usize>()
            .max(1) as u16;
        // label, blank, message, blank, hint, plus one spare row for where
        // Paragraph's wrapper breaks differently from wrap_line
        let box_height = 4 + message_rows + 1 + 2 + BOX_PADDING_Y * 2;

        let lines = vec![
            Line::from(Span::styled(
                "\u{274c} Error",
                Style::default()
                    .fg(colors.error())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(self.message, Style::default().fg(colors.fg()))),
            Line::from(""),
            Line::from(Span::styled(
                "Press 'q' to quit",
                Style::default().fg(colors.help()),
            )),
        ];

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors.error_border()))
            .padding(Padding::symmetric(BOX_PADDING_X, BOX_PADDING_Y));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(centered_rect(box_width, box_height, area), buf);
    }
}
