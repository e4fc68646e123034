use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};

use crate::ui::theme::Theme;
use crate::ui::viewport::Viewport;

/// Bordered pane showing the visible window of a viewport.
pub struct ScrollPane<'a> {
    viewport: &'a Viewport,
    focused: bool,
    title: Option<String>,
    theme: &'a Theme,
}

impl<'a> ScrollPane<'a> {
    pub fn new(viewport: &'a Viewport, focused: bool, theme: &'a Theme) -> Self {
        Self {
            viewport,
            focused,
            title: None,
            theme,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl Widget for ScrollPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let border_color = if self.focused {
            colors.border_focused()
        } else {
            colors.border()
        };

        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .padding(Padding::left(1));
        if let Some(title) = self.title {
            block = block.title(format!(" {title} "));
        }

        let lines: Vec<Line> = self
            .viewport
            .visible_lines()
            .iter()
            .map(|l| Line::raw(l.as_str()))
            .collect();

        Paragraph::new(lines)
            .style(Style::default().fg(colors.fg()))
            .block(block)
            .render(area, buf);
    }
}
