use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A scrollable window over text. Only `height` lines starting at `y_offset`
/// are visible. With wrapping enabled, source lines longer than `width` are
/// split on word boundaries.
#[derive(Clone, Debug, Default)]
pub struct Viewport {
    content: String,
    lines: Vec<String>,
    width: u16,
    height: u16,
    y_offset: usize,
    wrap: bool,
}

impl Viewport {
    pub fn new(wrap: bool) -> Self {
        Self {
            wrap,
            ..Self::default()
        }
    }

    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
        self.y_offset = 0;
        self.relayout();
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        let rewrap = self.wrap && width != self.width;
        self.width = width;
        self.height = height;
        if rewrap {
            self.relayout();
        } else {
            self.clamp_offset();
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn y_offset(&self) -> usize {
        self.y_offset
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn max_y_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.height as usize)
    }

    pub fn at_top(&self) -> bool {
        self.y_offset == 0
    }

    pub fn at_bottom(&self) -> bool {
        self.y_offset >= self.max_y_offset()
    }

    pub fn line_down(&mut self, n: usize) {
        self.y_offset = self.y_offset.saturating_add(n).min(self.max_y_offset());
    }

    pub fn line_up(&mut self, n: usize) {
        self.y_offset = self.y_offset.saturating_sub(n);
    }

    pub fn page_down(&mut self) {
        self.line_down((self.height as usize).max(1));
    }

    pub fn page_up(&mut self) {
        self.line_up((self.height as usize).max(1));
    }

    pub fn goto_top(&mut self) {
        self.y_offset = 0;
    }

    pub fn goto_bottom(&mut self) {
        self.y_offset = self.max_y_offset();
    }

    pub fn visible_lines(&self) -> &[String] {
        let start = self.y_offset.min(self.lines.len());
        let end = start
            .saturating_add(self.height as usize)
            .min(self.lines.len());
        &self.lines[start..end]
    }

    fn relayout(&mut self) {
        let width = self.width as usize;
        let expanded = self.content.replace('\t', "    ");
        self.lines = if self.wrap && width > 0 {
            expanded
                .lines()
                .flat_map(|line| wrap_line(line, width))
                .collect()
        } else {
            expanded.lines().map(str::to_string).collect()
        };
        self.clamp_offset();
    }

    fn clamp_offset(&mut self) {
        self.y_offset = self.y_offset.min(self.max_y_offset());
    }
}

/// Word-wrap a single line to `width` terminal columns. Words wider than the
/// line are hard-split. Leading indentation is kept on the first row only.
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if width == 0 || line.width() <= width {
        return vec![line.to_string()];
    }

    let indent: String = line
        .chars()
        .take_while(|c| c.is_whitespace())
        .take(width / 2)
        .collect();
    let mut rows = Vec::new();
    let mut current_len = indent.width();
    let mut current = indent;
    let mut has_word = false;

    for word in line.split_whitespace() {
        let word_len = word.width();
        let gap = usize::from(has_word);
        if current_len + gap + word_len <= width {
            if has_word {
                current.push(' ');
            }
            current.push_str(word);
            current_len += gap + word_len;
            has_word = true;
            continue;
        }

        if has_word {
            rows.push(std::mem::take(&mut current));
            current_len = 0;
        }
        for ch in word.chars() {
            let ch_len = ch.width().unwrap_or(0);
            if current_len > 0 && current_len + ch_len > width {
                // An indent-only row is dropped rather than emitted blank.
                if current.chars().all(char::is_whitespace) {
                    current.clear();
                } else {
                    rows.push(std::mem::take(&mut current));
                }
                current_len = 0;
            }
            current.push(ch);
            current_len += ch_len;
        }
        has_word = true;
    }

    if current_len > 0 || rows.is_empty() {
        rows.push(current);
    }
    rows
}
