use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Columns a pane spends on its border, left padding and a spare column.
pub const PANE_CHROME_WIDTH: u16 = 4;
/// Rows taken by the title line, the help line and the pane borders.
pub const PANE_CHROME_HEIGHT: u16 = 4;

/// Terminal size plus the viewport size each pane derives from it. Always
/// computed from the latest terminal size, never from a previous geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    pub width: u16,
    pub height: u16,
    pub pane_width: u16,
    pub pane_height: u16,
}

impl Geometry {
    pub fn from_terminal(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pane_width: (width / 2).saturating_sub(PANE_CHROME_WIDTH),
            pane_height: height.saturating_sub(PANE_CHROME_HEIGHT),
        }
    }
}

pub struct DashboardLayout {
    pub title: Rect,
    pub problem: Rect,
    pub editor: Rect,
    pub help: Rect,
}

impl DashboardLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        let half = area.width / 2;
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(half), Constraint::Length(half), Constraint::Min(0)])
            .split(vertical[1]);

        Self {
            title: vertical[0],
            problem: horizontal[0],
            editor: horizontal[1],
            help: vertical[2],
        }
    }
}

/// Greedily pack hints into as few lines as fit `width`.
pub fn pack_hint_lines(hints: &[&str], width: usize) -> Vec<String> {
    if width == 0 || hints.is_empty() {
        return Vec::new();
    }

    let separator = " | ";
    let mut out: Vec<String> = Vec::new();
    let mut current = String::new();

    for hint in hints {
        if hint.is_empty() {
            continue;
        }
        let candidate = if current.is_empty() {
            hint.to_string()
        } else {
            format!("{current}{separator}{hint}")
        };
        if candidate.chars().count() <= width || current.is_empty() {
            current = candidate;
        } else {
            out.push(std::mem::replace(&mut current, hint.to_string()));
        }
    }

    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// Rect of `width` x `height` centered in `area`, shrunk to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let target_w = width.min(area.width);
    let target_h = height.min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}
