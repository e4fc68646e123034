use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{App, PaneFocus, Phase};
use crate::keymap::HELP_HINTS;
use crate::ui::components::error_box::ErrorBox;
use crate::ui::components::scroll_pane::ScrollPane;
use crate::ui::layout::{DashboardLayout, pack_hint_lines};

pub const LOADING_TEXT: &str = "Loading... ";

pub fn render(frame: &mut Frame, app: &App) {
    match app.phase() {
        Phase::Uninitialized => render_loading(frame),
        Phase::Errored => render_error(frame, app),
        Phase::Ready => render_dashboard(frame, app),
    }
}

fn render_loading(frame: &mut Frame) {
    frame.render_widget(Paragraph::new(LOADING_TEXT), frame.area());
}

fn render_error(frame: &mut Frame, app: &App) {
    let message = app.error().map(|e| e.to_string()).unwrap_or_default();
    frame.render_widget(ErrorBox::new(&message, &app.theme), frame.area());
}

fn render_dashboard(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;
    let layout = DashboardLayout::new(area);

    let title = Paragraph::new(Line::from(Span::styled(
        format!("CLICode - {}", app.language),
        Style::default()
            .fg(colors.title())
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, layout.title);

    let problem_title = app
        .problem()
        .map(|p| p.title.clone())
        .unwrap_or_else(|| "Problem".to_string());
    let problem = ScrollPane::new(
        &app.problem_pane,
        app.focus == PaneFocus::Problem,
        &app.theme,
    )
    .title(problem_title);
    frame.render_widget(problem, layout.problem);

    let editor_title = match app.stub_alternatives() {
        Some(langs) if !langs.is_empty() => {
            format!("{} (no stub; available: {})", app.language, langs.join(", "))
        }
        Some(_) => format!("{} (no stub)", app.language),
        None => app.language.clone(),
    };
    let editor = ScrollPane::new(
        &app.editor_pane,
        app.focus == PaneFocus::Editor,
        &app.theme,
    )
    .title(editor_title);
    frame.render_widget(editor, layout.editor);

    let help_text = pack_hint_lines(HELP_HINTS, area.width as usize)
        .into_iter()
        .next()
        .unwrap_or_default();
    let help = Paragraph::new(Line::from(Span::styled(
        help_text,
        Style::default().fg(colors.help()),
    )));
    frame.render_widget(help, layout.help);
}
