use std::path::Path;

use crossterm::event::KeyEventKind;

use crate::config::Config;
use crate::event::AppEvent;
use crate::keymap::KeyAction;
use crate::problem::model::placeholder_stub;
use crate::problem::{
    FileProblemProvider, PlainTextRenderer, ProblemDocument, ProblemError, ProblemProvider,
    TextRenderer,
};
use crate::ui::layout::Geometry;
use crate::ui::theme::Theme;
use crate::ui::viewport::Viewport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No terminal size seen yet.
    Uninitialized,
    Ready,
    /// The problem could not be loaded. Terminal state.
    Errored,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaneFocus {
    Problem,
    Editor,
}

impl PaneFocus {
    pub fn toggled(self) -> Self {
        match self {
            PaneFocus::Problem => PaneFocus::Editor,
            PaneFocus::Editor => PaneFocus::Problem,
        }
    }
}

pub struct App {
    pub theme: Theme,
    pub language: String,
    pub focus: PaneFocus,
    pub geometry: Option<Geometry>,
    pub problem_pane: Viewport,
    pub editor_pane: Viewport,
    pub should_quit: bool,
    problem: Option<ProblemDocument>,
    error: Option<ProblemError>,
    code_text: String,
    missing_stub: bool,
    ready: bool,
    renderer: Box<dyn TextRenderer>,
}

impl App {
    pub fn new(config: &Config, theme: Theme) -> Self {
        let provider = FileProblemProvider::new(Path::new(&config.problems_dir));
        let loaded = provider.load(config.problem_id);
        Self::from_load(loaded, &config.language, theme, Box::new(PlainTextRenderer))
    }

    /// Build the dashboard from a provider result. A failed load puts the
    /// session straight into the error view.
    pub fn from_load(
        loaded: Result<ProblemDocument, ProblemError>,
        language: &str,
        theme: Theme,
        renderer: Box<dyn TextRenderer>,
    ) -> Self {
        let (problem, error) = match loaded {
            Ok(problem) => {
                tracing::info!(id = problem.id, title = %problem.title, "problem loaded");
                (Some(problem), None)
            }
            Err(err) => {
                tracing::error!(%err, "problem load failed");
                (None, Some(err))
            }
        };

        let stub = problem.as_ref().and_then(|p| p.code_stub(language));
        let missing_stub = problem.is_some() && stub.is_none();
        let code_text = match stub {
            Some(stub) => stub.to_string(),
            None => placeholder_stub(language),
        };
        if missing_stub {
            if let Some(ref p) = problem {
                tracing::warn!(
                    language,
                    available = ?p.available_languages(),
                    "no code stub for language, using placeholder"
                );
            }
        }

        Self {
            theme,
            language: language.to_string(),
            focus: PaneFocus::Problem,
            geometry: None,
            problem_pane: Viewport::new(true),
            editor_pane: Viewport::new(false),
            should_quit: false,
            problem,
            error,
            code_text,
            missing_stub,
            ready: false,
            renderer,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.error.is_some() {
            Phase::Errored
        } else if self.ready {
            Phase::Ready
        } else {
            Phase::Uninitialized
        }
    }

    pub fn error(&self) -> Option<&ProblemError> {
        self.error.as_ref()
    }

    pub fn problem(&self) -> Option<&ProblemDocument> {
        self.problem.as_ref()
    }

    /// Languages the problem offers, when the configured one has no stub.
    pub fn stub_alternatives(&self) -> Option<Vec<&str>> {
        if !self.missing_stub {
            return None;
        }
        self.problem.as_ref().map(|p| p.available_languages())
    }

    pub fn handle(&mut self, event: &AppEvent) {
        if self.should_quit {
            return;
        }
        match event {
            AppEvent::Resize(width, height) => self.handle_resize(*width, *height),
            AppEvent::Key(key) => {
                // Release and repeat events would double every keystroke.
                if key.kind == KeyEventKind::Press {
                    self.handle_key(KeyAction::from_key(key));
                }
            }
        }
    }

    pub fn handle_resize(&mut self, width: u16, height: u16) {
        let geometry = Geometry::from_terminal(width, height);
        self.geometry = Some(geometry);

        if self.error.is_some() {
            return;
        }

        if !self.ready {
            self.init_panes();
            self.ready = true;
            tracing::debug!(width, height, "dashboard ready");
        }

        self.problem_pane
            .set_size(geometry.pane_width, geometry.pane_height);
        self.editor_pane
            .set_size(geometry.pane_width, geometry.pane_height);
    }

    fn init_panes(&mut self) {
        let text = match self.problem.as_ref() {
            Some(problem) => match self.renderer.format(problem) {
                Ok(text) => text,
                Err(err) => {
                    tracing::warn!(%err, "problem text could not be formatted");
                    format!("Error formatting problem: {err}")
                }
            },
            None => String::new(),
        };
        self.problem_pane.set_content(&text);
        self.editor_pane.set_content(&self.code_text);
    }

    pub fn handle_key(&mut self, action: KeyAction) {
        if self.should_quit {
            return;
        }

        if action == KeyAction::Quit {
            self.should_quit = true;
            return;
        }

        if self.error.is_some() {
            return;
        }

        match action {
            KeyAction::ToggleFocus => self.set_focus(self.focus.toggled()),
            KeyAction::FocusProblem => {
                if self.focus == PaneFocus::Editor {
                    self.set_focus(PaneFocus::Problem);
                }
            }
            KeyAction::FocusEditor => {
                if self.focus == PaneFocus::Problem {
                    self.set_focus(PaneFocus::Editor);
                }
            }
            KeyAction::ScrollDown => self.active_pane_mut().line_down(1),
            KeyAction::ScrollUp => self.active_pane_mut().line_up(1),
            KeyAction::PageDown => self.active_pane_mut().page_down(),
            KeyAction::PageUp => self.active_pane_mut().page_up(),
            KeyAction::ScrollTop => self.active_pane_mut().goto_top(),
            KeyAction::ScrollBottom => self.active_pane_mut().goto_bottom(),
            KeyAction::Quit | KeyAction::None => {}
        }
    }

    fn set_focus(&mut self, focus: PaneFocus) {
        tracing::debug!(?focus, "focus changed");
        self.focus = focus;
    }

    pub fn active_pane(&self) -> &Viewport {
        match self.focus {
            PaneFocus::Problem => &self.problem_pane,
            PaneFocus::Editor => &self.editor_pane,
        }
    }

    fn active_pane_mut(&mut self) -> &mut Viewport {
        match self.focus {
            PaneFocus::Problem => &mut self.problem_pane,
            PaneFocus::Editor => &mut self.editor_pane,
        }
    }
}
