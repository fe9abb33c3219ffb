//! Keyboard middleware
//!
//! Translates raw key presses into domain actions. Raw key events never
//! reach the reducers; only their translations do.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::actions::{Action, BranchAction, DocumentAction, GlobalAction, TimelineAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn translate(key: KeyEvent, state: &AppState) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Action::Global(GlobalAction::Quit)),
                _ => None,
            };
        }

        // While the help overlay is up, any key closes it except quit
        if state.show_help {
            return match key.code {
                KeyCode::Char('q') => Some(Action::Global(GlobalAction::Quit)),
                _ => Some(Action::Global(GlobalAction::ToggleHelp)),
            };
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Global(GlobalAction::Quit)),
            KeyCode::Char('?') => Some(Action::Global(GlobalAction::ToggleHelp)),
            KeyCode::Tab => Some(Action::Branches(BranchAction::SelectNext)),
            KeyCode::Char('j') | KeyCode::Down => {
                Some(Action::Timeline(TimelineAction::NavigateNext))
            }
            KeyCode::Char('k') | KeyCode::Up => {
                Some(Action::Timeline(TimelineAction::NavigatePrevious))
            }
            KeyCode::Char('g') => Some(Action::Timeline(TimelineAction::NavigateToTop)),
            KeyCode::Char('G') => Some(Action::Timeline(TimelineAction::NavigateToBottom)),
            KeyCode::Enter => Some(Action::Timeline(TimelineAction::Activate {
                index: state.timeline.cursor,
            })),
            KeyCode::Char('m') => Some(Action::Document(DocumentAction::SwitchMode)),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::Document(DocumentAction::NextPage)),
            KeyCode::Char('h') | KeyCode::Left => {
                Some(Action::Document(DocumentAction::PreviousPage))
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                Some(Action::Document(DocumentAction::ZoomIn))
            }
            KeyCode::Char('-') => Some(Action::Document(DocumentAction::ZoomOut)),
            KeyCode::Char('o') => Some(Action::Document(DocumentAction::OpenInViewer)),
            KeyCode::Char('r') => state.branches.selected_name().map(|branch| {
                Action::Timeline(TimelineAction::Load {
                    branch: branch.to_string(),
                })
            }),
            _ => None,
        }
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            if let Some(translated) = Self::translate(*key, state) {
                dispatcher.dispatch(translated);
            }
            // Raw key events stop here
            return false;
        }
        true
    }
}
