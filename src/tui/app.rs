use crate::actors::{ClickTarget, InputEdit, SearchControllerMessage};
use crate::view::{EntryId, View};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

/// Which element currently holds keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    SearchInput,
    PinnedList,
    Elsewhere,
}

/// Screen areas recorded by the last draw, used for mouse hit-testing
#[derive(Debug, Clone, Default)]
pub struct HitRegions {
    pub search_line: Rect,
    pub input: Rect,
    pub dropdown: Option<Rect>,
    pub suggestions: Vec<Rect>,
    pub pinned_rows: Vec<(Rect, EntryId)>,
    pub delete_buttons: Vec<(Rect, EntryId)>,
}

impl HitRegions {
    fn in_search_line(&self, pos: Position) -> bool {
        self.search_line.contains(pos) || self.dropdown.map(|r| r.contains(pos)).unwrap_or(false)
    }
}

/// Host-side state: the latest published view plus focus and highlights.
///
/// Translates terminal events into controller messages; it never mutates the
/// view itself.
pub struct App {
    pub view: View,
    pub focus: Focus,
    pub highlighted_suggestion: usize,
    pub highlighted_pinned: usize,
    pub regions: HitRegions,
    pub should_quit: bool,
}

impl App {
    pub fn new(view: View) -> Self {
        Self {
            view,
            focus: Focus::SearchInput,
            highlighted_suggestion: 0,
            highlighted_pinned: 0,
            regions: HitRegions::default(),
            should_quit: false,
        }
    }

    pub fn set_view(&mut self, view: View) {
        if view.suggestions() != self.view.suggestions() {
            self.highlighted_suggestion = 0;
        }
        self.view = view;
        self.highlighted_pinned = self
            .highlighted_pinned
            .min(self.view.pinned_count().saturating_sub(1));
    }

    pub fn handle_event(&mut self, event: Event) -> Vec<SearchControllerMessage> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => Vec::new(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<SearchControllerMessage> {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            self.should_quit = true;
            return Vec::new();
        }

        match self.focus {
            Focus::SearchInput => self.handle_input_key(key),
            Focus::PinnedList => self.handle_pinned_key(key),
            Focus::Elsewhere => match key.code {
                KeyCode::Tab => self.focus_input(),
                _ => Vec::new(),
            },
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> Vec<SearchControllerMessage> {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                vec![SearchControllerMessage::Input(InputEdit::Insert(c))]
            }
            KeyCode::Backspace => vec![SearchControllerMessage::Input(InputEdit::DeleteBack)],
            KeyCode::Down => {
                let count = self.visible_suggestions();
                if count > 0 {
                    self.highlighted_suggestion = (self.highlighted_suggestion + 1) % count;
                }
                Vec::new()
            }
            KeyCode::Up => {
                let count = self.visible_suggestions();
                if count > 0 {
                    self.highlighted_suggestion = (self.highlighted_suggestion + count - 1) % count;
                }
                Vec::new()
            }
            KeyCode::Enter if self.visible_suggestions() > 0 => {
                vec![SearchControllerMessage::SelectSuggestion(self.highlighted_suggestion)]
            }
            KeyCode::Tab => {
                self.focus = Focus::PinnedList;
                vec![SearchControllerMessage::Blur]
            }
            KeyCode::Esc => vec![SearchControllerMessage::Click(ClickTarget::Outside)],
            _ => Vec::new(),
        }
    }

    fn handle_pinned_key(&mut self, key: KeyEvent) -> Vec<SearchControllerMessage> {
        let count = self.view.pinned_count();
        match key.code {
            KeyCode::Down if count > 0 => {
                self.highlighted_pinned = (self.highlighted_pinned + 1) % count;
                Vec::new()
            }
            KeyCode::Up if count > 0 => {
                self.highlighted_pinned = (self.highlighted_pinned + count - 1) % count;
                Vec::new()
            }
            KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('x') => self
                .view
                .pinned()
                .get(self.highlighted_pinned)
                .map(|entry| vec![SearchControllerMessage::DeletePinned(entry.id())])
                .unwrap_or_default(),
            KeyCode::Tab => self.focus_input(),
            _ => Vec::new(),
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Vec<SearchControllerMessage> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let pos = Position::new(mouse.column, mouse.row);

        if self.view.is_autocomplete_visible() {
            if let Some(index) = self.regions.suggestions.iter().position(|r| r.contains(pos)) {
                return vec![
                    SearchControllerMessage::Click(ClickTarget::SearchLine),
                    SearchControllerMessage::SelectSuggestion(index),
                ];
            }
        }

        if self.regions.in_search_line(pos) {
            let mut messages = Vec::new();
            if self.regions.input.contains(pos) && self.focus != Focus::SearchInput {
                messages.extend(self.focus_input());
            }
            messages.push(SearchControllerMessage::Click(ClickTarget::SearchLine));
            return messages;
        }

        let mut messages = Vec::new();

        let delete = self
            .regions
            .delete_buttons
            .iter()
            .find(|(r, _)| r.contains(pos))
            .map(|(_, id)| *id);
        let row = self
            .regions
            .pinned_rows
            .iter()
            .position(|(r, _)| r.contains(pos));

        let next_focus = if row.is_some() {
            Focus::PinnedList
        } else {
            Focus::Elsewhere
        };
        if self.focus == Focus::SearchInput {
            messages.push(SearchControllerMessage::Blur);
        }
        self.focus = next_focus;
        if let Some(index) = row {
            self.highlighted_pinned = index;
        }

        if let Some(id) = delete {
            messages.push(SearchControllerMessage::DeletePinned(id));
        }
        messages.push(SearchControllerMessage::Click(ClickTarget::Outside));
        messages
    }

    fn focus_input(&mut self) -> Vec<SearchControllerMessage> {
        self.focus = Focus::SearchInput;
        vec![SearchControllerMessage::Focus]
    }

    fn visible_suggestions(&self) -> usize {
        if self.view.is_autocomplete_visible() {
            self.view.suggestions().len()
        } else {
            0
        }
    }
}
