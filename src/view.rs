//! Presentation surface for the pinboard widget.
//!
//! `View` owns every visible element: the title, the search input with its
//! result counter, the autocomplete dropdown and the bounded list of pinned
//! entries. It knows nothing about networking; the search controller drives it
//! and publishes clones of it to whatever host draws the screen.

use crate::types::SearchResult;

/// Maximum number of suggestions shown in the dropdown.
pub const MAX_SUGGESTIONS: usize = 5;
/// Maximum number of pinned entries.
pub const MAX_PINNED: usize = 3;

/// Handle to a pinned entry, used by its delete control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

/// A search result promoted into the pinned list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinnedEntry {
    id: EntryId,
    name: String,
    owner: Option<String>,
    stars: u64,
}

impl PinnedEntry {
    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn stars(&self) -> u64 {
        self.stars
    }

    pub fn name_label(&self) -> String {
        format!("Name: {}", self.name)
    }

    /// Blank after the colon when the result had no owner.
    pub fn owner_label(&self) -> String {
        format!("Owner: {}", self.owner.as_deref().unwrap_or_default())
    }

    pub fn stars_label(&self) -> String {
        format!("Stars: {}", self.stars)
    }
}

/// What happened when a suggestion was clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub result: SearchResult,
    /// `None` when the pinned list was already full.
    pub pinned: Option<EntryId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    title: String,
    search_input: String,
    counter: Option<u64>,
    suggestions: Vec<SearchResult>,
    autocomplete_visible: bool,
    pinned: Vec<PinnedEntry>,
    next_entry_id: u64,
}

impl View {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            search_input: String::new(),
            counter: None,
            suggestions: Vec::new(),
            autocomplete_visible: false,
            pinned: Vec::new(),
            next_entry_id: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn input(&self) -> &str {
        &self.search_input
    }

    pub fn trimmed_query(&self) -> &str {
        self.search_input.trim()
    }

    pub fn counter(&self) -> Option<u64> {
        self.counter
    }

    pub fn suggestions(&self) -> &[SearchResult] {
        &self.suggestions
    }

    pub fn is_autocomplete_visible(&self) -> bool {
        self.autocomplete_visible
    }

    pub fn pinned(&self) -> &[PinnedEntry] {
        &self.pinned
    }

    pub fn pinned_count(&self) -> usize {
        self.pinned.len()
    }

    pub fn insert_char(&mut self, c: char) {
        self.search_input.push(c);
    }

    pub fn delete_back(&mut self) {
        self.search_input.pop();
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.search_input = value.into();
    }

    pub fn clear_input(&mut self) {
        self.search_input.clear();
    }

    pub fn set_counter(&mut self, total: Option<u64>) {
        self.counter = total;
    }

    /// Replace the dropdown contents with the first few results, in the order
    /// received, and show it.
    pub fn render_autocomplete(&mut self, results: Vec<SearchResult>) {
        self.suggestions.clear();
        self.suggestions.extend(results.into_iter().take(MAX_SUGGESTIONS));
        self.autocomplete_visible = true;
    }

    pub fn hide_autocomplete(&mut self) {
        self.autocomplete_visible = false;
    }

    /// Click handler of a dropdown entry: clear the input, clear and hide the
    /// dropdown, then pin the chosen result.
    pub fn select_suggestion(&mut self, index: usize) -> Option<Selection> {
        let result = self.suggestions.get(index)?.clone();

        self.search_input.clear();
        self.suggestions.clear();
        self.autocomplete_visible = false;
        let pinned = self.pin(&result);

        Some(Selection { result, pinned })
    }

    /// Append a pinned entry unless the list is full.
    pub fn pin(&mut self, result: &SearchResult) -> Option<EntryId> {
        if self.pinned.len() >= MAX_PINNED {
            return None;
        }

        let id = EntryId(self.next_entry_id);
        self.next_entry_id += 1;

        self.pinned.push(PinnedEntry {
            id,
            name: result.name.clone(),
            owner: result.owner_login().map(str::to_owned),
            stars: result.stars(),
        });
        Some(id)
    }

    /// Delete control of a pinned entry. Returns false if it was already gone.
    pub fn delete_pinned(&mut self, id: EntryId) -> bool {
        match self.pinned.iter().position(|entry| entry.id == id) {
            Some(index) => {
                self.pinned.remove(index);
                true
            }
            None => false,
        }
    }
}
