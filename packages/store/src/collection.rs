//! In-memory owner of the user list: search, pagination and mutations.
//!
//! Holds the full list (the source of truth for the cache) and a filtered
//! view derived from the current search term. Pages are 1-based slices of
//! the filtered view, [`PAGE_SIZE`] records each.

use crate::models::UserRecord;

/// Records shown per page.
pub const PAGE_SIZE: usize = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct UserCollection {
    users: Vec<UserRecord>,
    filtered: Vec<UserRecord>,
    term: String,
    page: usize,
}

impl Default for UserCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl UserCollection {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            filtered: Vec::new(),
            term: String::new(),
            page: 1,
        }
    }

    /// Adopt a freshly loaded list as both the full and filtered views.
    pub fn adopt(&mut self, users: Vec<UserRecord>) {
        self.filtered = users.clone();
        self.users = users;
        self.term.clear();
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn filtered(&self) -> &[UserRecord] {
        &self.filtered
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Current 1-based page index.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Live filter: case-insensitive substring match against name, username
    /// or email; a record stays when any field matches. The page index is
    /// left alone, so narrowing the result set while deep in the pagination
    /// can leave the visible slice empty.
    pub fn search(&mut self, term: &str) {
        self.term = term.to_lowercase();
        let term = self.term.as_str();
        self.filtered = self
            .users
            .iter()
            .filter(|user| {
                user.name.to_lowercase().contains(term)
                    || user.username.to_lowercase().contains(term)
                    || user.email.to_lowercase().contains(term)
            })
            .cloned()
            .collect();
    }

    /// Drop the record with the given identifier from both views.
    pub fn remove(&mut self, id: u64) {
        self.users.retain(|user| user.id != Some(id));
        self.filtered.retain(|user| user.id != Some(id));
    }

    /// Fold a saved record back in: replace in place (matched by identifier)
    /// when editing, prepend when creating.
    pub fn apply_save(&mut self, record: UserRecord, editing: bool) {
        if editing {
            for list in [&mut self.users, &mut self.filtered] {
                if let Some(slot) = list.iter_mut().find(|user| user.id == record.id) {
                    *slot = record.clone();
                }
            }
        } else {
            self.users.insert(0, record.clone());
            self.filtered.insert(0, record);
        }
    }

    /// Select a 1-based page; not validated against the filtered length.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// The filtered slice for the current page: zero-based offsets
    /// `[PAGE_SIZE * (page - 1), PAGE_SIZE * page)`, shorter on the last
    /// page, empty when the page index points past the end.
    pub fn current_page(&self) -> &[UserRecord] {
        let start = self.page.saturating_sub(1) * PAGE_SIZE;
        if start >= self.filtered.len() {
            return &[];
        }
        let end = (start + PAGE_SIZE).min(self.filtered.len());
        &self.filtered[start..end]
    }

    /// Number of page buttons to render: `ceil(filtered / PAGE_SIZE)`.
    pub fn page_count(&self) -> usize {
        self.filtered.len().div_ceil(PAGE_SIZE)
    }
}
