//! Back/forward history for one page view.
//!
//! Engines that do not expose their own session history report committed
//! addresses here via [`NavHistory::observe`]. Every requested navigation
//! (visit, back, forward, reload) leaves a pending marker so that the next
//! commit lands on the current entry, redirects included; a commit with no
//! request behind it is an in-page navigation and starts a new entry.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Visit,
    Back,
    Forward,
    Reload,
}

#[derive(Debug, Clone, Default)]
pub struct NavHistory {
    entries: Vec<String>,
    cursor: usize,
    pending: Option<Pending>,
}

impl NavHistory {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![initial.to_string()],
            cursor: 0,
            pending: Some(Pending::Visit),
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.cursor).map(String::as_str)
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Record a user-initiated navigation: drops forward entries.
    pub fn visit(&mut self, address: &str) {
        self.push(address);
        self.pending = Some(Pending::Visit);
    }

    fn push(&mut self, address: &str) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(address.to_string());
        self.cursor = self.entries.len() - 1;
    }

    /// Step back. Returns the address now current, or `None` when at the start.
    pub fn go_back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        self.pending = Some(Pending::Back);
        self.current()
    }

    /// Step forward. Returns the address now current, or `None` at the end.
    pub fn go_forward(&mut self) -> Option<&str> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        self.pending = Some(Pending::Forward);
        self.current()
    }

    pub fn mark_reload(&mut self) {
        self.pending = Some(Pending::Reload);
    }

    /// Reconcile with an address the engine actually committed.
    ///
    /// A commit following a requested navigation replaces the current entry;
    /// any other differing commit is a new entry, e.g. a link click inside
    /// the page. Trailing slashes do not make addresses differ.
    pub fn observe(&mut self, address: &str) {
        if self.pending.take().is_some() {
            if let Some(entry) = self.entries.get_mut(self.cursor) {
                *entry = address.to_string();
            }
            return;
        }
        let unchanged = self
            .current()
            .is_some_and(|current| current.trim_end_matches('/') == address.trim_end_matches('/'));
        if !unchanged {
            self.push(address);
        }
    }
}
