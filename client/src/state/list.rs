//! Load state shared by the code-type and term-mapping tables.
//!
//! DESIGN
//! ======
//! Each page owns one `ListState` for the lifetime of its mount. A load is
//! `loading -> success | error`; nothing is cached between mounts, so the
//! table is always a function of the last server response.
//!
//! Every `begin_load` issues a [`LoadTicket`]. Only the newest ticket may
//! resolve the state, so a slow response for an earlier filter cannot land
//! after the response for the current one.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

/// Rows fetched for a table plus the status of the last load.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

/// Identifies one load; see [`ListState::begin_load`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

impl<T> Default for ListState<T> {
    /// A freshly mounted view starts in the loading state.
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None, generation: 0 }
    }
}

/// What a table body should render.
#[derive(Debug, PartialEq)]
pub enum TableRows<'a, T> {
    /// One "no results" row spanning the table.
    Placeholder,
    Rows(&'a [T]),
}

impl<T> ListState<T> {
    /// Start a load, superseding any load still in flight.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        LoadTicket(self.generation)
    }

    /// Resolve the load `ticket` was issued for. Failures leave `items`
    /// untouched. Returns `false`, changing nothing, when a newer load has
    /// started since.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<T>, String>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        match result {
            Ok(items) => self.items = items,
            Err(message) => self.error = Some(message),
        }
        self.loading = false;
        true
    }

    /// The table renders only after a successful load.
    #[must_use]
    pub fn shows_table(&self) -> bool {
        !self.loading && self.error.is_none()
    }

    #[must_use]
    pub fn table_rows(&self) -> TableRows<'_, T> {
        if self.items.is_empty() { TableRows::Placeholder } else { TableRows::Rows(&self.items) }
    }

    /// Number of `<tr>` elements the table body renders.
    #[cfg(test)]
    pub fn rendered_row_count(&self) -> usize {
        match self.table_rows() {
            TableRows::Placeholder => 1,
            TableRows::Rows(rows) => rows.len(),
        }
    }
}
