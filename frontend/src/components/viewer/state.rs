//! Component state for the Parquet viewer.
//!
//! `TableState` holds everything derived from one upload (rows, columns,
//! visibility, page, banners, loading flag) and has no DOM dependencies, so
//! all transitions are plain methods. `ViewerComponent` adds the selected
//! browser `File` and the DOM refs used for scroll syncing.

use common::model::column::ColumnMetadata;
use common::model::upload::{Record, UploadResponse};
use yew::prelude::*;

use super::helpers::loaded_message;
use super::pagination::Pager;
use super::visibility::ColumnVisibility;

pub const NO_FILE_MESSAGE: &str = "Please select a Parquet file first.";

#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    pub rows: Vec<Record>,
    pub columns: Vec<ColumnMetadata>,
    pub visibility: ColumnVisibility,
    /// 1-based; kept within the page range by every setter.
    pub page: usize,
    pub error: Option<String>,
    pub info: Option<String>,
    /// True while an upload is in flight; disables the submit button.
    pub loading: bool,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            columns: Vec::new(),
            visibility: ColumnVisibility::default(),
            page: 1,
            error: None,
            info: None,
            loading: false,
        }
    }
}

impl TableState {
    /// Back to the initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Clears the result when a new file is picked. An upload already in
    /// flight keeps `loading` set, so no second request can start.
    pub fn reset_selection(&mut self) {
        let loading = self.loading;
        self.reset();
        self.loading = loading;
    }

    /// Prepares for an upload. Returns `false`, with the error banner set,
    /// when there is nothing to send or a request is already running.
    pub fn begin_submit(&mut self, has_file: bool) -> bool {
        if self.loading {
            return false;
        }
        if !has_file {
            self.error = Some(NO_FILE_MESSAGE.to_string());
            return false;
        }
        self.reset();
        self.loading = true;
        true
    }

    pub fn finish_loaded(&mut self, response: UploadResponse) {
        self.info = Some(loaded_message(response.data.len(), response.columns.len()));
        self.visibility = ColumnVisibility::uniform(&response.columns, true);
        self.rows = response.data;
        self.columns = response.columns;
        self.page = 1;
        self.error = None;
        self.loading = false;
    }

    pub fn finish_failed(&mut self, message: String) {
        self.rows.clear();
        self.columns.clear();
        self.visibility = ColumnVisibility::default();
        self.page = 1;
        self.info = None;
        self.error = Some(message);
        self.loading = false;
    }

    pub fn toggle_column(&mut self, name: &str) {
        self.visibility.toggle(name);
    }

    pub fn set_all_columns(&mut self, visible: bool) {
        self.visibility.set_all(&self.columns, visible);
    }

    pub fn pager(&self) -> Pager {
        Pager::new(self.rows.len(), self.page)
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = self.pager().clamp(page);
    }

    pub fn next_page(&mut self) {
        self.page = self.pager().next();
    }

    pub fn previous_page(&mut self) {
        self.page = self.pager().previous();
    }

    /// Visible columns in metadata order.
    pub fn displayed_columns(&self) -> Vec<&ColumnMetadata> {
        self.visibility.filter(&self.columns)
    }

    pub fn current_rows(&self) -> &[Record] {
        &self.rows[self.pager().row_range()]
    }
}

pub struct ViewerComponent {
    /// File picked in the `<input type="file">`, if any.
    pub file: Option<web_sys::File>,

    pub table: TableState,

    /// The thin scrollbar above the table.
    pub top_scroll_ref: NodeRef,

    /// The horizontally scrolling wrapper around the `<table>`.
    pub table_wrapper_ref: NodeRef,

    /// Last measured `scrollWidth` of the table wrapper, in pixels.
    pub table_scroll_width: i32,
}

impl ViewerComponent {
    pub fn new() -> Self {
        Self {
            file: None,
            table: TableState::default(),
            top_scroll_ref: Default::default(),
            table_wrapper_ref: Default::default(),
            table_scroll_width: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::column::ColumnType;
    use serde_json::json;

    fn response(rows: usize) -> UploadResponse {
        UploadResponse {
            data: (0..rows)
                .map(|i| {
                    let mut record = Record::new();
                    record.insert("id".to_string(), json!(i.to_string()));
                    record.insert("name".to_string(), json!(format!("n{}", i)));
                    record
                })
                .collect(),
            columns: vec![
                ColumnMetadata::new("id", ColumnType::BigInt),
                ColumnMetadata::new("name", ColumnType::Text),
            ],
        }
    }

    fn loaded(rows: usize) -> TableState {
        let mut state = TableState::default();
        assert!(state.begin_submit(true));
        state.finish_loaded(response(rows));
        state
    }

    #[test]
    fn submit_without_file_is_rejected() {
        let mut state = TableState::default();
        assert!(!state.begin_submit(false));
        assert_eq!(state.error.as_deref(), Some(NO_FILE_MESSAGE));
        assert!(!state.loading);
    }

    #[test]
    fn submit_while_loading_is_ignored() {
        let mut state = TableState::default();
        assert!(state.begin_submit(true));
        assert!(state.loading);
        assert!(!state.begin_submit(true));
    }

    #[test]
    fn submit_clears_previous_result() {
        let mut state = loaded(30);
        state.go_to_page(2);

        assert!(state.begin_submit(true));
        assert!(state.rows.is_empty());
        assert!(state.columns.is_empty());
        assert!(state.visibility.is_empty());
        assert_eq!(state.page, 1);
        assert!(state.info.is_none());
    }

    #[test]
    fn load_marks_every_column_visible() {
        let state = loaded(3);
        assert!(!state.loading);
        assert_eq!(state.displayed_columns().len(), 2);
        assert_eq!(
            state.info.as_deref(),
            Some("Successfully loaded 3 records with 2 columns.")
        );
    }

    #[test]
    fn failure_shows_error_and_leaves_table_empty() {
        let mut state = TableState::default();
        state.begin_submit(true);
        state.finish_failed("Server error: 500".to_string());

        assert_eq!(state.error.as_deref(), Some("Server error: 500"));
        assert!(state.rows.is_empty());
        assert!(!state.loading);
    }

    #[test]
    fn file_change_during_upload_keeps_submit_blocked() {
        let mut state = TableState::default();
        assert!(state.begin_submit(true));

        state.reset_selection();
        assert!(state.loading);
        assert!(!state.begin_submit(true));
    }

    #[test]
    fn file_change_when_idle_clears_result() {
        let mut state = loaded(5);
        state.error = Some("old".to_string());
        state.reset_selection();
        assert_eq!(state, TableState::default());
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let mut state = loaded(5);
        state.error = Some("old".to_string());
        state.reset();
        assert_eq!(state, TableState::default());
    }

    #[test]
    fn pages_walk_through_rows() {
        let mut state = loaded(45);
        assert_eq!(state.current_rows().len(), 20);
        assert_eq!(state.current_rows()[0]["id"], json!("0"));

        state.next_page();
        state.next_page();
        assert_eq!(state.page, 3);
        assert_eq!(state.current_rows().len(), 5);
        assert_eq!(state.current_rows()[0]["id"], json!("40"));

        state.next_page();
        assert_eq!(state.page, 3);

        state.go_to_page(1);
        state.previous_page();
        assert_eq!(state.page, 1);
    }

    #[test]
    fn column_toggles_only_affect_display() {
        let mut state = loaded(2);
        state.toggle_column("id");
        let shown: Vec<&str> = state
            .displayed_columns()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(shown, vec!["name"]);
        assert_eq!(state.columns.len(), 2);

        state.set_all_columns(false);
        assert!(state.displayed_columns().is_empty());
        state.set_all_columns(true);
        assert_eq!(state.displayed_columns().len(), 2);
    }
}
