use common::model::column::ColumnMetadata;
use std::collections::HashMap;

/// Which columns the table shows, keyed by column name.
///
/// The map is rebuilt from the column list on every load and on bulk
/// changes, so names from a previous file never linger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnVisibility {
    visible: HashMap<String, bool>,
}

impl ColumnVisibility {
    /// Every column in `columns` set to `visible`.
    pub fn uniform(columns: &[ColumnMetadata], visible: bool) -> Self {
        Self {
            visible: columns
                .iter()
                .map(|column| (column.name.clone(), visible))
                .collect(),
        }
    }

    /// Columns without an entry count as hidden.
    pub fn is_visible(&self, name: &str) -> bool {
        self.visible.get(name).copied().unwrap_or(false)
    }

    pub fn toggle(&mut self, name: &str) {
        let flipped = !self.is_visible(name);
        self.visible.insert(name.to_string(), flipped);
    }

    pub fn set_all(&mut self, columns: &[ColumnMetadata], visible: bool) {
        *self = Self::uniform(columns, visible);
    }

    /// The visible columns, in the order of `columns`.
    pub fn filter<'a>(&self, columns: &'a [ColumnMetadata]) -> Vec<&'a ColumnMetadata> {
        columns
            .iter()
            .filter(|column| self.is_visible(&column.name))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}
