use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::Any;

use crate::host::dequeue_configured;
use crate::{
    CellRecycler, Dimension, IndexPath, Row, SafeIndex, Section, Supplementary,
    SupplementaryView, TableDataSource,
};

/// An ordered list of sections with plain, unsynchronized mutation.
///
/// This is the state a `DataSource` lane owns; it can also back a host directly when every
/// access happens on one thread.
#[derive(Clone, Debug, Default)]
pub struct SectionList {
    sections: Vec<Section>,
}

impl SectionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sections(sections: impl IntoIterator<Item = Section>) -> Self {
        Self {
            sections: sections.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn into_sections(self) -> Vec<Section> {
        self.sections
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn row(&self, at: IndexPath) -> Option<&Arc<dyn Row>> {
        self.sections.get(at.section)?.rows.get(at.row)
    }

    /// Row count of `section`, or `None` when the section does not exist.
    pub fn rows_in(&self, section: usize) -> Option<usize> {
        self.sections.get(section).map(Section::len)
    }

    /// Row count of `section`.
    ///
    /// # Panics
    ///
    /// Panics if `section` is out of range.
    pub fn row_count(&self, section: usize) -> usize {
        match self.rows_in(section) {
            Some(n) => n,
            None => panic!(
                "section index {section} out of range (section count {})",
                self.sections.len()
            ),
        }
    }

    pub fn append_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn append_sections(&mut self, sections: impl IntoIterator<Item = Section>) {
        self.sections.extend(sections);
    }

    /// Inserts `section` at `index`, shifting later sections back.
    ///
    /// Returns `false` (and leaves the list untouched) when `index > len`.
    pub fn insert_section(&mut self, section: Section, index: usize) -> bool {
        if index > self.sections.len() {
            swarn!(
                index,
                count = self.sections.len(),
                "SectionList::insert_section: index out of range"
            );
            return false;
        }
        self.sections.insert(index, section);
        true
    }

    /// Inserts `sections` at `index`, preserving their order.
    ///
    /// Returns `false` (and leaves the list untouched) when `index > len`.
    pub fn insert_sections(
        &mut self,
        sections: impl IntoIterator<Item = Section>,
        index: usize,
    ) -> bool {
        if index > self.sections.len() {
            swarn!(
                index,
                count = self.sections.len(),
                "SectionList::insert_sections: index out of range"
            );
            return false;
        }
        let tail = self.sections.split_off(index);
        self.sections.extend(sections);
        self.sections.extend(tail);
        true
    }

    /// Removes every section. `keep_capacity` only decides whether the allocation is kept.
    pub fn remove_all(&mut self, keep_capacity: bool) {
        if keep_capacity {
            self.sections.clear();
        } else {
            self.sections = Vec::new();
        }
    }

    pub fn capacity(&self) -> usize {
        self.sections.capacity()
    }

    fn header(&self, section: isize) -> Option<&Supplementary> {
        self.sections.get_signed(section).map(|s| &s.header)
    }

    fn footer(&self, section: isize) -> Option<&Supplementary> {
        self.sections.get_signed(section).map(|s| &s.footer)
    }
}

impl From<Vec<Section>> for SectionList {
    fn from(sections: Vec<Section>) -> Self {
        Self { sections }
    }
}

impl TableDataSource for SectionList {
    fn number_of_sections(&self) -> usize {
        self.len()
    }

    fn number_of_rows(&self, section: usize) -> usize {
        self.row_count(section)
    }

    fn cell_for_row(&self, recycler: &mut dyn CellRecycler, at: IndexPath) -> Box<dyn Any> {
        let Some(row) = self.row(at) else {
            panic!(
                "no row at section {} row {} (section count {})",
                at.section,
                at.row,
                self.sections.len()
            );
        };
        dequeue_configured(row.as_ref(), recycler, at)
    }

    fn header_view(&self, section: isize) -> Option<SupplementaryView> {
        self.header(section)?.view.clone()
    }

    fn header_height(&self, section: isize) -> Dimension {
        Dimension::from_explicit(self.header(section).and_then(|h| h.height))
    }

    fn header_title(&self, section: isize) -> Option<String> {
        self.header(section)?.title.clone()
    }

    fn footer_view(&self, section: isize) -> Option<SupplementaryView> {
        self.footer(section)?.view.clone()
    }

    fn footer_height(&self, section: isize) -> Dimension {
        Dimension::from_explicit(self.footer(section).and_then(|f| f.height))
    }

    fn footer_title(&self, section: isize) -> Option<String> {
        self.footer(section)?.title.clone()
    }
}
