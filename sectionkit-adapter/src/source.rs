use std::any::Any;
use std::sync::Arc;

use sectionkit::{
    CellRecycler, Dimension, IndexPath, Row, Section, SectionList, SupplementaryView,
    TableDataSource, dequeue_configured,
};

use crate::lane::Lane;
use crate::{DataSourceOptions, Result, SourceError};

/// A table data source whose section list is owned by a single mutation lane.
///
/// Reads block until they run on the lane and always see a consistent snapshot. Writes are
/// fire-and-forget and applied in the order they were submitted; a read from another thread
/// racing a queued write may see the list before or after it. Use [`DataSource::sync`] when a
/// caller needs its own earlier writes to be applied.
///
/// `DataSource` is `Send + Sync`: any thread may submit writes while the host widget queries
/// from its own thread.
pub struct DataSource {
    lane: Lane<SectionList>,
}

impl DataSource {
    /// Creates a data source seeded with `sections`.
    ///
    /// # Panics
    ///
    /// Panics if the lane thread cannot be spawned. See [`DataSource::try_with_options`].
    pub fn new(sections: impl IntoIterator<Item = Section>) -> Self {
        Self::with_options(sections, DataSourceOptions::default())
    }

    pub fn empty() -> Self {
        Self::new([])
    }

    /// # Panics
    ///
    /// Panics if the lane thread cannot be spawned.
    pub fn with_options(
        sections: impl IntoIterator<Item = Section>,
        options: DataSourceOptions,
    ) -> Self {
        match Self::try_with_options(sections, options) {
            Ok(source) => source,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_new(sections: impl IntoIterator<Item = Section>) -> Result<Self> {
        Self::try_with_options(sections, DataSourceOptions::default())
    }

    pub fn try_with_options(
        sections: impl IntoIterator<Item = Section>,
        options: DataSourceOptions,
    ) -> Result<Self> {
        let list = SectionList::from_sections(sections);
        sdebug!(sections = list.len(), lane = %options.lane_name, "DataSource::new");
        Ok(Self {
            lane: Lane::spawn(list, &options)?,
        })
    }

    fn read<R, F>(&self, f: F) -> R
    where
        R: Send + 'static,
        F: FnOnce(&SectionList) -> R + Send + 'static,
    {
        expect_lane(self.lane.read(f))
    }

    // --- Read surface -------------------------------------------------------------------------

    pub fn section_count(&self) -> usize {
        self.read(SectionList::len)
    }

    pub fn try_section_count(&self) -> Result<usize> {
        self.lane.read(SectionList::len)
    }

    pub fn is_empty(&self) -> bool {
        self.section_count() == 0
    }

    /// Row count of `section`.
    ///
    /// # Panics
    ///
    /// Panics if `section` is out of range for the current snapshot.
    pub fn row_count(&self, section: usize) -> usize {
        expect_lane(self.try_row_count(section))
    }

    pub fn try_row_count(&self, section: usize) -> Result<usize> {
        self.lane.read(move |list| {
            list.rows_in(section).ok_or(SourceError::SectionOutOfRange {
                section,
                count: list.len(),
            })
        })?
    }

    /// The row at `at`, or `None` when no such position exists.
    pub fn row(&self, at: IndexPath) -> Option<Arc<dyn Row>> {
        self.read(move |list| list.row(at).cloned())
    }

    /// Dequeues a view for the row at `at` and lets the row configure it.
    ///
    /// The row is resolved on the lane; dequeueing and configuring run on the calling thread,
    /// since host views usually belong to it.
    ///
    /// # Panics
    ///
    /// Panics if `at` does not name an existing row.
    pub fn cell(&self, recycler: &mut dyn CellRecycler, at: IndexPath) -> Box<dyn Any> {
        expect_lane(self.try_cell(recycler, at))
    }

    pub fn try_cell(&self, recycler: &mut dyn CellRecycler, at: IndexPath) -> Result<Box<dyn Any>> {
        let row = self.lane.read(move |list| locate(list, at))??;
        Ok(dequeue_configured(row.as_ref(), recycler, at))
    }

    /// A snapshot of every section.
    pub fn sections(&self) -> Vec<Section> {
        expect_lane(self.try_sections())
    }

    pub fn try_sections(&self) -> Result<Vec<Section>> {
        self.lane.read(|list| list.sections().to_vec())
    }

    pub fn header_view(&self, section: isize) -> Option<SupplementaryView> {
        self.read(move |list| list.header_view(section))
    }

    pub fn header_height(&self, section: isize) -> Dimension {
        self.read(move |list| list.header_height(section))
    }

    pub fn header_title(&self, section: isize) -> Option<String> {
        self.read(move |list| list.header_title(section))
    }

    pub fn footer_view(&self, section: isize) -> Option<SupplementaryView> {
        self.read(move |list| list.footer_view(section))
    }

    pub fn footer_height(&self, section: isize) -> Dimension {
        self.read(move |list| list.footer_height(section))
    }

    pub fn footer_title(&self, section: isize) -> Option<String> {
        self.read(move |list| list.footer_title(section))
    }

    /// Blocks until every write submitted before this call has been applied.
    pub fn sync(&self) {
        self.read(|_| ());
    }

    // --- Write surface ------------------------------------------------------------------------

    pub fn append_sections(&self, sections: impl IntoIterator<Item = Section>) {
        let sections: Vec<Section> = sections.into_iter().collect();
        self.lane.submit(move |list| {
            list.append_sections(sections);
            strace!(count = list.len(), "DataSource::append_sections");
        });
    }

    pub fn append_section(&self, section: Section) {
        self.lane.submit(move |list| {
            list.append_section(section);
            strace!(count = list.len(), "DataSource::append_section");
        });
    }

    /// Inserts `section` at `index`, shifting later sections back.
    ///
    /// `index` is checked when the lane applies the write; past the end, the write is dropped.
    pub fn insert_section(&self, section: Section, index: usize) {
        self.lane.submit(move |list| {
            if list.insert_section(section, index) {
                strace!(index, count = list.len(), "DataSource::insert_section");
            }
        });
    }

    /// Inserts `sections` at `index` in order. Same bounds rule as [`DataSource::insert_section`].
    pub fn insert_sections(&self, sections: impl IntoIterator<Item = Section>, index: usize) {
        let sections: Vec<Section> = sections.into_iter().collect();
        self.lane.submit(move |list| {
            if list.insert_sections(sections, index) {
                strace!(index, count = list.len(), "DataSource::insert_sections");
            }
        });
    }

    /// Removes every section. `keep_capacity` is an allocation hint with no visible effect.
    pub fn remove_all(&self, keep_capacity: bool) {
        self.lane.submit(move |list| {
            list.remove_all(keep_capacity);
            strace!(keep_capacity, "DataSource::remove_all");
        });
    }

    // --- Lifecycle ----------------------------------------------------------------------------

    /// Operations queued on the lane and not yet applied.
    pub fn pending_tasks(&self) -> usize {
        self.lane.pending()
    }

    pub fn is_running(&self) -> bool {
        self.lane.is_running()
    }

    /// Applies what is already queued, then stops the lane and joins it.
    ///
    /// Later writes are ignored and later reads panic (or return [`SourceError::LaneClosed`]
    /// from the `try_*` variants).
    pub fn shutdown(&self) -> bool {
        self.lane.shutdown()
    }
}

impl Default for DataSource {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataSource")
            .field("running", &self.is_running())
            .field("pending_tasks", &self.pending_tasks())
            .finish_non_exhaustive()
    }
}

impl TableDataSource for DataSource {
    fn number_of_sections(&self) -> usize {
        self.section_count()
    }

    fn number_of_rows(&self, section: usize) -> usize {
        self.row_count(section)
    }

    fn cell_for_row(&self, recycler: &mut dyn CellRecycler, at: IndexPath) -> Box<dyn Any> {
        self.cell(recycler, at)
    }

    fn header_view(&self, section: isize) -> Option<SupplementaryView> {
        DataSource::header_view(self, section)
    }

    fn header_height(&self, section: isize) -> Dimension {
        DataSource::header_height(self, section)
    }

    fn header_title(&self, section: isize) -> Option<String> {
        DataSource::header_title(self, section)
    }

    fn footer_view(&self, section: isize) -> Option<SupplementaryView> {
        DataSource::footer_view(self, section)
    }

    fn footer_height(&self, section: isize) -> Dimension {
        DataSource::footer_height(self, section)
    }

    fn footer_title(&self, section: isize) -> Option<String> {
        DataSource::footer_title(self, section)
    }
}

fn locate(list: &SectionList, at: IndexPath) -> Result<Arc<dyn Row>> {
    let section = list
        .section(at.section)
        .ok_or(SourceError::SectionOutOfRange {
            section: at.section,
            count: list.len(),
        })?;
    section
        .row(at.row)
        .cloned()
        .ok_or(SourceError::RowOutOfRange {
            section: at.section,
            row: at.row,
            count: section.len(),
        })
}

fn expect_lane<R>(result: Result<R>) -> R {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}
