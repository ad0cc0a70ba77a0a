use alloc::boxed::Box;
use alloc::string::String;
use core::any::Any;

use crate::{Dimension, IndexPath, Row, SupplementaryView};

/// The host widget's view-recycling primitive.
///
/// Given a reuse identifier, the host returns a reusable view of whatever concrete type it has
/// registered under that key. Rows narrow it themselves.
pub trait CellRecycler {
    fn dequeue(&mut self, reuse_identifier: &str, at: IndexPath) -> Box<dyn Any>;
}

impl<F> CellRecycler for F
where
    F: FnMut(&str, IndexPath) -> Box<dyn Any>,
{
    fn dequeue(&mut self, reuse_identifier: &str, at: IndexPath) -> Box<dyn Any> {
        self(reuse_identifier, at)
    }
}

/// The query contract a host table widget drives.
///
/// Section/row counts and cells are only asked for valid positions; implementations treat
/// anything else as a broken precondition. Header/footer queries take the host's signed index
/// and answer out-of-range positions with "absent".
pub trait TableDataSource {
    fn number_of_sections(&self) -> usize;

    fn number_of_rows(&self, section: usize) -> usize;

    fn cell_for_row(&self, recycler: &mut dyn CellRecycler, at: IndexPath) -> Box<dyn Any>;

    fn header_view(&self, section: isize) -> Option<SupplementaryView>;
    fn header_height(&self, section: isize) -> Dimension;
    fn header_title(&self, section: isize) -> Option<String>;

    fn footer_view(&self, section: isize) -> Option<SupplementaryView>;
    fn footer_height(&self, section: isize) -> Dimension;
    fn footer_title(&self, section: isize) -> Option<String>;
}

/// Dequeues a view for `row` and lets the row configure it.
///
/// The view is returned even when the row could not configure it.
pub fn dequeue_configured(
    row: &dyn Row,
    recycler: &mut dyn CellRecycler,
    at: IndexPath,
) -> Box<dyn Any> {
    let mut view = recycler.dequeue(row.reuse_identifier(), at);
    row.configure(view.as_mut());
    view
}
