//! A type-erased row/section model for feeding heterogeneous rows into table views.
//!
//! For a thread-safe data source with an ordered mutation lane, see the `sectionkit-adapter`
//! crate.
//!
//! Callers declare [`Section`]s of strongly-typed rows; a host table widget asks counts, cells
//! and header/footer metadata through [`TableDataSource`], and each row paints its own payload
//! into the view the host hands back.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - a view-recycling primitive keyed by reuse identifier ([`CellRecycler`])
//! - view templates implementing [`ReusableView`] (or [`FnRow`] closures)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod host;
mod index;
mod list;
mod row;
mod section;
mod types;

#[cfg(test)]
mod tests;

pub use host::{CellRecycler, TableDataSource, dequeue_configured};
pub use index::SafeIndex;
pub use list::SectionList;
pub use row::{FnRow, ReusableView, Row, TypedRow, short_type_name};
pub use section::{Section, Supplementary, SupplementaryView};
pub use types::{Dimension, IndexPath};
