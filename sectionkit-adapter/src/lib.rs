//! A lane-synchronized table data source for the `sectionkit` crate.
//!
//! The `sectionkit` crate models rows and sections; this crate owns a section list on a single
//! mutation lane (a dedicated thread) so that:
//!
//! - any thread can append, insert or clear sections without blocking
//! - writes apply in submission order, none lost or duplicated
//! - host queries see a consistent snapshot, never a half-applied write
//!
//! The host widget itself stays outside: it drives [`DataSource`] through
//! [`sectionkit::TableDataSource`] and supplies views through [`sectionkit::CellRecycler`].
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod error;
mod lane;
mod options;
mod source;


pub use error::{Result, SourceError};
pub use options::{DEFAULT_LANE_NAME, DataSourceOptions};
pub use source::DataSource;

pub use sectionkit::{
    CellRecycler, Dimension, IndexPath, ReusableView, Row, Section, SectionList, Supplementary,
    SupplementaryView, TableDataSource, TypedRow,
};
