use thiserror::Error;

/// Failures surfaced by the fallible (`try_*`) side of [`crate::DataSource`].
///
/// The infallible queries panic with the same messages: a host never asks for positions that
/// do not exist, so reaching one means the caller's bookkeeping is broken.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("section lane has stopped")]
    LaneClosed,

    #[error("section index {section} out of range (section count {count})")]
    SectionOutOfRange { section: usize, count: usize },

    #[error("row index {row} out of range in section {section} (row count {count})")]
    RowOutOfRange {
        section: usize,
        row: usize,
        count: usize,
    },

    #[error("failed to spawn section lane thread: {0}")]
    Spawn(#[from] std::io::Error),
}

pub type Result<T, E = SourceError> = std::result::Result<T, E>;
