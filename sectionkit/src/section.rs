use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::Any;

use crate::{ReusableView, Row, TypedRow};

/// A host-provided header or footer view, opaque to this crate.
pub type SupplementaryView = Arc<dyn Any + Send + Sync>;

/// Presentation metadata for one side (header or footer) of a section.
///
/// The three fields are independent: a caller may set more than one, and the host widget
/// decides which wins (typically a view over a title).
#[derive(Clone, Debug, Default)]
pub struct Supplementary {
    pub view: Option<SupplementaryView>,
    /// Explicit height. `None` answers the host with [`crate::Dimension::Automatic`].
    pub height: Option<f32>,
    pub title: Option<String>,
}

impl Supplementary {
    pub fn is_empty(&self) -> bool {
        self.view.is_none() && self.height.is_none() && self.title.is_none()
    }
}

/// An ordered group of rows with optional header and footer.
///
/// Row order is render order. Sections are plain data: nothing here is validated.
#[derive(Clone, Debug, Default)]
pub struct Section {
    pub rows: Vec<Arc<dyn Row>>,
    pub header: Supplementary,
    pub footer: Supplementary,
}

impl Section {
    pub fn new(rows: impl IntoIterator<Item = Arc<dyn Row>>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&Arc<dyn Row>> {
        self.rows.get(index)
    }

    pub fn with_row(mut self, row: impl Row + 'static) -> Self {
        self.rows.push(Arc::new(row));
        self
    }

    /// Appends a [`TypedRow`] rendered by view template `V`.
    pub fn with_typed_row<V>(mut self, payload: V::Payload) -> Self
    where
        V: ReusableView,
        V::Payload: Send + Sync + 'static,
    {
        self.rows.push(TypedRow::<V>::erased(payload));
        self
    }

    pub fn with_header_view(mut self, view: SupplementaryView) -> Self {
        self.header.view = Some(view);
        self
    }

    pub fn with_header_height(mut self, height: Option<f32>) -> Self {
        self.header.height = height;
        self
    }

    pub fn with_header_title(mut self, title: impl Into<String>) -> Self {
        self.header.title = Some(title.into());
        self
    }

    pub fn with_footer_view(mut self, view: SupplementaryView) -> Self {
        self.footer.view = Some(view);
        self
    }

    pub fn with_footer_height(mut self, height: Option<f32>) -> Self {
        self.footer.height = height;
        self
    }

    pub fn with_footer_title(mut self, title: impl Into<String>) -> Self {
        self.footer.title = Some(title.into());
        self
    }
}

impl FromIterator<Arc<dyn Row>> for Section {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Row>>>(iter: I) -> Self {
        Self::new(iter)
    }
}
