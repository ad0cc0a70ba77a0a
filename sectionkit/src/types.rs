/// The position of a row inside a sectioned list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexPath {
    pub section: usize,
    pub row: usize,
}

impl IndexPath {
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

impl From<(usize, usize)> for IndexPath {
    fn from((section, row): (usize, usize)) -> Self {
        Self { section, row }
    }
}

/// A header/footer extent as answered to the host widget.
///
/// `Automatic` is the sizing sentinel: the host computes the dimension itself.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimension {
    #[default]
    Automatic,
    Points(f32),
}

impl Dimension {
    /// Maps an optional explicit height to a dimension, falling back to `Automatic`.
    pub fn from_explicit(height: Option<f32>) -> Self {
        height.map_or(Self::Automatic, Self::Points)
    }

    pub fn is_automatic(&self) -> bool {
        matches!(self, Self::Automatic)
    }

    pub fn points(&self) -> Option<f32> {
        match self {
            Self::Automatic => None,
            Self::Points(p) => Some(*p),
        }
    }
}
