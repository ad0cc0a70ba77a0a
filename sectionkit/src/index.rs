/// Bounds-checked access by a possibly negative index.
///
/// Hosts report section indexes as signed integers; anything below zero or past the end
/// resolves to `None` instead of panicking.
pub trait SafeIndex {
    type Item;

    fn get_signed(&self, index: isize) -> Option<&Self::Item>;
}

impl<T> SafeIndex for [T] {
    type Item = T;

    fn get_signed(&self, index: isize) -> Option<&T> {
        let index = usize::try_from(index).ok()?;
        self.get(index)
    }
}
