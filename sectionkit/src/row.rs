use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use core::any::{Any, type_name};
use core::fmt;
use core::marker::PhantomData;

/// One list entry: a reuse key plus the logic to paint an opaque payload into a host view.
///
/// Rows are immutable once built and are shared type-erased (`Arc<dyn Row>`), so a single
/// section can hold rows of many payload kinds.
pub trait Row: Send + Sync {
    /// The key the host uses to pick a recyclable view template for this row.
    fn reuse_identifier(&self) -> &str;

    /// Populates `view` with this row's payload.
    ///
    /// If `view` is not the concrete type this row expects, nothing happens: hosts may hand back
    /// a recycled view of a stale kind during reconfiguration.
    fn configure(&self, view: &mut dyn Any);
}

impl fmt::Debug for dyn Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Row")
            .field("reuse_identifier", &self.reuse_identifier())
            .finish_non_exhaustive()
    }
}

/// A view template that can render a specific payload type.
pub trait ReusableView: Any {
    type Payload;

    /// Defaults to the type's own name (without module path or generic arguments).
    ///
    /// This is a convenience, not a uniqueness guarantee: two templates with the same name in
    /// different modules collide unless one overrides it.
    fn reuse_identifier() -> &'static str {
        short_type_name::<Self>()
    }

    fn configure(&mut self, payload: &Self::Payload);
}

/// Returns the last path segment of `T`'s type name, with generic arguments stripped.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// A row whose view template and payload type are fixed at compile time.
pub struct TypedRow<V: ReusableView> {
    payload: V::Payload,
    _view: PhantomData<fn() -> V>,
}

impl<V: ReusableView> TypedRow<V> {
    pub fn new(payload: V::Payload) -> Self {
        Self {
            payload,
            _view: PhantomData,
        }
    }

    pub fn payload(&self) -> &V::Payload {
        &self.payload
    }
}

impl<V> TypedRow<V>
where
    V: ReusableView,
    V::Payload: Send + Sync + 'static,
{
    /// Builds the row and erases its type in one step.
    pub fn erased(payload: V::Payload) -> Arc<dyn Row> {
        Arc::new(Self::new(payload))
    }
}

impl<V> Clone for TypedRow<V>
where
    V: ReusableView,
    V::Payload: Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.payload.clone())
    }
}

impl<V> fmt::Debug for TypedRow<V>
where
    V: ReusableView,
    V::Payload: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedRow")
            .field("reuse_identifier", &V::reuse_identifier())
            .field("payload", &self.payload)
            .finish()
    }
}

impl<V> Row for TypedRow<V>
where
    V: ReusableView,
    V::Payload: Send + Sync,
{
    fn reuse_identifier(&self) -> &str {
        V::reuse_identifier()
    }

    fn configure(&self, view: &mut dyn Any) {
        match view.downcast_mut::<V>() {
            Some(view) => view.configure(&self.payload),
            None => {
                strace!(
                    expected = V::reuse_identifier(),
                    "TypedRow::configure: view type mismatch, skipped"
                );
            }
        }
    }
}

type ConfigureFn = Box<dyn Fn(&mut dyn Any) + Send + Sync>;

/// A row built from an identifier string and a closure.
///
/// Useful for views that do not implement [`ReusableView`]. The closure receives the raw view
/// and is responsible for its own narrowing.
pub struct FnRow {
    reuse_identifier: String,
    configure: ConfigureFn,
}

impl FnRow {
    pub fn new(
        reuse_identifier: impl Into<String>,
        configure: impl Fn(&mut dyn Any) + Send + Sync + 'static,
    ) -> Self {
        Self {
            reuse_identifier: reuse_identifier.into(),
            configure: Box::new(configure),
        }
    }

    /// A row that narrows the view to `V` and runs `configure` on it, ignoring other views.
    pub fn for_view<V: Any>(
        reuse_identifier: impl Into<String>,
        configure: impl Fn(&mut V) + Send + Sync + 'static,
    ) -> Self {
        Self::new(reuse_identifier, move |view: &mut dyn Any| {
            if let Some(view) = view.downcast_mut::<V>() {
                configure(view);
            }
        })
    }
}

impl fmt::Debug for FnRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRow")
            .field("reuse_identifier", &self.reuse_identifier)
            .finish_non_exhaustive()
    }
}

impl Row for FnRow {
    fn reuse_identifier(&self) -> &str {
        &self.reuse_identifier
    }

    fn configure(&self, view: &mut dyn Any) {
        (self.configure)(view);
    }
}
