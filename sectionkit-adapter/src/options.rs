/// Default thread name of the mutation lane.
pub const DEFAULT_LANE_NAME: &str = "sectionkit-lane";

/// Configuration for [`crate::DataSource`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`; missing fields take
/// their defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DataSourceOptions {
    /// Thread name of the mutation lane.
    pub lane_name: String,
    /// Stack size for the lane thread in bytes. `None` uses the platform default.
    pub stack_size: Option<usize>,
    /// Capacity of the lane queue.
    ///
    /// `None` means unbounded: writes never block. With `Some(n)`, a writer blocks while `n`
    /// operations are already queued.
    pub queue_capacity: Option<usize>,
}

impl Default for DataSourceOptions {
    fn default() -> Self {
        Self {
            lane_name: DEFAULT_LANE_NAME.to_string(),
            stack_size: None,
            queue_capacity: None,
        }
    }
}

impl DataSourceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lane_name(mut self, lane_name: impl Into<String>) -> Self {
        self.lane_name = lane_name.into();
        self
    }

    pub fn with_stack_size(mut self, stack_size: Option<usize>) -> Self {
        self.stack_size = stack_size;
        self
    }

    pub fn with_queue_capacity(mut self, queue_capacity: Option<usize>) -> Self {
        self.queue_capacity = queue_capacity;
        self
    }
}
