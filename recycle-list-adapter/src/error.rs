use recycle_list::ConfigError;

/// Errors surfaced by [`crate::RecycleList`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ListError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// An index resolved as visible has no backing record.
    #[error("no record for visible index {index} (data has {len} records)")]
    MissingRecord { index: usize, len: usize },
}
