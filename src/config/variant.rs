//! Success/failure value pairs.

/// A setting with a normal value and an optional replacement used when the build failed.
///
/// Empty strings are normalized to `None` so that an input set to `""` and an
/// input never set are treated alike.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variant {
    normal: Option<String>,
    on_error: Option<String>,
}

impl Variant {
    /// Creates a pair from raw input strings.
    #[must_use]
    pub fn new(normal: impl Into<String>, on_error: impl Into<String>) -> Self {
        Self {
            normal: non_empty(normal.into()),
            on_error: non_empty(on_error.into()),
        }
    }

    /// The value used when the build succeeded.
    #[must_use]
    pub fn normal(&self) -> Option<&str> {
        self.normal.as_deref()
    }

    /// The value used when the build failed, if one was given.
    #[must_use]
    pub fn on_error(&self) -> Option<&str> {
        self.on_error.as_deref()
    }
}

/// Maps an empty string to `None`.
pub(crate) fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
