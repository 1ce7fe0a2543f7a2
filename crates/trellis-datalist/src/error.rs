//! Error types for the datalist widget.

/// Result type alias for datalist operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while setting up or feeding a datalist.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The container has no preceding sibling element to use as the
    /// associated input.
    #[error(
        "container '{container_id}' has no preceding sibling element; \
         an <input type=\"text\"> must directly precede it"
    )]
    MissingInput { container_id: String },

    /// The element preceding the container is not a text input.
    #[error("element preceding container '{container_id}' is <{tag}>, not a text input")]
    NotATextInput { container_id: String, tag: String },

    /// A markup fragment failed to parse.
    #[error("markup fragment is not well formed: {message}")]
    Markup { message: String },
}

impl Error {
    /// Create a missing-input error.
    pub fn missing_input(container_id: impl Into<String>) -> Self {
        Self::MissingInput {
            container_id: container_id.into(),
        }
    }

    /// Create a wrong-sibling error.
    pub fn not_a_text_input(container_id: impl Into<String>, tag: impl Into<String>) -> Self {
        Self::NotATextInput {
            container_id: container_id.into(),
            tag: tag.into(),
        }
    }

    /// Create a markup error.
    pub fn markup(message: impl Into<String>) -> Self {
        Self::Markup {
            message: message.into(),
        }
    }
}
