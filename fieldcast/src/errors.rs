use thiserror::Error;

/// Errors raised while resolving a field into a render request.
///
/// Both variants signal a programming error in the calling view code rather
/// than a runtime condition: the caller must fix the model or the field
/// configuration. They propagate unhandled out of rendering and are never
/// retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// A list-backed field needed the model instance to enumerate its sibling
    /// list property, but no model was supplied.
    #[error("the model is null; unable to enumerate the list items for field '{property}'")]
    ModelNull { property: String },

    /// The model was present but the list property the field draws its items
    /// from evaluated to null.
    #[error("the list property '{list_property}' on the model is null; field '{property}' requires it for its items")]
    ListPropertyNull {
        list_property: String,
        property: String,
    },
}

impl FieldError {
    pub fn model_null(property: impl Into<String>) -> Self {
        Self::ModelNull {
            property: property.into(),
        }
    }

    pub fn list_property_null(list_property: impl Into<String>, property: impl Into<String>) -> Self {
        Self::ListPropertyNull {
            list_property: list_property.into(),
            property: property.into(),
        }
    }
}

/// Convenience alias for fallible field-resolution operations.
pub type FieldResult<T> = Result<T, FieldError>;
