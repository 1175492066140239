//! Per-field binding metadata

/// Describes how one profile field is read from the environment.
///
/// The derive macro emits one descriptor per field, in declaration order.
/// A descriptor is never both `required` and carrying a `default`; the
/// macro rejects that combination at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Struct field name
    pub field: &'static str,
    /// Environment variable name, prefix included
    pub key: &'static str,
    /// Literal applied when the variable is unset
    pub default: Option<&'static str>,
    /// Binding fails when the variable is unset
    pub required: bool,
    /// Declared field type, as written in the struct
    pub type_name: &'static str,
}

impl FieldDescriptor {
    /// A field with neither a default nor a `required` flag.
    pub const fn optional(field: &'static str, key: &'static str, type_name: &'static str) -> Self {
        Self {
            field,
            key,
            default: None,
            required: false,
            type_name,
        }
    }

    /// A field that falls back to `default` when unset.
    pub const fn with_default(
        field: &'static str,
        key: &'static str,
        default: &'static str,
        type_name: &'static str,
    ) -> Self {
        Self {
            field,
            key,
            default: Some(default),
            required: false,
            type_name,
        }
    }

    /// A field whose absence fails binding.
    pub const fn required(field: &'static str, key: &'static str, type_name: &'static str) -> Self {
        Self {
            field,
            key,
            default: None,
            required: true,
            type_name,
        }
    }
}
