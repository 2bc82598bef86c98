use crate::Conflict;

/// Structural problems found while building sidebars or composing the site descriptor.
///
/// All of these are fatal to the invocation that raised them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("sidebar `{sidebar}` references doc `{id}` more than once")]
    DuplicateDocId { sidebar: String, id: String },
    #[error("sidebar `{sidebar}` has an empty category `{label}`")]
    EmptyCategory { sidebar: String, label: String },
    #[error("`{field}` is declared by both {first} and {second}")]
    ConflictingOption {
        field: String,
        first: String,
        second: String,
    },
    #[error(
        "default locale `{default_locale}` is not one of the configured locales [{}]",
        .locales.join(", ")
    )]
    InvalidLocale {
        default_locale: String,
        locales: Vec<String>,
    },
    #[error("`{field}` is required")]
    MissingField { field: &'static str },
    #[error("link `{label}` must declare exactly one of `to` or `href`")]
    InvalidLink { label: String },
    #[error("navbar item `{label}` references unknown sidebar `{sidebar_id}`")]
    UnknownSidebar { label: String, sidebar_id: String },
    #[error("composed configuration is malformed: {message}")]
    Malformed { message: String },
}

impl From<Conflict> for ValidationError {
    fn from(conflict: Conflict) -> Self {
        let Conflict {
            field,
            first,
            second,
        } = conflict;
        Self::ConflictingOption {
            field,
            first,
            second,
        }
    }
}
