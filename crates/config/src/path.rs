use std::fmt;

use itertools::Itertools;
use relative_path::{RelativePath, RelativePathBuf};

/// A path relative to the project root, as written in config files.
#[derive(
    Default, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
#[serde(try_from = "String")]
pub struct RelPath(RelativePathBuf);

impl RelPath {
    pub fn from_unchecked<S: AsRef<str>>(value: S) -> Self {
        Self(RelativePath::new(value.as_ref()).normalize())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_path(&self) -> &RelativePath {
        self.0.as_relative_path()
    }

    /// Resolve against `root`.
    pub fn to_path(&self, root: &std::path::Path) -> std::path::PathBuf {
        self.0.to_path(root)
    }
}

impl fmt::Display for RelPath {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(fmt)
    }
}

impl TryFrom<&str> for RelPath {
    type Error = &'static str;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.starts_with('/') || std::path::Path::new(value).is_absolute() {
            Err("Paths must be relative to the project root")
        } else {
            Ok(Self::from_unchecked(value))
        }
    }
}

impl TryFrom<String> for RelPath {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let value = value.as_str();
        Self::try_from(value)
    }
}

impl std::ops::Deref for RelPath {
    type Target = RelativePath;

    #[inline]
    fn deref(&self) -> &RelativePath {
        self.as_path()
    }
}

impl AsRef<str> for RelPath {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

static SLUG_INVALID_CHARS: once_cell::sync::Lazy<regex::Regex> =
    once_cell::sync::Lazy::new(|| regex::Regex::new(r"([^a-zA-Z0-9]+)").unwrap());

/// Create a URL-safe key out of a label, e.g. a sidebar category.
pub fn slugify<S: AsRef<str>>(name: S) -> String {
    slugify_str(name.as_ref())
}

fn slugify_str(name: &str) -> String {
    let name = deunicode::deunicode_with_tofu(name, "-");
    let slug = SLUG_INVALID_CHARS.replace_all(&name, "-");
    slug.trim_matches('-').to_lowercase()
}

/// Format a user-visible title out of a slug.
pub fn titleize_slug<S: AsRef<str>>(slug: S) -> String {
    titleize_slug_str(slug.as_ref())
}

fn titleize_slug_str(slug: &str) -> String {
    slug.split(['-', '_']).filter(|s| !s.is_empty()).map(title_case).join(" ")
}

/// Title-case a single word
fn title_case(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        None => String::new(),
        Some(f) => f
            .to_uppercase()
            .chain(c.flat_map(|t| t.to_lowercase()))
            .collect(),
    }
}

pub fn split_ext(name: &str) -> (&str, Option<&str>) {
    name.rsplit_once('.')
        .map(|(n, e)| (n, Some(e)))
        .unwrap_or((name, None))
}
