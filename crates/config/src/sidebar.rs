use std::collections::BTreeMap;
use std::fmt;
use std::path;

use super::*;
use crate::config::from_yaml_file;

/// One entry of a declared sidebar, as written in `sidebars.yml`.
///
/// A bare string is shorthand for a doc reference:
///
/// ```yaml
/// tutorial:
///   - intro
///   - type: category
///     label: Getting Started
///     items: [getting-started/installation]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarItem {
    Doc { id: String, label: Option<String> },
    Category(CategoryDecl),
}

impl SidebarItem {
    pub fn doc(id: impl Into<String>) -> Self {
        Self::Doc {
            id: id.into(),
            label: None,
        }
    }

    pub fn category(label: impl Into<String>, items: Vec<SidebarItem>) -> Self {
        Self::Category(CategoryDecl {
            label: label.into(),
            collapsed: default_collapsed(),
            items,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct CategoryDecl {
    pub label: String,
    #[serde(default = "default_collapsed")]
    pub collapsed: bool,
    // Left empty rather than rejected here so the tree builder can report it with context.
    #[serde(default)]
    pub items: Vec<SidebarItem>,
}

fn default_collapsed() -> bool {
    true
}

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum TaggedSidebarItem {
    Doc {
        id: String,
        #[serde(default)]
        label: Option<String>,
    },
    Category(CategoryDecl),
}

impl From<TaggedSidebarItem> for SidebarItem {
    fn from(tagged: TaggedSidebarItem) -> Self {
        match tagged {
            TaggedSidebarItem::Doc { id, label } => Self::Doc { id, label },
            TaggedSidebarItem::Category(category) => Self::Category(category),
        }
    }
}

struct SidebarItemVisitor;

impl<'de> serde::de::Visitor<'de> for SidebarItemVisitor {
    type Value = SidebarItem;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a doc id or a table with a `type` of doc or category")
    }

    fn visit_str<E>(self, value: &str) -> Result<SidebarItem, E>
    where
        E: serde::de::Error,
    {
        Ok(SidebarItem::doc(value))
    }

    fn visit_map<A>(self, map: A) -> Result<SidebarItem, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let tagged: TaggedSidebarItem = serde::Deserialize::deserialize(
            serde::de::value::MapAccessDeserializer::new(map),
        )?;
        Ok(tagged.into())
    }
}

impl<'de> serde::de::Deserialize<'de> for SidebarItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        deserializer.deserialize_any(SidebarItemVisitor)
    }
}

/// Every sidebar declared for the site, keyed by sidebar id.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(transparent)]
pub struct SidebarsDecl {
    pub sidebars: BTreeMap<String, Vec<SidebarItem>>,
}

impl SidebarsDecl {
    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<Self> {
        from_yaml_file(path.into(), "Failed to read sidebars", "Failed to parse sidebars")
    }
}
