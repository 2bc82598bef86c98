//! Navigation trees built from `sidebars.yml` declarations.
//!
//! Each declared sidebar is validated on its own: doc ids must be unique
//! within the tree and categories must not be empty. Sibling order is kept
//! exactly as declared, since it drives the previous/next navigation.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use docsite_config::path::{slugify, titleize_slug};
use docsite_config::{SidebarItem, SidebarsDecl, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SidebarNode {
    Doc(DocRef),
    Category(Category),
}

/// Leaf referencing a document by id.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DocRef {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl DocRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
        }
    }

    /// Declared label, falling back to a title derived from the last id segment.
    pub fn title(&self) -> String {
        self.label.clone().unwrap_or_else(|| {
            let name = self.id.rsplit('/').next().unwrap_or(&self.id);
            titleize_slug(name)
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Category {
    pub label: String,
    /// Slug of the label; stable key for persisting the collapsed state.
    pub key: String,
    pub collapsed: bool,
    pub items: Vec<SidebarNode>,
}

/// Neighbours of a doc in depth-first sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager<'t> {
    pub previous: Option<&'t DocRef>,
    pub next: Option<&'t DocRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct SidebarTree {
    #[serde(skip)]
    name: String,
    items: Vec<SidebarNode>,
}

impl SidebarTree {
    pub fn build(name: &str, items: &[SidebarItem]) -> Result<Self, ValidationError> {
        let mut builder = TreeBuilder {
            sidebar: name,
            seen: HashSet::new(),
            trail: Vec::new(),
        };
        let items = builder.build_items(items)?;
        if items.is_empty() {
            log::warn!("Sidebar `{name}` is empty");
        }
        log::debug!("Built sidebar `{}` with {} docs", name, builder.seen.len());
        Ok(Self {
            name: name.to_owned(),
            items,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[SidebarNode] {
        &self.items
    }

    /// Every doc leaf, depth-first.
    pub fn docs(&self) -> Vec<&DocRef> {
        let mut docs = Vec::new();
        collect_docs(&self.items, &mut docs);
        docs
    }

    pub fn doc_ids(&self) -> Vec<&str> {
        self.docs().into_iter().map(|d| d.id.as_str()).collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.docs().iter().any(|d| d.id == id)
    }

    pub fn pager(&self, id: &str) -> Option<Pager<'_>> {
        let docs = self.docs();
        let index = docs.iter().position(|d| d.id == id)?;
        let previous = index.checked_sub(1).map(|i| docs[i]);
        let next = docs.get(index + 1).copied();
        Some(Pager { previous, next })
    }
}

fn collect_docs<'t>(items: &'t [SidebarNode], docs: &mut Vec<&'t DocRef>) {
    for item in items {
        match item {
            SidebarNode::Doc(doc) => docs.push(doc),
            SidebarNode::Category(category) => collect_docs(&category.items, docs),
        }
    }
}

struct TreeBuilder<'s> {
    sidebar: &'s str,
    seen: HashSet<String>,
    trail: Vec<String>,
}

impl TreeBuilder<'_> {
    fn build_items(&mut self, items: &[SidebarItem]) -> Result<Vec<SidebarNode>, ValidationError> {
        items.iter().map(|item| self.build_item(item)).collect()
    }

    fn build_item(&mut self, item: &SidebarItem) -> Result<SidebarNode, ValidationError> {
        match item {
            SidebarItem::Doc { id, label } => {
                if !self.seen.insert(id.clone()) {
                    return Err(ValidationError::DuplicateDocId {
                        sidebar: self.sidebar.to_owned(),
                        id: id.clone(),
                    });
                }
                Ok(SidebarNode::Doc(DocRef {
                    id: id.clone(),
                    label: label.clone(),
                }))
            }
            SidebarItem::Category(category) => {
                self.trail.push(category.label.clone());
                if category.items.is_empty() {
                    return Err(ValidationError::EmptyCategory {
                        sidebar: self.sidebar.to_owned(),
                        label: self.trail.join(" > "),
                    });
                }
                let items = self.build_items(&category.items)?;
                self.trail.pop();
                Ok(SidebarNode::Category(Category {
                    label: category.label.clone(),
                    key: slugify(&category.label),
                    collapsed: category.collapsed,
                    items,
                }))
            }
        }
    }
}

/// All navigation trees of the site, keyed by sidebar id.
///
/// Trees are separate namespaces: the same doc may appear in several.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Sidebars {
    trees: BTreeMap<String, SidebarTree>,
}

impl Sidebars {
    pub fn build(decl: &SidebarsDecl) -> Result<Self, ValidationError> {
        let trees = decl
            .sidebars
            .iter()
            .map(|(name, items)| Ok((name.clone(), SidebarTree::build(name, items)?)))
            .collect::<Result<_, ValidationError>>()?;
        Ok(Self { trees })
    }

    pub fn get(&self, name: &str) -> Option<&SidebarTree> {
        self.trees.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.trees.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SidebarTree> {
        self.trees.values()
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// First sidebar, by name, listing `id`.
    pub fn sidebar_for_doc(&self, id: &str) -> Option<&SidebarTree> {
        self.iter().find(|tree| tree.contains(id))
    }

    /// Previous/next links for every doc, taken from the first sidebar listing it.
    pub fn navigation(&self) -> BTreeMap<String, DocNavigation> {
        let ids: BTreeSet<&str> = self.iter().flat_map(|tree| tree.doc_ids()).collect();
        ids.into_iter()
            .filter_map(|id| {
                let tree = self.sidebar_for_doc(id)?;
                let pager = tree.pager(id)?;
                let navigation = DocNavigation {
                    sidebar: tree.name().to_owned(),
                    previous: pager.previous.map(NavLink::from_doc),
                    next: pager.next.map(NavLink::from_doc),
                };
                Some((id.to_owned(), navigation))
            })
            .collect()
    }
}

/// Where a doc sits in its sidebar, as shown at the bottom of the page.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DocNavigation {
    pub sidebar: String,
    pub previous: Option<NavLink>,
    pub next: Option<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct NavLink {
    pub id: String,
    pub title: String,
}

impl NavLink {
    fn from_doc(doc: &DocRef) -> Self {
        Self {
            id: doc.id.clone(),
            title: doc.title(),
        }
    }
}
