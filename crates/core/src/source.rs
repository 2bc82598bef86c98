use std::collections::BTreeSet;

use docsite_config::path::split_ext;
use relative_path::RelativePathBuf;

use crate::Result;
use crate::Status;

/// File extensions treated as documents.
pub const DOC_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Partials and hidden files never become documents.
pub const DEFAULT_IGNORES: [&str; 2] = ["_*", ".*"];

/// The docs content directory, filtered by gitignore-style patterns.
#[derive(Debug, Clone)]
pub struct DocSource {
    root: std::path::PathBuf,
    ignore: ignore::gitignore::Gitignore,
}

impl DocSource {
    pub fn new<'i>(
        root: &std::path::Path,
        ignores: impl IntoIterator<Item = &'i str>,
    ) -> Result<Self> {
        let mut ignore = ignore::gitignore::GitignoreBuilder::new(root);
        for line in ignores.into_iter() {
            ignore
                .add_line(None, line)
                .map_err(|e| Status::new("Invalid ignore entry").with_source(e))?;
        }
        let ignore = ignore
            .build()
            .map_err(|e| Status::new("Invalid ignore entry").with_source(e))?;

        let source = Self {
            root: root.to_owned(),
            ignore,
        };
        Ok(source)
    }

    pub fn with_default_ignores(root: &std::path::Path) -> Result<Self> {
        Self::new(root, DEFAULT_IGNORES)
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    pub fn iter(&self) -> impl Iterator<Item = std::path::PathBuf> + '_ {
        walkdir::WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |e| self.includes_entry(e))
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(move |e| e.path().to_path_buf())
    }

    /// Ids of every document under the root: the relative path without its extension.
    ///
    /// A missing root yields no documents.
    pub fn doc_ids(&self) -> BTreeSet<String> {
        if !self.root.is_dir() {
            log::debug!("{}: no docs directory", self.root.display());
            return BTreeSet::new();
        }
        self.iter()
            .filter_map(|path| self.doc_id(&path))
            .collect()
    }

    fn doc_id(&self, path: &std::path::Path) -> Option<String> {
        let rel_path = path.strip_prefix(&self.root).ok()?;
        let rel_path = RelativePathBuf::from_path(rel_path).ok()?;
        let (stem, ext) = split_ext(rel_path.as_str());
        match ext {
            Some(ext) if DOC_EXTENSIONS.contains(&ext) => Some(stem.to_owned()),
            _ => {
                log::trace!("{rel_path}: not a document");
                None
            }
        }
    }

    fn includes_path_leaf(&self, path: &std::path::Path, is_dir: bool) -> bool {
        match self.ignore.matched(path, is_dir) {
            ignore::Match::None => true,
            ignore::Match::Ignore(glob) => {
                log::trace!("{:?}: ignored {:?}", path, glob.original());
                false
            }
            ignore::Match::Whitelist(glob) => {
                log::trace!("{:?}: allowed {:?}", path, glob.original());
                true
            }
        }
    }

    fn includes_entry(&self, entry: &walkdir::DirEntry) -> bool {
        let file = entry.path();

        // Assumption: The parent paths will have been checked before we even get to this point.
        let is_dir = entry.file_type().is_dir();
        self.includes_path_leaf(file, is_dir)
    }
}
