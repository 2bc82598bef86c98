use std::collections::BTreeSet;
use std::fmt;

use docsite_config::ReportingSeverity;
use itertools::Itertools;

use crate::error::Result;
use crate::site::Site;
use crate::site_config::SiteConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkViolationKind {
    /// A navigation reference (sidebar doc, navbar or footer route).
    BrokenLink,
    /// A link inside a Markdown document.
    BrokenMarkdownLink,
}

/// A reference that does not resolve to anything in the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkViolation {
    pub kind: LinkViolationKind,
    /// Where the reference was declared.
    pub source: String,
    pub target: String,
}

impl LinkViolation {
    pub fn broken_link(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            kind: LinkViolationKind::BrokenLink,
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn broken_markdown_link(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            kind: LinkViolationKind::BrokenMarkdownLink,
            source: source.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for LinkViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> `{}`", self.source, self.target)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkPolicy {
    pub on_broken_links: ReportingSeverity,
    pub on_broken_markdown_links: ReportingSeverity,
}

impl LinkPolicy {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            on_broken_links: config.on_broken_links,
            on_broken_markdown_links: config.on_broken_markdown_links,
        }
    }

    pub fn severity(&self, kind: LinkViolationKind) -> ReportingSeverity {
        match kind {
            LinkViolationKind::BrokenLink => self.on_broken_links,
            LinkViolationKind::BrokenMarkdownLink => self.on_broken_markdown_links,
        }
    }

    /// Apply the configured severity to each violation.
    ///
    /// Fails if any violation is configured to `throw`, naming every one of them.
    pub fn report(&self, violations: &[LinkViolation]) -> Result<()> {
        let mut thrown = Vec::new();
        for violation in violations {
            match self.severity(violation.kind) {
                ReportingSeverity::Ignore => {}
                ReportingSeverity::Warn => log::warn!("Broken link: {violation}"),
                ReportingSeverity::Throw => thrown.push(violation),
            }
        }
        if thrown.is_empty() {
            return Ok(());
        }
        anyhow::bail!(
            "Found {} broken link(s):\n  {}",
            thrown.len(),
            thrown.iter().join("\n  ")
        )
    }
}

/// Resolve the site's navigation references against the known document ids.
///
/// Sidebar doc ids must name a document. Internal navbar and footer routes
/// under the docs route must name a document too, or be the docs root itself.
/// Other routes are served by pages this crate knows nothing about.
pub fn find_broken_links(site: &Site, doc_ids: &BTreeSet<String>) -> Vec<LinkViolation> {
    let mut violations = Vec::new();

    for tree in site.sidebars.iter() {
        for id in tree.doc_ids() {
            if !doc_ids.contains(id) {
                violations.push(LinkViolation::broken_link(
                    format!("sidebar `{}`", tree.name()),
                    id,
                ));
            }
        }
    }

    let docs_route = site.config.options.docs.route_base_path.as_str();
    for (label, target) in site.config.theme_config.links() {
        if !target.is_internal() {
            continue;
        }
        let route = target.as_str();
        if !resolves(route, &site.config.base_url, docs_route, doc_ids) {
            violations.push(LinkViolation::broken_link(format!("link `{label}`"), route));
        }
    }

    violations
}

fn resolves(route: &str, base_url: &str, docs_route: &str, doc_ids: &BTreeSet<String>) -> bool {
    let path = route
        .strip_prefix(base_url)
        .or_else(|| route.strip_prefix('/'))
        .unwrap_or(route);
    let path = path.split(['#', '?']).next().unwrap_or(path);
    let path = path.trim_end_matches('/');

    // Docs served from the site root own every route.
    if docs_route.is_empty() {
        return if path.is_empty() {
            !doc_ids.is_empty()
        } else {
            doc_ids.contains(path)
        };
    }
    let Some(rest) = path.strip_prefix(docs_route) else {
        log::trace!("{route}: outside the docs route, not checked");
        return true;
    };
    if rest.is_empty() {
        return !doc_ids.is_empty();
    }
    match rest.strip_prefix('/') {
        Some(id) => doc_ids.contains(id),
        // e.g. `/docsearch`, only shares a prefix with the docs route
        None => true,
    }
}
