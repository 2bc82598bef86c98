use std::collections::BTreeSet;
use std::path;

use anyhow::Context as _;
use docsite_config::{Config, DEFAULT_FEATURES_FILE, FeaturesDecl, SidebarsDecl, ValidationError};
use docsite_core::DocSource;

use crate::compose::compose;
use crate::error::Result;
use crate::features::FeatureList;
use crate::files;
use crate::links::{LinkPolicy, find_broken_links};
use crate::sidebar::Sidebars;
use crate::site_config::SiteConfig;

pub const SITE_FILE: &str = "site.json";
pub const SIDEBARS_FILE: &str = "sidebars.json";
pub const FEATURES_FILE: &str = "features.json";
pub const FEATURES_HTML_FILE: &str = "features.html";
pub const NAVIGATION_FILE: &str = "navigation.json";

/// Everything the static-site generator needs: the descriptor, its navigation
/// trees and the homepage features.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pub config: SiteConfig,
    pub sidebars: Sidebars,
    pub features: FeatureList,
}

impl Site {
    /// Attach `sidebars` to the descriptor, checking the navbar against them.
    pub fn assemble(
        config: SiteConfig,
        sidebars: Sidebars,
        features: FeatureList,
    ) -> Result<Self, ValidationError> {
        config.check_sidebars(&sidebars)?;
        Ok(Self {
            config,
            sidebars,
            features,
        })
    }

    pub fn load(project: &Config) -> Result<Self> {
        let fragments = project.fragments()?;
        let config = compose(fragments).context("Invalid site configuration")?;

        let sidebars_path = config.options.docs.sidebar_path.to_path(&project.root);
        let sidebars = if sidebars_path.exists() {
            SidebarsDecl::from_file(&sidebars_path)?
        } else {
            log::warn!("No sidebars found at {}", sidebars_path.display());
            SidebarsDecl::default()
        };
        let sidebars = Sidebars::build(&sidebars)
            .with_context(|| format!("Invalid sidebars in {}", sidebars_path.display()))?;

        let features_path = project.features_path();
        let features = if features_path.exists() {
            FeaturesDecl::from_file(&features_path)?
        } else if project.features.as_str() != DEFAULT_FEATURES_FILE {
            anyhow::bail!("Features file {} not found", features_path.display());
        } else {
            log::debug!("No features at {}", features_path.display());
            FeaturesDecl::default()
        };
        let features = FeatureList::from_records(&features.features);

        let site = Self::assemble(config, sidebars, features)?;
        log::debug!(
            "Loaded {} sidebars and {} features",
            site.sidebars.len(),
            site.features.len()
        );
        Ok(site)
    }

    pub fn link_policy(&self) -> LinkPolicy {
        LinkPolicy::from_config(&self.config)
    }

    /// Resolve navigation references against `doc_ids`, reporting per the link policy.
    pub fn check_links(&self, doc_ids: &BTreeSet<String>) -> Result<()> {
        let violations = find_broken_links(self, doc_ids);
        log::debug!("{} unresolved references", violations.len());
        self.link_policy().report(&violations)
    }

    /// Check links against the documents found in the project's docs directory.
    pub fn check_docs(&self, project: &Config) -> Result<()> {
        let doc_ids = discover_docs(project)?;
        self.check_links(&doc_ids)
    }

    pub fn features_html(&self) -> Result<String> {
        self.features.render_html(&self.config.base_url, None)
    }

    pub fn write(&self, dest: &path::Path) -> Result<()> {
        log::info!("Writing site descriptor to {}", dest.display());
        files::write_document_file(
            serde_json::to_string_pretty(&self.config)?,
            dest.join(SITE_FILE),
        )?;
        files::write_document_file(
            serde_json::to_string_pretty(&self.sidebars)?,
            dest.join(SIDEBARS_FILE),
        )?;
        files::write_document_file(
            serde_json::to_string_pretty(&self.features)?,
            dest.join(FEATURES_FILE),
        )?;
        files::write_document_file(self.features_html()?, dest.join(FEATURES_HTML_FILE))?;
        files::write_document_file(
            serde_json::to_string_pretty(&self.sidebars.navigation())?,
            dest.join(NAVIGATION_FILE),
        )?;
        Ok(())
    }
}

/// Ids of the documents under the project's docs directory.
pub fn discover_docs(project: &Config) -> Result<BTreeSet<String>> {
    let source = DocSource::with_default_ignores(&project.docs_path())?;
    let doc_ids = source.doc_ids();
    log::debug!(
        "Found {} docs in {}",
        doc_ids.len(),
        source.root().display()
    );
    Ok(doc_ids)
}
