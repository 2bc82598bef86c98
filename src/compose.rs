use docsite_config::{Conflict, DisjointMerge, Fragment, PresetOptions, ValidationError};

use crate::site_config::SiteConfig;

/// Merges configuration fragments into one [`SiteConfig`].
///
/// Each fragment is named by its origin (usually a file name) so conflicts can
/// point at both declarations. Fields must be owned by exactly one fragment;
/// nested tables merge, anything else declared twice is an error.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    fragments: Vec<(String, Fragment)>,
}

impl Composer {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn fragment(mut self, origin: impl Into<String>, fragment: Fragment) -> Self {
        self.fragments.push((origin.into(), fragment));
        self
    }

    /// Merge every fragment, in the order they were added.
    pub fn merged(&self) -> DisjointMerge {
        let mut merge = DisjointMerge::new();
        for (origin, fragment) in &self.fragments {
            merge.add(origin, fragment.to_value());
        }
        merge
    }

    pub fn compose(&self) -> Result<SiteConfig, ValidationError> {
        let merge = self.merged();
        check_disjoint(merge.conflicts())?;
        let fragment: Fragment = from_value(merge.into_value())?;

        let mut options = DisjointMerge::new();
        for preset in fragment.presets.iter().flatten() {
            let value = serde_yaml::to_value(&preset.options).map_err(malformed)?;
            options.add(&format!("preset `{}`", preset.name), value);
        }
        check_disjoint(options.conflicts())?;
        let options: PresetOptions = from_value(options.into_value())?;

        let config = SiteConfig::from_fragment(fragment, options)?;
        log::debug!(
            "Composed `{}` from {} fragments",
            config.title,
            self.fragments.len()
        );
        Ok(config)
    }
}

/// Compose `fragments`, named by origin, into a site descriptor.
pub fn compose<I, S>(fragments: I) -> Result<SiteConfig, ValidationError>
where
    I: IntoIterator<Item = (S, Fragment)>,
    S: Into<String>,
{
    fragments
        .into_iter()
        .fold(Composer::new(), |composer, (origin, fragment)| {
            composer.fragment(origin, fragment)
        })
        .compose()
}

fn check_disjoint(conflicts: &[Conflict]) -> Result<(), ValidationError> {
    for conflict in conflicts {
        log::error!(
            "`{}` is declared by both {} and {}",
            conflict.field,
            conflict.first,
            conflict.second
        );
    }
    match conflicts.first() {
        Some(conflict) => Err(conflict.clone().into()),
        None => Ok(()),
    }
}

fn from_value<T: serde::de::DeserializeOwned>(value: serde_yaml::Value) -> Result<T, ValidationError> {
    serde_yaml::from_value(value).map_err(malformed)
}

fn malformed(err: serde_yaml::Error) -> ValidationError {
    ValidationError::Malformed {
        message: err.to_string(),
    }
}
