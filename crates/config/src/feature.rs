use std::path;

use super::*;
use crate::config::from_yaml_file;

/// A static homepage feature card.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct FeatureRecord {
    pub title: String,
    /// Inline Markdown.
    pub description: String,
    pub icon: RelPath,
}

impl FeatureRecord {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        icon: RelPath,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            icon,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(transparent)]
pub struct FeaturesDecl {
    pub features: Vec<FeatureRecord>,
}

impl FeaturesDecl {
    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<Self> {
        from_yaml_file(path.into(), "Failed to read features", "Failed to parse features")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_file_keeps_order() {
        let decl = FeaturesDecl::from_file("tests/fixtures/site/features.yml").unwrap();
        let titles: Vec<_> = decl.features.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Easy Version Management",
                "Project-Specific Versions",
                "Auto-Detection"
            ]
        );
    }

    #[test]
    fn icon_is_required() {
        let result: Result<FeatureRecord, _> =
            serde_yaml::from_str("title: Foo\ndescription: bar\n");
        assert!(result.is_err());
    }
}
