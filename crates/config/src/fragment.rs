use std::path;

use super::*;
use crate::config::from_yaml_file;

/// One independently declared piece of site configuration.
///
/// The project file carries the main fragment; `include`d files carry more.
/// Fragments are expected to own disjoint fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Fragment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<SiteFragment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presets: Option<Vec<Preset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_config: Option<ThemeConfigFragment>,
}

impl Fragment {
    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<Self> {
        from_yaml_file(path.into(), "Failed to read fragment", "Failed to parse fragment")
    }

    pub fn to_value(&self) -> serde_yaml::Value {
        serde_yaml::to_value(self).expect("fragments are always representable as YAML")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_file_ok() {
        let fragment = Fragment::from_file("tests/fixtures/site/theme.yml").unwrap();
        assert!(fragment.site.is_none());
        let theme = fragment.theme_config.unwrap();
        assert_eq!(theme.algolia.unwrap().index_name.as_deref(), Some("kuve"));
    }

    #[test]
    fn to_value_skips_undeclared() {
        let fragment = Fragment {
            site: Some(SiteFragment {
                title: Some("Kuve".to_owned()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let value: serde_yaml::Value = serde_yaml::from_str("site: {title: Kuve}").unwrap();
        assert_eq!(fragment.to_value(), value);
    }

    #[test]
    fn empty_fragment_is_empty_mapping() {
        let value = Fragment::default().to_value();
        assert_eq!(value, serde_yaml::Value::Mapping(Default::default()));
    }
}
