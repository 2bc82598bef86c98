use std::path;

use super::*;

pub const CONFIG_FILENAME: &str = "docsite.yml";
/// Features file looked up when the project does not name one.
pub const DEFAULT_FEATURES_FILE: &str = "features.yml";

/// The project file: where things live, plus the main configuration fragment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Config {
    #[serde(skip)]
    pub root: path::PathBuf,
    #[serde(skip)]
    pub file_name: String,
    pub destination: RelPath,
    pub docs_dir: RelPath,
    pub features: RelPath,
    /// Additional fragment files, merged in order after this one.
    pub include: Vec<RelPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<SiteFragment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presets: Option<Vec<Preset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_config: Option<ThemeConfigFragment>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            root: Default::default(),
            file_name: CONFIG_FILENAME.to_owned(),
            destination: RelPath::from_unchecked("_site"),
            docs_dir: RelPath::from_unchecked("docs"),
            features: RelPath::from_unchecked(DEFAULT_FEATURES_FILE),
            include: Default::default(),
            site: Default::default(),
            presets: Default::default(),
            theme_config: Default::default(),
        }
    }
}

impl Config {
    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<Config> {
        Self::from_file_internal(path.into())
    }

    fn from_file_internal(path: path::PathBuf) -> Result<Config> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| CONFIG_FILENAME.to_owned());
        let mut config: Config =
            from_yaml_file(path.clone(), "Failed to read config", "Failed to parse config")?;

        let mut root = path;
        root.pop(); // Remove filename
        if root == std::path::Path::new("") {
            root = std::path::Path::new(".").to_owned();
        }
        config.root = root;
        config.file_name = file_name;

        Ok(config)
    }

    pub fn from_cwd<P: Into<path::PathBuf>>(cwd: P) -> Result<Config> {
        Self::from_cwd_internal(cwd.into())
    }

    fn from_cwd_internal(cwd: path::PathBuf) -> Result<Config> {
        let file_path = find_project_file(&cwd, CONFIG_FILENAME);
        let config = file_path
            .map(|p| {
                log::debug!("Using config file `{}`", p.display());
                Self::from_file(&p)
            })
            .unwrap_or_else(|| {
                log::warn!("No {CONFIG_FILENAME} file found in current directory, using default config.");
                let config = Config {
                    root: cwd,
                    ..Default::default()
                };
                Ok(config)
            })?;
        Ok(config)
    }

    /// The configuration fragment declared inline in the project file.
    pub fn fragment(&self) -> Fragment {
        Fragment {
            site: self.site.clone(),
            presets: self.presets.clone(),
            theme_config: self.theme_config.clone(),
        }
    }

    /// Load every `include`d fragment, in declaration order, named by its path.
    pub fn included_fragments(&self) -> Result<Vec<(String, Fragment)>> {
        self.include
            .iter()
            .map(|rel| {
                let fragment = Fragment::from_file(rel.to_path(&self.root))?;
                Ok((rel.to_string(), fragment))
            })
            .collect()
    }

    /// All fragments, the project file first.
    pub fn fragments(&self) -> Result<Vec<(String, Fragment)>> {
        let mut fragments = vec![(self.file_name.clone(), self.fragment())];
        fragments.extend(self.included_fragments()?);
        Ok(fragments)
    }

    pub fn destination_path(&self) -> path::PathBuf {
        self.destination.to_path(&self.root)
    }

    pub fn docs_path(&self) -> path::PathBuf {
        self.docs_dir.to_path(&self.root)
    }

    pub fn features_path(&self) -> path::PathBuf {
        self.features.to_path(&self.root)
    }
}

/// Read a YAML file; an empty file yields the default value.
pub(crate) fn from_yaml_file<T>(
    path: path::PathBuf,
    read_failure: &'static str,
    parse_failure: &'static str,
) -> Result<T>
where
    T: serde::de::DeserializeOwned + Default,
{
    let content = std::fs::read_to_string(&path).map_err(|e| {
        Status::new(read_failure)
            .with_source(e)
            .context_with(|c| c.insert("Path", path.display().to_string()))
    })?;

    if content.trim().is_empty() {
        return Ok(T::default());
    }
    serde_yaml::from_str(&content).map_err(|e| {
        Status::new(parse_failure)
            .with_source(e)
            .context_with(|c| c.insert("Path", path.display().to_string()))
    })
}

fn find_project_file<P: Into<path::PathBuf>>(dir: P, name: &str) -> Option<path::PathBuf> {
    find_project_file_internal(dir.into(), name)
}

fn find_project_file_internal(dir: path::PathBuf, name: &str) -> Option<path::PathBuf> {
    let mut file_path = dir;
    file_path.push(name);
    while !file_path.exists() {
        file_path.pop(); // filename
        let hit_bottom = !file_path.pop();
        if hit_bottom {
            return None;
        }
        file_path.push(name);
    }
    Some(file_path)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_file_ok() {
        let result = Config::from_file("tests/fixtures/site/docsite.yml").unwrap();
        assert_eq!(
            result.root,
            path::Path::new("tests/fixtures/site").to_path_buf()
        );
        assert_eq!(result.file_name, "docsite.yml");
        assert_eq!(result.include, vec![RelPath::from_unchecked("theme.yml")]);
    }

    #[test]
    fn test_from_file_empty() {
        let result = Config::from_file("tests/fixtures/config/empty.yml").unwrap();
        assert_eq!(
            result.root,
            path::Path::new("tests/fixtures/config").to_path_buf()
        );
        assert_eq!(result.destination.as_str(), "_site");
        assert_eq!(result.fragment(), Fragment::default());
    }

    #[test]
    fn test_from_file_invalid_syntax() {
        let result = Config::from_file("tests/fixtures/config/invalid_syntax.yml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_unknown_policy() {
        let result = Config::from_file("tests/fixtures/config/bad_policy.yml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_not_found() {
        let result = Config::from_file("tests/fixtures/config/config_does_not_exist.yml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_cwd_ok() {
        let result = Config::from_cwd("tests/fixtures/site/docs").unwrap();
        assert_eq!(
            result.root,
            path::Path::new("tests/fixtures/site").to_path_buf()
        );
    }

    #[test]
    fn test_from_cwd_not_found() {
        let result = Config::from_cwd("tests/fixtures").unwrap();
        assert_eq!(result.root, path::Path::new("tests/fixtures").to_path_buf());
    }

    #[test]
    fn fragments_keep_declaration_order() {
        let config = Config::from_file("tests/fixtures/site/docsite.yml").unwrap();
        let fragments = config.fragments().unwrap();
        let names: Vec<_> = fragments.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["docsite.yml", "theme.yml"]);
    }

    #[test]
    fn find_project_file_same_dir() {
        let actual = find_project_file("tests/fixtures/site", "docsite.yml").unwrap();
        let expected = path::Path::new("tests/fixtures/site/docsite.yml");
        assert_eq!(actual, expected);
    }

    #[test]
    fn find_project_file_parent_dir() {
        let actual = find_project_file("tests/fixtures/site/docs", "docsite.yml").unwrap();
        let expected = path::Path::new("tests/fixtures/site/docsite.yml");
        assert_eq!(actual, expected);
    }

    #[test]
    fn find_project_file_doesnt_exist() {
        let expected = path::Path::new("<NOT FOUND>");
        let actual =
            find_project_file("tests/fixtures/", "docsite.yml").unwrap_or_else(|| expected.into());
        assert_eq!(actual, expected);
    }
}
