//! The composed, validated site descriptor.
//!
//! Fragments in `docsite_config` are loosely optional; the types here are what
//! is left once every fragment has been merged and checked.

use docsite_config::{
    AlgoliaFragment, BlogOption, FooterColumnDecl, FooterFragment, FooterStyle, Fragment,
    I18n, LinkDecl, Logo, NavbarFragment, NavbarItemDecl, NavbarItemKind, Position, Preset,
    PresetOptions, PrismFragment, RelPath, ReportingSeverity, SiteFragment, ThemeConfigFragment,
    ValidationError,
};

use crate::sidebar::Sidebars;

pub const DEFAULT_LOCALE: &str = "en";
pub const DEFAULT_SIDEBAR_PATH: &str = "sidebars.yml";
pub const DEFAULT_DOCS_ROUTE: &str = "docs";
pub const DEFAULT_PRISM_THEME: &str = "github";
pub const DEFAULT_PRISM_DARK_THEME: &str = "dracula";

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SiteConfig {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<RelPath>,
    pub url: String,
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    pub on_broken_links: ReportingSeverity,
    pub on_broken_markdown_links: ReportingSeverity,
    pub i18n: I18nConfig,
    pub presets: Vec<Preset>,
    /// Preset options merged across every preset.
    pub options: PresetConfig,
    pub theme_config: ThemeConfig,
}

impl SiteConfig {
    /// Validate a merged fragment plus the merged options of its presets.
    pub fn from_fragment(
        fragment: Fragment,
        options: PresetOptions,
    ) -> Result<Self, ValidationError> {
        let Fragment {
            site,
            presets,
            theme_config,
        } = fragment;
        let SiteFragment {
            title,
            tagline,
            favicon,
            url,
            base_url,
            organization_name,
            project_name,
            on_broken_links,
            on_broken_markdown_links,
            i18n,
        } = site.unwrap_or_default();

        let title = title.ok_or(ValidationError::MissingField {
            field: "site.title",
        })?;
        let mut url = url.ok_or(ValidationError::MissingField { field: "site.url" })?;
        while url.ends_with('/') {
            url.pop();
        }
        let base_url = base_url.ok_or(ValidationError::MissingField {
            field: "site.base_url",
        })?;
        let base_url = normalize_base_url(&base_url);

        Ok(Self {
            title,
            tagline,
            favicon,
            url,
            base_url,
            organization_name,
            project_name,
            on_broken_links: on_broken_links.unwrap_or(ReportingSeverity::Throw),
            on_broken_markdown_links: on_broken_markdown_links.unwrap_or(ReportingSeverity::Warn),
            i18n: I18nConfig::from_decl(i18n.unwrap_or_default())?,
            presets: presets.unwrap_or_default(),
            options: PresetConfig::from_options(options),
            theme_config: ThemeConfig::from_fragment(theme_config.unwrap_or_default())?,
        })
    }

    /// Check that every navbar sidebar item names a declared sidebar.
    pub fn check_sidebars(&self, sidebars: &Sidebars) -> Result<(), ValidationError> {
        for item in &self.theme_config.navbar.items {
            if let NavbarItem::DocSidebar {
                sidebar_id, label, ..
            } = item
            {
                if !sidebars.contains(sidebar_id) {
                    return Err(ValidationError::UnknownSidebar {
                        label: label.clone(),
                        sidebar_id: sidebar_id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Absolute route for the docs root, e.g. `/kuve/docs`.
    pub fn docs_route(&self) -> String {
        format!("{}{}", self.base_url, self.options.docs.route_base_path)
    }
}

fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else {
        format!("/{trimmed}/")
    }
}

/// Locales with the default guaranteed to be a member.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub struct I18nConfig {
    default_locale: String,
    locales: Vec<String>,
}

impl I18nConfig {
    pub fn new(
        default_locale: impl Into<String>,
        locales: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, ValidationError> {
        let default_locale = default_locale.into();
        let mut unique: Vec<String> = Vec::new();
        for locale in locales {
            let locale = locale.into();
            if unique.contains(&locale) {
                log::debug!("Dropping duplicate locale `{locale}`");
            } else {
                unique.push(locale);
            }
        }
        if !unique.contains(&default_locale) {
            return Err(ValidationError::InvalidLocale {
                default_locale,
                locales: unique,
            });
        }
        Ok(Self {
            default_locale,
            locales: unique,
        })
    }

    fn from_decl(decl: I18n) -> Result<Self, ValidationError> {
        let I18n {
            default_locale,
            locales,
        } = decl;
        let default_locale = default_locale.unwrap_or_else(|| DEFAULT_LOCALE.to_owned());
        let locales = locales.unwrap_or_else(|| vec![default_locale.clone()]);
        Self::new(default_locale, locales)
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn locales(&self) -> &[String] {
        &self.locales
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_owned(),
            locales: vec![DEFAULT_LOCALE.to_owned()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PresetConfig {
    pub docs: DocsConfig,
    pub blog: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<RelPath>,
}

impl PresetConfig {
    fn from_options(options: PresetOptions) -> Self {
        let PresetOptions { docs, blog, theme } = options;
        let docs = docs.unwrap_or_default();
        Self {
            docs: DocsConfig {
                sidebar_path: docs
                    .sidebar_path
                    .unwrap_or_else(|| RelPath::from_unchecked(DEFAULT_SIDEBAR_PATH)),
                edit_url: docs.edit_url,
                route_base_path: docs
                    .route_base_path
                    .map(|r| r.trim_matches('/').to_owned())
                    .unwrap_or_else(|| DEFAULT_DOCS_ROUTE.to_owned()),
            },
            blog: blog.as_ref().is_none_or(BlogOption::is_enabled),
            custom_css: theme.and_then(|t| t.custom_css),
        }
    }
}

impl Default for PresetConfig {
    fn default() -> Self {
        Self::from_options(PresetOptions::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DocsConfig {
    pub sidebar_path: RelPath,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,
    pub route_base_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ThemeConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<RelPath>,
    pub navbar: Navbar,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
    pub prism: Prism,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algolia: Option<Algolia>,
}

impl ThemeConfig {
    fn from_fragment(fragment: ThemeConfigFragment) -> Result<Self, ValidationError> {
        let ThemeConfigFragment {
            image,
            navbar,
            footer,
            prism,
            algolia,
        } = fragment;
        Ok(Self {
            image,
            navbar: Navbar::from_fragment(navbar.unwrap_or_default())?,
            footer: footer.map(Footer::from_fragment).transpose()?,
            prism: Prism::from_fragment(prism.unwrap_or_default()),
            algolia: algolia.map(Algolia::from_fragment).transpose()?,
        })
    }

    /// Every link declared by the navbar and footer, with the label shown for it.
    pub fn links(&self) -> Vec<(&str, &LinkTarget)> {
        let navbar = self.navbar.items.iter().filter_map(|item| match item {
            NavbarItem::Link { label, target, .. } => Some((label.as_str(), target)),
            NavbarItem::DocSidebar { .. } => None,
        });
        let footer = self
            .footer
            .iter()
            .flat_map(|f| f.links.iter())
            .flat_map(|column| column.items.iter())
            .map(|link| (link.label.as_str(), &link.target));
        navbar.chain(footer).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Navbar {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
    pub items: Vec<NavbarItem>,
}

impl Navbar {
    fn from_fragment(fragment: NavbarFragment) -> Result<Self, ValidationError> {
        let NavbarFragment { title, logo, items } = fragment;
        let items = items
            .unwrap_or_default()
            .into_iter()
            .map(NavbarItem::from_decl)
            .collect::<Result<_, _>>()?;
        Ok(Self { title, logo, items })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavbarItem {
    DocSidebar {
        sidebar_id: String,
        label: String,
        position: Position,
    },
    Link {
        label: String,
        #[serde(flatten)]
        target: LinkTarget,
        position: Position,
    },
}

impl NavbarItem {
    fn from_decl(decl: NavbarItemDecl) -> Result<Self, ValidationError> {
        let NavbarItemDecl {
            kind,
            sidebar_id,
            label,
            to,
            href,
            position,
        } = decl;
        let label = label.ok_or(ValidationError::MissingField {
            field: "theme_config.navbar.items.label",
        })?;
        let position = position.unwrap_or_default();
        let kind = kind.unwrap_or(if sidebar_id.is_some() {
            NavbarItemKind::DocSidebar
        } else {
            NavbarItemKind::Link
        });
        match kind {
            NavbarItemKind::DocSidebar => {
                let sidebar_id = sidebar_id.ok_or(ValidationError::MissingField {
                    field: "theme_config.navbar.items.sidebar_id",
                })?;
                Ok(Self::DocSidebar {
                    sidebar_id,
                    label,
                    position,
                })
            }
            NavbarItemKind::Link => {
                let target = LinkTarget::new(&label, to, href)?;
                Ok(Self::Link {
                    label,
                    target,
                    position,
                })
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkTarget {
    /// Route within the site.
    To(String),
    /// External URL.
    Href(String),
}

impl LinkTarget {
    fn new(label: &str, to: Option<String>, href: Option<String>) -> Result<Self, ValidationError> {
        match (to, href) {
            (Some(to), None) => Ok(Self::To(to)),
            (None, Some(href)) => Ok(Self::Href(href)),
            _ => Err(ValidationError::InvalidLink {
                label: label.to_owned(),
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::To(s) | Self::Href(s) => s,
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, Self::To(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Footer {
    pub style: FooterStyle,
    pub links: Vec<FooterColumn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

impl Footer {
    fn from_fragment(fragment: FooterFragment) -> Result<Self, ValidationError> {
        let FooterFragment {
            style,
            links,
            copyright,
        } = fragment;
        let links = links
            .unwrap_or_default()
            .into_iter()
            .map(FooterColumn::from_decl)
            .collect::<Result<_, _>>()?;
        Ok(Self {
            style: style.unwrap_or_default(),
            links,
            copyright,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FooterColumn {
    pub title: String,
    pub items: Vec<FooterLink>,
}

impl FooterColumn {
    fn from_decl(decl: FooterColumnDecl) -> Result<Self, ValidationError> {
        let FooterColumnDecl { title, items } = decl;
        let items = items
            .into_iter()
            .map(FooterLink::from_decl)
            .collect::<Result<_, _>>()?;
        Ok(Self { title, items })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FooterLink {
    pub label: String,
    #[serde(flatten)]
    pub target: LinkTarget,
}

impl FooterLink {
    fn from_decl(decl: LinkDecl) -> Result<Self, ValidationError> {
        let LinkDecl { label, to, href } = decl;
        let target = LinkTarget::new(&label, to, href)?;
        Ok(Self { label, target })
    }
}

/// Code highlighting themes.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Prism {
    pub theme: String,
    pub dark_theme: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub additional_languages: Vec<String>,
}

impl Prism {
    fn from_fragment(fragment: PrismFragment) -> Self {
        let PrismFragment {
            theme,
            dark_theme,
            additional_languages,
        } = fragment;
        Self {
            theme: theme.unwrap_or_else(|| DEFAULT_PRISM_THEME.to_owned()),
            dark_theme: dark_theme.unwrap_or_else(|| DEFAULT_PRISM_DARK_THEME.to_owned()),
            additional_languages: additional_languages.unwrap_or_default(),
        }
    }
}

impl Default for Prism {
    fn default() -> Self {
        Self::from_fragment(PrismFragment::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Algolia {
    pub app_id: String,
    pub api_key: String,
    pub index_name: String,
    pub contextual_search: bool,
}

impl Algolia {
    fn from_fragment(fragment: AlgoliaFragment) -> Result<Self, ValidationError> {
        let AlgoliaFragment {
            app_id,
            api_key,
            index_name,
            contextual_search,
        } = fragment;
        Ok(Self {
            app_id: app_id.ok_or(ValidationError::MissingField {
                field: "theme_config.algolia.app_id",
            })?,
            api_key: api_key.ok_or(ValidationError::MissingField {
                field: "theme_config.algolia.api_key",
            })?,
            index_name: index_name.ok_or(ValidationError::MissingField {
                field: "theme_config.algolia.index_name",
            })?,
            contextual_search: contextual_search.unwrap_or(true),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn fragment(yaml: &str) -> Fragment {
        serde_yaml::from_str(yaml).unwrap()
    }

    const MINIMAL: &str = "site:
  title: Kuve
  url: https://germainlefebvre4.github.io/
  base_url: kuve
";

    #[test]
    fn minimal_defaults() {
        let config = SiteConfig::from_fragment(fragment(MINIMAL), PresetOptions::default()).unwrap();
        assert_eq!(config.title, "Kuve");
        assert_eq!(config.url, "https://germainlefebvre4.github.io");
        assert_eq!(config.base_url, "/kuve/");
        assert_eq!(config.on_broken_links, ReportingSeverity::Throw);
        assert_eq!(config.on_broken_markdown_links, ReportingSeverity::Warn);
        assert_eq!(config.i18n, I18nConfig::default());
        assert_eq!(config.options.docs.sidebar_path.as_str(), "sidebars.yml");
        assert!(config.options.blog);
        assert_eq!(config.theme_config.prism.theme, "github");
        assert_eq!(config.docs_route(), "/kuve/docs");
    }

    #[test]
    fn root_base_url() {
        assert_eq!(normalize_base_url("/"), "/");
        assert_eq!(normalize_base_url(""), "/");
        assert_eq!(normalize_base_url("/kuve"), "/kuve/");
        assert_eq!(normalize_base_url("/a/b/"), "/a/b/");
    }

    #[test]
    fn missing_title() {
        let err = SiteConfig::from_fragment(
            fragment(
                "site:
  url: https://example.com
  base_url: /
",
            ),
            PresetOptions::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                field: "site.title"
            }
        );
    }

    #[test]
    fn locale_in_locales() {
        let i18n = I18nConfig::new("en", ["en"]).unwrap();
        assert_eq!(i18n.default_locale(), "en");
        assert_eq!(i18n.locales(), ["en"]);
    }

    #[test]
    fn locale_not_in_locales() {
        let err = I18nConfig::new("en", ["fr"]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidLocale {
                default_locale: "en".to_owned(),
                locales: vec!["fr".to_owned()],
            }
        );
    }

    #[test]
    fn duplicate_locales_dropped() {
        let i18n = I18nConfig::new("fr", ["en", "fr", "en"]).unwrap();
        assert_eq!(i18n.locales(), ["en", "fr"]);
    }

    #[test]
    fn navbar_items() {
        let config = SiteConfig::from_fragment(
            fragment(&format!(
                "{MINIMAL}theme_config:
  navbar:
    items:
      - type: doc_sidebar
        sidebar_id: tutorial
        label: Documentation
      - label: GitHub
        href: https://github.com/germainlefebvre4/kuve
        position: right
"
            )),
            PresetOptions::default(),
        )
        .unwrap();
        let items = &config.theme_config.navbar.items;
        assert_eq!(
            items[0],
            NavbarItem::DocSidebar {
                sidebar_id: "tutorial".to_owned(),
                label: "Documentation".to_owned(),
                position: Position::Left,
            }
        );
        assert_eq!(
            items[1],
            NavbarItem::Link {
                label: "GitHub".to_owned(),
                target: LinkTarget::Href("https://github.com/germainlefebvre4/kuve".to_owned()),
                position: Position::Right,
            }
        );
    }

    #[test]
    fn link_needs_one_target() {
        let err = SiteConfig::from_fragment(
            fragment(&format!(
                "{MINIMAL}theme_config:
  footer:
    links:
      - title: Docs
        items:
          - label: Introduction
            to: /docs/intro
            href: https://example.com
"
            )),
            PresetOptions::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidLink {
                label: "Introduction".to_owned()
            }
        );

        let err = SiteConfig::from_fragment(
            fragment(&format!(
                "{MINIMAL}theme_config:
  navbar:
    items:
      - label: Nowhere
"
            )),
            PresetOptions::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidLink {
                label: "Nowhere".to_owned()
            }
        );
    }

    #[test]
    fn algolia_defaults_to_contextual() {
        let config = SiteConfig::from_fragment(
            fragment(&format!(
                "{MINIMAL}theme_config:
  algolia:
    app_id: APP
    api_key: KEY
    index_name: kuve
"
            )),
            PresetOptions::default(),
        )
        .unwrap();
        assert!(config.theme_config.algolia.unwrap().contextual_search);
    }

    #[test]
    fn footer_links_serialize_flat() {
        let link = FooterLink {
            label: "Introduction".to_owned(),
            target: LinkTarget::To("/docs/intro".to_owned()),
        };
        assert_eq!(
            serde_json::to_value(&link).unwrap(),
            serde_json::json!({"label": "Introduction", "to": "/docs/intro"})
        );
    }

    #[test]
    fn collects_theme_links() {
        let config = SiteConfig::from_fragment(
            fragment(&format!(
                "{MINIMAL}theme_config:
  navbar:
    items:
      - label: Blog
        to: /blog
  footer:
    links:
      - title: Docs
        items:
          - label: Introduction
            to: /docs/intro
"
            )),
            PresetOptions::default(),
        )
        .unwrap();
        let links: Vec<_> = config
            .theme_config
            .links()
            .into_iter()
            .map(|(label, target)| (label, target.as_str()))
            .collect();
        assert_eq!(links, [("Blog", "/blog"), ("Introduction", "/docs/intro")]);
    }
}
