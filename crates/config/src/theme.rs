use super::*;

/// Presentation options: navbar, footer, code highlighting and search.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct ThemeConfigFragment {
    /// Social card shown when the site is shared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<RelPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navbar: Option<NavbarFragment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterFragment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prism: Option<PrismFragment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algolia: Option<AlgoliaFragment>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct NavbarFragment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<NavbarItemDecl>>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Logo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    pub src: RelPath,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct NavbarItemDecl {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<NavbarItemKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavbarItemKind {
    DocSidebar,
    Link,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct FooterFragment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<FooterStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<FooterColumnDecl>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FooterStyle {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct FooterColumnDecl {
    pub title: String,
    #[serde(default)]
    pub items: Vec<LinkDecl>,
}

/// A labelled link; exactly one of `to` (internal route) or `href` (external URL).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct LinkDecl {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct PrismFragment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_languages: Option<Vec<String>>,
}

/// Search provider settings, passed through to the front end untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct AlgoliaFragment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contextual_search: Option<bool>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_navbar() {
        let navbar: NavbarFragment = serde_yaml::from_str(
            "title: Kuve
logo:
  alt: Kuve Logo
  src: img/kuve_logo-transparent.png
items:
  - type: doc_sidebar
    sidebar_id: tutorial
    position: left
    label: Documentation
  - href: https://github.com/germainlefebvre4/kuve
    label: GitHub
    position: right
",
        )
        .unwrap();
        let items = navbar.items.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind, Some(NavbarItemKind::DocSidebar));
        assert_eq!(items[1].kind, None);
        assert_eq!(items[1].position, Some(Position::Right));
    }

    #[test]
    fn parse_footer() {
        let footer: FooterFragment = serde_yaml::from_str(
            "style: dark
links:
  - title: Community
    items:
      - label: Issues
        href: https://github.com/germainlefebvre4/kuve/issues
",
        )
        .unwrap();
        assert_eq!(footer.style, Some(FooterStyle::Dark));
        let links = footer.links.unwrap();
        assert_eq!(links[0].items[0].to, None);
    }
}
