use std::collections::BTreeMap;

use serde_yaml::{Mapping, Value};

/// A field declared by more than one fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    /// Dotted path of the field, e.g. `theme_config.navbar.title`.
    pub field: String,
    /// Fragment that declared the field first.
    pub first: String,
    /// Fragment that declared it again.
    pub second: String,
}

/// Deep merge of configuration fragments where every field has exactly one owner.
///
/// Mappings merge key by key, recursively. Any other value (scalar or sequence)
/// belongs wholly to the fragment that declared it; a second declaration is
/// recorded as a [`Conflict`] and the first value is kept.
#[derive(Debug, Clone, Default)]
pub struct DisjointMerge {
    merged: Mapping,
    owners: BTreeMap<String, String>,
    conflicts: Vec<Conflict>,
}

impl DisjointMerge {
    pub fn new() -> Self {
        Default::default()
    }

    /// Merge `value` on behalf of `origin`.
    ///
    /// `value` is expected to be a mapping; nulls are treated as "declares nothing".
    pub fn add(&mut self, origin: &str, value: Value) {
        match value {
            Value::Mapping(mapping) => merge_mapping(
                &mut self.merged,
                mapping,
                "",
                origin,
                &mut self.owners,
                &mut self.conflicts,
            ),
            Value::Null => {}
            other => {
                log::debug!("Ignoring non-mapping fragment {origin}: {other:?}");
            }
        }
    }

    /// Fragment owning `field`, if any declared it.
    pub fn owner(&self, field: &str) -> Option<&str> {
        self.owners.get(field).map(String::as_str)
    }

    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    pub fn is_disjoint(&self) -> bool {
        self.conflicts.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Mapping(self.merged)
    }
}

fn merge_mapping(
    target: &mut Mapping,
    source: Mapping,
    prefix: &str,
    origin: &str,
    owners: &mut BTreeMap<String, String>,
    conflicts: &mut Vec<Conflict>,
) {
    for (key, value) in source {
        if value.is_null() {
            continue;
        }
        let field = join_field(prefix, &key);
        if !target.contains_key(&key) {
            claim(&field, &value, origin, owners);
            target.insert(key, value);
            continue;
        }
        match (target.get_mut(&key), value) {
            (Some(Value::Mapping(existing)), Value::Mapping(value)) => {
                merge_mapping(existing, value, &field, origin, owners, conflicts);
            }
            _ => {
                let first = owners
                    .get(&field)
                    .cloned()
                    .unwrap_or_else(|| "<unknown>".to_owned());
                log::trace!("{field}: declared by {first} and {origin}");
                conflicts.push(Conflict {
                    field,
                    first,
                    second: origin.to_owned(),
                });
            }
        }
    }
}

/// Record `origin` as the owner of `field` and everything nested under it.
fn claim(field: &str, value: &Value, origin: &str, owners: &mut BTreeMap<String, String>) {
    owners.insert(field.to_owned(), origin.to_owned());
    if let Value::Mapping(mapping) = value {
        for (key, child) in mapping {
            claim(&join_field(field, key), child, origin, owners);
        }
    }
}

fn join_field(prefix: &str, key: &Value) -> String {
    let key = match key {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => format!("{other:?}"),
    };
    if prefix.is_empty() {
        key
    } else {
        format!("{prefix}.{key}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn disjoint_fields_merge() {
        let mut merge = DisjointMerge::new();
        merge.add("docsite.yml", yaml("site: {title: Kuve}"));
        merge.add("theme.yml", yaml("site: {tagline: Switch kubectl}"));
        assert!(merge.is_disjoint());
        assert_eq!(merge.owner("site.title"), Some("docsite.yml"));
        assert_eq!(merge.owner("site.tagline"), Some("theme.yml"));
        assert_eq!(
            merge.into_value(),
            yaml("site: {title: Kuve, tagline: Switch kubectl}")
        );
    }

    #[test]
    fn nested_mappings_merge_recursively() {
        let mut merge = DisjointMerge::new();
        merge.add("a", yaml("theme_config: {navbar: {title: Kuve}}"));
        merge.add("b", yaml("theme_config: {navbar: {logo: {src: img/logo.png}}}"));
        assert!(merge.is_disjoint());
        assert_eq!(merge.owner("theme_config.navbar.logo.src"), Some("b"));
    }

    #[test]
    fn same_scalar_conflicts() {
        let mut merge = DisjointMerge::new();
        merge.add("a", yaml("theme: {custom_css: a.css}"));
        merge.add("b", yaml("theme: {custom_css: b.css}"));
        assert_eq!(
            merge.conflicts(),
            [Conflict {
                field: "theme.custom_css".to_owned(),
                first: "a".to_owned(),
                second: "b".to_owned(),
            }]
        );
        assert_eq!(merge.into_value(), yaml("theme: {custom_css: a.css}"));
    }

    #[test]
    fn identical_values_still_conflict() {
        let mut merge = DisjointMerge::new();
        merge.add("a", yaml("url: https://example.com"));
        merge.add("b", yaml("url: https://example.com"));
        assert_eq!(merge.conflicts().len(), 1);
    }

    #[test]
    fn sequences_are_leaves() {
        let mut merge = DisjointMerge::new();
        merge.add("a", yaml("locales: [en]"));
        merge.add("b", yaml("locales: [fr]"));
        assert_eq!(merge.conflicts()[0].field, "locales");
    }

    #[test]
    fn mapping_against_scalar_conflicts() {
        let mut merge = DisjointMerge::new();
        merge.add("a", yaml("blog: false"));
        merge.add("b", yaml("blog: {path: blog}"));
        assert_eq!(merge.conflicts()[0].field, "blog");
        assert_eq!(merge.conflicts()[0].first, "a");
    }

    #[test]
    fn nulls_declare_nothing() {
        let mut merge = DisjointMerge::new();
        merge.add("a", yaml("title: Kuve"));
        merge.add("b", yaml("title: ~"));
        merge.add("c", Value::Null);
        assert!(merge.is_disjoint());
    }
}
