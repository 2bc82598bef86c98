use docsite_config::{FeatureRecord, RelPath};
use pulldown_cmark as cmark;

use crate::error::Result;

/// Homepage feature section, one column per feature.
pub const DEFAULT_TEMPLATE: &str = r#"<section class="features">
  <div class="container">
    <div class="row">
{%- for feature in features %}
      <div class="col col--4">
        <div class="text--center">
          <img class="featureSvg" role="img" src="{{ base_url }}{{ feature.icon }}" alt="{{ feature.heading | escape }}">
        </div>
        <div class="text--center padding-horiz--md">
          <h3>{{ feature.heading | escape }}</h3>
          <p>{{ feature.description_html }}</p>
        </div>
      </div>
{%- endfor %}
    </div>
  </div>
</section>
"#;

/// A renderable feature card: icon, heading, and the description verbatim.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FeatureNode {
    pub icon: RelPath,
    pub heading: String,
    pub description: String,
}

impl FeatureNode {
    pub fn from_record(record: &FeatureRecord) -> Self {
        Self {
            icon: record.icon.clone(),
            heading: record.title.clone(),
            description: record.description.clone(),
        }
    }

    /// The description rendered as inline HTML, without a wrapping paragraph.
    pub fn description_html(&self) -> String {
        let mut buf = String::new();
        let parser = cmark::Parser::new_ext(&self.description, cmark::Options::ENABLE_STRIKETHROUGH);
        cmark::html::push_html(&mut buf, parser);
        let trimmed = buf.trim_end();
        trimmed
            .strip_prefix("<p>")
            .and_then(|s| s.strip_suffix("</p>"))
            .filter(|s| !s.contains("<p>"))
            .unwrap_or(trimmed)
            .to_owned()
    }

    pub fn to_liquid(&self) -> liquid::Object {
        let mut attributes = liquid::Object::new();
        attributes.insert(
            "icon".into(),
            liquid::model::Value::scalar(self.icon.as_str().to_owned()),
        );
        attributes.insert(
            "heading".into(),
            liquid::model::Value::scalar(self.heading.clone()),
        );
        attributes.insert(
            "description".into(),
            liquid::model::Value::scalar(self.description.clone()),
        );
        attributes.insert(
            "description_html".into(),
            liquid::model::Value::scalar(self.description_html()),
        );
        attributes
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct FeatureList {
    nodes: Vec<FeatureNode>,
}

impl FeatureList {
    pub fn from_records(records: &[FeatureRecord]) -> Self {
        let nodes = records.iter().map(FeatureNode::from_record).collect();
        Self { nodes }
    }

    pub fn nodes(&self) -> &[FeatureNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn to_liquid(&self, base_url: &str) -> liquid::Object {
        let features = self
            .nodes
            .iter()
            .map(|node| liquid::model::Value::Object(node.to_liquid()))
            .collect();
        let mut globals = liquid::Object::new();
        globals.insert(
            "base_url".into(),
            liquid::model::Value::scalar(base_url.to_owned()),
        );
        globals.insert("features".into(), liquid::model::Value::Array(features));
        globals
    }

    /// Render with `template`, or [`DEFAULT_TEMPLATE`] when none is given.
    pub fn render_html(&self, base_url: &str, template: Option<&str>) -> Result<String> {
        let parser = liquid::ParserBuilder::with_stdlib().build()?;
        let template = parser.parse(template.unwrap_or(DEFAULT_TEMPLATE))?;
        let html = template.render(&self.to_liquid(base_url))?;
        Ok(html)
    }
}
