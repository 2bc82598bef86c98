use docsite::Site;
use docsite::SidebarNode;
use docsite::site::discover_docs;

/// Print the site's internal state
#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum DebugCommands {
    /// Prints the composed site descriptor
    Config,
    /// Prints each sidebar as an outline
    Sidebars,
    /// Prints the rendered homepage features
    Features,
    /// Lists the ids of the documents in the docs directory
    Docs,
}

impl DebugCommands {
    pub(crate) fn run(&self, config: &crate::args::ConfigArgs) -> docsite::Result<()> {
        let project = config.load_config()?;
        match self {
            Self::Config => {
                let site = Site::load(&project)?;
                let descriptor = serde_yaml::to_string(&site.config)?;
                anstream::print!("{descriptor}");
            }
            Self::Sidebars => {
                let site = Site::load(&project)?;
                for tree in site.sidebars.iter() {
                    anstream::println!("{}:", tree.name());
                    print_outline(tree.items(), 1);
                }
            }
            Self::Features => {
                let site = Site::load(&project)?;
                anstream::print!("{}", site.features_html()?);
            }
            Self::Docs => {
                for id in discover_docs(&project)? {
                    anstream::println!("{id}");
                }
            }
        }

        Ok(())
    }
}

fn print_outline(items: &[SidebarNode], depth: usize) {
    let indent = "  ".repeat(depth);
    for item in items {
        match item {
            SidebarNode::Doc(doc) => anstream::println!("{indent}- {}", doc.id),
            SidebarNode::Category(category) => {
                let collapsed = if category.collapsed { " (collapsed)" } else { "" };
                anstream::println!("{indent}+ {}{collapsed}", category.label);
                print_outline(&category.items, depth + 1);
            }
        }
    }
}
