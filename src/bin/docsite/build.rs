use std::path;

use docsite::Site;

/// Check the site and write its descriptor for the page generator
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct BuildArgs {
    /// Site destination folder [default: ./_site]
    #[arg(short, long, value_name = "DIR")]
    destination: Option<path::PathBuf>,
}

impl BuildArgs {
    pub(crate) fn run(&self, config: &crate::args::ConfigArgs) -> docsite::Result<()> {
        let project = config.load_config()?;
        let site = Site::load(&project)?;
        site.check_docs(&project)?;

        let destination = self
            .destination
            .clone()
            .unwrap_or_else(|| project.destination_path());
        site.write(&destination)?;
        log::info!("Build successful");

        Ok(())
    }
}

/// Validate the configuration and resolve navigation links against the docs
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct CheckArgs {}

impl CheckArgs {
    pub(crate) fn run(&self, config: &crate::args::ConfigArgs) -> docsite::Result<()> {
        let project = config.load_config()?;
        let site = Site::load(&project)?;
        site.check_docs(&project)?;
        log::info!("Site `{}` is valid", site.config.title);

        Ok(())
    }
}
