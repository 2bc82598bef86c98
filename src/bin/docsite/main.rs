#![warn(clippy::print_stderr)]
#![warn(clippy::print_stdout)]

mod args;
mod build;
mod debug;

use clap::Parser;

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let cli = Cli::parse();

    cli.color.write_global();
    let colored_stderr = !matches!(
        anstream::AutoStream::choice(&std::io::stderr()),
        colorchoice::ColorChoice::Never
    );
    args::init_logging(cli.verbose.log_level(), colored_stderr);

    cli.command
        .run(&cli.config)
        .map_err(|e| proc_exit::Code::FAILURE.with_message(format!("{e:#}")))?;
    Ok(())
}

/// Validate and export the navigation and configuration of a documentation site
#[derive(Debug, Parser)]
#[command(name = "docsite", about, version)]
#[command(propagate_version = true)]
#[command(help_template = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
")]
struct Cli {
    #[command(flatten)]
    config: args::ConfigArgs,

    #[command(flatten)]
    color: colorchoice_clap::Color,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    Build(build::BuildArgs),
    Check(build::CheckArgs),
    #[command(subcommand)]
    Debug(debug::DebugCommands),
}

impl Command {
    fn run(&self, config: &args::ConfigArgs) -> docsite::Result<()> {
        match self {
            Self::Build(cmd) => cmd.run(config),
            Self::Check(cmd) => cmd.run(config),
            Self::Debug(cmd) => cmd.run(config),
        }
    }
}

#[test]
fn verify_app() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
