use std::io::Write;
use std::path;

use anyhow::Context as _;
use docsite::config::Config;

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ConfigArgs {
    /// Config file to use [default: docsite.yml]
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<path::PathBuf>,
}

impl ConfigArgs {
    pub(crate) fn load_config(&self) -> docsite::Result<Config> {
        let config = if let Some(config_path) = self.config.as_deref() {
            Config::from_file(config_path).with_context(|| {
                anyhow::format_err!("Error reading config file {}", config_path.display())
            })?
        } else {
            let cwd = std::env::current_dir().context("Could not determine current directory")?;
            Config::from_cwd(cwd)?
        };
        Ok(config)
    }
}

pub(crate) fn init_logging(level: Option<log::Level>, colored: bool) {
    let Some(level) = level else {
        return;
    };

    let palette = Palette::new(colored);
    let mut builder = env_logger::Builder::new();
    builder.write_style(if colored {
        env_logger::WriteStyle::Always
    } else {
        env_logger::WriteStyle::Never
    });
    builder.filter(None, level.to_level_filter());

    if level == log::Level::Trace {
        builder.format_timestamp_secs();
    } else {
        builder.format(move |f, record| {
            let style = palette.level(record.level());
            let level = record.level().as_str().to_lowercase();
            writeln!(f, "{style}[{level}]{style:#} {}", record.args())
        });
    }

    builder.init();
}

#[derive(Copy, Clone, Default, Debug)]
struct Palette {
    error: anstyle::Style,
    warn: anstyle::Style,
    info: anstyle::Style,
    debug: anstyle::Style,
    trace: anstyle::Style,
}

impl Palette {
    fn new(colored: bool) -> Self {
        if colored {
            Self {
                error: anstyle::AnsiColor::Red.on_default() | anstyle::Effects::BOLD,
                warn: anstyle::AnsiColor::Yellow.on_default(),
                info: anstyle::AnsiColor::Green.on_default(),
                debug: anstyle::AnsiColor::Blue.on_default(),
                trace: anstyle::AnsiColor::Cyan.on_default(),
            }
        } else {
            Self::default()
        }
    }

    fn level(&self, level: log::Level) -> anstyle::Style {
        match level {
            log::Level::Error => self.error,
            log::Level::Warn => self.warn,
            log::Level::Info => self.info,
            log::Level::Debug => self.debug,
            log::Level::Trace => self.trace,
        }
    }
}
