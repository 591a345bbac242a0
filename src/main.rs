//! wspaced CLI
//!
//! Usage:
//!   wspaced [OPTIONS]
//!
//! Options:
//!   --ws <FILE>           Whitespace code to draw (`-` for stdin)
//!   --output <FILE>       SVG file to write (`-` for stdout)
//!   --base <HEX>          Base hex color, used for tabs
//!   --accent <HEX>        Accent hex color, used for spaces
//!   --tab-scale <N>       Ratio of space to tab
//!   --block <N>           Square block size in px
//!   -c, --config <FILE>   Settings file (TOML format)
//!   -h, --help            Print help

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use wspaced::{convert, Config, Error, HexColor, Settings};

#[derive(Parser)]
#[command(name = "wspaced")]
#[command(about = "Draw Whitespace programs as SVG images")]
struct Cli {
    /// Whitespace code to draw (`-` reads stdin) [default: /tmp/code.ws]
    #[arg(long, value_name = "FILE")]
    ws: Option<PathBuf>,

    /// Output svg (`-` writes to stdout) [default: /tmp/logo.svg]
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Base hex color, used for tabs [default: 586e75]
    #[arg(long, value_name = "HEX")]
    base: Option<HexColor>,

    /// Accent hex color, used for spaces [default: cb4b16]
    #[arg(long, value_name = "HEX")]
    accent: Option<HexColor>,

    /// Ratio of space to tab [default: 7]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    tab_scale: Option<u32>,

    /// Square block size in px [default: 2]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    block: Option<u32>,

    /// Settings file (TOML format); flags override its values
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the SVG without indentation
    #[arg(long)]
    compact: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Defaults, then the settings file, then explicit flags
    fn into_config(self) -> Result<Config, Error> {
        let mut config = Config::default();
        if let Some(path) = &self.config {
            config = Settings::from_file(path)?.apply(config)?;
        }

        if let Some(ws) = self.ws {
            config.input = ws;
        }
        if let Some(output) = self.output {
            config.output = output;
        }

        let render = &mut config.render;
        if let Some(base) = self.base {
            render.color_base = base;
        }
        if let Some(accent) = self.accent {
            render.color_accent = accent;
        }
        if let Some(tab_scale) = self.tab_scale {
            render.tab_scale = tab_scale;
        }
        if let Some(block) = self.block {
            render.block_size = block;
        }
        if self.compact {
            render.pretty_print = false;
        }
        Ok(config)
    }
}

/// `RUST_LOG` decides when set; otherwise `info`, or `debug` with `--verbose`
fn env_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let fallback = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    EnvFilter::builder()
        .with_default_directive(fallback.into())
        .parse_lossy(rust_log.unwrap_or_default())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(cli.verbose, rust_log.as_deref()))
        .init();

    info!("wspaced start");

    let result = cli.into_config().and_then(|config| convert(&config));
    match result {
        Ok(summary) => {
            info!(
                lines = summary.lines,
                shapes = summary.shapes,
                width = summary.width,
                height = summary.height,
                "all done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(operation = e.operation(), "{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "wspaced",
            "--ws",
            "in.ws",
            "--output",
            "-",
            "--base",
            "112233",
            "--tab-scale",
            "3",
            "--block",
            "5",
            "--compact",
        ]);
        let config = cli.into_config().unwrap();
        assert_eq!(config.input, PathBuf::from("in.ws"));
        assert_eq!(config.output, PathBuf::from("-"));
        assert_eq!(config.render.color_base.as_str(), "112233");
        assert_eq!(config.render.color_accent.as_str(), "cb4b16");
        assert_eq!(config.render.tab_scale, 3);
        assert_eq!(config.render.block_size, 5);
        assert!(!config.render.pretty_print);
    }

    #[test]
    fn test_dash_maps_to_stdio() {
        let cli = Cli::parse_from(["wspaced", "--ws", "-", "--output", "-"]);
        let config = cli.into_config().unwrap();
        assert!(wspaced::loader::reads_stdin(&config.input));
        assert!(wspaced::renderer::writes_stdout(&config.output));
    }

    #[test]
    fn test_log_level_defaults() {
        assert_eq!(env_filter(false, None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(env_filter(true, None).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(env_filter(false, Some("")).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_rust_log_overrides_level() {
        assert_eq!(
            env_filter(false, Some("warn")).max_level_hint(),
            Some(LevelFilter::WARN)
        );
        assert_eq!(
            env_filter(false, Some("trace")).max_level_hint(),
            Some(LevelFilter::TRACE)
        );
        assert_eq!(
            env_filter(true, Some("error")).max_level_hint(),
            Some(LevelFilter::ERROR)
        );
    }

    #[test]
    fn test_zero_tab_scale_is_rejected() {
        assert!(Cli::try_parse_from(["wspaced", "--tab-scale", "0"]).is_err());
        assert!(Cli::try_parse_from(["wspaced", "--block", "0"]).is_err());
    }

    #[test]
    fn test_bad_color_is_rejected() {
        assert!(Cli::try_parse_from(["wspaced", "--accent", "#cb4b16"]).is_err());
    }

    #[test]
    fn test_flags_override_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = dir.path().join("wspaced.toml");
        std::fs::write(
            &settings,
            "[layout]\ntab_scale = 4\nblock_size = 9\n[colors]\nbase = \"000000\"\n",
        )
        .unwrap();

        let cli = Cli::parse_from([
            "wspaced",
            "--config",
            settings.to_str().unwrap(),
            "--block",
            "1",
        ]);
        let config = cli.into_config().unwrap();
        assert_eq!(config.render.tab_scale, 4);
        assert_eq!(config.render.block_size, 1);
        assert_eq!(config.render.color_base.as_str(), "000000");
    }
}
