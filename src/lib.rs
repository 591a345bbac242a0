//! wspaced - render Whitespace programs as SVG images
//!
//! Every line of a Whitespace program becomes a column of colored blocks:
//! tabs are tall blocks in the base color, spaces are squares in the accent
//! color. Other bytes are ignored.
//!
//! # Example
//!
//! ```rust
//! use wspaced::{render_svg, LoadedCode, RenderConfig};
//!
//! let config = RenderConfig::default();
//! let loaded = LoadedCode::from_bytes(b"\t \n".to_vec(), config.tab_scale);
//! let svg = render_svg(&loaded.code, loaded.longest_sequence, &config);
//! assert!(svg.contains(r#"width="2" height="16""#));
//! ```

pub mod color;
pub mod error;
pub mod loader;
pub mod renderer;
pub mod settings;

use std::path::PathBuf;

use tracing::info;

pub use color::{ColorError, HexColor};
pub use error::Error;
pub use loader::{load, LoadedCode};
pub use renderer::{
    canvas_size, draw_commands, render, render_document, render_svg, DrawCommand, RenderConfig,
    RenderedSvg,
};
pub use settings::{Settings, SettingsError};

pub const DEFAULT_INPUT: &str = "/tmp/code.ws";
pub const DEFAULT_OUTPUT: &str = "/tmp/logo.svg";

/// Configuration for the complete conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Whitespace source, `-` for stdin
    pub input: PathBuf,
    /// SVG destination, `-` for stdout
    pub output: PathBuf,
    /// Geometry and styling of the image
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            render: RenderConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Set the render configuration
    pub fn with_render(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.render.validate()
    }
}

/// What a conversion produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub lines: usize,
    pub longest_sequence: u64,
    pub shapes: usize,
    pub width: u64,
    pub height: u64,
}

/// Load the input, render it and write the SVG output
///
/// # Example
///
/// ```rust,no_run
/// use wspaced::{convert, Config};
///
/// let config = Config::new().with_input("code.ws").with_output("logo.svg");
/// let summary = convert(&config).unwrap();
/// println!("{} lines", summary.lines);
/// ```
pub fn convert(config: &Config) -> Result<Summary, Error> {
    config.validate()?;

    info!(path = %config.input.display(), "read whitespace code");
    let loaded = load(&config.input, config.render.tab_scale)?;
    info!(longest_sequence = loaded.longest_sequence, "longest sequence");

    info!(path = %config.output.display(), "draw svg");
    let rendered = render(
        &loaded.code,
        loaded.longest_sequence,
        &config.render,
        &config.output,
    )?;

    Ok(Summary {
        lines: rendered.lines,
        longest_sequence: loaded.longest_sequence,
        shapes: rendered.shapes,
        width: rendered.width,
        height: rendered.height,
    })
}
