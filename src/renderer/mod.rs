//! SVG renderer for whitespace code
//!
//! Geometry lives in [`commands`], markup in [`svg`]. [`render`] ties them
//! together and writes the result to disk.

pub mod commands;
pub mod config;
pub mod svg;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::Error;

pub use commands::{canvas_size, draw_commands, DrawCommand, DrawCommands, Shape};
pub use config::RenderConfig;
pub use svg::{render_document, render_svg, RenderedSvg, SvgBuilder};

/// Path that selects standard output instead of a file
pub const STDOUT_PATH: &str = "-";

pub fn writes_stdout(path: &Path) -> bool {
    path.as_os_str() == STDOUT_PATH
}

/// Render `code` and write the SVG to `out_path`, or stdout when it is `-`
pub fn render(
    code: &[u8],
    longest_sequence: u64,
    config: &RenderConfig,
    out_path: &Path,
) -> Result<RenderedSvg, Error> {
    let rendered = render_document(code, longest_sequence, config);

    if writes_stdout(out_path) {
        write_svg(io::stdout().lock(), &rendered.markup, out_path)?;
        return Ok(rendered);
    }

    let file = File::create(out_path).map_err(|e| Error::create_output(out_path, e))?;
    write_svg(BufWriter::new(file), &rendered.markup, out_path)?;
    debug!(path = %out_path.display(), bytes = rendered.markup.len(), "wrote svg");
    Ok(rendered)
}

/// Write and flush the markup; `path` is only used for errors
pub fn write_svg(mut writer: impl Write, svg: &str, path: &Path) -> Result<(), Error> {
    writer
        .write_all(svg.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| Error::write_output(path, e))
}
