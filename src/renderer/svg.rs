//! SVG generation from draw commands

use super::commands::{draw_commands, DrawCommand, Shape};
use super::RenderConfig;

/// Build SVG elements incrementally
#[derive(Debug)]
pub struct SvgBuilder {
    pretty_print: bool,
    standalone: bool,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            pretty_print: config.pretty_print,
            standalone: config.standalone,
            elements: vec![],
            indent: 1,
        }
    }

    fn indent_str(&self) -> String {
        if self.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a rectangle element
    pub fn add_rect(&mut self, x: u64, y: u64, w: u64, h: u64, style: &str) {
        self.elements.push(format!(
            r#"{}<rect x="{}" y="{}" width="{}" height="{}" style="{}"/>"#,
            self.indent_str(),
            x,
            y,
            w,
            h,
            style
        ));
    }

    /// Add a square, which SVG expresses as a rect with equal sides
    pub fn add_square(&mut self, x: u64, y: u64, side: u64, style: &str) {
        self.add_rect(x, y, side, side, style);
    }

    /// Add the element for one draw command
    pub fn add_command(&mut self, cmd: &DrawCommand) {
        let style = cmd.fill.fill_style();
        match cmd.shape {
            Shape::Rect => self.add_rect(cmd.x, cmd.y, cmd.width, cmd.height, &style),
            Shape::Square => self.add_square(cmd.x, cmd.y, cmd.width, &style),
        }
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Build the final SVG string
    pub fn build(self, width: u64, height: u64) -> String {
        let nl = self.newline();

        let mut svg = String::new();

        if self.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
            width, height
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg.push_str(nl);

        svg
    }
}

/// SVG markup together with the figures measured while drawing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSvg {
    pub markup: String,
    pub lines: usize,
    pub shapes: usize,
    pub width: u64,
    pub height: u64,
}

/// Render normalized code in a single pass over the buffer
pub fn render_document(
    code: &[u8],
    longest_sequence: u64,
    config: &RenderConfig,
) -> RenderedSvg {
    let block = u64::from(config.block_size);
    let mut builder = SvgBuilder::new(config);
    let mut cmds = draw_commands(code, config);
    for cmd in cmds.by_ref() {
        builder.add_command(&cmd);
    }

    let lines = cmds.lines();
    let shapes = builder.element_count();
    let width = (lines as u64).saturating_mul(block);
    let height = longest_sequence.saturating_mul(block);
    RenderedSvg {
        markup: builder.build(width, height),
        lines,
        shapes,
        width,
        height,
    }
}

/// Render normalized code to an SVG string
pub fn render_svg(code: &[u8], longest_sequence: u64, config: &RenderConfig) -> String {
    render_document(code, longest_sequence, config).markup
}
