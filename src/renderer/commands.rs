//! Geometry of the rendering: one draw command per tab or space
//!
//! Each line of code becomes a column. The cursor moves right by one block
//! on every linefeed and down by the height of each drawn block.

use crate::color::HexColor;
use crate::loader::{LINEFEED, SPACE, TAB};

use super::RenderConfig;

/// Kind of block, determined by the source character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A tab: one block wide, `tab_scale` blocks tall
    Rect,
    /// A space: one block on each side
    Square,
}

/// A filled block at an absolute position on the canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawCommand {
    pub shape: Shape,
    pub x: u64,
    pub y: u64,
    pub width: u64,
    pub height: u64,
    pub fill: HexColor,
}

/// Iterator over the draw commands of a code buffer, in traversal order
#[derive(Debug)]
pub struct DrawCommands<'a> {
    code: std::slice::Iter<'a, u8>,
    config: &'a RenderConfig,
    x: u64,
    y: u64,
    lines: usize,
}

impl DrawCommands<'_> {
    /// Linefeeds walked so far; the full line count once exhausted
    pub fn lines(&self) -> usize {
        self.lines
    }
}

impl Iterator for DrawCommands<'_> {
    type Item = DrawCommand;

    fn next(&mut self) -> Option<DrawCommand> {
        let block = u64::from(self.config.block_size);
        for &byte in self.code.by_ref() {
            match byte {
                LINEFEED => {
                    self.lines += 1;
                    self.x = self.x.saturating_add(block);
                    self.y = 0;
                }
                TAB => {
                    let height = self.config.tab_block();
                    let cmd = DrawCommand {
                        shape: Shape::Rect,
                        x: self.x,
                        y: self.y,
                        width: block,
                        height,
                        fill: self.config.color_base.clone(),
                    };
                    self.y = self.y.saturating_add(height);
                    return Some(cmd);
                }
                SPACE => {
                    let cmd = DrawCommand {
                        shape: Shape::Square,
                        x: self.x,
                        y: self.y,
                        width: block,
                        height: block,
                        fill: self.config.color_accent.clone(),
                    };
                    self.y = self.y.saturating_add(block);
                    return Some(cmd);
                }
                _ => {}
            }
        }
        None
    }
}

/// Walk `code` once and yield a block for every tab and space
pub fn draw_commands<'a>(code: &'a [u8], config: &'a RenderConfig) -> DrawCommands<'a> {
    DrawCommands {
        code: code.iter(),
        config,
        x: 0,
        y: 0,
        lines: 0,
    }
}

/// Canvas `(width, height)`: one column per line, `longest_sequence` cells tall
pub fn canvas_size(code: &[u8], longest_sequence: u64, config: &RenderConfig) -> (u64, u64) {
    let block = u64::from(config.block_size);
    let rows = crate::loader::line_count(code) as u64;
    (
        rows.saturating_mul(block),
        longest_sequence.saturating_mul(block),
    )
}
