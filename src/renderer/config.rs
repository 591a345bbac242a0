//! Configuration for SVG rendering

use crate::color::HexColor;
use crate::error::Error;

pub const DEFAULT_BLOCK_SIZE: u32 = 2;
pub const DEFAULT_TAB_SCALE: u32 = 7;
pub const DEFAULT_COLOR_BASE: &str = "586e75";
pub const DEFAULT_COLOR_ACCENT: &str = "cb4b16";

/// Configuration options for SVG output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Pixel size of one space cell
    pub block_size: u32,

    /// Height of a tab cell in space cells; must match the loader's value
    pub tab_scale: u32,

    /// Fill for tabs
    pub color_base: HexColor,

    /// Fill for spaces
    pub color_accent: HexColor,

    /// Whether to include the XML declaration
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            tab_scale: DEFAULT_TAB_SCALE,
            color_base: HexColor(DEFAULT_COLOR_BASE.to_string()),
            color_accent: HexColor(DEFAULT_COLOR_ACCENT.to_string()),
            standalone: true,
            pretty_print: true,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_block_size(mut self, block_size: u32) -> Self {
        self.block_size = block_size;
        self
    }

    pub fn with_tab_scale(mut self, tab_scale: u32) -> Self {
        self.tab_scale = tab_scale;
        self
    }

    /// Set the tab fill color
    pub fn with_color_base(mut self, color: HexColor) -> Self {
        self.color_base = color;
        self
    }

    /// Set the space fill color
    pub fn with_color_accent(mut self, color: HexColor) -> Self {
        self.color_accent = color;
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Reject zero block size or tab scale
    pub fn validate(&self) -> Result<(), Error> {
        if self.tab_scale == 0 {
            return Err(Error::InvalidTabScale(self.tab_scale));
        }
        if self.block_size == 0 {
            return Err(Error::InvalidBlockSize(self.block_size));
        }
        Ok(())
    }

    /// Height in pixels of one tab block
    pub fn tab_block(&self) -> u64 {
        u64::from(self.block_size).saturating_mul(u64::from(self.tab_scale))
    }
}
