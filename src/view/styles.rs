//! Grid styling: column palette and color switch.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag (or `no_color` in the config file)
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from the resolved flag and the environment.
    ///
    /// Priority (first match wins):
    /// 1. `no_color_flag` (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Colors on, regardless of environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Column colors, cycled by file column index.
pub const COLUMN_COLORS: [Color; 5] = [
    Color::Cyan,
    Color::Green,
    Color::LightYellow,
    Color::LightRed,
    Color::LightMagenta,
];

/// Immutable set of styles the grid is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    columns: Option<[Color; 5]>,
    row_label: Style,
    message: Style,
}

impl Palette {
    /// Palette for the given color configuration.
    ///
    /// Without colors every style is plain except the header, which stays bold.
    pub fn new(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                columns: Some(COLUMN_COLORS),
                row_label: Style::default().fg(Color::DarkGray),
                message: Style::default().fg(Color::White),
            }
        } else {
            Self::monochrome()
        }
    }

    /// Palette without any color.
    pub fn monochrome() -> Self {
        Self {
            columns: None,
            row_label: Style::default(),
            message: Style::default(),
        }
    }

    /// Style of data cells in file column `column`.
    pub fn cell(&self, column: usize) -> Style {
        match self.columns {
            Some(colors) => Style::default().fg(colors[column % colors.len()]),
            None => Style::default(),
        }
    }

    /// Style of the header name of file column `column`.
    pub fn header(&self, column: usize) -> Style {
        self.cell(column).add_modifier(Modifier::BOLD)
    }

    /// Style of the 1-based row labels in the gutter.
    pub fn row_label(&self) -> Style {
        self.row_label
    }

    /// Style of status messages such as rebuild progress.
    pub fn message(&self) -> Style {
        self.message
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(ColorConfig::enabled())
    }
}

// ===== Tests =====
