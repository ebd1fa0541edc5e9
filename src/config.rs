use ratatui::style::Color;
use ratatui::symbols::border;

/// Logical grid dimensions passed through the game as a named type.
///
/// The playing field is a rectangle of logical cells; the classic board is
/// the square 20×20 grid, but width and height are kept separate so
/// non-square boards stay unambiguous at every call site.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Creates a square grid with `side` cells per axis.
    #[must_use]
    pub fn square(side: u16) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Default side length of the square playing field, in cells.
pub const DEFAULT_GRID_SIDE: u16 = 20;

/// Cell the snake starts on after construction and `reset()`.
pub const SNAKE_ORIGIN: (i32, i32) = (1, 1);

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Hard floor for the tick interval in milliseconds.
///
/// The speed ramp shortens the interval on every meal; this floor keeps the
/// game playable instead of ramping without bound.
pub const MIN_TICK_INTERVAL_MS: u64 = 50;

/// Interval shortening applied per food eaten, in milliseconds.
pub const TICK_INTERVAL_DECREMENT_MS: u64 = 2;

/// Random placement attempts before food placement falls back to
/// enumerating the free cells.
pub const FOOD_PLACEMENT_ATTEMPTS: usize = 64;

/// A color theme applied to all visual elements.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub border_fg: Color,
    pub hud_fg: Color,
    pub hud_accent: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    food: Color::Red,
    border_fg: Color::White,
    hud_fg: Color::Gray,
    hud_accent: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    food: Color::Yellow,
    border_fg: Color::Cyan,
    hud_fg: Color::Gray,
    hud_accent: Color::Cyan,
    menu_title: Color::Cyan,
    menu_footer: Color::DarkGray,
};

/// Neon magenta theme.
pub const THEME_NEON: Theme = Theme {
    name: "neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    food: Color::Yellow,
    border_fg: Color::Magenta,
    hud_fg: Color::Gray,
    hud_accent: Color::Magenta,
    menu_title: Color::Magenta,
    menu_footer: Color::DarkGray,
};

/// All available themes in cycle order.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN, THEME_NEON];

/// Returns the theme with the given name, if bundled.
#[must_use]
pub fn theme_by_name(name: &str) -> Option<&'static Theme> {
    THEMES
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
}

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

/// Glyph used for the snake head.
pub const GLYPH_SNAKE_HEAD: &str = "█";

/// Glyph used for snake body segments.
pub const GLYPH_SNAKE_BODY: &str = "▓";

/// Glyph used for food.
pub const GLYPH_FOOD: &str = "●";

#[cfg(test)]
mod tests {
    use super::{theme_by_name, GridSize, THEMES};

    #[test]
    fn square_grid_cell_count() {
        assert_eq!(GridSize::square(20).total_cells(), 400);
        assert_eq!(
            GridSize {
                width: 6,
                height: 4
            }
            .total_cells(),
            24
        );
    }

    #[test]
    fn theme_lookup_is_case_insensitive() {
        assert_eq!(theme_by_name("Ocean").map(|t| t.name), Some("ocean"));
        assert!(theme_by_name("missing").is_none());
    }

    #[test]
    fn all_theme_names_are_unique() {
        for (i, a) in THEMES.iter().enumerate() {
            for b in &THEMES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
