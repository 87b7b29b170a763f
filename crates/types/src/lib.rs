//! Shared types for the gem-swap engine and its collaborators.
//! Pure data with no external dependencies.

/// Board side length; the grid is `BOARD_SIZE` x `BOARD_SIZE`.
pub const BOARD_SIZE: usize = 9;

/// Minimum run length that counts as a match.
pub const MIN_RUN_LEN: usize = 3;

/// Points awarded per cell of a matched run.
pub const RUN_SCORE_STEP: u32 = 10;

/// Gem palette.
///
/// Order and lowercase names are a stable contract for the rendering
/// collaborator, which derives asset keys from them (see [`Cell::texture_name`]).
/// Reordering or renaming entries is a breaking change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GemColor {
    Red,
    Green,
    Blue,
    Cyan,
    Magenta,
    Yellow,
    Lime,
    Beige,
    Pink,
}

impl GemColor {
    /// Every palette entry, in contract order.
    pub const ALL: [GemColor; 9] = [
        GemColor::Red,
        GemColor::Green,
        GemColor::Blue,
        GemColor::Cyan,
        GemColor::Magenta,
        GemColor::Yellow,
        GemColor::Lime,
        GemColor::Beige,
        GemColor::Pink,
    ];

    /// Lowercase color name.
    pub fn as_str(&self) -> &'static str {
        match self {
            GemColor::Red => "red",
            GemColor::Green => "green",
            GemColor::Blue => "blue",
            GemColor::Cyan => "cyan",
            GemColor::Magenta => "magenta",
            GemColor::Yellow => "yellow",
            GemColor::Lime => "lime",
            GemColor::Beige => "beige",
            GemColor::Pink => "pink",
        }
    }
}

/// Selection status of a board cell.
///
/// At most one cell (the cursor cell) carries `Selectable` or `Selected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellStatus {
    #[default]
    None,
    Selectable,
    Selected,
}

impl CellStatus {
    /// Asset-key suffix appended to the color name by texture-based renderers.
    pub fn suffix(&self) -> &'static str {
        match self {
            CellStatus::None => "",
            CellStatus::Selectable => "_selectable",
            CellStatus::Selected => "_selected",
        }
    }
}

/// One board tile: a gem color plus its selection status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub color: GemColor,
    pub status: CellStatus,
}

impl Cell {
    pub fn new(color: GemColor) -> Self {
        Self {
            color,
            status: CellStatus::None,
        }
    }

    /// Asset key for texture-based renderers: lowercase color name plus
    /// status suffix, e.g. `"red"`, `"blue_selectable"`, `"pink_selected"`.
    pub fn texture_name(&self) -> String {
        format!("{}{}", self.color.as_str(), self.status.suffix())
    }
}

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// `(row, col)` delta for one step in this direction.
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Right => (0, 1),
        }
    }
}

/// Axis of a matched run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// Commands accepted by the engine, produced by the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    Move(Direction),
    ToggleSelect,
}
