use strum::{Display, EnumIter, EnumString};

/// Sticker color.
///
/// Colors only identify stickers; they carry no display information.
#[derive(Debug, Display, EnumIter, EnumString, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[strum(ascii_case_insensitive)]
#[allow(missing_docs)]
pub enum Color {
    #[strum(to_string = "W", serialize = "white")]
    White,
    #[strum(to_string = "Y", serialize = "yellow")]
    Yellow,
    #[strum(to_string = "G", serialize = "green")]
    Green,
    #[strum(to_string = "B", serialize = "blue")]
    Blue,
    #[strum(to_string = "R", serialize = "red")]
    Red,
    #[strum(to_string = "O", serialize = "orange")]
    Orange,
}

impl Color {
    /// Returns the single-letter abbreviation of the color.
    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Red => 'R',
            Color::Orange => 'O',
        }
    }
}
