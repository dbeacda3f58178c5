//! The [`CellState`] type: whether a grid cell may be crossed.

/// State of a single grid cell.
///
/// `Blocked` cells can still be reached as the final step of a move, but
/// nothing may move on from them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Passable,
    Blocked,
}

impl CellState {
    /// Character used for blocked cells in the textual map format.
    pub const BLOCKED_CHAR: char = '1';
    /// Character written for passable cells by [`to_char`](Self::to_char).
    pub const PASSABLE_CHAR: char = '0';

    /// Decode a map character: `'1'` is blocked, anything else passable.
    #[inline]
    pub fn from_char(ch: char) -> Self {
        if ch == Self::BLOCKED_CHAR {
            Self::Blocked
        } else {
            Self::Passable
        }
    }

    /// Encode as a map character.
    #[inline]
    pub fn to_char(self) -> char {
        match self {
            Self::Passable => Self::PASSABLE_CHAR,
            Self::Blocked => Self::BLOCKED_CHAR,
        }
    }

    #[inline]
    pub fn is_blocked(self) -> bool {
        self == Self::Blocked
    }

    #[inline]
    pub fn is_passable(self) -> bool {
        self == Self::Passable
    }
}

impl From<bool> for CellState {
    /// `true` means blocked.
    fn from(blocked: bool) -> Self {
        if blocked { Self::Blocked } else { Self::Passable }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_codec() {
        assert_eq!(CellState::from_char('1'), CellState::Blocked);
        assert_eq!(CellState::from_char('0'), CellState::Passable);
        assert_eq!(CellState::from_char('.'), CellState::Passable);
        assert_eq!(CellState::from_char('#'), CellState::Passable);
        assert_eq!(CellState::Blocked.to_char(), '1');
        assert_eq!(CellState::Passable.to_char(), '0');
    }

    #[test]
    fn default_is_passable() {
        assert!(CellState::default().is_passable());
        assert!(CellState::from(true).is_blocked());
    }
}
