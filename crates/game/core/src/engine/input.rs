//! Input events and the move-menu cursor.

/// Direction of a cursor movement in the 2×2 move menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum CursorDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Events a host can deliver to a session.
///
/// Hosts translate their own key or button codes into these; anything that
/// does not map to one of them is simply never delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleInput {
    MoveCursor(CursorDirection),
    Confirm,
    Restart,
}

/// Selected slot of the move menu.
///
/// Slots are laid out as a 2×2 grid:
///
/// ```text
/// 0 1
/// 2 3
/// ```
///
/// Up/Down switch rows; Left/Right move within a row and stop at its edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuCursor(u8);

impl MenuCursor {
    pub const SLOTS: u8 = 4;
    const COLUMNS: u8 = 2;

    /// Cursor on `index`, or `None` if the slot does not exist.
    pub const fn at(index: u8) -> Option<Self> {
        if index < Self::SLOTS {
            Some(Self(index))
        } else {
            None
        }
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn row(self) -> u8 {
        self.0 / Self::COLUMNS
    }

    pub const fn column(self) -> u8 {
        self.0 % Self::COLUMNS
    }

    #[must_use]
    pub const fn moved(self, direction: CursorDirection) -> Self {
        let index = match direction {
            CursorDirection::Up => (self.0 + Self::SLOTS - Self::COLUMNS) % Self::SLOTS,
            CursorDirection::Down => (self.0 + Self::COLUMNS) % Self::SLOTS,
            CursorDirection::Left if self.column() == 1 => self.0 - 1,
            CursorDirection::Right if self.column() == 0 => self.0 + 1,
            CursorDirection::Left | CursorDirection::Right => self.0,
        };
        Self(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CursorDirection::*;

    fn walk(start: u8, steps: &[CursorDirection]) -> usize {
        steps
            .iter()
            .fold(MenuCursor::at(start).unwrap(), |cursor, step| cursor.moved(*step))
            .index()
    }

    #[test]
    fn vertical_moves_toggle_rows() {
        assert_eq!(walk(0, &[Down]), 2);
        assert_eq!(walk(0, &[Up]), 2);
        assert_eq!(walk(3, &[Up]), 1);
        assert_eq!(walk(3, &[Down]), 1);
        assert_eq!(walk(1, &[Down, Down]), 1);
    }

    #[test]
    fn horizontal_moves_stop_at_row_edge() {
        assert_eq!(walk(0, &[Left]), 0);
        assert_eq!(walk(0, &[Right]), 1);
        assert_eq!(walk(1, &[Right]), 1);
        assert_eq!(walk(3, &[Left]), 2);
        assert_eq!(walk(2, &[Left]), 2);
        assert_eq!(walk(2, &[Right, Right]), 3);
    }

    #[test]
    fn cursor_never_leaves_the_grid() {
        let all = [Up, Down, Left, Right];
        for start in 0..MenuCursor::SLOTS {
            for a in all {
                for b in all {
                    assert!(walk(start, &[a, b]) < 4);
                }
            }
        }
        assert!(MenuCursor::at(4).is_none());
    }

    #[test]
    fn directions_parse_from_names() {
        assert_eq!("up".parse::<CursorDirection>().unwrap(), Up);
        assert_eq!("Right".parse::<CursorDirection>().unwrap(), Right);
    }
}
