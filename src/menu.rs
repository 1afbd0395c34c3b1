/// Actions offered while browsing, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MenuOption {
    Complete,
    Add,
    Shuffle,
}

impl MenuOption {
    pub const ALL: [Self; 3] = [Self::Complete, Self::Add, Self::Shuffle];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Complete => "Mark task complete",
            Self::Add => "Add new task",
            Self::Shuffle => "Shuffle task",
        }
    }

    /// Whether the option can be chosen with `pending_len` tasks queued.
    pub const fn is_enabled(self, pending_len: usize) -> bool {
        match self {
            Self::Complete => pending_len > 0,
            Self::Add => true,
            Self::Shuffle => pending_len >= 2,
        }
    }

    const fn previous(self) -> Self {
        match self {
            Self::Complete | Self::Add => Self::Complete,
            Self::Shuffle => Self::Add,
        }
    }

    const fn next(self) -> Self {
        match self {
            Self::Complete => Self::Add,
            Self::Add | Self::Shuffle => Self::Shuffle,
        }
    }
}

/// Lowest enabled option. `Add` is always enabled.
pub const fn lowest(pending_len: usize) -> MenuOption {
    if MenuOption::Complete.is_enabled(pending_len) {
        MenuOption::Complete
    } else {
        MenuOption::Add
    }
}

pub const fn highest(pending_len: usize) -> MenuOption {
    if MenuOption::Shuffle.is_enabled(pending_len) {
        MenuOption::Shuffle
    } else {
        MenuOption::Add
    }
}

/// Map a cursor that points at a disabled option onto `Add`.
pub const fn resolve(pending_len: usize, cursor: MenuOption) -> MenuOption {
    if cursor.is_enabled(pending_len) {
        cursor
    } else {
        MenuOption::Add
    }
}

pub fn move_up(pending_len: usize, cursor: MenuOption) -> MenuOption {
    let cursor = resolve(pending_len, cursor);
    if cursor > lowest(pending_len) {
        cursor.previous()
    } else {
        cursor
    }
}

pub fn move_down(pending_len: usize, cursor: MenuOption) -> MenuOption {
    let cursor = resolve(pending_len, cursor);
    if cursor < highest(pending_len) {
        cursor.next()
    } else {
        cursor
    }
}

#[cfg(test)]
mod tests {
    use super::MenuOption::{Add, Complete, Shuffle};
    use super::*;

    #[test]
    fn empty_queue_only_allows_add() {
        for cursor in MenuOption::ALL {
            assert_eq!(resolve(0, cursor), Add);
            assert_eq!(move_up(0, cursor), Add);
            assert_eq!(move_down(0, cursor), Add);
        }
    }

    #[test]
    fn single_task_cannot_shuffle() {
        assert_eq!(resolve(1, Shuffle), Add);
        assert_eq!(move_down(1, Add), Add);
        assert_eq!(move_up(1, Add), Complete);
        assert_eq!(highest(1), Add);
    }

    #[test]
    fn full_menu_walks_in_order() {
        assert_eq!(lowest(3), Complete);
        assert_eq!(move_down(3, Complete), Add);
        assert_eq!(move_down(3, Add), Shuffle);
        assert_eq!(move_down(3, Shuffle), Shuffle);
        assert_eq!(move_up(3, Shuffle), Add);
        assert_eq!(move_up(3, Complete), Complete);
    }

    #[test]
    fn enabled_options_stay_put() {
        for len in 0..4 {
            for cursor in MenuOption::ALL {
                if cursor.is_enabled(len) {
                    assert_eq!(resolve(len, cursor), cursor);
                }
            }
        }
    }
}
