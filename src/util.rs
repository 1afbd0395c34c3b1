/// Keyboard shortcut display with key and description
#[derive(Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub description: &'static str,
}

pub const BROWSE_SHORTCUTS: [Shortcut; 3] = [
    Shortcut {
        key: "j/k",
        description: "Move",
    },
    Shortcut {
        key: "Enter",
        description: "Select",
    },
    Shortcut {
        key: "q",
        description: "Quit",
    },
];
