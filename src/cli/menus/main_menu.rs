/// Operations offered by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Add,
    View,
    Edit,
    Delete,
    Summary,
    Upcoming,
    Export,
    Trash,
    Exit,
}

#[derive(Clone)]
pub struct MenuEntry {
    pub key: &'static str,
    pub command: &'static str,
    pub description: &'static str,
    pub action: MenuAction,
}

pub const MAIN_MENU: [MenuEntry; 9] = [
    MenuEntry {
        key: "1",
        command: "add",
        description: "Add a record or plan",
        action: MenuAction::Add,
    },
    MenuEntry {
        key: "2",
        command: "view",
        description: "View records and plans",
        action: MenuAction::View,
    },
    MenuEntry {
        key: "3",
        command: "edit",
        description: "Edit a record or plan",
        action: MenuAction::Edit,
    },
    MenuEntry {
        key: "4",
        command: "delete",
        description: "Delete a record or plan",
        action: MenuAction::Delete,
    },
    MenuEntry {
        key: "5",
        command: "summary",
        description: "Balance summary",
        action: MenuAction::Summary,
    },
    MenuEntry {
        key: "6",
        command: "upcoming",
        description: "Upcoming due dates",
        action: MenuAction::Upcoming,
    },
    MenuEntry {
        key: "7",
        command: "export",
        description: "Export data to a file",
        action: MenuAction::Export,
    },
    MenuEntry {
        key: "8",
        command: "trash",
        description: "Trash bin",
        action: MenuAction::Trash,
    },
    MenuEntry {
        key: "9",
        command: "exit",
        description: "Exit",
        action: MenuAction::Exit,
    },
];

impl MenuAction {
    /// Matches a menu number or command name, ignoring case and surrounding space.
    pub fn parse(input: &str) -> Option<Self> {
        let needle = input.trim().to_ascii_lowercase();
        if needle == "quit" {
            return Some(MenuAction::Exit);
        }
        MAIN_MENU
            .iter()
            .find(|entry| entry.key == needle || entry.command == needle)
            .map(|entry| entry.action)
    }
}

/// Menu text, one entry per line.
pub fn render() -> Vec<String> {
    let width = MAIN_MENU
        .iter()
        .map(|entry| entry.command.len())
        .max()
        .unwrap_or(0);
    MAIN_MENU
        .iter()
        .map(|entry| {
            format!(
                "{}. {:<width$}  {}",
                entry.key,
                entry.command,
                entry.description,
                width = width
            )
        })
        .collect()
}
