#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrashAction {
    RestoreOne,
    RestoreAll,
    Empty,
    Back,
}

pub const OPTIONS: [(&str, &str, TrashAction); 4] = [
    ("1", "Restore a specific entry", TrashAction::RestoreOne),
    ("2", "Restore all entries", TrashAction::RestoreAll),
    ("3", "Empty trash bin", TrashAction::Empty),
    ("4", "Back to main menu", TrashAction::Back),
];

impl TrashAction {
    pub fn parse(input: &str) -> Option<Self> {
        let needle = input.trim();
        OPTIONS
            .iter()
            .find(|(key, _, _)| *key == needle)
            .map(|(_, _, action)| *action)
    }
}

pub fn render() -> Vec<String> {
    OPTIONS
        .iter()
        .map(|(key, label, _)| format!("{key}. {label}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_option_numbers() {
        assert_eq!(TrashAction::parse("1"), Some(TrashAction::RestoreOne));
        assert_eq!(TrashAction::parse(" 3 "), Some(TrashAction::Empty));
        assert_eq!(TrashAction::parse("4"), Some(TrashAction::Back));
    }

    #[test]
    fn rejects_unknown_options() {
        assert_eq!(TrashAction::parse("5"), None);
        assert_eq!(TrashAction::parse("restore"), None);
        assert_eq!(TrashAction::parse(""), None);
    }

    #[test]
    fn render_numbers_every_option() {
        assert_eq!(
            render(),
            vec![
                "1. Restore a specific entry",
                "2. Restore all entries",
                "3. Empty trash bin",
                "4. Back to main menu",
            ]
        );
    }
}
