/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> u64;
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Returns the identifier that follows the largest one in `items`, or 1 when empty.
pub fn next_id<'a, T, I>(items: I) -> u64
where
    T: Identifiable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .map(Identifiable::id)
        .max()
        .map_or(1, |max| max + 1)
}

/// Linear scan for the position of the entry with `id`.
pub fn position_of<T: Identifiable>(items: &[T], id: u64) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item(u64);

    impl Identifiable for Item {
        fn id(&self) -> u64 {
            self.0
        }
    }

    #[test]
    fn next_id_starts_at_one() {
        let items: Vec<Item> = Vec::new();
        assert_eq!(next_id(&items), 1);
    }

    #[test]
    fn next_id_follows_the_maximum_not_the_length() {
        let items = vec![Item(4), Item(2), Item(9)];
        assert_eq!(next_id(&items), 10);
    }

    #[test]
    fn position_of_finds_by_identifier() {
        let items = vec![Item(3), Item(5)];
        assert_eq!(position_of(&items, 5), Some(1));
        assert_eq!(position_of(&items, 4), None);
    }
}
