//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}

/// Find a record by identifier in an in-memory snapshot.
pub fn find_by_id<E: Entity>(records: &[E], id: E::Id) -> Option<&E> {
    records.iter().find(|r| r.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Row(u32, &'static str);

    impl Entity for Row {
        type Id = u32;

        fn id(&self) -> u32 {
            self.0
        }
    }

    #[test]
    fn find_by_id_returns_first_match() {
        let rows = vec![Row(1, "a"), Row(2, "b"), Row(2, "c")];
        assert_eq!(find_by_id(&rows, 2).map(|r| r.1), Some("b"));
        assert!(find_by_id(&rows, 9).is_none());
    }
}
