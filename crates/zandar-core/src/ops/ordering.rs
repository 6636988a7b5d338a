//! Pure ordering primitives shared by pages, widgets and links
//!
//! A "group" is the set of sibling records sharing a parent/slot key: all
//! widgets in one (page, column), all links in one widget, or the top-level
//! page list. These functions never touch the store; entity ops re-read the
//! current group membership, call in here, and write the result back inside
//! one `apply()` unit.

/// Accessors the ordering engine needs from any orderable record
pub trait GroupItem {
    /// Stable record identifier, used as the deterministic tiebreak
    fn item_id(&self) -> i64;
    /// Current position value (relative sort key, not assumed contiguous)
    fn sort_order(&self) -> i64;
}

/// Which side of the drop target the moving item lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Insert at the target's index
    Above,
    /// Insert just after the target
    Below,
}

/// Sort a group ascending by order, ties broken by id
///
/// Orders are only a relative sort key, so holes left by cross-group moves
/// are fine. The id tiebreak keeps legacy records sharing `order = 0` in a
/// stable, platform-independent sequence.
pub fn sorted_by_order<T: GroupItem>(mut items: Vec<&T>) -> Vec<&T> {
    items.sort_by_key(|item| (item.sort_order(), item.item_id()));
    items
}

/// Order value that sorts a new item after every existing member
///
/// `max + 1`, or 0 for an empty group. Existing orders are untouched.
pub fn next_order<T: GroupItem>(items: &[&T]) -> i64 {
    items
        .iter()
        .map(|item| item.sort_order())
        .max()
        .unwrap_or(-1)
        + 1
}

/// Recompute a group after dropping `moving_id` onto `target_id`
///
/// Removes the moving item from the ordered sequence, re-inserts it at the
/// target's index (offset by `side`), and returns the whole group densely
/// renumbered as `(id, order)` pairs covering exactly 0..n-1. Renumbering
/// everything sidesteps order-collision edge cases at the cost of rewriting
/// each sibling on every drop.
///
/// Returns `None` when the drop is a no-op: the item was dropped onto
/// itself, or either id has vanished from the group since the gesture
/// started.
pub fn reorder<T: GroupItem>(
    ordered: &[&T],
    moving_id: i64,
    target_id: i64,
    side: Side,
) -> Option<Vec<(i64, i64)>> {
    if moving_id == target_id {
        return None;
    }

    let mut ids: Vec<i64> = ordered.iter().map(|item| item.item_id()).collect();
    let moving_index = ids.iter().position(|&id| id == moving_id)?;
    ids.remove(moving_index);

    let target_index = ids.iter().position(|&id| id == target_id)?;
    let insert_at = match side {
        Side::Above => target_index,
        Side::Below => target_index + 1,
    };
    ids.insert(insert_at, moving_id);

    Some(
        ids.into_iter()
            .enumerate()
            .map(|(index, id)| (id, index as i64))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Item {
        id: i64,
        order: i64,
    }

    impl GroupItem for Item {
        fn item_id(&self) -> i64 {
            self.id
        }
        fn sort_order(&self) -> i64 {
            self.order
        }
    }

    fn group(pairs: &[(i64, i64)]) -> Vec<Item> {
        pairs
            .iter()
            .map(|&(id, order)| Item { id, order })
            .collect()
    }

    #[test]
    fn test_sorted_by_order_with_id_tiebreak() {
        let items = group(&[(3, 0), (1, 0), (2, 5)]);
        let refs: Vec<&Item> = items.iter().collect();
        let sorted = sorted_by_order(refs);
        let ids: Vec<i64> = sorted.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[test]
    fn test_sorted_by_order_is_idempotent() {
        let items = group(&[(9, 2), (4, 2), (7, 1)]);
        let first: Vec<i64> = sorted_by_order(items.iter().collect())
            .iter()
            .map(|i| i.id)
            .collect();
        let second: Vec<i64> = sorted_by_order(items.iter().collect())
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_next_order_appends_after_max() {
        let items = group(&[(1, 0), (2, 7), (3, 3)]);
        let refs: Vec<&Item> = items.iter().collect();
        assert_eq!(next_order(&refs), 8);
    }

    #[test]
    fn test_next_order_on_empty_group() {
        let refs: Vec<&Item> = Vec::new();
        assert_eq!(next_order(&refs), 0);
    }

    #[test]
    fn test_reorder_above_first() {
        // Moving id 3 above id 1 in [1, 2, 3]
        let items = group(&[(1, 0), (2, 1), (3, 2)]);
        let ordered = sorted_by_order(items.iter().collect());
        let result = reorder(&ordered, 3, 1, Side::Above).unwrap();
        assert_eq!(result, vec![(3, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn test_reorder_below_target() {
        let items = group(&[(1, 0), (2, 1), (3, 2)]);
        let ordered = sorted_by_order(items.iter().collect());
        let result = reorder(&ordered, 1, 3, Side::Below).unwrap();
        assert_eq!(result, vec![(2, 0), (3, 1), (1, 2)]);
    }

    #[test]
    fn test_reorder_onto_self_is_noop() {
        let items = group(&[(1, 0), (2, 1)]);
        let ordered = sorted_by_order(items.iter().collect());
        assert!(reorder(&ordered, 1, 1, Side::Above).is_none());
    }

    #[test]
    fn test_reorder_with_vanished_target_is_noop() {
        let items = group(&[(1, 0), (2, 1)]);
        let ordered = sorted_by_order(items.iter().collect());
        assert!(reorder(&ordered, 1, 99, Side::Above).is_none());
        assert!(reorder(&ordered, 99, 1, Side::Above).is_none());
    }

    #[test]
    fn test_reorder_renumbers_duplicate_orders_densely() {
        // Legacy group where every order defaulted to 0
        let items = group(&[(5, 0), (6, 0), (7, 0)]);
        let ordered = sorted_by_order(items.iter().collect());
        let result = reorder(&ordered, 7, 5, Side::Below).unwrap();
        assert_eq!(result, vec![(5, 0), (7, 1), (6, 2)]);
    }
}
