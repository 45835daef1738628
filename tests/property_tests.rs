//! Property tests for the collection and the drag state machine.

use card_board::board::Board;
use card_board::cards::{Card, CardCollection};
use card_board::core::{CardId, Coords, IdSupplier, SequentialIds};
use card_board::drag::PointerEvent;
use proptest::prelude::*;
use rustc_hash::FxHashSet;

/// Integer-valued pointer positions keep f64 arithmetic exact.
fn position() -> impl Strategy<Value = (i32, i32)> {
    (-2000i32..2000, -2000i32..2000)
}

fn coords((x, y): (i32, i32)) -> Coords {
    Coords::new(f64::from(x), f64::from(y))
}

fn collection_of(n: usize) -> CardCollection {
    let mut ids = SequentialIds::new();
    let mut cards = CardCollection::new();
    for i in 0..n {
        let id = ids.next_id();
        cards.append(Card::new(id, format!("card {}", i), Coords::new(i as f64, 0.0)));
    }
    cards
}

proptest! {
    #[test]
    fn appends_keep_count_and_unique_ids(n in 0usize..64) {
        let mut board = Board::new();
        for _ in 0..n {
            board.add_card();
        }

        prop_assert_eq!(board.cards().len(), n);
        let unique: FxHashSet<CardId> = board.cards().ids().collect();
        prop_assert_eq!(unique.len(), n);
    }

    #[test]
    fn update_changes_only_target(n in 1usize..32, pick in any::<prop::sample::Index>(), to in position()) {
        let mut cards = collection_of(n);
        let before = cards.snapshot();
        let target = before[pick.index(n)].id;

        cards.update_coords(target, coords(to));

        let after = cards.snapshot();
        prop_assert_eq!(after.len(), before.len());
        for (old, new) in before.iter().zip(after.iter()) {
            if old.id == target {
                prop_assert_eq!(&new.text, &old.text);
                prop_assert_eq!(new.coords, coords(to));
            } else {
                prop_assert_eq!(new, old);
            }
        }
    }

    #[test]
    fn update_unknown_is_noop(n in 0usize..32, to in position()) {
        let mut cards = collection_of(n);
        let before = cards.snapshot();

        cards.update_coords(CardId(n as u32 + 1000), coords(to));

        prop_assert_eq!(cards.snapshot(), before);
    }

    #[test]
    fn drag_moves_by_net_displacement(
        start in position(),
        moves in prop::collection::vec(position(), 1..40),
    ) {
        let mut board = Board::new();
        let id = board.add_card();
        let origin = board.cards().coords_of(id).unwrap();

        board.dispatch(PointerEvent::down(id, f64::from(start.0), f64::from(start.1)));
        for &(x, y) in &moves {
            board.dispatch(PointerEvent::moved(id, f64::from(x), f64::from(y)));
        }
        let last = *moves.last().unwrap();
        board.dispatch(PointerEvent::up(id, f64::from(last.0), f64::from(last.1)));

        let expected = origin + (coords(last) - coords(start));
        prop_assert_eq!(board.cards().coords_of(id), Some(expected));
    }

    #[test]
    fn moves_after_release_are_ignored(
        start in position(),
        end in position(),
        stray in prop::collection::vec(position(), 0..10),
    ) {
        let mut board = Board::new();
        let id = board.add_card();

        board.dispatch(PointerEvent::down(id, f64::from(start.0), f64::from(start.1)));
        board.dispatch(PointerEvent::moved(id, f64::from(end.0), f64::from(end.1)));
        board.dispatch(PointerEvent::up(id, f64::from(end.0), f64::from(end.1)));
        let released = board.cards().coords_of(id);

        for &(x, y) in &stray {
            board.dispatch(PointerEvent::moved(id, f64::from(x), f64::from(y)));
        }

        prop_assert_eq!(board.cards().coords_of(id), released);
        prop_assert!(!board.listeners().is_listening(id));
    }
}
