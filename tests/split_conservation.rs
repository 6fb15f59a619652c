use doubling_season::{ColorSet, SplitError, TokenStack};

fn stack_with(amount: i64, tapped: i64) -> TokenStack {
    let mut stack = TokenStack::new("Saproling", "", "1/1", ColorSet::GREEN, amount, false, true);
    stack.set_tapped(tapped);
    stack
}

/// Every valid (amount, tapped, take, tapped_first) combination conserves
/// the total amount and total tapped count across the two halves, keeps
/// both halves within the tap invariant, and resets summoning sickness.
#[test]
fn split_conserves_amount_and_tapped_over_small_grid() {
    for amount in 2u32..=12 {
        for tapped in 0..=amount {
            for take in 1..amount {
                for tapped_first in [true, false] {
                    let mut original = stack_with(amount as i64, tapped as i64);
                    let split_off = original.split(take, tapped_first).unwrap_or_else(|err| {
                        panic!("split failed for A={amount} T={tapped} S={take}: {err}")
                    });

                    assert_eq!(original.amount() + split_off.amount(), amount);
                    assert_eq!(original.tapped() + split_off.tapped(), tapped);
                    assert_eq!(split_off.amount(), take);
                    assert!(original.tapped() <= original.amount());
                    assert!(split_off.tapped() <= split_off.amount());
                    assert_eq!(original.summoning_sick(), 0);
                    assert_eq!(split_off.summoning_sick(), 0);
                }
            }
        }
    }
}

#[test]
fn split_tapped_first_prefers_tapped_tokens() {
    let mut original = stack_with(10, 4);
    let split_off = original.split(3, true).unwrap();
    assert_eq!((original.amount(), original.tapped()), (7, 1));
    assert_eq!((split_off.amount(), split_off.tapped()), (3, 3));

    // With more requested than tapped, the remainder comes untapped.
    let mut original = stack_with(10, 2);
    let split_off = original.split(5, true).unwrap();
    assert_eq!((original.amount(), original.tapped()), (5, 0));
    assert_eq!((split_off.amount(), split_off.tapped()), (5, 2));
}

#[test]
fn split_untapped_first_prefers_untapped_tokens() {
    let mut original = stack_with(10, 4);
    let split_off = original.split(3, false).unwrap();
    assert_eq!((original.amount(), original.tapped()), (7, 4));
    assert_eq!((split_off.amount(), split_off.tapped()), (3, 0));

    // With more requested than untapped, the remainder comes tapped.
    let mut original = stack_with(10, 8);
    let split_off = original.split(5, false).unwrap();
    assert_eq!((original.amount(), original.tapped()), (5, 5));
    assert_eq!((split_off.amount(), split_off.tapped()), (5, 3));
}

#[test]
fn split_rejects_taking_everything() {
    for amount in 1u32..=4 {
        let mut original = stack_with(amount as i64, 0);
        for take in amount..amount + 2 {
            assert_eq!(
                original.split(take, false),
                Err(SplitError::WouldEmptyOriginal {
                    requested: take,
                    amount
                })
            );
        }
        assert_eq!(original.amount(), amount);
    }
}

#[test]
fn split_halves_are_independent() {
    let mut original = stack_with(6, 3);
    original.add_counter("Charge", 2);

    let mut split_off = original.split(2, true).unwrap();
    assert_ne!(original.id(), split_off.id());
    assert!(original.created_at() <= split_off.created_at());

    split_off.add_tokens(10);
    split_off.add_counter("Oil", 1);
    assert_eq!(original.amount(), 4);
    assert_eq!(original.counters().len(), 1);
}
