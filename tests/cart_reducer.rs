mod common;

use chicken_nation::state::cart::{CartIntent, CartItem, CartReducer, CartState};
use chicken_nation::state::mvi::Reducer;
use chicken_nation::state::Store;
use common::{cart_item, dish, supplement};

fn reduce_all(intents: Vec<CartIntent>) -> CartState {
    CartReducer::reduce_all(CartState::default(), intents)
}

#[test]
fn empty_cart_has_zero_totals() {
    let state = CartState::default();
    assert!(state.is_empty());
    assert_eq!(state.total(), 0);
    assert_eq!(state.item_count(), 0);
}

#[test]
fn add_computes_total_and_count() {
    let state = reduce_all(vec![
        CartIntent::Add(cart_item("d1", 5000, 2)),
        CartIntent::Add(cart_item("d2", 1500, 1)),
    ]);
    assert_eq!(state.items().len(), 2);
    assert_eq!(state.total(), 11_500);
    assert_eq!(state.item_count(), 3);
}

#[test]
fn add_same_dish_replaces_line() {
    let state = reduce_all(vec![
        CartIntent::Add(cart_item("d1", 5000, 2)),
        CartIntent::Add(cart_item("d1", 5000, 1)),
    ]);
    assert_eq!(state.items().len(), 1);
    assert_eq!(state.item("d1").unwrap().quantity, 1);
    assert_eq!(state.total(), 5000);
}

#[test]
fn update_quantity_to_zero_removes_line() {
    let state = reduce_all(vec![
        CartIntent::Add(cart_item("d1", 5000, 2)),
        CartIntent::UpdateQuantity {
            id: "d1".into(),
            quantity: 0,
        },
    ]);
    assert!(state.is_empty());
    assert_eq!(state.total(), 0);
}

#[test]
fn update_quantity_of_unknown_item_is_noop() {
    let before = reduce_all(vec![CartIntent::Add(cart_item("d1", 5000, 2))]);
    let after = CartReducer::reduce(
        before.clone(),
        CartIntent::UpdateQuantity {
            id: "nope".into(),
            quantity: 4,
        },
    );
    assert_eq!(before, after);
}

#[test]
fn decrement_last_unit_removes_line() {
    let state = reduce_all(vec![
        CartIntent::Add(cart_item("d1", 5000, 1)),
        CartIntent::Increment { id: "d1".into() },
        CartIntent::Decrement { id: "d1".into() },
        CartIntent::Decrement { id: "d1".into() },
    ]);
    assert!(state.item("d1").is_none());
}

#[test]
fn remove_and_clear() {
    let state = reduce_all(vec![
        CartIntent::Add(cart_item("d1", 5000, 1)),
        CartIntent::Add(cart_item("d2", 2000, 1)),
        CartIntent::Remove { id: "d1".into() },
    ]);
    assert_eq!(state.total(), 2000);

    let cleared = CartReducer::reduce(state, CartIntent::Clear);
    assert_eq!(cleared, CartState::default());
}

#[test]
fn paid_supplements_count_per_unit() {
    let mut d = dish("d1", "Poulet braisé", 5000);
    d.supplements = vec![
        supplement("s1", "Alloco", 500, false),
        supplement("s2", "Piment", 300, true),
    ];
    let item = CartItem::from_dish(&d, 2, &["s1".to_string(), "s2".to_string(), "zz".to_string()]);

    assert_eq!(item.supplements.len(), 2);
    assert_eq!(item.unit_total(), 5500);

    let state = reduce_all(vec![CartIntent::Add(item)]);
    assert_eq!(state.total(), 11_000);
}

#[test]
fn promotion_lines_track_discount() {
    let mut d = dish("d2", "Burger poulet", 4500);
    d.promotion_price = Some(3600);
    let item = CartItem::from_dish(&d, 2, &[]);
    assert_eq!(item.unit_price, 3600);
    assert_eq!(item.original_price, Some(4500));
    assert_eq!(item.discount_percent, Some(20));

    let state = reduce_all(vec![CartIntent::Add(item)]);
    assert_eq!(state.total(), 7200);
    assert_eq!(state.total_discount(), 1800);
}

#[test]
fn totals_saturate_instead_of_overflowing() {
    let state = reduce_all(vec![
        CartIntent::Add(cart_item("d1", u64::MAX, 2)),
        CartIntent::Add(cart_item("d2", 10, 1)),
    ]);
    assert_eq!(state.total(), u64::MAX);
}

#[test]
fn store_notifies_subscribers_on_change_only() {
    let store: Store<CartReducer> = Store::new();
    let mut rx = store.subscribe();

    assert!(store.dispatch(CartIntent::Add(cart_item("d1", 5000, 1))));
    assert!(rx.has_changed().unwrap());
    let _ = rx.borrow_and_update();

    assert!(!store.dispatch(CartIntent::Remove { id: "absent".into() }));
    assert!(!rx.has_changed().unwrap());
    assert_eq!(store.get().total(), 5000);
}
