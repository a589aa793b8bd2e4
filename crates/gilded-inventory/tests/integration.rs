//! Day-over-day behavior of the update engine on the standard shop inventory

use gilded_core::{Item, QualityBounds};
use gilded_inventory::{UpdateEngine, advance_one_day};

fn fixture() -> Vec<Item> {
    serde_json::from_str(include_str!("fixtures/inventory.json")).unwrap()
}

fn snapshot(items: &[Item]) -> Vec<(i32, i32)> {
    items.iter().map(|item| (item.sell_in, item.quality)).collect()
}

#[test]
fn first_day() {
    let mut items = fixture();
    advance_one_day(&mut items);

    assert_eq!(
        snapshot(&items),
        vec![
            (9, 19),
            (1, 1),
            (4, 6),
            (0, 80),
            (-1, 80),
            (14, 19),
            (9, 50),
            (4, 50),
            (2, 4),
        ]
    );
}

#[test]
fn third_day() {
    let mut items = fixture();
    for _ in 0..3 {
        advance_one_day(&mut items);
    }

    assert_eq!(
        snapshot(&items),
        vec![
            (7, 17),
            (-1, 3),
            (2, 4),
            (0, 80),
            (-1, 80),
            (12, 17),
            (7, 50),
            (2, 50),
            (0, 0),
        ]
    );
}

#[test]
fn passes_are_worthless_once_concert_day_arrives() {
    let mut items = fixture();
    for _ in 0..5 {
        advance_one_day(&mut items);
    }

    let late_pass = &items[7];
    assert_eq!((late_pass.sell_in, late_pass.quality), (0, 0));

    let elixir = &items[2];
    assert_eq!((elixir.sell_in, elixir.quality), (0, 1));

    advance_one_day(&mut items);
    assert_eq!((items[7].sell_in, items[7].quality), (-1, 0));
    assert_eq!((items[2].sell_in, items[2].quality), (-1, 0));
}

#[test]
fn names_survive_updates() {
    let mut items = fixture();
    let names: Vec<String> = items.iter().map(|item| item.name().to_string()).collect();

    for _ in 0..20 {
        advance_one_day(&mut items);
    }

    let after: Vec<String> = items.iter().map(|item| item.name().to_string()).collect();
    assert_eq!(names, after);
}

#[test]
fn item_order_does_not_matter() {
    let mut forward = fixture();
    let mut reversed = fixture();
    reversed.reverse();

    advance_one_day(&mut forward);
    advance_one_day(&mut reversed);
    reversed.reverse();

    assert_eq!(forward, reversed);
}

#[test]
fn category_boundary_examples() {
    let mut items = vec![
        Item::new("Sulfuras, Hand of Ragnaros", 5, 80),
        Item::new("Aged Brie", 2, 0),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 11, 20),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 5, 20),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 0, 20),
        Item::new("Conjured Mana Cake", 3, 6),
    ];

    advance_one_day(&mut items);

    assert_eq!(
        snapshot(&items),
        vec![(5, 80), (1, 1), (10, 22), (4, 23), (-1, 0), (2, 4)]
    );
}

#[test]
fn engine_and_free_function_agree_on_default_bounds() {
    let engine = UpdateEngine::new(QualityBounds::default());
    let mut via_engine = fixture();
    let mut via_fn = fixture();

    for _ in 0..12 {
        engine.advance_one_day(&mut via_engine);
        advance_one_day(&mut via_fn);
    }

    assert_eq!(via_engine, via_fn);
}
