use rand::Rng;
use crate::training_engine::models::{Item, ItemCategory};

const fn item(label: &'static str, glyph: &'static str) -> Item {
    Item { label, glyph }
}

static ANIMALS: [Item; 10] = [
    item("cat", "🐱"), item("dog", "🐶"), item("rabbit", "🐰"), item("bird", "🐦"),
    item("fish", "🐟"), item("cow", "🐄"), item("pig", "🐷"), item("horse", "🐴"),
    item("sheep", "🐑"), item("chicken", "🐔"),
];

static FOOD: [Item; 10] = [
    item("apple", "🍎"), item("orange", "🍊"), item("banana", "🍌"), item("grape", "🍇"),
    item("strawberry", "🍓"), item("cake", "🎂"), item("pizza", "🍕"), item("burger", "🍔"),
    item("cookie", "🍪"), item("donut", "🍩"),
];

static OBJECTS: [Item; 10] = [
    item("star", "⭐"), item("heart", "❤️"), item("flower", "🌸"), item("ball", "⚽"),
    item("book", "📚"), item("pencil", "✏️"), item("car", "🚗"), item("house", "🏠"),
    item("tree", "🌳"), item("sun", "☀️"),
];

/// Small, mostly coprime `(count1, count2)` pairs.
pub const NUMBER_PAIRS: [(u32, u32); 10] = [
    (2, 3), (3, 4), (2, 5), (3, 5), (4, 5),
    (1, 2), (1, 3), (2, 1), (3, 2), (5, 3),
];

impl ItemCategory {
    pub const ALL: [ItemCategory; 3] = [ItemCategory::Animals, ItemCategory::Food, ItemCategory::Objects];

    pub fn items(self) -> &'static [Item; 10] {
        match self {
            ItemCategory::Animals => &ANIMALS,
            ItemCategory::Food    => &FOOD,
            ItemCategory::Objects => &OBJECTS,
        }
    }
}

/// Pick a category, then two distinct items from it.
///
/// The second index is resampled until it differs from the first.
pub fn pick_item_pair<R: Rng>(rng: &mut R) -> (ItemCategory, Item, Item) {
    let category = ItemCategory::ALL[rng.gen_range(0..ItemCategory::ALL.len())];
    let items = category.items();

    let first = rng.gen_range(0..items.len());
    let mut second = rng.gen_range(0..items.len());
    while second == first {
        second = rng.gen_range(0..items.len());
    }
    (category, items[first], items[second])
}

pub fn pick_number_pair<R: Rng>(rng: &mut R) -> (u32, u32) {
    NUMBER_PAIRS[rng.gen_range(0..NUMBER_PAIRS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn every_category_has_ten_unique_labels() {
        for category in ItemCategory::ALL {
            let items = category.items();
            let mut seen = std::collections::HashSet::new();
            for it in items {
                assert!(seen.insert(it.label), "Duplicate label '{}' in {category}", it.label);
                assert!(!it.glyph.is_empty());
            }
            assert_eq!(seen.len(), 10);
        }
    }

    #[test]
    fn item_pair_is_always_distinct() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let (category, a, b) = pick_item_pair(&mut rng);
            assert_ne!(a.label, b.label);
            assert!(category.items().contains(&a));
            assert!(category.items().contains(&b));
        }
    }

    #[test]
    fn number_pairs_are_positive() {
        for (a, b) in NUMBER_PAIRS {
            assert!(a > 0 && b > 0);
        }
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert!(NUMBER_PAIRS.contains(&pick_number_pair(&mut rng)));
        }
    }

    #[test]
    fn pair_selection_is_deterministic_with_seed() {
        let make = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..5).map(|_| pick_item_pair(&mut rng).1.label).collect::<Vec<_>>()
        };
        assert_eq!(make(99), make(99));
    }
}
