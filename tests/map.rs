use bstree::{less, Error, Map};
use compare::{natural, Compare};
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};

fn abc() -> Map<i32, char> {
    let mut map = Map::new();
    map.insert(1, 'a');
    map.insert(2, 'b');
    map.insert(3, 'c');
    map
}

#[test]
fn new_map_is_empty() {
    let map: Map<i32, char> = Map::new();

    assert_eq!(map.len(), 0);
    assert!(map.is_empty());
    assert!(map.begin() == map.end());
    assert_eq!(map.begin().get(), Err(Error::OutOfBounds));
    assert_eq!(map.first(), None);
    assert_eq!(map.try_front(), Err(Error::Empty));
    assert_eq!(map.try_back(), Err(Error::Empty));
}

#[test]
fn with_cmp_orders_by_comparator() {
    let mut map = Map::with_cmp(less(|l: &i32, r: &i32| l > r));
    assert!(map.is_empty());
    assert!(map.begin() == map.end());

    for &key in &[2, 5, 1, 4, 3] {
        map.insert(key, ());
    }

    assert_eq!(map.iter().map(|e| *e.0).collect::<Vec<_>>(), [5, 4, 3, 2, 1]);
    assert_eq!(map.first(), Some((&5, &())));
    assert_eq!(map.last(), Some((&1, &())));
}

#[test]
fn clone_matches_original() {
    let map = abc();
    let copy = map.clone();

    assert_eq!(map.len(), copy.len());
    assert_eq!(map.is_empty(), copy.is_empty());
    assert!(map.begin() == copy.begin());
    assert!(map.end() == copy.end());
    assert_eq!(map, copy);
}

#[test]
fn clone_is_independent() {
    let mut map = Map::new();
    let copy = map.clone();
    assert_eq!(map, copy);

    map.insert(1, 'a');
    map.insert(2, 'b');
    map.insert(3, 'c');
    assert_ne!(map, copy);
    assert!(copy.is_empty());

    let mut copy = map.clone();
    copy.insert(4, 'd');
    assert_ne!(map, copy);
    assert_eq!(map.len(), 3);
}

#[test]
fn clone_from_replaces_contents() {
    let map = abc();
    let mut other = Map::new();
    other.insert(10, 'z');
    other.insert(0, 'y');

    other.clone_from(&map);

    assert_eq!(other, map);
    assert_eq!(other.get(&10), None);
    assert_eq!(*other.front(), 'a');
    assert_eq!(*other.back(), 'c');
}

#[test]
fn take_moves_entries() {
    let mut map = abc();
    let moved = map.take();

    assert_eq!(moved.len(), 3);
    assert!(!moved.is_empty());
    assert_eq!(map.len(), 0);
    assert!(map.begin() == map.end());

    map.insert(7, 'g');
    assert_eq!(map.len(), 1);
    assert_eq!(moved.get(&7), None);
}

#[test]
fn drop_releases_entries() {
    use std::rc::Rc;

    let value = Rc::new(());
    let mut map = Map::new();

    for key in 0..32 {
        map.insert(key, value.clone());
    }

    assert_eq!(Rc::strong_count(&value), 33);
    drop(map);
    assert_eq!(Rc::strong_count(&value), 1);
}

#[test]
fn overwriting_insert_drops_old_value() {
    use std::rc::Rc;

    let old = Rc::new(1);
    let mut map = Map::new();
    map.insert(1, old.clone());
    assert_eq!(Rc::strong_count(&old), 2);

    map.insert(1, Rc::new(2));
    assert_eq!(Rc::strong_count(&old), 1);
    assert_eq!(*map[&1], 2);
}

#[test]
fn eq_compares_contents() {
    let map = abc();
    assert_eq!(map, map.clone());

    let mut single = Map::new();
    single.insert(1, 'a');
    assert_ne!(single, Map::new());
    assert_ne!(single, map);

    let mut changed = map.clone();
    changed.insert(2, 'x');
    assert_ne!(changed, map);
}

#[test]
fn eq_ignores_insertion_order() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut keys: Vec<u32> = (0..256).collect();
    let sorted: Map<u32, u32> = keys.iter().map(|&k| (k, k * 3)).collect();

    for _ in 0..8 {
        keys.shuffle(&mut rng);
        let shuffled: Map<u32, u32> = keys.iter().map(|&k| (k, k * 3)).collect();
        assert_eq!(shuffled, sorted);
    }
}

#[test]
fn eq_uses_key_equivalence() {
    let by_len = |l: &&str, r: &&str| l.len().cmp(&r.len());

    let mut l = Map::with_cmp(by_len);
    let mut r = Map::with_cmp(by_len);
    l.insert("a", 1);
    l.insert("bcd", 3);
    r.insert("x", 1);
    r.insert("yzw", 3);

    assert!(l == r);
    assert!(by_len.compares_lt(&"a", &"bcd"));
}

#[test]
fn clear_empties_map() {
    let mut map = abc();
    map.clear();

    assert_eq!(map.len(), 0);
    assert!(map.is_empty());
    assert!(map.begin() == map.end());

    map.insert(1, 'a');
    assert_eq!(map.len(), 1);
}

#[test]
fn insert_overwrites_value() {
    let mut map = Map::new();
    map.insert(1, 'a');
    map.insert(2, 'b');
    map.insert(3, 'd');
    assert_eq!(map.len(), 3);

    {
        let (cursor, inserted) = map.insert(3, 'b');
        assert!(!inserted);
        assert_eq!(cursor.key_value(), Some((&3, &'b')));
    }

    assert_eq!(map.len(), 3);
    assert_eq!(map.find(&3).value(), Some(&'b'));
}

#[test]
fn insert_keeps_original_key() {
    let by_len = |l: &String, r: &String| l.len().cmp(&r.len());
    let mut map = Map::with_cmp(by_len);

    map.insert(String::from("ab"), 1);
    map.insert_cloned(&String::from("cd"), &2);
    map.insert(String::from("ef"), 3);

    assert_eq!(map.len(), 1);
    assert_eq!(map.first(), Some((&String::from("ab"), &3)));
}

#[test]
fn insert_cursor_walks_map() {
    let mut map = abc();
    let (mut cursor, inserted) = map.insert(0, 'z');
    assert!(inserted);

    *cursor.value_mut().unwrap() = 'y';
    cursor.move_next();
    assert_eq!(cursor.key(), Some(&1));
    cursor.move_prev();
    cursor.move_prev();
    assert!(cursor.is_out_of_bounds());
    assert_eq!(cursor.get_mut(), Err(Error::OutOfBounds));

    assert_eq!(*map.front(), 'y');
}

#[test]
fn find_locates_entries() {
    let mut map = Map::new();
    map.insert(5, 'a');
    map.insert(6, 'c');
    map.insert(7, 'd');

    assert_eq!(map.find(&5).value(), Some(&'a'));
    assert_ne!(map.find(&6).value(), Some(&'b'));
    assert!(map.find(&8) == map.end());
    assert!(map.find(&4) == map.end());

    *map.find_mut(&6).value_mut().unwrap() = 'b';
    assert_eq!(map[&6], 'b');
    assert!(map.find_mut(&8).get().is_err());
}

#[test]
fn front_and_back() {
    let mut map = Map::new();
    map.insert(2, 'b');
    map.insert(1, 'a');

    assert_eq!(*map.front(), 'a');
    assert_eq!(*map.back(), 'b');
    assert_eq!(map.begin().value(), Some(&'a'));

    let mut end = map.end();
    end.move_prev();
    assert_eq!(end.value(), Some(&'b'));

    *map.front_mut() = 'x';
    *map.back_mut() = 'y';
    assert_eq!(map.iter().collect::<Vec<_>>(), [(&1, &'x'), (&2, &'y')]);
}

#[test]
#[should_panic(expected = "front of an empty map")]
fn front_of_empty_map_panics() {
    let map: Map<i32, char> = Map::new();
    map.front();
}

#[test]
#[should_panic(expected = "back of an empty map")]
fn back_of_empty_map_panics() {
    let mut map: Map<i32, char> = Map::new();
    map.back_mut();
}

#[test]
#[should_panic(expected = "key not found")]
fn index_of_missing_key_panics() {
    let map = abc();
    map[&4];
}

#[test]
fn extend_and_collect() {
    let mut map: Map<_, _> = vec![(3, 'c'), (1, 'a')].into_iter().collect();
    map.extend(vec![(2, 'b'), (1, 'z')]);

    assert_eq!(map.into_iter().collect::<Vec<_>>(), [(1, 'z'), (2, 'b'), (3, 'c')]);
}

#[test]
fn degenerate_insertion_orders() {
    let ascending: Map<u32, ()> = (0..2048).map(|k| (k, ())).collect();
    let descending: Map<u32, ()> = (0..2048).rev().map(|k| (k, ())).collect();

    assert_eq!(ascending.len(), 2048);
    assert_eq!(ascending, descending);
    assert!(ascending.iter().map(|e| *e.0).eq(0..2048));
    assert!(descending.iter().rev().map(|e| *e.0).eq((0..2048).rev()));
}

#[test]
fn debug_lists_entries_in_order() {
    let map = abc();
    assert_eq!(format!("{:?}", map), "{1: 'a', 2: 'b', 3: 'c'}");

    let empty: Map<i32, char> = Map::default();
    assert_eq!(format!("{:?}", empty), "{}");
}

#[test]
fn cmp_is_exposed() {
    let map: Map<i32, (), _> = Map::with_cmp(natural::<i32>().rev());
    assert!(map.cmp().compares_gt(&1, &2));
}
