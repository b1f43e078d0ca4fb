use treeset::{natural, Compare, OrderedSet};

use std::cmp::Ordering;

use quickcheck::quickcheck;

fn case_insensitive(a: &String, b: &String) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[test]
fn equality_comes_from_the_comparator() {
    let mut set = OrderedSet::with_comparator(case_insensitive);

    assert!(set.insert("Banana".to_string()));
    assert!(set.insert("apple".to_string()));
    assert!(!set.insert("BANANA".to_string()));

    assert_eq!(set.len(), 2);
    assert_eq!(set.first().map(String::as_str), Ok("apple"));
    assert_eq!(set.last().map(String::as_str), Ok("Banana"));
    assert_eq!(set.to_string(), "OrderedSet([apple,Banana])");
}

#[test]
fn remove_matches_by_comparator() {
    let mut set = OrderedSet::with_comparator(case_insensitive);
    set.insert("Cherry".to_string());

    assert_eq!(set.take(&"CHERRY".to_string()), Some("Cherry".to_string()));
    assert!(set.is_empty());
}

#[test]
fn keys_ordered_by_field() {
    #[derive(Debug, PartialEq)]
    struct Player {
        name: &'static str,
        score: u32,
    }

    let by_score = |a: &Player, b: &Player| a.score.cmp(&b.score);
    let mut set = OrderedSet::with_comparator(by_score);
    set.insert(Player { name: "ann", score: 30 });
    set.insert(Player { name: "bob", score: 10 });
    set.insert(Player { name: "cat", score: 20 });

    let names: Vec<_> = set.iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["bob", "cat", "ann"]);
}

quickcheck! {
    fn reversed_order_iterates_descending(xs: Vec<i16>) -> bool {
        let mut set = OrderedSet::with_comparator(natural::<i16>().rev());
        set.extend(xs.iter().copied());

        let mut expected = xs;
        expected.sort_unstable_by(|a, b| b.cmp(a));
        expected.dedup();

        set.validate().is_ok() && set.into_iter().eq(expected)
    }

    fn modular_comparator_dedups_by_residue(xs: Vec<u8>) -> bool {
        let mut set = OrderedSet::with_comparator(|a: &u8, b: &u8| (a % 10).cmp(&(b % 10)));
        set.extend(xs.iter().copied());

        let mut residues: Vec<_> = xs.iter().map(|x| x % 10).collect();
        residues.sort_unstable();
        residues.dedup();

        set.validate().is_ok() && set.iter().map(|x| x % 10).eq(residues)
    }
}
