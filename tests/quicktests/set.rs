use treeset::OrderedSet;

use std::collections::HashSet;

use quickcheck::quickcheck;

fn build(xs: &[i8]) -> OrderedSet<i8> {
    let mut set = OrderedSet::new();
    for x in xs {
        set.insert(*x);
    }
    set
}

quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let set = build(&xs);

        xs.iter().all(|x| set.contains(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let set = build(&xs);
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !set.contains(x))
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut set = build(&xs);
        for delete in &deletes {
            set.remove(delete);
        }

        let mut still_present = xs;
        for delete in &deletes {
            // We may have inserted the same value multiple times - delete each one.
            while let Some(pos) = still_present.iter().position(|x| x == delete) {
                still_present.swap_remove(pos);
            }
        }

        deletes.iter().all(|x| !set.contains(x))
            && still_present.iter().all(|x| set.contains(x))
            && set.validate().is_ok()
    }

    fn iterates_strictly_ascending(xs: Vec<i8>) -> bool {
        let set = build(&xs);
        let elements: Vec<_> = set.iter().copied().collect();

        elements.windows(2).all(|w| w[0] < w[1])
    }

    fn len_matches_iteration(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut set = build(&xs);
        for delete in &deletes {
            set.remove(delete);
        }

        set.len() == set.iter().count() && set.len() == set.clone().into_iter().count()
    }

    fn duplicate_insert_is_rejected(xs: Vec<i8>, x: i8) -> bool {
        let mut set = build(&xs);
        let before = set.len();
        let first = set.insert(x);
        let second = set.insert(x);

        !second && set.len() == before + first as usize
    }

    fn insert_then_remove_round_trip(xs: Vec<i8>, x: i8) -> bool {
        let mut set = build(&xs);
        set.insert(x);
        let was_present = set.contains(&x);
        set.remove(&x);

        was_present && !set.contains(&x)
    }

    fn disjointness_is_symmetric(xs: Vec<i8>, ys: Vec<i8>) -> bool {
        let a = build(&xs);
        let b = build(&ys);
        let overlap = xs.iter().any(|x| ys.contains(x));

        a.is_disjoint(&b) == b.is_disjoint(&a) && a.is_disjoint(&b) == !overlap
    }

    fn first_and_last_are_extremes(xs: Vec<i8>) -> bool {
        let set = build(&xs);

        set.first().ok() == xs.iter().min() && set.last().ok() == xs.iter().max()
    }
}
