use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// an ordered set in a quicktest.
#[derive(Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the T into the set
    Insert(T),
    /// Remove the T from the set
    Remove(T),
    /// Remove the smallest element
    PopFirst,
    /// Remove the largest element
    PopLast,
    /// Compare iterators
    Iter,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation. Inserts are
    /// weighted up so the sets actually grow.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 1, 2, 3, 4]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            2 => Op::PopFirst,
            3 => Op::PopLast,
            4 => Op::Iter,
            _ => unreachable!(),
        }
    }
}
