use std::cmp::Ordering;

/// A three-way priority comparison between two queued items.
///
/// `Ordering::Greater` means `a` has strictly greater priority than `b` and belongs
/// nearer the root of the heap, `Ordering::Less` means `b` does, and
/// `Ordering::Equal` means both share the same priority.
///
/// The comparator must describe a total order for the heap to behave sensibly. An
/// inconsistent comparator never causes a panic, only an unspecified pop order.
pub trait Comparator<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Pops the largest item first, according to its `Ord` implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct MaxFirst;

impl<T: Ord> Comparator<T> for MaxFirst {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Pops the smallest item first, according to its `Ord` implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinFirst;

impl<T: Ord> Comparator<T> for MinFirst {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}
