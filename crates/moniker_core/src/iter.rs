//! Iterators over the payload of a sum value.
//!
//! Each of the core types views its payload as a sequence of zero or one
//! elements. [`Optional`](crate::Optional) and
//! [`Fallible`](crate::Fallible) yield their present or successful value;
//! [`Disjoint`](crate::Disjoint) yields its second alternative. The same
//! iterator type serves all three.

/// Iterator over at most one owned element.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    item: Option<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(item: Option<T>) -> Self {
        IntoIter { item }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.item.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.item.is_some());
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.item.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> std::iter::FusedIterator for IntoIter<T> {}

/// Iterator over at most one borrowed element.
pub type Iter<'a, T> = IntoIter<&'a T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yields_the_element_once() {
        let mut iter = IntoIter::new(Some(7));
        assert_eq!(iter.size_hint(), (1, Some(1)));
        assert_eq!(iter.next(), Some(7));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_empty_stays_empty() {
        let mut iter = IntoIter::<i32>::new(None);
        assert_eq!(iter.size_hint(), (0, Some(0)));
        assert_eq!(iter.next(), None);
    }
}
