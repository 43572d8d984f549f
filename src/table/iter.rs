use crate::contact::Contact;
use crate::table::bucket::Bucket;

/// An iterator that produces the contacts of a table,
/// bucket by bucket, each bucket in insertion order
#[derive(Clone)]
pub struct Iter<'a> {
    bucket_iter: std::slice::Iter<'a, Bucket>,
    chain_iter: std::slice::Iter<'a, Contact>,
}

impl<'a> Iter<'a> {
    /// Creates a new table iterator from the table's buckets
    ///
    /// # Arguments
    ///
    /// `buckets`: The slice of buckets owned by the table
    pub(crate) fn new(buckets: &'a [Bucket]) -> Self {
        Self {
            bucket_iter: buckets.iter(),
            chain_iter: Default::default(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Contact;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(contact) = self.chain_iter.next() {
                return Some(contact);
            }
            // move on to the next bucket, stopping once they run out
            self.chain_iter = self.bucket_iter.next()?.iter();
        }
    }
}

/// An iterator that produces each contact's name alongside
/// its mutable number, in the same order as `Iter`. Names stay
/// read-only so every contact remains in the bucket its key hashes to
pub struct IterMut<'a> {
    bucket_iter: std::slice::IterMut<'a, Bucket>,
    chain_iter: std::slice::IterMut<'a, Contact>,
}

impl<'a> IterMut<'a> {
    /// Creates a new mutable table iterator from the table's buckets
    ///
    /// # Arguments
    ///
    /// `buckets`: The slice of buckets owned by the table
    pub(crate) fn new(buckets: &'a mut [Bucket]) -> Self {
        Self {
            bucket_iter: buckets.iter_mut(),
            chain_iter: Default::default(),
        }
    }
}

impl<'a> Iterator for IterMut<'a> {
    type Item = (&'a str, &'a mut String);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(contact) = self.chain_iter.next() {
                return Some(contact.parts_mut());
            }
            self.chain_iter = self.bucket_iter.next()?.iter_mut();
        }
    }
}

/// An iterator over every bucket of a table, empty or not,
/// yielding `(index, chain)` pairs in index order
#[derive(Clone)]
pub struct Buckets<'a> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, Bucket>>,
}

impl<'a> Buckets<'a> {
    pub(crate) fn new(buckets: &'a [Bucket]) -> Self {
        Self {
            inner: buckets.iter().enumerate(),
        }
    }
}

impl<'a> Iterator for Buckets<'a> {
    type Item = (usize, &'a [Contact]);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(index, bucket)| (index, bucket.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Buckets<'_> {}

#[cfg(test)]
mod test {
    use super::{Buckets, Iter, IterMut};
    use crate::contact::Contact;
    use crate::table::bucket::Bucket;

    fn buckets() -> Vec<Bucket> {
        let mut buckets: Vec<Bucket> = (0..4).map(|_| Bucket::default()).collect();
        buckets[1].push(Contact::new("Amy", "111-222-3333"));
        buckets[1].push(Contact::new("May", "222-333-1111"));
        buckets[3].push(Contact::new("John", "909-876-1234"));
        buckets
    }

    #[test]
    fn empty_iter() {
        let buckets: Vec<Bucket> = (0..4).map(|_| Bucket::default()).collect();
        assert!(Iter::new(&buckets).next().is_none());
    }

    #[test]
    fn iter() {
        let buckets = buckets();
        itertools::assert_equal(Iter::new(&buckets).map(Contact::name), ["Amy", "May", "John"]);
    }

    #[test]
    fn cloned() {
        let buckets = buckets();
        let mut iter = Iter::new(&buckets);
        assert_eq!(iter.next().map(Contact::name), Some("Amy"));
        let cloned = iter.clone();
        itertools::assert_equal(iter, cloned);
    }

    #[test]
    fn iter_mut() {
        let mut buckets = buckets();
        IterMut::new(&mut buckets).for_each(|(name, number)| {
            if name == "May" {
                *number = "000-000-0000".to_owned();
            }
        });
        itertools::assert_equal(
            Iter::new(&buckets).map(Contact::to_string),
            [
                "Amy: 111-222-3333",
                "May: 000-000-0000",
                "John: 909-876-1234",
            ],
        );
    }

    #[test]
    fn empty_iter_mut() {
        let mut buckets: Vec<Bucket> = (0..4).map(|_| Bucket::default()).collect();
        assert!(IterMut::new(&mut buckets).next().is_none());
    }

    #[test]
    fn buckets_include_empty() {
        let buckets = buckets();
        let iter = Buckets::new(&buckets);
        assert_eq!(iter.len(), 4);
        itertools::assert_equal(
            iter.map(|(index, chain)| (index, chain.len())),
            [(0, 0), (1, 2), (2, 0), (3, 1)],
        );
    }
}
