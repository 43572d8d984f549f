use std::fmt::{Debug, Display, Formatter};
use std::io::{self, Write};
use std::marker::PhantomData;
use std::num::NonZeroUsize;

use itertools::Itertools;
use log::{debug, trace, warn};

use crate::{
    contact::Contact,
    error::{Result, TableError},
    hash::{CodePointSum, Hash},
};

use self::{
    bucket::{Bucket, Slot},
    entry::{Entry, OccupiedEntry, VacantEntry},
    iter::{Buckets, Iter, IterMut},
};

mod bucket;
pub mod entry;
pub mod iter;

/// The number of buckets a default table is built with
pub const DEFAULT_BUCKET_COUNT: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(bucket_count) => bucket_count,
    None => unreachable!(),
};

/// A hash table of contacts keyed by name, with a bucket count
/// fixed at construction. Keys that land in the same bucket are
/// chained in insertion order.
pub struct ContactTable<H: Hash<str> = CodePointSum> {
    buckets: Box<[Bucket]>,
    element_count: usize,
    _phantom_hash: PhantomData<fn() -> H>,
}

impl ContactTable<CodePointSum> {
    /// Creates an empty table hashing keys by the sum of their code points
    ///
    /// # Arguments
    ///
    /// `bucket_count`: The number of buckets. Must be at least 1
    pub fn new(bucket_count: usize) -> Result<Self> {
        Self::with_hash(bucket_count)
    }

    /// Creates an empty table with a bucket count that is known to be valid
    ///
    /// # Arguments
    ///
    /// `bucket_count`: The number of buckets
    pub fn with_bucket_count(bucket_count: NonZeroUsize) -> Self {
        Self::with_valid_bucket_count(bucket_count)
    }

    /// Creates a table and inserts every contact in order. A contact
    /// whose name was already inserted updates the earlier one.
    ///
    /// # Arguments
    ///
    /// `bucket_count`: The number of buckets. Must be at least 1
    ///
    /// `contacts`: The contacts to insert
    pub fn from_contacts<I: IntoIterator<Item = Contact>>(
        bucket_count: usize,
        contacts: I,
    ) -> Result<Self> {
        let mut table = Self::new(bucket_count)?;
        table.extend(contacts);
        Ok(table)
    }
}

impl<H: Hash<str>> ContactTable<H> {
    /// Creates an empty table which hashes keys with `H`
    ///
    /// # Arguments
    ///
    /// `bucket_count`: The number of buckets. Must be at least 1
    pub fn with_hash(bucket_count: usize) -> Result<Self> {
        match NonZeroUsize::new(bucket_count) {
            Some(bucket_count) => Ok(Self::with_valid_bucket_count(bucket_count)),
            None => {
                warn!("rejecting contact table with {bucket_count} buckets");
                Err(TableError::InvalidConfiguration { bucket_count })
            }
        }
    }

    fn with_valid_bucket_count(bucket_count: NonZeroUsize) -> Self {
        debug!("creating contact table with {bucket_count} buckets");
        Self {
            buckets: (0..bucket_count.get()).map(|_| Bucket::default()).collect(),
            element_count: 0,
            _phantom_hash: PhantomData,
        }
    }

    /// Returns the chain of the bucket at `index`, in insertion order,
    /// or `None` if the index is out of range
    ///
    /// # Arguments
    ///
    /// `index`: The bucket index
    pub fn bucket(&self, index: usize) -> Option<&[Contact]> {
        self.buckets.get(index).map(Bucket::as_slice)
    }

    /// Returns the number of buckets, which never changes
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns an iterator over every bucket and its chain
    pub fn buckets(&self) -> Buckets<'_> {
        Buckets::new(&self.buckets)
    }

    /// Checks if the table contains the given key
    ///
    /// # Arguments
    ///
    /// `key`: The key to search for
    pub fn contains_key(&self, key: &str) -> bool {
        self.search(key).is_some()
    }

    /// Fetches the entry for a key for in-place manipulation
    ///
    /// # Arguments
    ///
    /// `key`: The key to look up
    pub fn entry(&mut self, key: impl Into<String>) -> Entry<'_> {
        let key = key.into();
        let index = self.hash(&key);
        let bucket = &mut self.buckets[index];
        match bucket.find(&key) {
            Slot::Occupied(position) => Entry::Occupied(OccupiedEntry {
                contact: bucket.at_mut(position),
            }),
            Slot::Vacant => Entry::Vacant(VacantEntry {
                bucket,
                element_count: &mut self.element_count,
                key,
            }),
        }
    }

    /// Returns the index of the bucket a key belongs to
    ///
    /// # Arguments
    ///
    /// `key`: The key
    pub fn hash(&self, key: &str) -> usize {
        H::hash(key) % self.buckets.len()
    }

    /// Inserts a contact, or updates the number of the contact
    /// already stored under `key` without moving it in its chain.
    /// Returns the replaced number if there was one
    ///
    /// # Arguments
    ///
    /// `key`: The name of the contact
    ///
    /// `number`: The phone number to store
    pub fn insert(&mut self, key: impl Into<String>, number: impl Into<String>) -> Option<String> {
        match self.entry(key) {
            Entry::Occupied(mut entry) => {
                trace!("updating contact {}", entry.get().name());
                Some(entry.insert(number))
            }
            Entry::Vacant(entry) => {
                trace!("appending contact {}", entry.key());
                entry.insert(number);
                None
            }
        }
    }

    /// Returns true if the table holds no contacts
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the table's contacts
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.buckets)
    }

    /// Returns an iterator over the table's contacts, where the
    /// numbers are mutable
    pub fn iter_mut(&mut self) -> IterMut<'_> {
        IterMut::new(&mut self.buckets)
    }

    /// Returns the number of contacts in the table
    pub fn len(&self) -> usize {
        self.element_count
    }

    /// Prints every bucket of the table to standard output
    pub fn print_table(&self) -> Result<()> {
        let stdout = io::stdout();
        self.write_table(&mut stdout.lock())?;
        Ok(())
    }

    /// Fetches the contact stored under a key
    ///
    /// # Arguments
    ///
    /// `key`: The key to search for
    pub fn search(&self, key: &str) -> Option<&Contact> {
        let found = self.buckets[self.hash(key)].get(key);
        trace!("search for {key}: {}", if found.is_some() { "hit" } else { "miss" });
        found
    }

    /// Fetches the number of the contact stored under a key
    ///
    /// # Arguments
    ///
    /// `key`: The key to search for
    pub fn search_mut(&mut self, key: &str) -> Option<&mut String> {
        let index = self.hash(key);
        self.buckets[index].get_mut(key).map(Contact::number_mut)
    }

    /// Writes every bucket of the table, one line per bucket
    ///
    /// # Arguments
    ///
    /// `writer`: The destination of the rendering
    pub fn write_table<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{self}")
    }
}

impl<H: Hash<str>> Display for ContactTable<H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, chain) in self.buckets() {
            if chain.is_empty() {
                writeln!(f, "Index {index}: Empty")?;
            } else {
                writeln!(
                    f,
                    "Index {index}: {}",
                    chain
                        .iter()
                        .format_with(" ", |contact, f| f(&format_args!("- {contact}")))
                )?;
            }
        }
        Ok(())
    }
}

impl<H: Hash<str>> Debug for ContactTable<H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.iter()
                .map(|contact| format!("{:?}: {:?}", contact.name(), contact.number()))
                .join(",")
        )
    }
}

impl Default for ContactTable<CodePointSum> {
    fn default() -> Self {
        Self::with_valid_bucket_count(DEFAULT_BUCKET_COUNT)
    }
}

impl<H: Hash<str>> Extend<Contact> for ContactTable<H> {
    fn extend<T: IntoIterator<Item = Contact>>(&mut self, iter: T) {
        iter.into_iter().for_each(|contact| {
            let (name, number) = contact.into_parts();
            self.insert(name, number);
        });
    }
}

impl FromIterator<Contact> for ContactTable<CodePointSum> {
    fn from_iter<T: IntoIterator<Item = Contact>>(iter: T) -> Self {
        let mut table = Self::default();
        table.extend(iter);
        table
    }
}

impl<'a, H: Hash<str>> IntoIterator for &'a ContactTable<H> {
    type Item = &'a Contact;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, H: Hash<str>> IntoIterator for &'a mut ContactTable<H> {
    type Item = (&'a str, &'a mut String);
    type IntoIter = IterMut<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
