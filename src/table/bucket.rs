use duplicate::duplicate_item;

use crate::contact::Contact;

/// Where a key lives in a bucket, if anywhere
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    /// The key is held by the contact at this chain position
    Occupied(usize),
    /// The key is not in the chain
    Vacant,
}

/// A single bucket: the chain of contacts whose keys share an index,
/// kept in insertion order
#[derive(Default)]
pub(crate) struct Bucket {
    chain: Vec<Contact>,
}

impl Bucket {
    /// Walks the chain once, reporting where the key is
    ///
    /// # Arguments
    ///
    /// `key`: The key to search for
    pub fn find(&self, key: &str) -> Slot {
        self.chain
            .iter()
            .position(|contact| contact.matches(key))
            .map_or(Slot::Vacant, Slot::Occupied)
    }

    /// Fetches the contact with the given key
    ///
    /// # Arguments
    ///
    /// `key`: The key to search for
    #[duplicate_item(
        get        iter        reference(ty);
        [get]      [iter]      [&ty];
        [get_mut]  [iter_mut]  [&mut ty];
    )]
    #[allow(clippy::needless_arbitrary_self_type)]
    pub fn get(self: reference([Self]), key: &str) -> Option<reference([Contact])> {
        self.chain.iter().find(|contact| contact.matches(key))
    }

    /// Returns the contact at a chain position found by `find`
    ///
    /// # Arguments
    ///
    /// `position`: The position within the chain
    pub fn at_mut(&mut self, position: usize) -> &mut Contact {
        &mut self.chain[position]
    }

    /// Appends a contact to the tail of the chain
    ///
    /// # Arguments
    ///
    /// `contact`: The contact to append. Its key must not already be present
    pub fn push(&mut self, contact: Contact) -> &mut Contact {
        let position = self.chain.len();
        self.chain.push(contact);
        &mut self.chain[position]
    }

    /// Returns the chain as a slice
    pub fn as_slice(&self) -> &[Contact] {
        &self.chain
    }

    /// Returns an iterator over the chain in insertion order
    #[duplicate_item(
        iter        Iter        reference(ty);
        [iter]      [Iter]      [&ty];
        [iter_mut]  [IterMut]   [&mut ty];
    )]
    #[allow(clippy::needless_arbitrary_self_type)]
    pub fn iter(self: reference([Self])) -> std::slice::Iter<'_, Contact> {
        self.chain.iter()
    }
}
