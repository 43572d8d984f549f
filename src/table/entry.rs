use crate::contact::Contact;
use crate::table::bucket::Bucket;

/// A contact already present for the key.
pub struct OccupiedEntry<'a> {
    pub(crate) contact: &'a mut Contact,
}

/// A vacant entry - one that has not been inserted yet.
pub struct VacantEntry<'a> {
    pub(crate) bucket: &'a mut Bucket,
    pub(crate) element_count: &'a mut usize,
    pub(crate) key: String,
}

/// An entry in a contact table.
pub enum Entry<'a> {
    /// There was a contact found already for the key.
    Occupied(OccupiedEntry<'a>),
    /// There was not a contact already present for the key.
    Vacant(VacantEntry<'a>),
}

impl<'a> OccupiedEntry<'a> {
    /// Returns the contact held by the entry
    pub fn get(&self) -> &Contact {
        &*self.contact
    }

    /// Replaces the contact's number in place, returning the old one
    ///
    /// # Arguments
    ///
    /// `number`: The new phone number
    pub fn insert(&mut self, number: impl Into<String>) -> String {
        self.contact.set_number(number)
    }

    /// Converts the entry into a reference to the contact's number
    /// that lives as long as the table borrow
    pub fn into_mut(self) -> &'a mut String {
        self.contact.number_mut()
    }
}

impl<'a> VacantEntry<'a> {
    /// Returns the key that would be used on insertion
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Appends a new contact to the tail of the bucket's chain
    ///
    /// # Arguments
    ///
    /// `number`: The phone number of the new contact
    pub fn insert(self, number: impl Into<String>) -> &'a mut String {
        *self.element_count += 1;
        self.bucket
            .push(Contact::new(self.key, number))
            .number_mut()
    }
}

impl<'a> Entry<'a> {
    /// Returns the key of the entry
    pub fn key(&self) -> &str {
        match self {
            Self::Occupied(entry) => entry.get().name(),
            Self::Vacant(entry) => entry.key(),
        }
    }

    /// Provides in-place mutable access to the number.
    ///
    /// # Arguments
    ///
    /// `f`: A function taking a mutable reference to the number.
    pub fn and_modify<F: FnOnce(&mut String)>(mut self, f: F) -> Self {
        if let Self::Occupied(occupied) = &mut self {
            f(occupied.contact.number_mut());
        }

        self
    }

    /// Fetches the number stored in the entry, or inserts a contact with a default number.
    ///
    /// # Arguments
    ///
    /// `default`: The default number.
    pub fn or_insert(self, default: impl Into<String>) -> &'a mut String {
        self.or_insert_with(|| default)
    }

    /// Fetches the number stored in the entry, or inserts a contact with a default number.
    ///
    /// # Arguments
    ///
    /// `default`: A function producing a default number.
    pub fn or_insert_with<S: Into<String>, F: FnOnce() -> S>(self, default: F) -> &'a mut String {
        match self {
            Self::Occupied(entry) => entry.into_mut(),
            Self::Vacant(entry) => entry.insert(default()),
        }
    }
}
