use std::fmt::{Display, Formatter};

/// A contact stored in the table. The name doubles as the key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    name: String,
    number: String,
}

impl Contact {
    /// Creates a contact from a name and a number
    ///
    /// # Arguments
    ///
    /// `name`: The contact's name, which is also its key
    ///
    /// `number`: The contact's phone number
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }

    /// Returns the name of the contact
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the phone number of the contact
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Replaces the phone number, returning the old one
    ///
    /// # Arguments
    ///
    /// `number`: The new phone number
    pub fn set_number(&mut self, number: impl Into<String>) -> String {
        std::mem::replace(&mut self.number, number.into())
    }

    /// Splits the contact into its name and number
    pub fn into_parts(self) -> (String, String) {
        (self.name, self.number)
    }

    /// Returns a mutable reference to the phone number
    pub(crate) fn number_mut(&mut self) -> &mut String {
        &mut self.number
    }

    /// Returns the name alongside a mutable reference to the number
    pub(crate) fn parts_mut(&mut self) -> (&str, &mut String) {
        (&self.name, &mut self.number)
    }

    /// Returns true if the probing key names this contact
    ///
    /// # Arguments
    ///
    /// `key`: The probing key
    pub(crate) fn matches(&self, key: &str) -> bool {
        self.name == key
    }
}

impl Display for Contact {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.number)
    }
}

#[cfg(test)]
mod test {
    use super::Contact;

    #[test]
    fn display() {
        let contact = Contact::new("John", "909-876-1234");
        assert_eq!(contact.to_string(), "John: 909-876-1234");
    }

    #[test]
    fn set_number() {
        let mut contact = Contact::new("Rebecca", "111-555-0002");
        assert_eq!(contact.set_number("999-444-9999"), "111-555-0002");
        assert_eq!(contact.name(), "Rebecca");
        assert_eq!(contact.number(), "999-444-9999");
    }

    #[test]
    fn matches() {
        let contact = Contact::new("Amy", "111-222-3333");
        assert!(contact.matches("Amy"));
        assert!(!contact.matches("May"));
        assert!(!contact.matches("amy"));
    }

    #[test]
    fn parts_mut() {
        let mut contact = Contact::new("John", "909-876-1234");
        let (name, number) = contact.parts_mut();
        assert_eq!(name, "John");
        number.push_str(" ext. 2");
        assert_eq!(contact.number(), "909-876-1234 ext. 2");
    }

    #[test]
    fn into_parts() {
        let contact = Contact::new("May", "222-333-1111");
        assert_eq!(
            contact.into_parts(),
            ("May".to_owned(), "222-333-1111".to_owned())
        );
    }
}
