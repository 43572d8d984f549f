pub mod contact;
pub mod error;
pub mod hash;
pub mod table;

pub use contact::Contact;
pub use error::{Result, TableError};
pub use hash::{CodePointSum, Hash};
pub use table::{ContactTable, DEFAULT_BUCKET_COUNT};
