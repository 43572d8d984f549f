/// Defines a hash function which maps a key to an unbounded
/// hash value. Tables reduce it to a bucket index themselves.
pub trait Hash<T: ?Sized> {
    fn hash(val: &T) -> usize;
}

/// Sums the code points of every character in a string.
///
/// # Notes
///
/// Keys made of the same characters in any order (anagrams)
/// always hash to the same value, and so always share a bucket.
pub struct CodePointSum;

impl Hash<str> for CodePointSum {
    fn hash(val: &str) -> usize {
        val.chars().fold(0usize, |sum, c| sum.wrapping_add(c as usize))
    }
}

#[cfg(test)]
mod test {
    use super::{CodePointSum, Hash};

    #[test]
    fn test_str() {
        assert_eq!(CodePointSum::hash(""), 0);
        assert_eq!(CodePointSum::hash("A"), 65);
        assert_eq!(CodePointSum::hash("John"), 399);
        assert_eq!(CodePointSum::hash("Rebecca"), 677);
    }

    #[test]
    fn anagrams_collide() {
        assert_eq!(CodePointSum::hash("Amy"), 295);
        assert_eq!(CodePointSum::hash("Amy"), CodePointSum::hash("May"));
        assert_eq!(CodePointSum::hash("listen"), CodePointSum::hash("silent"));
    }

    #[test]
    fn code_points_not_bytes() {
        // 'é' is U+00E9 but two bytes in UTF-8
        assert_eq!(CodePointSum::hash("é"), 0xE9);
        assert_eq!(CodePointSum::hash("\u{1F600}"), 0x1F600);
    }

    #[test]
    fn long_key() {
        let key = "\u{10FFFF}".repeat(200_000);
        assert_eq!(
            CodePointSum::hash(&key),
            200_000usize.wrapping_mul(0x10FFFF)
        );
    }

    #[test]
    fn deterministic() {
        let key = "The big brown fox jumped over the lazy dog";
        assert_eq!(CodePointSum::hash(key), CodePointSum::hash(key));
    }
}
