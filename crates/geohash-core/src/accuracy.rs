//! Named accuracy levels for geohash lengths.
//!
//! | Length | Cell width | Cell height |
//! |---|---|---|
//! | 1 | ≤ 5,000km | 5,000km |
//! | 2 | ≤ 1,250km | 625km |
//! | 3 | ≤ 156km | 156km |
//! | 4 | ≤ 39.1km | 19.5km |
//! | 5 | ≤ 4.89km | 4.89km |
//! | 6 | ≤ 1.22km | 0.61km |
//! | 7 | ≤ 153m | 153m |
//! | 8 | ≤ 38.2m | 19.1m |
//! | 9 | ≤ 4.77m | 4.77m |
//! | 10 | ≤ 1.19m | 0.596m |
//! | 11 | ≤ 149mm | 149mm |
//! | 12 | ≤ 37.2mm | 18.6mm |

/// A rough cell size, mapped to a geohash length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Accuracy {
    /// ≤ 5,000km × 5,000km
    About5000km,
    /// ≤ 1,250km × 625km
    About1000km,
    /// ≤ 156km × 156km
    About150km,
    /// ≤ 39.1km × 19.5km
    About30km,
    /// ≤ 4.89km × 4.89km
    About5km,
    /// ≤ 1.22km × 0.61km
    About1km,
    /// ≤ 153m × 153m
    About150m,
    /// ≤ 38.2m × 19.1m
    About30m,
    /// ≤ 4.77m × 4.77m
    About5m,
    /// ≤ 1.19m × 0.596m
    About1m,
    /// ≤ 149mm × 149mm
    About1dm,
    /// ≤ 37.2mm × 18.6mm, the finest level
    #[default]
    About3cm,
}

impl Accuracy {
    /// All levels, coarsest first.
    pub const ALL: [Accuracy; 12] = [
        Accuracy::About5000km,
        Accuracy::About1000km,
        Accuracy::About150km,
        Accuracy::About30km,
        Accuracy::About5km,
        Accuracy::About1km,
        Accuracy::About150m,
        Accuracy::About30m,
        Accuracy::About5m,
        Accuracy::About1m,
        Accuracy::About1dm,
        Accuracy::About3cm,
    ];

    /// Geohash length for this level (1..=12).
    #[inline]
    pub const fn length(self) -> usize {
        self as usize + 1
    }

    /// The level for a geohash length, if it is in `1..=12`.
    pub fn from_length(length: usize) -> Option<Accuracy> {
        length
            .checked_sub(1)
            .and_then(|i| Accuracy::ALL.get(i))
            .copied()
    }

    /// Truncates `geohash` to this level. Shorter hashes are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use geohash_core::Accuracy;
    /// assert_eq!(Accuracy::About150km.truncate("9q9hr5udfr"), "9q9");
    /// assert_eq!(Accuracy::About1km.truncate("9q9hr"), "9q9hr");
    /// ```
    pub fn truncate(self, geohash: &str) -> &str {
        match geohash.char_indices().nth(self.length()) {
            Some((end, _)) => &geohash[..end],
            None => geohash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_HASH_LENGTH;

    const HASH: &str = "9q9hr5udfr";

    #[test]
    fn test_lengths() {
        assert_eq!(Accuracy::About5000km.length(), 1);
        assert_eq!(Accuracy::About5km.length(), 5);
        assert_eq!(Accuracy::About3cm.length(), MAX_HASH_LENGTH);
        for (i, a) in Accuracy::ALL.iter().enumerate() {
            assert_eq!(a.length(), i + 1);
        }
    }

    #[test]
    fn test_from_length() {
        assert_eq!(Accuracy::from_length(0), None);
        assert_eq!(Accuracy::from_length(3), Some(Accuracy::About150km));
        assert_eq!(Accuracy::from_length(12), Some(Accuracy::About3cm));
        assert_eq!(Accuracy::from_length(13), None);
    }

    #[test]
    fn test_truncates_when_longer() {
        assert_eq!(Accuracy::About150km.truncate(HASH), "9q9");
        assert_eq!(Accuracy::About5km.truncate(HASH), "9q9hr");
        assert_eq!(Accuracy::About5m.truncate(HASH), "9q9hr5udf");
    }

    #[test]
    fn test_truncate_keeps_shorter() {
        assert_eq!(Accuracy::About5km.truncate("9q9hr"), "9q9hr");
        assert_eq!(Accuracy::About1km.truncate("9q9hr"), "9q9hr");
        assert_eq!(Accuracy::About3cm.truncate(""), "");
    }

    #[test]
    fn test_default_is_finest() {
        assert_eq!(Accuracy::default(), Accuracy::About3cm);
    }
}
