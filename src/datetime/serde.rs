// This is a part of persian-calendar.
// See README.md and LICENSE.txt for details.

use serde::{de, ser};

use super::PersianDateTime;
use crate::UtcOffset;

/// Serialize a `PersianDateTime` as the pair `(instant, offset)`.
///
/// The Persian date is not written; it is recomputed when deserializing.
impl ser::Serialize for PersianDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        ser::Serialize::serialize(&(self.instant, self.offset), serializer)
    }
}

impl<'de> de::Deserialize<'de> for PersianDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let (instant, offset) = <(i64, UtcOffset) as de::Deserialize>::deserialize(deserializer)?;
        Ok(PersianDateTime::from_instant_with_offset(instant, offset))
    }
}
