// This is a part of persian-calendar.
// See README.md and LICENSE.txt for details.

use core::fmt;
use serde::{de, ser};

use super::PersianDate;

/// Serialize a `PersianDate` as its `YYYY/MM/DD` string.
impl ser::Serialize for PersianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

struct PersianDateVisitor;

impl<'de> de::Visitor<'de> for PersianDateVisitor {
    type Value = PersianDate;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a formatted persian date string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        value.parse().map_err(E::custom)
    }
}

impl<'de> de::Deserialize<'de> for PersianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(PersianDateVisitor)
    }
}
