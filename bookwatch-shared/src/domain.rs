use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Booking identifier. The wire carries it either as a JSON string or as an
/// integer; both normalize to the same text so `1` and `"1"` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Ucn(pub String);

impl fmt::Display for Ucn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for Ucn {
    fn from(value: &str) -> Self {
        Ucn(value.to_string())
    }
}

impl From<u64> for Ucn {
    fn from(value: u64) -> Self {
        Ucn(value.to_string())
    }
}

impl FromStr for Ucn {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Ucn(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Ucn {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Ucn(s),
            Raw::Signed(n) => Ucn(n.to_string()),
            Raw::Unsigned(n) => Ucn(n.to_string()),
        })
    }
}

/// One booking as served by `GET /poll`. Missing or null text fields read
/// as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub ucn: Ucn,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub facility: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub book_date: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Record {
    /// Human readable line used for notifications and alerts.
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} booked at {} at {} (UCN#: {})",
            self.name, self.facility, self.book_date, self.ucn
        )
    }
}
