use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Strongly typed screen identity backed by ULID.
///
/// Every screen receives one of these at construction and keeps it for its
/// whole lifetime. The presenter returns it from `present`/`push`, and the
/// pop family accepts it as a target, so callers can refer to live screens
/// without holding a reference into the navigation stack.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct ScreenId(pub ulid::Ulid);

impl ScreenId {
    pub fn new() -> Self {
        Self(ulid::Ulid::new())
    }

    pub fn from_ulid(id: ulid::Ulid) -> Self {
        Self(id)
    }
}

impl Default for ScreenId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ScreenId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ScreenId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = ulid::Ulid::from_string(s)?;
        Ok(ScreenId(id))
    }
}

impl Serialize for ScreenId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ScreenId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse::<ScreenId>()
            .map_err(|_| serde::de::Error::custom("invalid screen id"))
    }
}

/// Correlation identifier for a single navigation event.
///
/// Minted at the top of each resolution or presentation pipeline run and
/// attached to every diagnostic that run emits, so the logs for one URL can
/// be followed end to end.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct NavigationId(pub ulid::Ulid);

impl NavigationId {
    pub fn new() -> Self {
        Self(ulid::Ulid::new())
    }

    pub fn from_ulid(id: ulid::Ulid) -> Self {
        Self(id)
    }
}

impl Default for NavigationId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for NavigationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NavigationId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = ulid::Ulid::from_string(s)?;
        Ok(NavigationId(id))
    }
}

impl Serialize for NavigationId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for NavigationId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse::<NavigationId>()
            .map_err(|_| serde::de::Error::custom("invalid navigation id"))
    }
}
