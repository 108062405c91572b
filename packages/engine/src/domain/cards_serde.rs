//! Serialization and deserialization for card types.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::{Aspect, Card};

// Aspect serde (upper-case names, stable wire identifiers)
impl Serialize for Aspect {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match self {
            Aspect::Blades => "BLADES",
            Aspect::Chalices => "CHALICES",
            Aspect::Veils => "VEILS",
        };
        serializer.serialize_str(s)
    }
}

impl<'de> Deserialize<'de> for Aspect {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "BLADES" => Ok(Aspect::Blades),
            "CHALICES" => Ok(Aspect::Chalices),
            "VEILS" => Ok(Aspect::Veils),
            _ => Err(serde::de::Error::custom(format!("Invalid aspect: {s}"))),
        }
    }
}

// Card serde (compact token format like "7B", "11V")
impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Card>()
            .map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}
