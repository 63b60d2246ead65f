use crate::error::Result;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// One account entry of an uploaded export.
///
/// Only the display fields are typed. A typed field that is missing, null
/// or of another JSON type reads as its default, and the raw value is kept
/// in `extra` under the same key. `reel` and every other key are carried
/// through untouched, so a stored dataset serializes back to the structure
/// it was parsed from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub profile_pic_url: String,
    pub is_private: bool,
    pub is_verified: bool,
    /// `Some(Value::Null)` for an explicit `"reel": null`.
    pub reel: Option<Value>,
    pub extra: Map<String, Value>,
}

pub type Dataset = Vec<Profile>;

pub fn parse_dataset(text: &str) -> Result<Dataset> {
    Ok(serde_json::from_str(text)?)
}

pub fn serialize_dataset(dataset: &[Profile]) -> Result<String> {
    Ok(serde_json::to_string(dataset)?)
}

impl<'de> Deserialize<'de> for Profile {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut fields = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self {
            id: take_string(&mut fields, "id"),
            username: take_string(&mut fields, "username"),
            full_name: take_string(&mut fields, "full_name"),
            profile_pic_url: take_string(&mut fields, "profile_pic_url"),
            is_private: take_bool(&mut fields, "is_private"),
            is_verified: take_bool(&mut fields, "is_verified"),
            reel: fields.remove("reel"),
            extra: fields,
        })
    }
}

impl Serialize for Profile {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        // A raw value kept in `extra` takes the place of its typed field.
        typed_entry(&mut map, &self.extra, "id", &self.id)?;
        typed_entry(&mut map, &self.extra, "username", &self.username)?;
        typed_entry(&mut map, &self.extra, "full_name", &self.full_name)?;
        typed_entry(&mut map, &self.extra, "profile_pic_url", &self.profile_pic_url)?;
        typed_entry(&mut map, &self.extra, "is_private", &self.is_private)?;
        typed_entry(&mut map, &self.extra, "is_verified", &self.is_verified)?;
        if let Some(reel) = &self.reel {
            map.serialize_entry("reel", reel)?;
        }
        for (key, value) in &self.extra {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

fn typed_entry<M, T>(
    map: &mut M,
    extra: &Map<String, Value>,
    key: &str,
    value: &T,
) -> std::result::Result<(), M::Error>
where
    M: SerializeMap,
    T: Serialize + ?Sized,
{
    if extra.contains_key(key) {
        return Ok(());
    }
    map.serialize_entry(key, value)
}

fn take_string(fields: &mut Map<String, Value>, key: &str) -> String {
    match fields.remove(key) {
        Some(Value::String(value)) => value,
        Some(raw) => {
            fields.insert(key.to_string(), raw);
            String::new()
        }
        None => String::new(),
    }
}

fn take_bool(fields: &mut Map<String, Value>, key: &str) -> bool {
    match fields.remove(key) {
        Some(Value::Bool(value)) => value,
        Some(raw) => {
            fields.insert(key.to_string(), raw);
            false
        }
        None => false,
    }
}
