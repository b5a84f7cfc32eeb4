use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A parameter the API accepts either as one value or as a list.
///
/// Both shapes go over the wire as a single comma-joined string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StringOrList {
    One(String),
    Many(Vec<String>),
}

impl StringOrList {
    /// Blank list entries are dropped.
    pub fn to_wire(&self) -> String {
        match self {
            StringOrList::One(value) => value.clone(),
            StringOrList::Many(values) => values
                .iter()
                .filter(|v| !v.is_empty())
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    /// Splits a comma-separated single value into its entries.
    pub fn into_list(self) -> Vec<String> {
        let values: Vec<String> = match self {
            StringOrList::One(value) => value.split(',').map(|v| v.trim().to_string()).collect(),
            StringOrList::Many(values) => values,
        };
        values.into_iter().filter(|v| !v.is_empty()).collect()
    }

    pub fn is_empty(&self) -> bool {
        match self {
            StringOrList::One(value) => value.is_empty(),
            StringOrList::Many(values) => values.iter().all(String::is_empty),
        }
    }
}

impl Default for StringOrList {
    fn default() -> Self {
        StringOrList::Many(Vec::new())
    }
}

impl Serialize for StringOrList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

impl From<&str> for StringOrList {
    fn from(value: &str) -> Self {
        StringOrList::One(value.to_string())
    }
}

impl From<Vec<String>> for StringOrList {
    fn from(values: Vec<String>) -> Self {
        StringOrList::Many(values)
    }
}

/// `deserialize_with` for list fields that also take a comma-separated string.
pub(crate) fn string_or_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<String>, D::Error> {
    Ok(StringOrList::deserialize(deserializer)?.into_list())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Number(serde_json::Number),
}

/// `deserialize_with` for string fields a host may send as a number.
pub(crate) fn string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<String, D::Error> {
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Text(text) => text,
        StringOrNumber::Number(number) => number.to_string(),
    })
}

// skip_serializing_if predicates

pub(crate) fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

/// Chain id 0 counts as absent.
pub(crate) fn is_unset_chain(value: &Option<u64>) -> bool {
    value.map_or(true, |id| id == 0)
}

pub(crate) fn default_true() -> bool {
    true
}
