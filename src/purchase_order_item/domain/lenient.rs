//! OData v2 serializes `Edm.Int64` as a JSON string, while other producers
//! emit plain numbers. These helpers accept both.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

impl IntOrString {
    fn into_i64<E: serde::de::Error>(self) -> Result<i64, E> {
        match self {
            IntOrString::Int(value) => Ok(value),
            IntOrString::Str(value) => value
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid integer: {:?}", value))),
        }
    }
}

pub(crate) fn i64_from_int_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    IntOrString::deserialize(deserializer)?.into_i64()
}

pub(crate) fn opt_i64_from_int_or_string<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<IntOrString>::deserialize(deserializer)?
        .map(IntOrString::into_i64)
        .transpose()
}

pub(crate) fn opt_u64_from_int_or_string<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match opt_i64_from_int_or_string(deserializer)? {
        Some(value) => u64::try_from(value)
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("negative count: {}", value))),
        None => Ok(None),
    }
}
