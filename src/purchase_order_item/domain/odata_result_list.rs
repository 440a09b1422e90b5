use super::lenient::opt_u64_from_int_or_string;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Serialized entity handed back to the hosting framework.
pub type EntityMap = Map<String, Value>;

/// One page of an entity set read, with OData v2 paging metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ODataResultList<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(
        rename = "__count",
        default,
        deserialize_with = "opt_u64_from_int_or_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub count: Option<u64>,
    #[serde(rename = "__next", default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl<T> Default for ODataResultList<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> ODataResultList<T> {
    pub fn new(results: Vec<T>) -> Self {
        Self {
            results,
            count: None,
            next: None,
        }
    }

    pub fn with_count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Converts every result, keeping count and next link.
    pub fn try_map<U, F>(self, f: F) -> Result<ODataResultList<U>>
    where
        F: FnMut(T) -> Result<U>,
    {
        let results = self.results.into_iter().map(f).collect::<Result<Vec<U>>>()?;
        Ok(ODataResultList {
            results,
            count: self.count,
            next: self.next,
        })
    }
}
