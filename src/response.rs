//! Standard response envelope: every success body is a single-key object naming the resource.

use axum::{http::StatusCode, Json};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// `{ <key>: <data> }`, e.g. `{ "article": {...} }` or `{ "topics": [...] }`.
pub struct Envelope<T> {
    pub key: &'static str,
    pub data: T,
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, &self.data)?;
        map.end()
    }
}

pub fn success_ok<T: Serialize>(key: &'static str, data: T) -> (StatusCode, Json<Envelope<T>>) {
    (StatusCode::OK, Json(Envelope { key, data }))
}
