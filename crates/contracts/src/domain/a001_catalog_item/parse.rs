//! Parsing and validation of the catalog resource.
//!
//! Accepted shapes:
//! - `{ "herramientas": [ ... ], "config": { ... } }` (`items` is accepted for the array key)
//! - a bare array of items
//!
//! Any failing item fails the whole document.

use super::aggregate::{CatalogDocument, CatalogItem};
use crate::shared::error::LoadError;
use serde_json::Value;

const ITEMS_KEY: &str = "herramientas";
const ITEMS_ALIAS: &str = "items";
const CONFIG_KEY: &str = "config";

pub fn parse_catalog(text: &str) -> Result<CatalogDocument, LoadError> {
    let payload: Value =
        serde_json::from_str(text).map_err(|e| LoadError::Parse(e.to_string()))?;

    let (raw_items, config) = match payload {
        Value::Array(items) => (items, None),
        Value::Object(mut map) => {
            let items = map
                .remove(ITEMS_KEY)
                .or_else(|| map.remove(ITEMS_ALIAS))
                .ok_or_else(|| {
                    LoadError::schema(None, format!("missing `{ITEMS_KEY}` array"))
                })?;
            let Value::Array(items) = items else {
                return Err(LoadError::schema(
                    None,
                    format!("`{ITEMS_KEY}` must be an array, found {}", kind_of(&items)),
                ));
            };
            let config = map.remove(CONFIG_KEY).filter(|c| !c.is_null());
            (items, config)
        }
        other => {
            return Err(LoadError::schema(
                None,
                format!("expected an object or an array, found {}", kind_of(&other)),
            ))
        }
    };

    let items = raw_items
        .into_iter()
        .enumerate()
        .map(|(index, raw)| parse_item(index, raw))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CatalogDocument { items, config })
}

fn parse_item(index: usize, raw: Value) -> Result<CatalogItem, LoadError> {
    let item: CatalogItem =
        serde_json::from_value(raw).map_err(|e| LoadError::schema(Some(index), e.to_string()))?;
    item.validate()
        .map_err(|reason| LoadError::schema(Some(index), reason))?;
    Ok(item)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
