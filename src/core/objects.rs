//! Key projections over maps and serializable structs.

use crate::utils::error::{HelperError, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Keys listed but missing from `obj` are skipped.
pub fn pick<K, V, Q, S>(obj: &HashMap<K, V, S>, keys: &[&Q]) -> HashMap<K, V>
where
    K: Eq + Hash + Clone + Borrow<Q>,
    V: Clone,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    keys.iter()
        .filter_map(|key| obj.get_key_value(*key))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

pub fn omit<K, V, Q, S>(obj: &HashMap<K, V, S>, keys: &[&Q]) -> HashMap<K, V>
where
    K: Eq + Hash + Clone + Borrow<Q>,
    V: Clone,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    obj.iter()
        .filter(|(k, _)| !keys.contains(&<K as Borrow<Q>>::borrow(*k)))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// 將結構序列化為 JSON 物件後只保留指定欄位
pub fn pick_fields<T: Serialize>(value: &T, keys: &[&str]) -> Result<Map<String, Value>> {
    let mut object = to_object(value)?;
    Ok(keys
        .iter()
        .filter_map(|key| object.remove_entry(*key))
        .collect())
}

pub fn omit_fields<T: Serialize>(value: &T, keys: &[&str]) -> Result<Map<String, Value>> {
    let mut object = to_object(value)?;
    for key in keys {
        object.remove(*key);
    }
    Ok(object)
}

fn to_object<T: Serialize>(value: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(object) => Ok(object),
        _ => Err(HelperError::NotAnObject {
            type_name: std::any::type_name::<T>().to_string(),
        }),
    }
}
