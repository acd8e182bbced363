//! Pure helpers over ordered sequences.

use crate::core::guards::is_not_nil;
use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use std::hash::Hash;

pub fn first<T>(seq: &[T]) -> Option<&T> {
    seq.first()
}

pub fn last<T>(seq: &[T]) -> Option<&T> {
    seq.last()
}

/// Owned Rust data is acyclic, so a structural copy is `Clone`.
pub fn deep_clone<T: Clone>(value: &T) -> T {
    value.clone()
}

/// 經由 JSON 序列化往返複製，無法序列化的值回傳錯誤
pub fn deep_clone_json<T: Serialize + DeserializeOwned>(value: &T) -> Result<T> {
    let json = serde_json::to_value(value)?;
    Ok(serde_json::from_value(json)?)
}

pub fn compact<T, I>(seq: I) -> Vec<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    seq.into_iter().flatten().collect()
}

/// Drops `null` entries; `0`, `false` and `""` are kept.
pub fn compact_values<I>(seq: I) -> Vec<Value>
where
    I: IntoIterator<Item = Value>,
{
    seq.into_iter().filter(|v| is_not_nil(v)).collect()
}

pub fn unique<T: Eq + Hash + Clone>(seq: &[T]) -> Vec<T> {
    unique_by(seq, |item| item.clone())
}

/// First element producing a given key wins.
pub fn unique_by<T, K, F>(seq: &[T], mut key_selector: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    seq.iter()
        .filter(|item| seen.insert(key_selector(*item)))
        .cloned()
        .collect()
}
