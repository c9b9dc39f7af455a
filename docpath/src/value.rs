//! Structured-value utilities.
//!
//! This module provides recursive merging and dotted-path access over
//! [`serde_json::Value`] trees. Merging follows accumulation rules similar
//! to hierarchical configuration: arrays concatenate, objects merge
//! key-by-key with the overlay recursing into shared container keys, and
//! scalars are overwritten by the overlay. Dotted paths (`"server.hosts.0"`)
//! address object keys and array indices.

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Merge two values recursively, with `overlay` taking precedence.
///
/// - Two arrays concatenate, overlay items after base items.
/// - Two objects merge key-by-key; keys present in both recurse when both
///   values are containers, otherwise the overlay value wins.
/// - Anything else is replaced by the overlay.
///
/// # Examples
///
/// ```
/// use docpath::value::merge;
/// use serde_json::json;
///
/// let base = json!({"name": "app", "tags": ["a"], "limits": {"cpu": 1}});
/// let overlay = json!({"tags": ["b"], "limits": {"mem": 2}});
///
/// assert_eq!(
///     merge(base, overlay),
///     json!({"name": "app", "tags": ["a", "b"], "limits": {"cpu": 1, "mem": 2}})
/// );
/// ```
#[must_use]
pub fn merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Array(mut base_items), Value::Array(overlay_items)) => {
            base_items.extend(overlay_items);
            Value::Array(base_items)
        }
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.remove(&key) {
                    Some(existing) if is_container(&existing) && is_container(&value) => {
                        base_map.insert(key, merge(existing, value));
                    }
                    _ => {
                        base_map.insert(key, value);
                    }
                }
            }
            Value::Object(base_map)
        }
        (_, overlay) => overlay,
    }
}

/// Merge any number of overlays into a base value, lowest precedence first.
///
/// # Examples
///
/// ```
/// use docpath::value::merge_all;
/// use serde_json::json;
///
/// let merged = merge_all(
///     json!({"a": 1}),
///     [json!({"b": 2}), json!({"a": 3})],
/// );
/// assert_eq!(merged, json!({"a": 3, "b": 2}));
/// ```
#[must_use]
pub fn merge_all<I>(base: Value, overlays: I) -> Value
where
    I: IntoIterator<Item = Value>,
{
    overlays.into_iter().fold(base, merge)
}

/// Look up a value by dotted path.
///
/// Object keys and array indices are both addressable. Returns `None` when
/// any step of the path is missing or lands in a non-container; a stored
/// `null` is found and returned as `Some(Value::Null)`.
///
/// # Examples
///
/// ```
/// use docpath::value::traverse_get;
/// use serde_json::json;
///
/// let data = json!({"server": {"hosts": ["alpha", "beta"]}});
///
/// assert_eq!(traverse_get(&data, "server.hosts.1"), Some(&json!("beta")));
/// assert_eq!(traverse_get(&data, "server.port"), None);
/// ```
#[must_use]
pub fn traverse_get<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for key in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(key)?,
            Value::Array(items) => items.get(key.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Check whether a dotted path exists, even if it holds `null`.
///
/// # Examples
///
/// ```
/// use docpath::value::traverse_exists;
/// use serde_json::json;
///
/// let data = json!({"feature": {"enabled": null}});
///
/// assert!(traverse_exists(&data, "feature.enabled"));
/// assert!(!traverse_exists(&data, "feature.missing"));
/// ```
#[must_use]
pub fn traverse_exists(value: &Value, path: &str) -> bool {
    traverse_get(value, path).is_some()
}

/// Store a value at a dotted path, creating intermediate objects as needed.
///
/// Missing object keys and `null`s along the path are replaced by fresh
/// objects. Array steps accept an existing index or the index one past the
/// end (appending). A scalar in the middle of the path cannot be traversed
/// into and is reported as [`Error::NotCollection`] with the blocked
/// prefix.
///
/// # Errors
///
/// Returns [`Error::NotCollection`] when the path runs into a scalar or an
/// out-of-range array index before its last step.
///
/// # Examples
///
/// ```
/// use docpath::value::{traverse_get, traverse_set};
/// use serde_json::json;
///
/// let mut data = json!({"server": {}});
/// traverse_set(&mut data, "server.tls.enabled", json!(true)).unwrap();
/// assert_eq!(traverse_get(&data, "server.tls.enabled"), Some(&json!(true)));
///
/// let err = traverse_set(&mut data, "server.tls.enabled.deeper", json!(1)).unwrap_err();
/// assert!(err.to_string().contains("server.tls.enabled"));
/// ```
pub fn traverse_set(target: &mut Value, path: &str, new_value: Value) -> Result<()> {
    let keys: Vec<&str> = path.split('.').collect();
    let Some((&last_key, walk)) = keys.split_last() else {
        return Ok(());
    };

    // Walk down to the container that will hold the final key.
    let mut current = target;
    for (position, &key) in walk.iter().enumerate() {
        // A null in the middle of the path makes room for the rest of it.
        if current.is_null() {
            *current = Value::Object(Map::new());
        }

        current = match current {
            Value::Object(map) => map.entry(key.to_string()).or_insert(Value::Null),
            Value::Array(items) => {
                let index: usize = key.parse().map_err(|_| Error::NotCollection {
                    path: keys[..=position].join("."),
                })?;
                if index == items.len() {
                    items.push(Value::Null);
                }
                items.get_mut(index).ok_or_else(|| Error::NotCollection {
                    path: keys[..=position].join("."),
                })?
            }
            _ => {
                return Err(Error::NotCollection {
                    path: keys[..=position].join("."),
                });
            }
        };
    }

    if current.is_null() {
        *current = Value::Object(Map::new());
    }

    match current {
        Value::Object(map) => {
            map.insert(last_key.to_string(), new_value);
            Ok(())
        }
        Value::Array(items) => {
            let index: usize = last_key.parse().map_err(|_| Error::NotCollection {
                path: path.to_string(),
            })?;
            if index == items.len() {
                items.push(new_value);
            } else {
                let slot = items.get_mut(index).ok_or_else(|| Error::NotCollection {
                    path: path.to_string(),
                })?;
                *slot = new_value;
            }
            Ok(())
        }
        _ => Err(Error::NotCollection {
            path: path.to_string(),
        }),
    }
}

/// Whether a value can be merged into, rather than replaced.
fn is_container(value: &Value) -> bool {
    value.is_array() || value.is_object()
}
