//! Bracketed, space-separated renderings used throughout the transcript.

use std::collections::BTreeMap;
use std::fmt::Display;

/// Render a sequence as `[a b c]`.
pub fn list<T: Display>(items: &[T]) -> String {
    let body = items
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{body}]")
}

/// Render an ordered map as `map[k:v k:v]`.
pub fn map<K: Display, V: Display>(entries: &BTreeMap<K, V>) -> String {
    let body = entries
        .iter()
        .map(|(k, v)| format!("{k}:{v}"))
        .collect::<Vec<_>>()
        .join(" ");
    format!("map[{body}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_joins_with_spaces() {
        assert_eq!(list(&[10, 20, 30]), "[10 20 30]");
        assert_eq!(list::<i64>(&[]), "[]");
        assert_eq!(list(&["2", "+", "3"]), "[2 + 3]");
    }

    #[test]
    fn map_renders_in_key_order() {
        let mut m = BTreeMap::new();
        m.insert(2, "second");
        m.insert(1, "first");
        assert_eq!(map(&m), "map[1:first 2:second]");
    }
}
