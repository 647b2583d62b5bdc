//! JSON pointer (RFC 6901) addressing into a Value.

use super::value::Value;

/// Splits a JSON pointer into its unescaped reference tokens.
///
/// The empty pointer refers to the whole document and yields no tokens.
pub fn parse_pointer(pointer: &str) -> Option<Vec<String>> {
    if pointer.is_empty() {
        return Some(Vec::new());
    }
    let rest = pointer.strip_prefix('/')?;
    Some(
        rest.split('/')
            .map(|token| token.replace("~1", "/").replace("~0", "~"))
            .collect(),
    )
}

impl Value {
    /// Resolves a JSON pointer, descending into maps by key and lists by index.
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        let tokens = parse_pointer(pointer)?;
        let mut current = self;
        for token in &tokens {
            current = match current {
                Value::Map(m) => m.get(token)?,
                Value::List(l) => l.get(list_index(token)?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Removes the value addressed by a JSON pointer and returns it.
    ///
    /// List elements are removed in place, shifting later elements down.
    pub fn remove_pointer(&mut self, pointer: &str) -> Option<Value> {
        let tokens = parse_pointer(pointer)?;
        let (last, parents) = tokens.split_last()?;
        let mut current = self;
        for token in parents {
            current = match current {
                Value::Map(m) => m.get_mut(token)?,
                Value::List(l) => l.get_mut(list_index(token)?)?,
                _ => return None,
            };
        }
        match current {
            Value::Map(m) => m.delete(last),
            Value::List(l) => {
                let idx = list_index(last)?;
                (idx < l.len()).then(|| l.remove(idx))
            }
            _ => None,
        }
    }
}

fn list_index(token: &str) -> Option<usize> {
    // Leading zeros are not valid array indexes.
    if token.len() > 1 && token.starts_with('0') {
        return None;
    }
    token.parse().ok()
}
