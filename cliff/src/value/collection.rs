//! Lists and string-keyed maps of [`Element`] values.
//!
//! Each occurrence of the flag carries a comma separated value. An empty
//! value contributes no elements, so `--tag ""` yields an empty list.

use std::collections::{BTreeMap, HashMap};

use super::{Element, FlagValue, ValueKind, sealed::Sealed};

fn split_csv(raw: &str) -> impl Iterator<Item = &str> {
    let pieces = (!raw.is_empty()).then(|| raw.split(','));
    pieces.into_iter().flatten()
}

fn parse_elements<T: Element>(raw: &str) -> Result<Vec<T>, String> {
    split_csv(raw)
        .map(|piece| T::parse_element(piece.trim()))
        .collect()
}

impl<T: Element> Sealed for Vec<T> {}

impl<T: Element> FlagValue for Vec<T> {
    const KIND: ValueKind = ValueKind::List;
    type Item = Self;

    fn value_name() -> String {
        format!("{}s", T::type_name())
    }

    fn parse_item(raw: &str) -> Result<Self, String> {
        parse_elements(raw)
    }

    fn from_items(items: Vec<Self>) -> Option<Self> {
        Some(items.into_iter().flatten().collect())
    }

    fn default_text(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let rendered: Vec<String> = self.iter().map(Element::render).collect();
        Some(format!("[{}]", rendered.join(",")))
    }
}

fn parse_entry<V: Element>(raw: &str) -> Result<(String, V), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("'{raw}' must be formatted as key=value"))?;
    Ok((key.to_owned(), V::parse_element(value)?))
}

fn parse_entries<V: Element>(raw: &str) -> Result<Vec<(String, V)>, String> {
    split_csv(raw).map(parse_entry).collect()
}

fn render_entries<'a, V, I>(entries: I) -> Option<String>
where
    V: Element + 'a,
    I: IntoIterator<Item = (&'a String, &'a V)>,
{
    let mut rendered: Vec<String> = entries
        .into_iter()
        .map(|(key, value)| format!("{key}={}", value.render()))
        .collect();
    if rendered.is_empty() {
        return None;
    }
    rendered.sort_unstable();
    Some(format!("[{}]", rendered.join(",")))
}

impl<V: Element> Sealed for HashMap<String, V> {}

impl<V: Element> FlagValue for HashMap<String, V> {
    const KIND: ValueKind = ValueKind::Map;
    type Item = Vec<(String, V)>;

    fn value_name() -> String {
        "key=value".to_owned()
    }

    fn parse_item(raw: &str) -> Result<Vec<(String, V)>, String> {
        parse_entries(raw)
    }

    fn from_items(items: Vec<Vec<(String, V)>>) -> Option<Self> {
        Some(items.into_iter().flatten().collect())
    }

    fn default_text(&self) -> Option<String> {
        render_entries(self)
    }
}

impl<V: Element> Sealed for BTreeMap<String, V> {}

impl<V: Element> FlagValue for BTreeMap<String, V> {
    const KIND: ValueKind = ValueKind::Map;
    type Item = Vec<(String, V)>;

    fn value_name() -> String {
        "key=value".to_owned()
    }

    fn parse_item(raw: &str) -> Result<Vec<(String, V)>, String> {
        parse_entries(raw)
    }

    fn from_items(items: Vec<Vec<(String, V)>>) -> Option<Self> {
        Some(items.into_iter().flatten().collect())
    }

    fn default_text(&self) -> Option<String> {
        render_entries(self)
    }
}
