//! Immutable collections of bound values.
//!
//! A [`Bag`] maps a definition name to its coerced [`Value`]. Optional
//! inputs the user did not supply are simply absent. Options are stored
//! under their canonical name and every alias, so either spelling finds the
//! value.

use std::collections::BTreeMap;
use std::ops::Deref;

use serde::Serialize;

use crate::value::Value;

/// Name → value lookup shared by [`ArgumentBag`] and [`OptionBag`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Bag {
    items: BTreeMap<String, Value>,
}

impl Bag {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.items.insert(name.into(), value);
    }

    /// Whether a value was bound under `name`.
    pub fn has(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.items.get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_i64)
    }

    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_f64)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    /// True only if the flag was bound and is `true`.
    pub fn is_set(&self, name: &str) -> bool {
        self.get_bool(name).unwrap_or(false)
    }

    /// Every value of a repeatable option; a single value is returned as a
    /// one-element slice.
    pub fn get_all(&self, name: &str) -> &[Value] {
        match self.get(name) {
            Some(Value::List(items)) => items,
            Some(value) => std::slice::from_ref(value),
            None => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.items.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.items).unwrap_or(serde_json::Value::Null)
    }
}

impl FromIterator<(String, Value)> for Bag {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

macro_rules! bag_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize)]
        #[serde(transparent)]
        pub struct $name(Bag);

        impl $name {
            pub fn new(bag: Bag) -> Self {
                Self(bag)
            }

            pub fn into_inner(self) -> Bag {
                self.0
            }
        }

        impl Deref for $name {
            type Target = Bag;

            fn deref(&self) -> &Bag {
                &self.0
            }
        }

        impl FromIterator<(String, Value)> for $name {
            fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
                Self(iter.into_iter().collect())
            }
        }
    };
}

bag_newtype!(
    /// Positional arguments bound for one invocation.
    ArgumentBag
);

bag_newtype!(
    /// Options bound for one invocation, keyed by name and by every alias.
    OptionBag
);
