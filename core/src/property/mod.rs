//! Named, introspectable node properties.
//!
//! Nodes expose some of their state to tooling as named string properties.
//! A property is a pair of optional accessors; a property without a setter is
//! read-only.
//!
//! # Example
//!
//! ```
//! use meshleaf_core::property::{PropertyRegistry, StringProperty};
//!
//! let mut props = PropertyRegistry::new();
//! props.add(StringProperty::read_only("Meshfile path", || "arm.dae".to_owned()));
//!
//! let prop = props.get("Meshfile path").unwrap();
//! assert_eq!(prop.get().as_deref(), Some("arm.dae"));
//! assert!(prop.is_read_only());
//! ```

use std::collections::BTreeMap;
use std::fmt;

/// Boxed getter closure.
pub type Getter<T> = Box<dyn Fn() -> T + Send + Sync>;
/// Boxed setter closure.
pub type Setter<T> = Box<dyn Fn(T) + Send + Sync>;

/// Errors returned by property access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyError {
    /// No property is registered under the name.
    NotFound(String),
    /// The property has no setter.
    ReadOnly(String),
}

impl fmt::Display for PropertyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(name) => write!(f, "no property named {name}"),
            Self::ReadOnly(name) => write!(f, "property {name} is read-only"),
        }
    }
}

impl std::error::Error for PropertyError {}

/// A string-valued property bound to accessor closures.
pub struct StringProperty {
    name: String,
    getter: Option<Getter<String>>,
    setter: Option<Setter<String>>,
}

impl StringProperty {
    /// Creates a property from optional accessors.
    pub fn new(
        name: impl Into<String>,
        getter: Option<Getter<String>>,
        setter: Option<Setter<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            getter,
            setter,
        }
    }

    /// Creates a read-only property.
    pub fn read_only(
        name: impl Into<String>,
        getter: impl Fn() -> String + Send + Sync + 'static,
    ) -> Self {
        Self::new(name, Some(Box::new(getter)), None)
    }

    /// Property name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current value, or `None` if the property has no getter.
    pub fn get(&self) -> Option<String> {
        self.getter.as_ref().map(|get| get())
    }

    /// Write a value through the setter.
    pub fn set(&self, value: String) -> Result<(), PropertyError> {
        match &self.setter {
            Some(set) => {
                set(value);
                Ok(())
            }
            None => Err(PropertyError::ReadOnly(self.name.clone())),
        }
    }

    /// Whether the property has a getter.
    pub fn has_read_access(&self) -> bool {
        self.getter.is_some()
    }

    /// Whether the property has no setter.
    pub fn is_read_only(&self) -> bool {
        self.setter.is_none()
    }
}

impl fmt::Debug for StringProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringProperty")
            .field("name", &self.name)
            .field("readable", &self.has_read_access())
            .field("read_only", &self.is_read_only())
            .finish()
    }
}

/// Properties of a node, keyed by name.
#[derive(Debug, Default)]
pub struct PropertyRegistry {
    properties: BTreeMap<String, StringProperty>,
}

impl PropertyRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a property, returning any property it replaced.
    pub fn add(&mut self, property: StringProperty) -> Option<StringProperty> {
        self.properties.insert(property.name.clone(), property)
    }

    /// Look up a property.
    pub fn get(&self, name: &str) -> Option<&StringProperty> {
        self.properties.get(name)
    }

    /// Whether a property is registered under `name`.
    pub fn has(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Read a property value by name.
    pub fn value(&self, name: &str) -> Result<Option<String>, PropertyError> {
        self.get(name)
            .map(StringProperty::get)
            .ok_or_else(|| PropertyError::NotFound(name.to_owned()))
    }

    /// Write a property value by name.
    pub fn set_value(&self, name: &str, value: String) -> Result<(), PropertyError> {
        self.get(name)
            .ok_or_else(|| PropertyError::NotFound(name.to_owned()))?
            .set(value)
    }

    /// Registered property names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Number of registered properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether no properties are registered.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
