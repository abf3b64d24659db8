use crate::common::{Row, Value};
use crate::mapping::PropertyInfo;
use std::fmt::{Debug, Formatter};

/// Ordinal table built alongside the column mappings of a bulk copy.
///
/// # Purpose
/// Records, for every mapped property, the source ordinal it was given and the
/// accessor that reads it. Callers use it to turn entity instances into
/// [`Row`]s whose layout matches the column mappings handed to the bulk copy.
///
/// # Characteristics
/// - Ordinals are `0..len()`, assigned in registration order
/// - Filled once by the factory; read-only afterwards
/// - Owns no shared state, so tables from separate factory calls are
///   independent
pub struct PropertyToOrdinalMappings<E> {
    properties: Vec<PropertyInfo<E>>,
}

impl<E> PropertyToOrdinalMappings<E> {
    pub fn with_capacity(capacity: usize) -> Self {
        PropertyToOrdinalMappings {
            properties: Vec::with_capacity(capacity),
        }
    }

    /// Registers `property` and returns the source ordinal assigned to it.
    pub(crate) fn add(&mut self, property: PropertyInfo<E>) -> usize {
        let ordinal = self.properties.len();
        self.properties.push(property);
        ordinal
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Source ordinal of the property called `name`.
    pub fn ordinal_of(&self, name: &str) -> Option<usize> {
        self.properties.iter().position(|p| p.name() == name)
    }

    pub fn property_at(&self, ordinal: usize) -> Option<&PropertyInfo<E>> {
        self.properties.get(ordinal)
    }

    /// Iterates `(ordinal, property)` pairs in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &PropertyInfo<E>)> {
        self.properties.iter().enumerate()
    }

    /// Reads the property registered at `ordinal` from `item`.
    pub fn value_at(&self, item: &E, ordinal: usize) -> Option<Value> {
        self.properties.get(ordinal).map(|p| p.value_of(item))
    }

    /// Reads every registered property of `item` into a row laid out by
    /// source ordinal.
    pub fn to_row(&self, item: &E) -> Row {
        let mut row = Row::with_capacity(self.properties.len());
        for property in &self.properties {
            row.push(property.value_of(item));
        }
        row
    }
}

impl<E> Debug for PropertyToOrdinalMappings<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.properties.iter().enumerate().map(|(i, p)| (p.name(), i)))
            .finish()
    }
}
