// SPDX-License-Identifier: MIT

use crate::errors::BindingValidationError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A declared (filter, parameter) dependency.
///
/// Changes to the named filter drive the named parameter. The serialized
/// field names (`filter` / `param`) are the wire format of the persisted
/// settings blob and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub filter: String,
    pub param: String,
}

impl Binding {
    pub fn new(filter: impl Into<String>, param: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            param: param.into(),
        }
    }
}

/// The ordered binding sequence driving synchronization.
///
/// Order is semantically significant: for the binding at position `i`,
/// every binding at `i+1..` is downstream and is reset whenever `i`'s
/// filter changes. This is deliberately a linear cascade, not a
/// dependency graph.
///
/// Construction enforces the uniqueness invariant (a filter drives at
/// most one parameter) and builds a filter-name index for O(1) lookup,
/// so the engine never re-validates or scans.
#[derive(Debug, Clone, Default)]
pub struct BindingSet {
    ordered: Vec<Binding>,
    index: HashMap<String, usize>,
}

impl BindingSet {
    /// Build a validated set from an ordered sequence of bindings.
    ///
    /// Rejects the sequence before anything is stored if a filter name
    /// appears more than once.
    pub fn new(bindings: Vec<Binding>) -> Result<Self, BindingValidationError> {
        let mut index = HashMap::with_capacity(bindings.len());
        for (position, binding) in bindings.iter().enumerate() {
            if index.insert(binding.filter.clone(), position).is_some() {
                return Err(BindingValidationError::DuplicateFilterKey {
                    filter: binding.filter.clone(),
                });
            }
        }
        Ok(Self {
            ordered: bindings,
            index,
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.ordered.iter()
    }

    pub fn as_slice(&self) -> &[Binding] {
        &self.ordered
    }

    /// Resolve a changed filter to its position and binding.
    pub fn lookup(&self, filter: &str) -> Option<(usize, &Binding)> {
        let position = *self.index.get(filter)?;
        Some((position, &self.ordered[position]))
    }

    /// The bindings at position >= `from`, i.e. the downstream slice a
    /// cascade starting there must reset. Positions past the end yield
    /// an empty slice.
    pub fn tail(&self, from: usize) -> &[Binding] {
        &self.ordered[from.min(self.ordered.len())..]
    }

    pub fn into_vec(self) -> Vec<Binding> {
        self.ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region_district_team() -> Vec<Binding> {
        vec![
            Binding::new("Region", "REGION"),
            Binding::new("District", "DISTRICT"),
            Binding::new("Team", "TEAM"),
        ]
    }

    #[test]
    fn preserves_order_and_positions() {
        let set = BindingSet::new(region_district_team()).unwrap();

        assert_eq!(set.len(), 3);
        let (position, binding) = set.lookup("District").unwrap();
        assert_eq!(position, 1);
        assert_eq!(binding.param, "DISTRICT");
        assert_eq!(set.as_slice()[0].filter, "Region");
    }

    #[test]
    fn rejects_duplicate_filter_key() {
        let mut bindings = region_district_team();
        bindings.push(Binding::new("Region", "OTHER"));

        let err = BindingSet::new(bindings).unwrap_err();
        assert_eq!(
            err,
            BindingValidationError::DuplicateFilterKey {
                filter: "Region".to_string()
            }
        );
    }

    #[test]
    fn duplicate_params_are_allowed() {
        // Only filter keys are unique; two filters may drive the same parameter.
        let bindings = vec![
            Binding::new("Region", "SHARED"),
            Binding::new("District", "SHARED"),
        ];
        assert!(BindingSet::new(bindings).is_ok());
    }

    #[test]
    fn lookup_miss_returns_none() {
        let set = BindingSet::new(region_district_team()).unwrap();
        assert!(set.lookup("Category").is_none());
    }

    #[test]
    fn tail_slices_downstream_only() {
        let set = BindingSet::new(region_district_team()).unwrap();

        let downstream: Vec<_> = set.tail(1).iter().map(|b| b.filter.as_str()).collect();
        assert_eq!(downstream, vec!["District", "Team"]);
        assert!(set.tail(3).is_empty());
        assert!(set.tail(17).is_empty());
    }

    #[test]
    fn empty_set_has_no_positions() {
        let set = BindingSet::empty();
        assert!(set.is_empty());
        assert!(set.lookup("Region").is_none());
        assert!(set.tail(0).is_empty());
    }
}
