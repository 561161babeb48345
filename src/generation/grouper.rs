//! Grouping of mutators by owning type.

use crate::model::Mutator;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// All mutators of one owning type.
///
/// Members map method name to parameter type text. A later mutator with the
/// same method name replaces the earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutatorGroup {
    pub owner: String,
    pub members: BTreeMap<String, String>,
}

impl MutatorGroup {
    fn new(owner: &str) -> Self {
        Self {
            owner: owner.to_string(),
            members: BTreeMap::new(),
        }
    }

    fn insert(&mut self, mutator: &Mutator) {
        let replaced = self
            .members
            .insert(mutator.name().to_string(), mutator.parameter().to_string());

        if let Some(previous) = replaced {
            debug!(
                owner = %self.owner,
                method = mutator.name(),
                previous = %previous,
                current = mutator.parameter(),
                "Replacing duplicate mutator"
            );
        }
    }
}

/// Groups keyed by owner name, iterated in the order owners were first seen.
#[derive(Debug, Default)]
pub struct MutatorGroups {
    groups: Vec<MutatorGroup>,
    index: HashMap<String, usize>,
}

impl MutatorGroups {
    pub fn get(&self, owner: &str) -> Option<&MutatorGroup> {
        self.index.get(owner).map(|&i| &self.groups[i])
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MutatorGroup> {
        self.groups.iter()
    }

    fn entry(&mut self, owner: &str) -> &mut MutatorGroup {
        let i = match self.index.get(owner) {
            Some(&i) => i,
            None => {
                self.groups.push(MutatorGroup::new(owner));
                self.index.insert(owner.to_string(), self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        &mut self.groups[i]
    }
}

impl IntoIterator for MutatorGroups {
    type Item = MutatorGroup;
    type IntoIter = std::vec::IntoIter<MutatorGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a> IntoIterator for &'a MutatorGroups {
    type Item = &'a MutatorGroup;
    type IntoIter = std::slice::Iter<'a, MutatorGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Fold mutators into one group per owning type, in input order.
pub fn group<'a>(mutators: impl IntoIterator<Item = &'a Mutator>) -> MutatorGroups {
    let mut groups = MutatorGroups::default();
    for mutator in mutators {
        groups.entry(mutator.owner()).insert(mutator);
    }
    debug!(groups = groups.len(), "Grouped mutators by owner");
    groups
}
