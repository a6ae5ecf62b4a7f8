use std::{collections::HashSet, hash::Hash};

/// States whose node has already been expanded. Only graph search keeps one.
#[derive(Debug, Clone)]
pub struct ExploredSet<S> {
    states: HashSet<S>,
}

impl<S: Eq + Hash> ExploredSet<S> {
    pub fn new() -> Self {
        Self {
            states: HashSet::new(),
        }
    }

    /// Returns `false` if the state was already explored.
    pub fn insert(&mut self, state: S) -> bool {
        self.states.insert(state)
    }

    pub fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<S: Eq + Hash> Default for ExploredSet<S> {
    fn default() -> Self {
        Self::new()
    }
}
