use std::collections::HashSet;

use bookwatch_shared::domain::Ucn;

/// UCNs observed during this session. Only grows.
#[derive(Debug, Default)]
pub struct SeenSet {
    ucns: HashSet<Ucn>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when `ucn` was not seen before.
    pub fn insert(&mut self, ucn: Ucn) -> bool {
        self.ucns.insert(ucn)
    }

    pub fn contains(&self, ucn: &Ucn) -> bool {
        self.ucns.contains(ucn)
    }

    pub fn len(&self) -> usize {
        self.ucns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ucns.is_empty()
    }
}
