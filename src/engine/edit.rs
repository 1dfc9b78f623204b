//! Edit operations and edit scripts
//!
//! An edit script is an ordered list of `Edit` operations transforming one
//! atom sequence into another. Each operation carries a run of atoms
//! rather than a single atom, so a script stays compact regardless of how
//! large the compared sequences are.
//!
//! Two reconstruction identities hold for every script the engine emits:
//! the Equal and Delete runs concatenate back to the source sequence, and
//! the Equal and Insert runs concatenate back to the target sequence.

/// Operation kind of one edit-script step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKind {
    Equal,
    Insert,
    Delete,
}

/// One edit-script step: a run of atoms kept, inserted, or deleted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Equal { run: Vec<T> },
    Insert { run: Vec<T> },
    Delete { run: Vec<T> },
}

/// Ordered list of edits transforming a source sequence into a target
pub type EditScript<T> = Vec<Edit<T>>;

impl<T> Edit<T> {
    pub fn equal(run: Vec<T>) -> Self {
        Edit::Equal { run }
    }

    pub fn insert(run: Vec<T>) -> Self {
        Edit::Insert { run }
    }

    pub fn delete(run: Vec<T>) -> Self {
        Edit::Delete { run }
    }

    pub fn with_kind(kind: EditKind, run: Vec<T>) -> Self {
        match kind {
            EditKind::Equal => Edit::Equal { run },
            EditKind::Insert => Edit::Insert { run },
            EditKind::Delete => Edit::Delete { run },
        }
    }

    pub fn kind(&self) -> EditKind {
        match self {
            Edit::Equal { .. } => EditKind::Equal,
            Edit::Insert { .. } => EditKind::Insert,
            Edit::Delete { .. } => EditKind::Delete,
        }
    }

    pub fn run(&self) -> &[T] {
        match self {
            Edit::Equal { run } | Edit::Insert { run } | Edit::Delete { run } => run,
        }
    }

    pub fn into_run(self) -> Vec<T> {
        match self {
            Edit::Equal { run } | Edit::Insert { run } | Edit::Delete { run } => run,
        }
    }

    pub fn len(&self) -> usize {
        self.run().len()
    }

    pub fn is_empty(&self) -> bool {
        self.run().is_empty()
    }
}

/// Concatenated Equal and Delete runs: the source sequence
pub fn source_atoms<T: Clone>(script: &[Edit<T>]) -> Vec<T> {
    script
        .iter()
        .filter(|edit| edit.kind() != EditKind::Insert)
        .flat_map(|edit| edit.run().iter().cloned())
        .collect()
}

/// Concatenated Equal and Insert runs: the target sequence
pub fn target_atoms<T: Clone>(script: &[Edit<T>]) -> Vec<T> {
    script
        .iter()
        .filter(|edit| edit.kind() != EditKind::Delete)
        .flat_map(|edit| edit.run().iter().cloned())
        .collect()
}

/// Total number of inserted and deleted atoms in a script
pub fn edit_volume<T>(script: &[Edit<T>]) -> usize {
    script
        .iter()
        .filter(|edit| edit.kind() != EditKind::Equal)
        .map(Edit::len)
        .sum()
}
