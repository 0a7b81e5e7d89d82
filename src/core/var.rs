use std::fmt::{self, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static VAR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Logic variable with an optional descriptive name.
///
/// Every newly created variable is different from all previously created
/// variables, even if they share a name. Identity is carried by a
/// process-unique id; equality and hashing look at the id only. Cloning
/// preserves identity.
#[derive(Clone, Eq)]
pub struct Var {
    id: u64,
    name: Option<Arc<str>>,
}

impl Var {
    /// Create a new unique logic variable with a descriptive name.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Var {
            id: next_id(),
            name: Some(name.into()),
        }
    }

    /// Create a new unique anonymous logic variable.
    pub fn fresh() -> Self {
        Var {
            id: next_id(),
            name: None,
        }
    }

    /// Create one fresh variable per name, in order.
    pub fn fresh_many<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<Self> {
        names.into_iter().map(Var::new).collect()
    }

    /// The variable's unique id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The variable's descriptive name, if it has one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

fn next_id() -> u64 {
    // Relaxed is enough for a counter; nothing is ordered around it.
    VAR_COUNTER.fetch_add(1, Ordering::Relaxed)
}

impl PartialEq for Var {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl std::hash::Hash for Var {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl From<&str> for Var {
    fn from(name: &str) -> Self {
        Var::new(name)
    }
}

impl fmt::Debug for Var {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "?{}", self.id),
        }
    }
}
