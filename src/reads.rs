use ahash::AHashMap;

/// Index of a read in its [`ReadRegistry`].
pub type ReadId = usize;

/// Every distinct read of a run together with its "unvisited" flag.
///
/// Reads are keyed by content and iterate in insertion order. A walk that
/// consumes a read clears its flag; nothing ever sets it again, so a read is
/// part of at most one contig.
#[derive(Debug, Default, Clone)]
pub struct ReadRegistry {
    reads: Vec<String>,
    unvisited: Vec<bool>,
    index: AHashMap<String, ReadId>,
}

impl ReadRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_reads<I, S>(reads: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for read in reads {
            registry.insert(read);
        }
        registry
    }

    /// Adds a read, returning its id and whether it was new.
    /// A read already present keeps its original id and flag.
    pub fn insert(&mut self, read: impl Into<String>) -> (ReadId, bool) {
        let read = read.into();
        if let Some(&id) = self.index.get(&read) {
            return (id, false);
        }
        let id = self.reads.len();
        self.index.insert(read.clone(), id);
        self.reads.push(read);
        self.unvisited.push(true);
        (id, true)
    }

    pub fn get(&self, id: ReadId) -> Option<&str> {
        self.reads.get(id).map(String::as_str)
    }

    pub fn id_of(&self, read: &str) -> Option<ReadId> {
        self.index.get(read).copied()
    }

    /// Unknown ids count as visited.
    pub fn is_unvisited(&self, id: ReadId) -> bool {
        self.unvisited.get(id).copied().unwrap_or(false)
    }

    /// Clears the flag, returning whether the read was still unvisited.
    pub fn mark_visited(&mut self, id: ReadId) -> bool {
        match self.unvisited.get_mut(id) {
            Some(flag) => std::mem::replace(flag, false),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.reads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reads.is_empty()
    }

    pub fn unvisited_count(&self) -> usize {
        self.unvisited.iter().filter(|&&u| u).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ReadId, &str)> {
        self.reads.iter().enumerate().map(|(id, r)| (id, r.as_str()))
    }
}
