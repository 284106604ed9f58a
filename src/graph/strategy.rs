use petgraph::graph::NodeIndex;

use crate::reads::ReadId;

/// A read that may extend the contig being walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extension {
    pub read: ReadId,
    /// Vertex the read was reached through.
    pub via: NodeIndex,
    /// Bytes of the read already covered by the contig; the rest is appended.
    pub cutoff: usize,
}

/// Chooses among the eligible extensions of one walk step.
///
/// Candidates arrive lazily, in read-list insertion order (vertex order
/// first for fuzzy steps), so a strategy that stops early never pays for the
/// remaining candidate checks.
pub trait ExtensionStrategy {
    fn choose<I>(&self, candidates: I) -> Option<Extension>
    where
        I: Iterator<Item = Extension>;
}

/// Takes the first eligible read.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstMatch;

impl ExtensionStrategy for FirstMatch {
    fn choose<I>(&self, mut candidates: I) -> Option<Extension>
    where
        I: Iterator<Item = Extension>,
    {
        candidates.next()
    }
}

/// Takes the eligible read with the longest overlap with the contig.
/// Ties go to the earliest candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LongestOverlap;

impl ExtensionStrategy for LongestOverlap {
    fn choose<I>(&self, candidates: I) -> Option<Extension>
    where
        I: Iterator<Item = Extension>,
    {
        candidates.fold(None, |best: Option<Extension>, next| match best {
            Some(b) if b.cutoff >= next.cutoff => Some(b),
            _ => Some(next),
        })
    }
}

/// Runtime selection between the built-in strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StrategyKind {
    #[default]
    FirstMatch,
    LongestOverlap,
}

impl ExtensionStrategy for StrategyKind {
    fn choose<I>(&self, candidates: I) -> Option<Extension>
    where
        I: Iterator<Item = Extension>,
    {
        match self {
            StrategyKind::FirstMatch => FirstMatch.choose(candidates),
            StrategyKind::LongestOverlap => LongestOverlap.choose(candidates),
        }
    }
}
