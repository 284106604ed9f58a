use ahash::AHashSet;

pub type Kmer<'a> = &'a str;

/// A de Bruijn edge: the (k-1)-mer prefix and suffix of one k-mer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KmerEdge<'a> {
    pub prefix: &'a str,
    pub suffix: &'a str,
}

/// Distinct k-mers of a read, in order of first occurrence.
///
/// Returns an empty list for reads shorter than `k` and for non-ASCII reads,
/// whose byte windows would not fall on char boundaries.
pub fn extract_kmers(read: &str, k: usize) -> Vec<Kmer<'_>> {
    if k == 0 || read.len() < k || !read.is_ascii() {
        return Vec::new();
    }

    let mut seen = AHashSet::with_capacity(read.len() - k + 1);
    let mut kmers = Vec::with_capacity(read.len() - k + 1);
    for i in 0..=read.len() - k {
        let kmer = &read[i..i + k];
        if seen.insert(kmer) {
            kmers.push(kmer);
        }
    }
    kmers
}

/// Splits a k-mer into its prefix `kmer[0, k-1)` and suffix `kmer[1, k)`.
///
/// `None` for k-mers shorter than 2, which have no edge.
pub fn decompose(kmer: Kmer<'_>) -> Option<KmerEdge<'_>> {
    if kmer.len() < 2 {
        return None;
    }
    Some(KmerEdge {
        prefix: kmer.get(..kmer.len() - 1)?,
        suffix: kmer.get(1..)?,
    })
}

/// Edges contributed by one read, one per distinct k-mer.
pub fn read_edges(read: &str, k: usize) -> impl Iterator<Item = KmerEdge<'_>> {
    extract_kmers(read, k).into_iter().filter_map(decompose)
}

/// The read's trailing (k-1)-mer, if it is long enough to have one.
pub fn trailing_label(read: &str, k: usize) -> Option<&str> {
    let start = read.len().checked_sub(k.checked_sub(1)?)?;
    read.get(start..)
}
