use petgraph::graph::NodeIndex;
use petgraph::visit::Dfs;

use crate::graph::debruijn::DeBruijnGraph;

/// Vertices with no incoming edge, in vertex insertion order.
///
/// Outgoing edges are not consulted. Uses the
/// in-degree counter kept during construction.
pub fn find_heads(graph: &DeBruijnGraph) -> Vec<NodeIndex> {
    graph
        .vertices()
        .filter(|&(node, _)| graph.in_degree(node) == 0)
        .map(|(node, _)| node)
        .collect()
}

/// Number of vertices no head can reach.
///
/// These sit in components made only of cycles (or fed only by cycles), so no
/// walk can start in them and they produce no contig.
pub fn unreachable_vertices(graph: &DeBruijnGraph, heads: &[NodeIndex]) -> usize {
    let inner = graph.inner();
    let mut reached = vec![false; inner.node_count()];
    for &head in heads {
        if reached[head.index()] {
            continue;
        }
        let mut dfs = Dfs::new(inner, head);
        while let Some(node) = dfs.next(inner) {
            reached[node.index()] = true;
        }
    }
    reached.iter().filter(|&&r| !r).count()
}
