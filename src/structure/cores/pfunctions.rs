//! p-functions of Batagelj-Zaversnik generalized cores.
//!
//! A p-function gives a value to a vertex relative to a subset of vertices.
//! The usual core is the generalized core for [p1], the degree restricted to the subset.

use indexmap::IndexSet;

use crate::structure::view::GraphView;

#[cfg_attr(doc, katexit::katexit)]
///
/// This function computes partial degree taking into account only neighbours restricted to a subset of vertices
///
/// $$
/// p_{1}(v,vset) = deg(v,vset)
/// $$
/// with $ vset \subset V$ is the subset of vertices of V to which restrict neighbours of $v$
pub fn p1<G: GraphView>(graph: &G, vset: &IndexSet<usize>, node: usize) -> usize {
    graph
        .neighbours(node)
        .filter(|n| vset.contains(n))
        .count()
} // end of p1

/// minimum of p1 over a subset of vertices, None if the subset is empty.
/// A subset is a k-core iff its minimal restricted degree is at least k (and it is maximal).
pub fn min_p1<G: GraphView>(graph: &G, vset: &IndexSet<usize>) -> Option<usize> {
    vset.iter().map(|node| p1(graph, vset, *node)).min()
} // end of min_p1

//========================================================================================

// end of mod tests
