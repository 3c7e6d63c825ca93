//! Core decomposition (degeneracy ordering) by the bucket algorithm of Batagelj Zaversnik.
//!
//! Vertices are peeled by increasing current degree. When a vertex is peeled its current degree is
//! its coreness, and each of its neighbours of strictly greater current degree loses one unit of degree
//! by moving to the previous bucket of the [BucketIndex]. There is no heap and no re-sorting,
//! the whole run is O(nb_nodes + nb_edges).
//!
//! The main entry is [bz_decomposition] which returns a [CoreDecomposition].
//! [degeneracy_ordering] returns only the coreness of each vertex.

use std::time::SystemTime;

use cpu_time::ProcessTime;

use anyhow::anyhow;
use indexmap::IndexSet;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::bucket::BucketIndex;
use super::pfunctions::min_p1;
use crate::structure::view::GraphView;

#[cfg_attr(doc, katexit::katexit)]
/// Result of the core decomposition of a graph.
///
/// The coreness of a vertex $v$ is the largest $k$ such that $v$ belongs to the $k$-core, the maximal
/// subgraph in which each vertex has degree at least $k$.
///
/// The ordering is the peeling order, along which coreness is non-decreasing, so each $k$-core
/// is a suffix of the ordering.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoreDecomposition {
    /// coreness of each vertex, indexed by vertex rank
    coreness: Vec<u32>,
    /// vertices in peeling order
    ordering: Vec<usize>,
} // end of struct CoreDecomposition

impl CoreDecomposition {
    pub(crate) fn new(coreness: Vec<u32>, ordering: Vec<usize>) -> Self {
        assert_eq!(coreness.len(), ordering.len());
        CoreDecomposition { coreness, ordering }
    }

    /// number of vertices of the decomposed graph
    pub fn get_nb_nodes(&self) -> usize {
        self.coreness.len()
    }

    /// coreness of each vertex
    pub fn get_coreness(&self) -> &[u32] {
        &self.coreness
    }

    /// the degeneracy ordering, i.e the order in which vertices were peeled
    pub fn get_ordering(&self) -> &[usize] {
        &self.ordering
    }

    /// coreness of a vertex
    pub fn get_node_coreness(&self, node: usize) -> anyhow::Result<u32> {
        self.coreness
            .get(node)
            .copied()
            .ok_or_else(|| anyhow!("bad node rank {}, nb_nodes : {}", node, self.coreness.len()))
    }

    /// the degeneracy of the graph, i.e the maximal coreness. 0 for an empty graph.
    pub fn get_degeneracy(&self) -> u32 {
        self.coreness.iter().copied().max().unwrap_or(0)
    }

    /// returns the vertices of the k-core, in peeling order.
    pub fn get_kcore(&self, k: u32) -> IndexSet<usize> {
        let first = self
            .ordering
            .partition_point(|v| self.coreness[*v] < k);
        self.ordering[first..].iter().copied().collect()
    } // end of get_kcore

    /// returns the vertices of coreness exactly k, in peeling order.
    pub fn get_shell(&self, k: u32) -> Vec<usize> {
        let first = self
            .ordering
            .partition_point(|v| self.coreness[*v] < k);
        self.ordering[first..]
            .iter()
            .copied()
            .take_while(|v| self.coreness[*v] == k)
            .collect()
    } // end of get_shell

    /// size of k-cores for k in 0..=degeneracy. Empty for an empty graph.
    pub fn get_kcore_sizes(&self) -> Vec<usize> {
        if self.coreness.is_empty() {
            return Vec::new();
        }
        let degeneracy = self.get_degeneracy() as usize;
        let mut sizes = vec![0usize; degeneracy + 1];
        for c in &self.coreness {
            sizes[*c as usize] += 1;
        }
        // shell sizes to core sizes
        for k in (0..degeneracy).rev() {
            sizes[k] += sizes[k + 1];
        }
        sizes
    } // end of get_kcore_sizes

    /// checks that each vertex of the k-core has at least k neighbours in the k-core
    pub fn check_kcore<G: GraphView>(&self, graph: &G, k: u32) -> bool {
        let kcore = self.get_kcore(k);
        match min_p1(graph, &kcore) {
            Some(d) => {
                if d < k as usize {
                    log::error!("check_kcore k : {}, found restricted degree {}", k, d);
                    false
                } else {
                    true
                }
            }
            None => true,
        }
    } // end of check_kcore

    /// consumes the decomposition, returning coreness
    pub fn into_coreness(self) -> Vec<u32> {
        self.coreness
    }
} // end of impl CoreDecomposition

/// Computes coreness of each vertex with the Batagelj Zaversnik bucket algorithm.
///
/// For a directed graph the decomposition is done on the underlying undirected multigraph.
/// A self loop counts for one in the degree of its vertex, and never decreases, multiple edges count
/// as many times as they are repeated.
pub fn bz_decomposition<G: GraphView>(graph: &G) -> CoreDecomposition {
    //
    let cpu_start = ProcessTime::now();
    let sys_start = SystemTime::now();
    let nb_nodes = graph.nb_nodes();
    log::info!("entering bz_decomposition, nb_nodes : {}", nb_nodes);
    //
    let mut degrees: Vec<u32> = (0..nb_nodes).map(|v| graph.degree(v) as u32).collect();
    let mut buckets = BucketIndex::new(&degrees);
    //
    for i in 0..nb_nodes {
        let v = buckets.get_vertex(i);
        let dv = degrees[v];
        log::trace!("peeling i : {}, vertex : {}, degree : {}", i, v, dv);
        for u in graph.neighbours(v) {
            // already peeled vertices have degree <= dv, so they are never moved.
            if degrees[u] > dv {
                buckets.move_down(u, &mut degrees);
            }
        }
    }
    // degrees are now frozen at their peeling value
    let decomposition = CoreDecomposition::new(degrees, buckets.into_vertices());
    //
    log::info!(
        "bz_decomposition degeneracy : {}, sys time(s) {:.2e} cpu time(s) {:.2e}",
        decomposition.get_degeneracy(),
        sys_start.elapsed().unwrap_or_default().as_secs_f64(),
        cpu_start.elapsed().as_secs_f64()
    );
    if log::log_enabled!(log::Level::Debug) {
        log::debug!("kcore sizes : {:?}", decomposition.get_kcore_sizes());
    }
    //
    decomposition
} // end of bz_decomposition

/// returns the coreness of each vertex, indexed by vertex rank. See [bz_decomposition].
pub fn degeneracy_ordering<G: GraphView>(graph: &G) -> Vec<u32> {
    bz_decomposition(graph).into_coreness()
}

/// computes coreness of many independent graphs in parallel.
/// Each decomposition is sequential, parallelism is only across graphs.
pub fn batch_coreness<G>(graphs: &[G]) -> Vec<Vec<u32>>
where
    G: GraphView + Sync,
{
    log::info!("batch_coreness, nb graphs : {}", graphs.len());
    graphs
        .par_iter()
        .map(|graph| degeneracy_ordering(graph))
        .collect()
} // end of batch_coreness

//========================================================================================

// end of mod tests
