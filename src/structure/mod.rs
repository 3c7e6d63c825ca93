//! This module is devoted to core periphery decomposition of graphs.
//!
//! Algorithms implemented are:
//!
//!   - Batagelj Zaversnik _An O(m) Algorithm for Cores Decomposition of Networks_ [2003](https://arxiv.org/abs/cs/0310049)
//!     computing the coreness (degeneracy) of each vertex with counting buckets.
//!
//!   - Ma Mondragon _Rich-cores in networks_ [2015](https://journals.plos.org/plosone/article?id=10.1371/journal.pone.0119678)
//!     for undirected and directed graphs.
//!
//!  Graphs are accessed through the trait [view::GraphView], implemented for petgraph Graph.
//!  The coreness obtained can be turned into degree sequences of core and periphery with [partition].

/// read access to graphs
pub mod view;

/// core decompositions according to Batagelj Zaversnik
pub mod cores;

/// rich-core detection
pub mod richcore;

/// split of vertices in core and periphery
pub mod partition;

/// common trait of core periphery algorithms
pub mod algo;
