//! Core decomposition according to Batagelj Zaversnik.
//!
//! - [bucket] : the bucket sorted vertex index, relocation of a vertex in O(1)
//! - [bz] : the peeling engine computing coreness of all vertices in O(nb_nodes + nb_edges)
//! - [pfunctions] : restricted degree used to check k-cores

/// vertices sorted by degree in counting buckets
pub mod bucket;

pub mod bz;
pub use bz::{batch_coreness, bz_decomposition, degeneracy_ordering, CoreDecomposition};

pub mod pfunctions;
