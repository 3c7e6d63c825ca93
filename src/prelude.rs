//! To ease access to most frequently items
//!

pub use crate::structure::view::GraphView;

pub use crate::structure::cores::*;

pub use crate::structure::richcore::{
    rich_core, rich_core_decomposition, rich_core_directed, rich_core_undirected,
    RichCoreDecomposition, RichCoreParams,
};

pub use crate::structure::partition::*;

pub use crate::structure::algo::*;

pub use crate::tools::degrees::{degree_distribution, get_degrees, Degree, DegreeDistributions};
