//! Core periphery algorithms behind a common trait.
//!
//! Each algorithm carries its [AlgoKind] so the partition policy follows from the algorithm itself.

use serde::{Deserialize, Serialize};

use crate::structure::cores::degeneracy_ordering;
use crate::structure::partition::{partition_by_coreness, AlgoKind};
use crate::structure::richcore::{rich_core_decomposition, RichCoreParams};
use crate::structure::view::GraphView;

/// A core periphery decomposition algorithm
pub trait CorePeriphery {
    /// name used in logs
    fn name(&self) -> &str;

    /// discrete or continuous coreness
    fn kind(&self) -> AlgoKind;

    /// coreness of each vertex, indexed by vertex rank
    fn coreness<G: GraphView>(&self, graph: &G) -> Vec<f64>;

    /// computes coreness and returns (periphery degrees, core degrees).
    /// threshold is used only by continuous algorithms.
    fn degree_sequences<G: GraphView>(
        &self,
        graph: &G,
        threshold: f64,
    ) -> anyhow::Result<(Vec<usize>, Vec<usize>)> {
        let coreness = self.coreness(graph);
        log::info!("{} coreness computed, kind : {:?}", self.name(), self.kind());
        partition_by_coreness(graph, &coreness, self.kind().policy(threshold))
    }
} // end of trait CorePeriphery

/// Degeneracy (k-core) decomposition, coreness is the graded core number.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct Degeneracy;

impl CorePeriphery for Degeneracy {
    fn name(&self) -> &str {
        "Degeneracy"
    }

    fn kind(&self) -> AlgoKind {
        AlgoKind::Continuous
    }

    fn coreness<G: GraphView>(&self, graph: &G) -> Vec<f64> {
        degeneracy_ordering(graph)
            .into_iter()
            .map(|c| c as f64)
            .collect()
    }
} // end of impl CorePeriphery for Degeneracy

/// Rich-core detection, coreness is 0 or 1.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct RichCore {
    params: RichCoreParams,
}

impl RichCore {
    pub fn new(params: RichCoreParams) -> Self {
        RichCore { params }
    }

    pub fn get_params(&self) -> &RichCoreParams {
        &self.params
    }
} // end of impl RichCore

impl CorePeriphery for RichCore {
    fn name(&self) -> &str {
        "Rich-core"
    }

    fn kind(&self) -> AlgoKind {
        AlgoKind::Discrete
    }

    fn coreness<G: GraphView>(&self, graph: &G) -> Vec<f64> {
        rich_core_decomposition(graph, &self.params)
            .into_core_indicator()
            .into_iter()
            .map(f64::from)
            .collect()
    }
} // end of impl CorePeriphery for RichCore

//========================================================================================

#[cfg(test)]
mod tests {

    use super::*;

    use petgraph::graph::{DiGraph, UnGraph};

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn algo_kinds() {
        log_init_test();
        //
        assert_eq!(Degeneracy.kind(), AlgoKind::Continuous);
        assert_eq!(RichCore::default().kind(), AlgoKind::Discrete);
        assert!(!RichCore::default().get_params().is_directed());
    }

    #[test]
    fn algo_degree_sequences() {
        log_init_test();
        //
        let graph = UnGraph::<(), ()>::from_edges(&[
            (0, 1),
            (0, 2),
            (0, 3),
            (0, 4),
            (1, 2),
            (3, 4),
            (4, 5),
        ]);
        let (periphery, core) = Degeneracy.degree_sequences(&graph, 2.).unwrap();
        assert_eq!(periphery, vec![1]);
        assert_eq!(core.len(), 5);
        // threshold is ignored
        let (periphery, core) = RichCore::default().degree_sequences(&graph, 1000.).unwrap();
        assert_eq!(core, vec![4, 3]);
        assert_eq!(periphery.len() + core.len(), graph.node_count());
    } // end of algo_degree_sequences

    #[test]
    fn algo_rich_core_directed() {
        log_init_test();
        //
        let graph =
            DiGraph::<(), ()>::from_edges(&[(0, 1), (2, 1), (3, 1), (1, 0), (3, 0), (2, 3)]);
        let algo = RichCore::new(RichCoreParams::new(true));
        assert_eq!(algo.coreness(&graph), vec![0., 1., 0., 0.]);
    }
} // end of mod tests
