//! Split of vertices in core and periphery from a coreness map.
//!
//! Discrete algorithms give a 0/1 coreness, continuous (or graded) ones give a value that must be
//! compared to a threshold chosen by the caller.

use anyhow::anyhow;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::structure::view::GraphView;

/// How an algorithm reports coreness
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlgoKind {
    /// coreness is 0 (periphery) or 1 (core)
    Discrete,
    /// coreness is graded, a threshold separates core from periphery
    Continuous,
}

impl AlgoKind {
    /// the policy to use for partition. threshold is ignored for discrete algorithms
    pub fn policy(&self, threshold: f64) -> CorenessPolicy {
        match self {
            AlgoKind::Discrete => CorenessPolicy::Discrete,
            AlgoKind::Continuous => CorenessPolicy::Continuous(threshold),
        }
    }
} // end of impl AlgoKind

/// Decision rule for core membership
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CorenessPolicy {
    /// 0 is periphery, 1 is core, other values are rejected
    Discrete,
    /// coreness < threshold is periphery, >= threshold is core
    Continuous(f64),
}

/// Returns (periphery degrees, core degrees), each in increasing vertex rank.
///
/// coreness must be indexed by vertex rank and have one value per vertex.
/// Fails on a coreness value not accepted by the policy, or a non finite threshold.
pub fn partition_by_coreness<G, F>(
    graph: &G,
    coreness: &[F],
    policy: CorenessPolicy,
) -> anyhow::Result<(Vec<usize>, Vec<usize>)>
where
    G: GraphView,
    F: ToPrimitive + Copy + Debug,
{
    let nb_nodes = graph.nb_nodes();
    if coreness.len() != nb_nodes {
        return Err(anyhow!(
            "coreness has {} values, graph has {} nodes",
            coreness.len(),
            nb_nodes
        ));
    }
    if let CorenessPolicy::Continuous(threshold) = policy {
        if !threshold.is_finite() {
            return Err(anyhow!("threshold must be finite, got {}", threshold));
        }
    }
    //
    let mut periphery = Vec::<usize>::with_capacity(nb_nodes);
    let mut core = Vec::<usize>::with_capacity(nb_nodes);
    for (node, c) in coreness.iter().enumerate() {
        let value = c
            .to_f64()
            .ok_or_else(|| anyhow!("node {}, coreness {:?} not convertible", node, c))?;
        let in_core = match policy {
            CorenessPolicy::Discrete => {
                if value == 0. {
                    false
                } else if value == 1. {
                    true
                } else {
                    return Err(anyhow!(
                        "discrete coreness must be 0 or 1, node {} has {:?}",
                        node,
                        c
                    ));
                }
            }
            CorenessPolicy::Continuous(threshold) => {
                if value.is_nan() {
                    return Err(anyhow!("node {} has NaN coreness", node));
                }
                value >= threshold
            }
        };
        if in_core {
            core.push(graph.degree(node));
        } else {
            periphery.push(graph.degree(node));
        }
    }
    log::debug!(
        "partition_by_coreness {:?}, periphery : {}, core : {}",
        policy,
        periphery.len(),
        core.len()
    );
    Ok((periphery, core))
} // end of partition_by_coreness

/// Returns fraction * max(coreness) rounded to 4 decimals, to be used as a continuous threshold.
///
/// fraction must be in ]0, 1].
pub fn threshold_from_max_fraction(coreness: &[f64], fraction: f64) -> anyhow::Result<f64> {
    if !(fraction > 0. && fraction <= 1.) {
        return Err(anyhow!("fraction must be in ]0, 1], got {}", fraction));
    }
    if coreness.iter().any(|c| !c.is_finite()) {
        return Err(anyhow!("coreness values must be finite"));
    }
    let max_value = coreness
        .iter()
        .copied()
        .reduce(f64::max)
        .ok_or_else(|| anyhow!("empty coreness"))?;
    let threshold = (fraction * max_value * 1.0E4).round() / 1.0E4;
    log::info!(
        "max coreness : {:.4e}, threshold : {:.4e}",
        max_value,
        threshold
    );
    Ok(threshold)
} // end of threshold_from_max_fraction

//========================================================================================

#[cfg(test)]
mod tests {

    use super::*;

    use crate::structure::cores::degeneracy_ordering;
    use crate::structure::richcore::rich_core;
    use petgraph::graph::UnGraph;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn two_triangles() -> UnGraph<(), ()> {
        UnGraph::<(), ()>::from_edges(&[
            (0, 1),
            (0, 2),
            (0, 3),
            (0, 4),
            (1, 2),
            (3, 4),
            (4, 5),
        ])
    }

    #[test]
    fn partition_discrete() {
        log_init_test();
        //
        let graph = two_triangles();
        let indicator = rich_core(&graph, false);
        let (periphery, core) =
            partition_by_coreness(&graph, &indicator, CorenessPolicy::Discrete).unwrap();
        assert_eq!(periphery, vec![2, 2, 2, 1]);
        assert_eq!(core, vec![4, 3]);
        assert_eq!(periphery.len() + core.len(), graph.node_count());
    } // end of partition_discrete

    #[test]
    fn partition_continuous() {
        log_init_test();
        //
        let graph = two_triangles();
        let coreness = degeneracy_ordering(&graph);
        let (periphery, core) =
            partition_by_coreness(&graph, &coreness, AlgoKind::Continuous.policy(2.)).unwrap();
        assert_eq!(periphery, vec![1]);
        assert_eq!(core, vec![4, 2, 2, 2, 3]);
        //
        let scores = [0.9, 0.1, 0.5, 0.49, 0.2, 0.];
        let (periphery, core) =
            partition_by_coreness(&graph, &scores, CorenessPolicy::Continuous(0.5)).unwrap();
        assert_eq!(periphery, vec![2, 2, 3, 1]);
        assert_eq!(core, vec![4, 2]);
    } // end of partition_continuous

    #[test]
    fn partition_rejects() {
        log_init_test();
        //
        let graph = two_triangles();
        let coreness = degeneracy_ordering(&graph);
        // degeneracy values 2 are not discrete
        assert!(partition_by_coreness(&graph, &coreness, CorenessPolicy::Discrete).is_err());
        assert!(partition_by_coreness(&graph, &coreness[..3], CorenessPolicy::Discrete).is_err());
        assert!(
            partition_by_coreness(&graph, &coreness, CorenessPolicy::Continuous(f64::NAN)).is_err()
        );
        let scores = [0.9, f64::NAN, 0.5, 0.49, 0.2, 0.];
        assert!(
            partition_by_coreness(&graph, &scores, CorenessPolicy::Continuous(0.5)).is_err()
        );
        assert_eq!(AlgoKind::Discrete.policy(0.3), CorenessPolicy::Discrete);
    } // end of partition_rejects

    #[test]
    fn partition_empty() {
        log_init_test();
        //
        let graph = UnGraph::<(), ()>::default();
        let coreness: Vec<u8> = Vec::new();
        let (periphery, core) =
            partition_by_coreness(&graph, &coreness, CorenessPolicy::Discrete).unwrap();
        assert!(periphery.is_empty() && core.is_empty());
    }

    #[test]
    fn threshold_fraction() {
        log_init_test();
        //
        let threshold = threshold_from_max_fraction(&[0.2, 0.61, 0.5], 0.8).unwrap();
        assert!((threshold - 0.488).abs() < 1.0E-12);
        assert!(threshold_from_max_fraction(&[], 0.8).is_err());
        assert!(threshold_from_max_fraction(&[0.2], 0.).is_err());
        assert!(threshold_from_max_fraction(&[0.2], 1.5).is_err());
        assert!(threshold_from_max_fraction(&[f64::INFINITY], 0.5).is_err());
    } // end of threshold_fraction
} // end of mod tests
