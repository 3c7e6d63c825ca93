//! Rich-core detection, see Ma Mondragon _Rich-cores in networks_ PLoS One 2015.
//!
//! Vertices are ranked by decreasing degree (in-degree for directed graphs), vertices of equal
//! degree sharing the same rank. For each vertex we count links going to vertices of strictly
//! better (numerically smaller) rank. The vertex $r^*$ maximizing this count gives the boundary:
//! the rich core is the set of vertices ranked strictly before $r^*$. $r^*$ itself is in the periphery.
//!
//! The result is a binary indicator, 1 for core and 0 for periphery.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::structure::view::GraphView;

/// Parameters of rich-core detection
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RichCoreParams {
    /// rank on in-degree and count in and out links separately
    directed: bool,
} // end of RichCoreParams

impl RichCoreParams {
    pub fn new(directed: bool) -> Self {
        RichCoreParams { directed }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }
} // end of impl RichCoreParams

impl Default for RichCoreParams {
    fn default() -> Self {
        RichCoreParams { directed: false }
    }
}

/// Counts of links to better ranked vertices, for directed detection.
#[derive(Clone, Debug)]
pub struct DirectedLinks {
    /// for each vertex, number of arcs received from a better ranked vertex
    sigma_in: Vec<usize>,
    /// for each vertex, number of arcs sent to a better ranked vertex
    sigma_out: Vec<usize>,
}

impl DirectedLinks {
    pub fn get_sigma_in(&self) -> &[usize] {
        &self.sigma_in
    }

    pub fn get_sigma_out(&self) -> &[usize] {
        &self.sigma_out
    }
} // end of impl DirectedLinks

/// Full result of rich-core detection
#[derive(Clone, Debug)]
pub struct RichCoreDecomposition {
    /// rank of each vertex, 0 for largest degree
    ranks: Vec<usize>,
    /// number of links to better ranked vertices. For directed detection sigma_in + sigma_out
    upward: Vec<usize>,
    /// split of upward links, only for directed detection
    directed: Option<DirectedLinks>,
    /// vertex maximizing upward, None for an empty graph
    maximizer: Option<usize>,
    /// 1 for core vertices, 0 for periphery
    indicator: Vec<u8>,
} // end of struct RichCoreDecomposition

impl RichCoreDecomposition {
    fn new(ranks: Vec<usize>, upward: Vec<usize>, directed: Option<DirectedLinks>) -> Self {
        let maximizer = first_argmax(&upward);
        let indicator = match maximizer {
            Some(r_star) => {
                let boundary = ranks[r_star];
                ranks
                    .iter()
                    .map(|r| if *r < boundary { 1u8 } else { 0u8 })
                    .collect()
            }
            None => Vec::new(),
        };
        RichCoreDecomposition {
            ranks,
            upward,
            directed,
            maximizer,
            indicator,
        }
    } // end of new

    /// rank of each vertex
    pub fn get_ranks(&self) -> &[usize] {
        &self.ranks
    }

    /// number of links of each vertex to better ranked vertices
    pub fn get_upward_links(&self) -> &[usize] {
        &self.upward
    }

    /// in and out counts of upward links, if detection was directed
    pub fn get_directed_links(&self) -> Option<&DirectedLinks> {
        self.directed.as_ref()
    }

    /// the vertex r* whose rank is the core boundary
    pub fn get_maximizer(&self) -> Option<usize> {
        self.maximizer
    }

    /// 1 for core, 0 for periphery, indexed by vertex rank
    pub fn get_core_indicator(&self) -> &[u8] {
        &self.indicator
    }

    /// number of vertices in the core
    pub fn get_core_size(&self) -> usize {
        self.indicator.iter().filter(|c| **c == 1).count()
    }

    pub fn into_core_indicator(self) -> Vec<u8> {
        self.indicator
    }
} // end of impl RichCoreDecomposition

// first vertex reaching the maximal value
fn first_argmax(values: &[usize]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (v, value) in values.iter().enumerate() {
        match best {
            Some(b) if values[b] >= *value => {}
            _ => best = Some(v),
        }
    }
    best
} // end of first_argmax

/// Ranks keys by decreasing value. Equal keys share a rank, ranks are consecutive from 0.
pub fn get_ranks(keys: &[usize]) -> Vec<usize> {
    let mut distinct = keys.to_vec();
    distinct.sort_unstable_by(|a, b| b.cmp(a));
    distinct.dedup();
    let ranking: HashMap<usize, usize> = distinct
        .iter()
        .enumerate()
        .map(|(rank, key)| (*key, rank))
        .collect();
    log::debug!("get_ranks nb distinct keys : {}", distinct.len());
    keys.iter().map(|key| ranking[key]).collect()
} // end of get_ranks

/// Undirected rich-core detection.
///
/// A link (u,v) with rank\[u\] < rank\[v\] is counted for v, links between equal ranks are not counted.
pub fn rich_core_undirected<G: GraphView>(graph: &G) -> RichCoreDecomposition {
    let nb_nodes = graph.nb_nodes();
    log::info!("entering rich_core_undirected, nb_nodes : {}", nb_nodes);
    //
    let degrees: Vec<usize> = (0..nb_nodes).map(|v| graph.degree(v)).collect();
    let ranks = get_ranks(&degrees);
    let mut kplus = vec![0usize; nb_nodes];
    for (u, v) in graph.edge_pairs() {
        if ranks[u] < ranks[v] {
            kplus[v] += 1;
        } else if ranks[v] < ranks[u] {
            kplus[u] += 1;
        }
    }
    let decomposition = RichCoreDecomposition::new(ranks, kplus, None);
    log::info!(
        "rich_core_undirected r* : {:?}, core size : {}",
        decomposition.get_maximizer(),
        decomposition.get_core_size()
    );
    decomposition
} // end of rich_core_undirected

/// Directed rich-core detection, vertices are ranked by in-degree.
///
/// For an arc u -> v :
/// - if v is strictly better ranked than u, the arc is counted in sigma_out\[u\]
/// - if u is strictly better ranked than v, the arc is counted in sigma_in\[v\]
/// - arcs between equal ranks are not counted.
///
/// The vertex count used for maximization is sigma_in + sigma_out.
pub fn rich_core_directed<G: GraphView>(graph: &G) -> RichCoreDecomposition {
    let nb_nodes = graph.nb_nodes();
    log::info!("entering rich_core_directed, nb_nodes : {}", nb_nodes);
    //
    let in_degrees: Vec<usize> = (0..nb_nodes).map(|v| graph.in_degree(v)).collect();
    let ranks = get_ranks(&in_degrees);
    let mut sigma_in = vec![0usize; nb_nodes];
    let mut sigma_out = vec![0usize; nb_nodes];
    for (u, v) in graph.edge_pairs() {
        if ranks[v] < ranks[u] {
            sigma_out[u] += 1;
        } else if ranks[u] < ranks[v] {
            sigma_in[v] += 1;
        }
    }
    let sigma_total: Vec<usize> = sigma_in
        .iter()
        .zip(sigma_out.iter())
        .map(|(i, o)| i + o)
        .collect();
    let decomposition = RichCoreDecomposition::new(
        ranks,
        sigma_total,
        Some(DirectedLinks {
            sigma_in,
            sigma_out,
        }),
    );
    log::info!(
        "rich_core_directed r* : {:?}, core size : {}",
        decomposition.get_maximizer(),
        decomposition.get_core_size()
    );
    decomposition
} // end of rich_core_directed

/// rich-core detection with parameters
pub fn rich_core_decomposition<G: GraphView>(
    graph: &G,
    params: &RichCoreParams,
) -> RichCoreDecomposition {
    if params.is_directed() != graph.is_directed() {
        log::warn!(
            "rich core detection with directed : {}, on a graph with directed : {}",
            params.is_directed(),
            graph.is_directed()
        );
    }
    if params.is_directed() {
        rich_core_directed(graph)
    } else {
        rich_core_undirected(graph)
    }
} // end of rich_core_decomposition

/// returns the core indicator (1 core, 0 periphery) of each vertex
pub fn rich_core<G: GraphView>(graph: &G, directed: bool) -> Vec<u8> {
    rich_core_decomposition(graph, &RichCoreParams::new(directed)).into_core_indicator()
}

//========================================================================================

#[cfg(test)]
mod tests {

    use super::*;

    use petgraph::graph::{DiGraph, UnGraph};

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn ranks_with_ties() {
        log_init_test();
        //
        let ranks = get_ranks(&[4, 2, 2, 7, 0, 4]);
        assert_eq!(ranks, vec![1, 2, 2, 0, 3, 1]);
        assert!(get_ranks(&[]).is_empty());
    }

    #[test]
    fn argmax_first() {
        assert_eq!(first_argmax(&[0, 2, 1, 2]), Some(1));
        assert_eq!(first_argmax(&[0, 0]), Some(0));
        assert_eq!(first_argmax(&[]), None);
    }

    #[test]
    fn rich_core_undirected_small() {
        log_init_test();
        //
        // triangles 0,1,2 and 0,3,4 with a pendant 5 on 4
        let graph = UnGraph::<(), ()>::from_edges(&[
            (0, 1),
            (0, 2),
            (0, 3),
            (0, 4),
            (1, 2),
            (3, 4),
            (4, 5),
        ]);
        let decomposition = rich_core_undirected(&graph);
        assert_eq!(decomposition.get_ranks(), &[0, 2, 2, 2, 1, 3]);
        assert_eq!(decomposition.get_upward_links(), &[0, 1, 1, 2, 1, 1]);
        assert_eq!(decomposition.get_maximizer(), Some(3));
        assert_eq!(decomposition.get_core_indicator(), &[1, 0, 0, 0, 1, 0]);
        assert_eq!(decomposition.get_core_size(), 2);
        assert!(decomposition.get_directed_links().is_none());
        assert_eq!(rich_core(&graph, false), vec![1, 0, 0, 0, 1, 0]);
    } // end of rich_core_undirected_small

    #[test]
    fn rich_core_star() {
        log_init_test();
        //
        let graph = UnGraph::<(), ()>::from_edges(&[(0, 1), (0, 2), (0, 3), (0, 4)]);
        let indicator = rich_core(&graph, false);
        // leaves each have one upward link, first leaf is r*
        assert_eq!(indicator, vec![1, 0, 0, 0, 0]);
    }

    #[test]
    fn rich_core_periphery_not_empty() {
        log_init_test();
        //
        let graphs = vec![
            UnGraph::<(), ()>::from_edges(&[(0, 1)]),
            UnGraph::<(), ()>::from_edges(&[(0, 1), (1, 2), (2, 0)]),
            UnGraph::<(), ()>::from_edges(&[(0, 1), (1, 2), (2, 3), (3, 4), (1, 3), (0, 0)]),
        ];
        for graph in &graphs {
            let decomposition = rich_core_undirected(graph);
            let r_star = decomposition.get_maximizer().unwrap();
            assert_eq!(decomposition.get_core_indicator()[r_star], 0);
            assert!(decomposition.get_core_size() < graph.node_count());
        }
    } // end of rich_core_periphery_not_empty

    #[test]
    fn rich_core_empty_and_edgeless() {
        log_init_test();
        //
        let graph = UnGraph::<(), ()>::default();
        assert!(rich_core(&graph, false).is_empty());
        assert!(rich_core(&graph, true).is_empty());
        let mut graph = UnGraph::<(), ()>::default();
        graph.add_node(());
        graph.add_node(());
        assert_eq!(rich_core(&graph, false), vec![0, 0]);
    } // end of rich_core_empty_and_edgeless

    // fixes the attribution rule of arcs to sigma_in and sigma_out
    #[test]
    fn rich_core_directed_attribution() {
        log_init_test();
        //
        // in-degrees : 0 -> 2, 1 -> 3, 2 -> 0, 3 -> 1
        let graph =
            DiGraph::<(), ()>::from_edges(&[(0, 1), (2, 1), (3, 1), (1, 0), (3, 0), (2, 3)]);
        let decomposition = rich_core_directed(&graph);
        assert_eq!(decomposition.get_ranks(), &[1, 0, 3, 2]);
        let links = decomposition.get_directed_links().unwrap();
        assert_eq!(links.get_sigma_out(), &[1, 0, 2, 2]);
        assert_eq!(links.get_sigma_in(), &[1, 0, 0, 0]);
        assert_eq!(decomposition.get_upward_links(), &[2, 0, 2, 2]);
        assert_eq!(decomposition.get_maximizer(), Some(0));
        assert_eq!(decomposition.get_core_indicator(), &[0, 1, 0, 0]);
        assert_eq!(rich_core(&graph, true), vec![0, 1, 0, 0]);
    } // end of rich_core_directed_attribution

    #[test]
    fn rich_core_params() {
        log_init_test();
        //
        let params = RichCoreParams::default();
        assert!(!params.is_directed());
        let graph = DiGraph::<(), ()>::from_edges(&[(0, 1), (2, 1)]);
        // mismatch only warns
        let decomposition = rich_core_decomposition(&graph, &params);
        assert!(decomposition.get_directed_links().is_none());
        assert_eq!(decomposition.get_core_indicator().len(), 3);
    }
} // end of mod tests
