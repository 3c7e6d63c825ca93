//! Read-only access to a graph, the only thing core decompositions need.
//!
//! Nodes are seen through their rank `0..nb_nodes`, which for petgraph is `NodeIndex::index()`.
//! The trait is implemented for petgraph [Graph](petgraph::graph::Graph), directed or not.
//!
//! For a directed graph [neighbours](GraphView::neighbours) gives neighbours in both directions,
//! so [degree](GraphView::degree) is the degree of the underlying undirected multigraph.
//! A self loop is reported once by [neighbours](GraphView::neighbours).

use std::iter::Map;

use petgraph::graph::{EdgeReference, EdgeReferences, Graph, IndexType, Neighbors, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::{Direction, EdgeType};

/// The adjacency capability required by decomposition algorithms
pub trait GraphView {
    /// iterator over ranks of neighbours of a node
    type Neighbours<'a>: Iterator<Item = usize>
    where
        Self: 'a;
    /// iterator over edges as (source rank, target rank)
    type Edges<'a>: Iterator<Item = (usize, usize)>
    where
        Self: 'a;

    /// number of nodes
    fn nb_nodes(&self) -> usize;

    fn is_directed(&self) -> bool;

    /// neighbours of node, in both directions for a directed graph. Multi edges are repeated.
    fn neighbours(&self, node: usize) -> Self::Neighbours<'_>;

    /// each edge once, in its stored orientation
    fn edge_pairs(&self) -> Self::Edges<'_>;

    /// number of neighbours as given by [neighbours](GraphView::neighbours)
    fn degree(&self, node: usize) -> usize {
        self.neighbours(node).count()
    }

    /// number of incoming edges. For undirected graph this is the degree.
    fn in_degree(&self, node: usize) -> usize;

    /// number of outgoing edges. For undirected graph this is the degree.
    fn out_degree(&self, node: usize) -> usize;
} // end of trait GraphView

fn node_rank<Ix: IndexType>(node: NodeIndex<Ix>) -> usize {
    node.index()
}

fn edge_ranks<E, Ix: IndexType>(edge: EdgeReference<'_, E, Ix>) -> (usize, usize) {
    (edge.source().index(), edge.target().index())
}

impl<N, E, Ty, Ix> GraphView for Graph<N, E, Ty, Ix>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    type Neighbours<'a> = Map<Neighbors<'a, E, Ix>, fn(NodeIndex<Ix>) -> usize>
    where
        Self: 'a;

    type Edges<'a> = Map<EdgeReferences<'a, E, Ix>, fn(EdgeReference<'a, E, Ix>) -> (usize, usize)>
    where
        Self: 'a;

    fn nb_nodes(&self) -> usize {
        self.node_count()
    }

    fn is_directed(&self) -> bool {
        Graph::is_directed(self)
    }

    fn neighbours(&self, node: usize) -> Self::Neighbours<'_> {
        self.neighbors_undirected(NodeIndex::new(node))
            .map(node_rank::<Ix> as fn(NodeIndex<Ix>) -> usize)
    }

    fn edge_pairs<'a>(&'a self) -> Self::Edges<'a> {
        self.edge_references()
            .map(edge_ranks as fn(EdgeReference<'a, E, Ix>) -> (usize, usize))
    }

    fn in_degree(&self, node: usize) -> usize {
        if Graph::is_directed(self) {
            self.neighbors_directed(NodeIndex::new(node), Direction::Incoming)
                .count()
        } else {
            self.degree(node)
        }
    }

    fn out_degree(&self, node: usize) -> usize {
        if Graph::is_directed(self) {
            self.neighbors_directed(NodeIndex::new(node), Direction::Outgoing)
                .count()
        } else {
            self.degree(node)
        }
    }
} // end of impl GraphView for Graph

//========================================================================================

#[cfg(test)]
mod tests {

    use super::*;

    use petgraph::graph::{DiGraph, UnGraph};

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn undirected_view() {
        log_init_test();
        //
        let mut graph = UnGraph::<(), ()>::from_edges(&[(0, 1), (1, 2), (2, 2), (1, 2)]);
        graph.add_node(());
        assert_eq!(graph.nb_nodes(), 4);
        assert!(!GraphView::is_directed(&graph));
        // self loop once, multi edge twice
        let mut neighbours: Vec<usize> = graph.neighbours(2).collect();
        neighbours.sort_unstable();
        assert_eq!(neighbours, vec![1, 1, 2]);
        assert_eq!(graph.degree(1), 3);
        assert_eq!(graph.degree(3), 0);
        assert_eq!(graph.in_degree(1), graph.degree(1));
        assert_eq!(graph.out_degree(0), 1);
        assert_eq!(graph.edge_pairs().count(), 4);
    } // end of undirected_view

    #[test]
    fn directed_view() {
        log_init_test();
        //
        let graph = DiGraph::<(), ()>::from_edges(&[(0, 1), (2, 1), (1, 3)]);
        assert!(GraphView::is_directed(&graph));
        assert_eq!(graph.in_degree(1), 2);
        assert_eq!(graph.out_degree(1), 1);
        assert_eq!(graph.in_degree(0), 0);
        // neighbours go both ways
        assert_eq!(graph.degree(1), 3);
        let edges: Vec<(usize, usize)> = graph.edge_pairs().collect();
        assert_eq!(edges, vec![(0, 1), (2, 1), (1, 3)]);
    } // end of directed_view
} // end of mod tests
