//! compute degrees in and out, degree distributions and quantiles

use anyhow::anyhow;

use hdrhistogram::Histogram;
use std::collections::BTreeMap;

use crate::structure::algo::CorePeriphery;
use crate::structure::view::GraphView;

/// first component is in, second component is out!
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Degree {
    pub d_in: u32,
    pub d_out: u32,
}

impl Degree {
    fn new(d_in: u32, d_out: u32) -> Self {
        Degree { d_in, d_out }
    }
    /// get degree in
    pub fn degree_in(&self) -> u32 {
        self.d_in
    }
    /// get degree out
    pub fn degree_out(&self) -> u32 {
        self.d_out
    }
} // end of impl Degree

/// returns a vector of 2-uple consisting of degrees (in, out)
/// fist component is in, second component is out!
/// For an undirected graph both components are the degree.
pub fn get_degrees<G: GraphView>(graph: &G) -> Vec<Degree> {
    (0..graph.nb_nodes())
        .map(|v| Degree::new(graph.in_degree(v) as u32, graph.out_degree(v) as u32))
        .collect()
} // end of get_degrees

/// returns for each degree value the fraction of the sequence having this value
pub fn degree_distribution(sequence: &[usize]) -> BTreeMap<usize, f64> {
    let mut distribution = BTreeMap::<usize, f64>::new();
    if sequence.is_empty() {
        return distribution;
    }
    for d in sequence {
        *distribution.entry(*d).or_insert(0.) += 1.;
    }
    let nb = sequence.len() as f64;
    for fraction in distribution.values_mut() {
        *fraction /= nb;
    }
    distribution
} // end of degree_distribution

/// return degree histogram of a degree sequence
pub fn get_degree_histogram(sequence: &[usize]) -> anyhow::Result<Histogram<u64>> {
    let mut histo = match Histogram::<u64>::new(3) {
        Ok(histo) => histo,
        Err(e) => {
            log::error!("histogram creation failed");
            return Err(anyhow!("histogram creation failed : {:?}", e));
        }
    };
    for d in sequence {
        histo
            .record(*d as u64)
            .map_err(|e| anyhow!("could not record degree {} : {:?}", d, e))?;
    }
    Ok(histo)
} // end of get_degree_histogram

/// log::info quantiles of a degree histogram
pub fn log_degree_quantiles(histo: &Histogram<u64>, quantiles: &[f64]) {
    log::info!("nb values : {}", histo.len());
    for q in quantiles {
        log::info!(
            "fraction : {:.3e}, degree : {}",
            q,
            histo.value_at_quantile(*q)
        );
    }
} // end of log_degree_quantiles

/// Degree distributions of a graph and of its core and periphery
#[derive(Clone, Debug)]
pub struct DegreeDistributions {
    graph: BTreeMap<usize, f64>,
    periphery: BTreeMap<usize, f64>,
    core: BTreeMap<usize, f64>,
} // end of struct DegreeDistributions

impl DegreeDistributions {
    /// runs algo on graph and computes the three distributions.
    /// threshold is used only if algo is continuous.
    pub fn new<G, A>(graph: &G, algo: &A, threshold: f64) -> anyhow::Result<Self>
    where
        G: GraphView,
        A: CorePeriphery,
    {
        let degrees: Vec<usize> = (0..graph.nb_nodes()).map(|v| graph.degree(v)).collect();
        let (periphery_degrees, core_degrees) = algo.degree_sequences(graph, threshold)?;
        if log::log_enabled!(log::Level::Info) {
            let quantiles = [0.05, 0.25, 0.5, 0.75, 0.95];
            for (name, sequence) in [
                ("graph", &degrees),
                ("periphery", &periphery_degrees),
                ("core", &core_degrees),
            ] {
                log::info!("{} degrees, {} algorithm", name, algo.name());
                log_degree_quantiles(&get_degree_histogram(sequence)?, &quantiles);
            }
        }
        Ok(DegreeDistributions {
            graph: degree_distribution(&degrees),
            periphery: degree_distribution(&periphery_degrees),
            core: degree_distribution(&core_degrees),
        })
    } // end of new

    /// distribution of all degrees
    pub fn get_graph(&self) -> &BTreeMap<usize, f64> {
        &self.graph
    }

    pub fn get_periphery(&self) -> &BTreeMap<usize, f64> {
        &self.periphery
    }

    pub fn get_core(&self) -> &BTreeMap<usize, f64> {
        &self.core
    }
} // end of impl DegreeDistributions

//========================================================================================

// end of mod tests
