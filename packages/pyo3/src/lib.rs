// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

mod mediator;

use std::collections::{BTreeMap, HashMap};

use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use network_communities::clustering::CommunityInfo;
use network_communities::log;
use network_communities::louvain::{
    CommunityDetection, CommunityLevel, DEFAULT_MAX_ITERATIONS, DEFAULT_MAX_LEVELS,
};
use network_communities::network::CommunityId;

use mediator::{PyLink, PyNode};

fn member_ids(community_info: BTreeMap<CommunityId, CommunityInfo>) -> BTreeMap<CommunityId, Vec<String>> {
    return community_info
        .into_iter()
        .map(|(community, info)| (community, info.nodes))
        .collect();
}

#[pyclass(name = "CommunityDetection")]
pub struct PyCommunityDetection {
    #[pyo3(get)]
    communities: BTreeMap<String, CommunityId>,
    #[pyo3(get)]
    modularity: f64,
    #[pyo3(get)]
    iterations: usize,
    #[pyo3(get)]
    community_info: BTreeMap<CommunityId, Vec<String>>,
}

impl From<CommunityDetection> for PyCommunityDetection {
    fn from(detection: CommunityDetection) -> Self {
        return PyCommunityDetection {
            communities: detection.communities,
            modularity: detection.modularity,
            iterations: detection.iterations,
            community_info: member_ids(detection.community_info),
        };
    }
}

#[pymethods]
impl PyCommunityDetection {
    fn __repr__(&self) -> PyResult<String> {
        return Ok(format!(
            "CommunityDetection(communities={}, modularity={}, iterations={})",
            self.community_info.len(),
            self.modularity,
            self.iterations,
        ));
    }

    fn __str__(&self) -> PyResult<String> {
        return self.__repr__();
    }
}

#[pyclass(name = "CommunityLevel")]
pub struct PyCommunityLevel {
    #[pyo3(get)]
    level: usize,
    #[pyo3(get)]
    communities: BTreeMap<String, CommunityId>,
    #[pyo3(get)]
    modularity: f64,
    #[pyo3(get)]
    iterations: usize,
    #[pyo3(get)]
    community_info: BTreeMap<CommunityId, Vec<String>>,
    #[pyo3(get)]
    node_ids: Vec<String>,
    #[pyo3(get)]
    links: Vec<(String, String, f64)>,
}

impl From<CommunityLevel> for PyCommunityLevel {
    fn from(level: CommunityLevel) -> Self {
        let node_ids: Vec<String> = level.nodes.into_iter().map(|node| node.id).collect();
        let links: Vec<(String, String, f64)> = level
            .links
            .iter()
            .map(|link| {
                (
                    link.source_id().to_string(),
                    link.target_id().to_string(),
                    link.weight.unwrap_or(1_f64),
                )
            })
            .collect();
        return PyCommunityLevel {
            level: level.level,
            communities: level.communities,
            modularity: level.modularity,
            iterations: level.iterations,
            community_info: member_ids(level.community_info),
            node_ids,
            links,
        };
    }
}

#[pymethods]
impl PyCommunityLevel {
    fn __repr__(&self) -> PyResult<String> {
        return Ok(format!(
            "CommunityLevel(level={}, nodes={}, communities={}, modularity={}, iterations={})",
            self.level,
            self.node_ids.len(),
            self.community_info.len(),
            self.modularity,
            self.iterations,
        ));
    }

    fn __str__(&self) -> PyResult<String> {
        return self.__repr__();
    }
}

#[pyfunction]
#[pyo3(signature = (nodes, links, /, max_iterations = DEFAULT_MAX_ITERATIONS))]
/// Partitions a network into communities with the greedy Louvain local moving phase.
///
/// Every node starts in its own community, and passes over the nodes in input order move each one
/// into the neighboring community with the best modularity gain until a pass moves nothing or
/// `max_iterations` passes have run. Links may name ids missing from `nodes`; they count toward
/// the total number of links but join nothing.
///
/// :param nodes: The nodes of the network, each an id and an optional size.
/// :type nodes: List[Tuple[str, Optional[float]]]
/// :param links: The links of the network as source and target ids.
/// :type links: List[Tuple[str, str]]
/// :param int max_iterations: Default is `100`. The maximum number of local moving passes. When
///     `iterations` equals this value the passes had not converged.
/// :return: The community of every node, the modularity of the partition, the number of passes run
///     and the member ids of every community.
/// :rtype: CommunityDetection
fn detect_communities(
    py: Python,
    nodes: Vec<PyNode>,
    links: Vec<PyLink>,
    max_iterations: usize,
) -> PyResult<PyCommunityDetection> {
    let detection: CommunityDetection =
        py.allow_threads(move || mediator::detect_communities(nodes, links, max_iterations));
    return Ok(PyCommunityDetection::from(detection));
}

#[pyfunction]
#[pyo3(signature = (nodes, links, /, max_levels = DEFAULT_MAX_LEVELS))]
/// Runs `detect_communities` on the network, then collapses each community into a super-node and
/// the links between communities into weighted super-links, and runs detection again on that
/// super-graph, for at most `max_levels` levels. Stops early once a level ends with a single
/// community.
///
/// :param nodes: The nodes of the network, each an id and an optional size.
/// :type nodes: List[Tuple[str, Optional[float]]]
/// :param links: The links of the network as source and target ids.
/// :type links: List[Tuple[str, str]]
/// :param int max_levels: Default is `3`. The maximum number of levels.
/// :return: One entry per level, including the ids of the nodes and the weighted links of the graph
///     each level was computed on.
/// :rtype: List[CommunityLevel]
fn detect_communities_multi_level(
    py: Python,
    nodes: Vec<PyNode>,
    links: Vec<PyLink>,
    max_levels: usize,
) -> PyResult<Vec<PyCommunityLevel>> {
    let levels: Vec<CommunityLevel> = py.allow_threads(move || {
        mediator::detect_communities_multi_level(nodes, links, max_levels)
    });
    log!("Returning {} levels to Python", levels.len());
    return Ok(levels.into_iter().map(PyCommunityLevel::from).collect());
}

#[pyfunction]
/// Measures the modularity of a partitioning of a network.
///
/// :param nodes: The nodes of the network, each an id and an optional size.
/// :type nodes: List[Tuple[str, Optional[float]]]
/// :param links: The links of the network as source and target ids.
/// :type links: List[Tuple[str, str]]
/// :param communities: The community of each node. Nodes without an entry belong to no community.
/// :type communities: Dict[str, int]
/// :return: The modularity of the partitioning.
/// :rtype: float
fn modularity(
    py: Python,
    nodes: Vec<PyNode>,
    links: Vec<PyLink>,
    communities: HashMap<String, CommunityId>,
) -> PyResult<f64> {
    return Ok(py.allow_threads(move || mediator::modularity(nodes, links, communities)));
}

/// ecosystem_network_native provides Louvain community detection, multi-level community
/// aggregation and modularity scoring for ecosystem networks.
#[pymodule]
fn ecosystem_network_native(
    _py: Python,
    module: &PyModule,
) -> PyResult<()> {
    module.add_class::<PyCommunityDetection>()?;
    module.add_class::<PyCommunityLevel>()?;
    module.add_function(wrap_pyfunction!(detect_communities, module)?)?;
    module.add_function(wrap_pyfunction!(detect_communities_multi_level, module)?)?;
    module.add_function(wrap_pyfunction!(modularity, module)?)?;
    return Ok(());
}
