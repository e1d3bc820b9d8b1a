//! Enumeration of important vertex separators between two terminals of an
//! undirected graph, plus the component query that rates a separator by the
//! region it encloses.

use std::collections::VecDeque;

use petgraph::visit::{EdgeRef, IntoEdgeReferences, NodeCount, NodeIndexable};
use tracing::debug;

pub mod dinic;
mod important_separator;
mod vertex_cut;
pub mod vertex_set;

pub use self::vertex_set::VertexSet;

use self::important_separator::SeparatorSearch;
use crate::error::SeparatorError;

/// All important `(source, destination)`-separators of size at most `k`.
///
/// A separator is a vertex set disjoint from the terminals whose removal
/// disconnects them; it is *important* when it is minimal and no separator of
/// at most the same size leaves a strictly larger component around `source`.
/// The returned family is canonical: every set ascending, the family
/// deduplicated and ordered, at most `4^k` entries.
///
/// Equal terminals yield the family containing only the empty set. Terminals
/// outside the vertex range are rejected.
pub fn important_separators<G>(
    graph: G,
    source: usize,
    destination: usize,
    k: usize,
) -> Result<Vec<VertexSet>, SeparatorError>
where
    G: NodeCount + NodeIndexable + IntoEdgeReferences,
{
    let order = graph.node_count();
    for terminal in [source, destination] {
        if terminal >= order {
            return Err(SeparatorError::TerminalOutOfRange { terminal, order });
        }
    }
    if source == destination {
        return Ok(vec![VertexSet::new()]);
    }

    let adjacency = adjacency_list(graph);
    debug!(order, source, destination, k, "enumerating important separators");

    let mut search = SeparatorSearch::new(&adjacency);
    let family = search.run(
        VertexSet::singleton(source),
        VertexSet::singleton(destination),
        k,
    );
    let family = filter_important(&adjacency, source, family);
    debug!(count = family.len(), "enumeration finished");
    Ok(family)
}

/// Connected component of `source` once the separator is removed, ascending.
/// Empty when the separator contains `source` itself.
pub fn source_component<G>(graph: G, source: usize, separator: &VertexSet) -> VertexSet
where
    G: NodeCount + NodeIndexable + IntoEdgeReferences,
{
    if separator.contains(source) {
        return VertexSet::new();
    }
    let adjacency = adjacency_list(graph);
    let mut blocked = vec![false; adjacency.len()];
    for v in separator.iter() {
        blocked[v] = true;
    }
    component_avoiding(&adjacency, &VertexSet::singleton(source), &blocked)
}

/// Flatten any indexable petgraph graph into plain adjacency lists, treating
/// every edge as undirected. Isolated vertices keep their slots.
pub(crate) fn adjacency_list<G>(graph: G) -> Vec<Vec<usize>>
where
    G: NodeCount + NodeIndexable + IntoEdgeReferences,
{
    let mut adjacency = vec![Vec::new(); graph.node_bound()];
    for edge in graph.edge_references() {
        let a = NodeIndexable::to_index(&graph, edge.source());
        let b = NodeIndexable::to_index(&graph, edge.target());
        adjacency[a].push(b);
        adjacency[b].push(a);
    }
    adjacency
}

/// Is there a path from `x` to `y` once the vertices in `deleted` are gone?
pub(crate) fn exists_path_avoiding(
    adjacency: &[Vec<usize>],
    x: &VertexSet,
    y: &VertexSet,
    deleted: &VertexSet,
) -> bool {
    let n = adjacency.len();
    let mut target = vec![false; n];
    for v in y.iter() {
        target[v] = true;
    }
    let mut seen = vec![false; n];
    for v in deleted.iter() {
        seen[v] = true;
    }

    let mut queue = VecDeque::new();
    for v in x.iter() {
        if !seen[v] {
            seen[v] = true;
            queue.push_back(v);
        }
    }
    while let Some(u) = queue.pop_front() {
        if target[u] {
            return true;
        }
        for &w in &adjacency[u] {
            if !seen[w] {
                seen[w] = true;
                queue.push_back(w);
            }
        }
    }
    false
}

/// BFS closure of `seeds` in the graph restricted to non-blocked vertices,
/// returned in ascending order. Seeds that are themselves blocked are skipped.
pub(crate) fn component_avoiding(
    adjacency: &[Vec<usize>],
    seeds: &VertexSet,
    blocked: &[bool],
) -> VertexSet {
    let mut seen = vec![false; adjacency.len()];
    let mut queue = VecDeque::new();
    for v in seeds.iter() {
        if !blocked[v] && !seen[v] {
            seen[v] = true;
            queue.push_back(v);
        }
    }
    while let Some(u) = queue.pop_front() {
        for &w in &adjacency[u] {
            if !seen[w] && !blocked[w] {
                seen[w] = true;
                queue.push_back(w);
            }
        }
    }
    (0..adjacency.len()).filter(|&v| seen[v]).collect()
}

/// Keep only the Pareto optima in (size, enclosed region): a separator is
/// dropped when another family member of at most the same size encloses a
/// superset region, and one of the two comparisons is strict.
fn filter_important(
    adjacency: &[Vec<usize>],
    source: usize,
    family: Vec<VertexSet>,
) -> Vec<VertexSet> {
    let components: Vec<VertexSet> = family
        .iter()
        .map(|separator| {
            let mut blocked = vec![false; adjacency.len()];
            for v in separator.iter() {
                blocked[v] = true;
            }
            component_avoiding(adjacency, &VertexSet::singleton(source), &blocked)
        })
        .collect();

    family
        .iter()
        .enumerate()
        .filter(|(i, separator)| {
            !family.iter().enumerate().any(|(j, other)| {
                j != *i
                    && other.len() <= separator.len()
                    && components[j].is_superset(&components[*i])
                    && (other.len() < separator.len()
                        || components[j].is_strict_superset(&components[*i]))
            })
        })
        .map(|(_, separator)| separator.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::graph::UnGraph;

    fn vset(items: &[usize]) -> VertexSet {
        items.iter().copied().collect()
    }

    #[test]
    fn adjacency_list_keeps_isolated_vertices() {
        let mut graph = UnGraph::<(), ()>::new_undirected();
        let a = graph.add_node(());
        graph.add_node(());
        let c = graph.add_node(());
        graph.add_edge(a, c, ());

        let adjacency = adjacency_list(&graph);
        assert_eq!(adjacency.len(), 3);
        assert_eq!(adjacency[0], vec![2]);
        assert!(adjacency[1].is_empty());
        assert_eq!(adjacency[2], vec![0]);
    }

    #[test]
    fn path_probe_respects_deleted_vertices() {
        let graph = UnGraph::<(), ()>::from_edges(&[(0, 1), (1, 2), (2, 3)]);
        let adjacency = adjacency_list(&graph);

        assert!(exists_path_avoiding(
            &adjacency,
            &vset(&[0]),
            &vset(&[3]),
            &VertexSet::new()
        ));
        assert!(!exists_path_avoiding(
            &adjacency,
            &vset(&[0]),
            &vset(&[3]),
            &vset(&[2])
        ));
        // a deleted target is unreachable even when adjacent
        assert!(!exists_path_avoiding(
            &adjacency,
            &vset(&[0]),
            &vset(&[1]),
            &vset(&[1])
        ));
    }

    #[test]
    fn source_component_excludes_separator_side() {
        let graph = UnGraph::<(), ()>::from_edges(&[(0, 1), (1, 2), (2, 3), (3, 4)]);
        let component = source_component(&graph, 0, &vset(&[3]));
        assert_eq!(component, vset(&[0, 1, 2]));
    }

    #[test]
    fn source_component_is_empty_when_source_removed() {
        let graph = UnGraph::<(), ()>::from_edges(&[(0, 1), (1, 2)]);
        assert!(source_component(&graph, 1, &vset(&[1])).is_empty());
    }

    #[test]
    fn source_component_of_disconnected_vertex() {
        let mut graph = UnGraph::<(), ()>::new_undirected();
        graph.add_node(());
        graph.add_node(());
        assert_eq!(source_component(&graph, 0, &VertexSet::new()), vset(&[0]));
    }

    #[test]
    fn filter_drops_dominated_separators() {
        let graph = UnGraph::<(), ()>::from_edges(&[(0, 1), (1, 2), (2, 3), (3, 4)]);
        let adjacency = adjacency_list(&graph);
        // {1} and {3} both cut the path; {3} encloses the larger region
        let family = vec![vset(&[1]), vset(&[3])];
        assert_eq!(filter_important(&adjacency, 0, family), vec![vset(&[3])]);
    }

    #[test]
    fn filter_drops_padded_separators() {
        let graph = UnGraph::<(), ()>::from_edges(&[(0, 1), (1, 2), (1, 3)]);
        let adjacency = adjacency_list(&graph);
        // {1,3} encloses the same region as {1} at a larger size
        let family = vec![vset(&[1]), vset(&[1, 3])];
        assert_eq!(filter_important(&adjacency, 0, family), vec![vset(&[1])]);
    }

    #[test]
    fn filter_keeps_incomparable_separators() {
        let graph = UnGraph::<(), ()>::from_edges(&[(0, 1), (1, 2), (2, 3), (1, 4), (4, 3)]);
        let adjacency = adjacency_list(&graph);
        // {1} is smaller, {2,4} encloses more; neither dominates the other
        let family = vec![vset(&[1]), vset(&[2, 4])];
        assert_eq!(filter_important(&adjacency, 0, family.clone()), family);
    }

    #[test]
    fn rejects_out_of_range_terminals() {
        let graph = UnGraph::<(), ()>::from_edges(&[(0, 1)]);
        assert!(important_separators(&graph, 0, 2, 1).is_err());
        assert!(important_separators(&graph, 5, 1, 1).is_err());
    }

    #[test]
    fn equal_terminals_yield_the_empty_separator() {
        let graph = UnGraph::<(), ()>::from_edges(&[(0, 1), (1, 2)]);
        let family = important_separators(&graph, 1, 1, 0).unwrap();
        assert_eq!(family, vec![VertexSet::new()]);
    }
}
