//! Minimum vertex cuts between two vertex sets, via the standard
//! vertex-splitting reduction to edge-capacitated maximum flow.

use super::component_avoiding;
use super::dinic::FlowNetwork;
use super::vertex_set::VertexSet;

/// Minimum (X,Y)-vertex-cut value in the graph without `deleted`, together
/// with the largest X-side region realized by a cut of that size.
///
/// Vertices in `source_side` and `target_side` are uncuttable. The returned
/// region is the set of vertices reachable from `source_side` once the cut
/// closest to `target_side` is removed; it is the unique maximal such region
/// over all minimum cuts, listed in ascending order.
///
/// Degenerate inputs (an empty side) yield `(0, {})`.
pub(crate) fn furthest_min_vertex_cut(
    adjacency: &[Vec<usize>],
    source_side: &VertexSet,
    target_side: &VertexSet,
    deleted: &VertexSet,
    budget: usize,
) -> (i64, VertexSet) {
    let n = adjacency.len();
    if source_side.is_empty() || target_side.is_empty() {
        return (0, VertexSet::new());
    }

    let mut in_source = vec![false; n];
    let mut in_target = vec![false; n];
    let mut in_deleted = vec![false; n];
    for v in source_side.iter() {
        in_source[v] = true;
    }
    for v in target_side.iter() {
        in_target[v] = true;
    }
    for v in deleted.iter() {
        in_deleted[v] = true;
    }

    // strictly larger than any achievable cut over unit vertices
    let infinity = (budget + 1).max(n + budget + 5) as i64;

    let in_id = |v: usize| 2 * v;
    let out_id = |v: usize| 2 * v + 1;
    let source_node = 2 * n;
    let sink_node = 2 * n + 1;

    let mut network = FlowNetwork::new(2 * n + 2);

    // vertex capacities
    for v in 0..n {
        if in_deleted[v] {
            continue;
        }
        let capacity = if in_source[v] || in_target[v] {
            infinity
        } else {
            1
        };
        network.add_edge(in_id(v), out_id(v), capacity);
    }

    // undirected edge gadget, both arcs added once per unordered pair
    for a in 0..n {
        if in_deleted[a] {
            continue;
        }
        for &b in &adjacency[a] {
            if a < b && !in_deleted[b] {
                network.add_edge(out_id(a), in_id(b), infinity);
                network.add_edge(out_id(b), in_id(a), infinity);
            }
        }
    }

    // super source/sink wiring
    for v in source_side.iter() {
        if !in_deleted[v] {
            network.add_edge(source_node, out_id(v), infinity);
        }
    }
    for v in target_side.iter() {
        if !in_deleted[v] {
            network.add_edge(in_id(v), sink_node, infinity);
        }
    }

    let cut_value = network.max_flow(source_node, sink_node);

    // The sink side of the residual graph determines the minimum cut closest
    // to the target: its crossing vertex gadgets are exactly the saturated
    // in->out edges entering the sink side.
    let sink_side = network.residual_coreachable_to(sink_node);
    let mut blocked = in_deleted;
    for v in 0..n {
        if !blocked[v]
            && !in_source[v]
            && !in_target[v]
            && !sink_side[in_id(v)]
            && sink_side[out_id(v)]
        {
            blocked[v] = true;
        }
    }
    let region = component_avoiding(adjacency, source_side, &blocked);

    (cut_value, region)
}
