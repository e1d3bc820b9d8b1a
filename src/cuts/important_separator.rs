//! Recursive branch-and-bound enumeration of important separators.
//!
//! The search state is (X, Y, k, D): the committed source side X, the target
//! side Y, the remaining budget and the vertices D already moved into the
//! separator under construction. Each step locates the minimum cut pushed
//! furthest from X and branches on one of its vertices: either the vertex
//! joins the separator (budget shrinks) or it is committed to the source side
//! (the enclosed region grows). Both measures are bounded, which caps the
//! number of enumerated sets at 4^k.

use std::collections::BTreeSet;

use fxhash::FxHashMap;
use tracing::trace;

use super::vertex_cut::furthest_min_vertex_cut;
use super::vertex_set::VertexSet;
use super::exists_path_avoiding;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SearchKey {
    budget: usize,
    source_side: VertexSet,
    target_side: VertexSet,
    deleted: VertexSet,
}

pub(crate) struct SeparatorSearch<'a> {
    adjacency: &'a [Vec<usize>],
    memo: FxHashMap<SearchKey, Vec<VertexSet>>,
}

impl<'a> SeparatorSearch<'a> {
    pub(crate) fn new(adjacency: &'a [Vec<usize>]) -> Self {
        Self {
            adjacency,
            memo: FxHashMap::default(),
        }
    }

    pub(crate) fn run(
        &mut self,
        source_side: VertexSet,
        target_side: VertexSet,
        budget: usize,
    ) -> Vec<VertexSet> {
        self.recurse(source_side, target_side, budget, VertexSet::new())
    }

    fn recurse(
        &mut self,
        source_side: VertexSet,
        target_side: VertexSet,
        budget: usize,
        deleted: VertexSet,
    ) -> Vec<VertexSet> {
        let key = SearchKey {
            budget,
            source_side: source_side.clone(),
            target_side: target_side.clone(),
            deleted: deleted.clone(),
        };
        if let Some(cached) = self.memo.get(&key) {
            return cached.clone();
        }

        let family = self.branch(source_side, target_side, budget, deleted);
        self.memo.insert(key, family.clone());
        family
    }

    fn branch(
        &mut self,
        source_side: VertexSet,
        target_side: VertexSet,
        budget: usize,
        deleted: VertexSet,
    ) -> Vec<VertexSet> {
        // nothing left to cut: the sides are already apart
        if !exists_path_avoiding(self.adjacency, &source_side, &target_side, &deleted) {
            return vec![VertexSet::new()];
        }

        let (cut_value, region) =
            furthest_min_vertex_cut(self.adjacency, &source_side, &target_side, &deleted, budget);
        if cut_value > budget as i64 {
            return Vec::new();
        }

        let Some(pivot) =
            self.pick_boundary_vertex(&region, &source_side, &target_side, &deleted)
        else {
            // connected states always expose a pivot; kept as a safe fallback
            return vec![VertexSet::new()];
        };
        trace!(budget, cut_value, pivot, "branching");

        let mut family = BTreeSet::new();

        // the pivot joins the separator
        if budget > 0 {
            let separators = self.recurse(
                source_side.clone(),
                target_side.clone(),
                budget - 1,
                deleted.with(pivot),
            );
            for separator in separators {
                family.insert(separator.with(pivot));
            }
        }

        // the pivot is committed to the source side
        let separators = self.recurse(source_side.with(pivot), target_side, budget, deleted);
        for separator in separators {
            family.insert(separator);
        }

        family.into_iter().collect()
    }

    /// First vertex outside `region`, the sides and `deleted` that neighbors
    /// the region; scans the region ascending and each adjacency list in
    /// stored order, so the choice is reproducible.
    fn pick_boundary_vertex(
        &self,
        region: &VertexSet,
        source_side: &VertexSet,
        target_side: &VertexSet,
        deleted: &VertexSet,
    ) -> Option<usize> {
        let mut in_region = vec![false; self.adjacency.len()];
        for v in region.iter() {
            in_region[v] = true;
        }
        for u in region.iter() {
            for &v in &self.adjacency[u] {
                if !in_region[v]
                    && !source_side.contains(v)
                    && !target_side.contains(v)
                    && !deleted.contains(v)
                {
                    return Some(v);
                }
            }
        }
        None
    }
}
