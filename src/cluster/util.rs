use crate::point::{euclidean, Point};

/// MST edge `(a, b, weight)` over point indices.
pub type Edge = (usize, usize, f64);

#[derive(Clone, Debug)]
pub(crate) struct UnionFind {
    pub(crate) parent: Vec<usize>,
    pub(crate) size: Vec<usize>,
}

impl UnionFind {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    pub(crate) fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            let root = self.find(self.parent[x]);
            self.parent[x] = root;
        }
        self.parent[x]
    }

    pub(crate) fn union(&mut self, a: usize, b: usize) -> usize {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return ra;
        }

        // Union by size.
        let (mut big, mut small) = (ra, rb);
        if self.size[big] < self.size[small] {
            std::mem::swap(&mut big, &mut small);
        }

        self.parent[small] = big;
        self.size[big] += self.size[small];
        big
    }

    /// Size of the component containing `x`.
    pub(crate) fn component_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }
}

/// Dense row-major `n x n` matrix of pairwise Euclidean distances.
pub(crate) fn pairwise_distances(points: &[Point]) -> Vec<f64> {
    let n = points.len();
    let mut dists = vec![0.0f64; n * n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = euclidean(&points[i], &points[j]);
            dists[i * n + j] = d;
            dists[j * n + i] = d;
        }
    }
    dists
}

/// Indices of all points other than `idx` within `radius` of it, ascending.
pub(crate) fn region_query(points: &[Point], idx: usize, radius: f64) -> Vec<usize> {
    let p = &points[idx];
    points
        .iter()
        .enumerate()
        .filter(|(j, other)| *j != idx && euclidean(p, other) <= radius)
        .map(|(j, _)| j)
        .collect()
}

/// Compute an MST for a dense complete graph using Prim's algorithm, starting at vertex 0.
///
/// `dist_fn(i, j)` returns the edge weight between points `i` and `j`. Weights may be
/// infinite; such vertices are still attached, through an infinite-weight edge.
/// Ties pick the lowest-index vertex, and the earliest tree vertex as its parent, so the
/// tree is reproducible for a fixed input.
///
/// Returns `n - 1` edges `(parent, child, weight)` in the order vertices joined the tree.
pub(crate) fn prim_mst(n: usize, dist_fn: impl Fn(usize, usize) -> f64) -> Vec<Edge> {
    if n <= 1 {
        return Vec::new();
    }

    let mut in_tree = vec![false; n];
    let mut best = vec![f64::INFINITY; n];
    let mut parent = vec![usize::MAX; n];
    let mut edges: Vec<Edge> = Vec::with_capacity(n - 1);

    best[0] = 0.0;

    for _ in 0..n {
        let mut next: Option<usize> = None;
        for i in 0..n {
            if in_tree[i] {
                continue;
            }
            match next {
                Some(u) if best[i] >= best[u] => {}
                _ => next = Some(i),
            }
        }

        let Some(u) = next else {
            break;
        };
        in_tree[u] = true;
        if parent[u] != usize::MAX {
            edges.push((parent[u], u, best[u]));
        }

        for v in 0..n {
            if in_tree[v] {
                continue;
            }
            let d = dist_fn(u, v);
            if d < best[v] || parent[v] == usize::MAX {
                best[v] = d;
                parent[v] = u;
            }
        }
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_find_tracks_sizes() {
        let mut uf = UnionFind::new(5);
        uf.union(0, 1);
        uf.union(3, 4);
        uf.union(1, 4);
        assert_eq!(uf.component_size(0), 4);
        assert_eq!(uf.component_size(2), 1);
        assert_eq!(uf.find(3), uf.find(0));
    }

    #[test]
    fn prim_on_a_line_links_neighbors() {
        let xs: [f64; 4] = [0.0, 1.0, 3.0, 6.0];
        let mst = prim_mst(xs.len(), |i, j| (xs[i] - xs[j]).abs());
        assert_eq!(mst, vec![(0, 1, 1.0), (1, 2, 2.0), (2, 3, 3.0)]);
    }

    #[test]
    fn prim_attaches_unreachable_vertices_with_infinite_edges() {
        let mst = prim_mst(3, |_, _| f64::INFINITY);
        assert_eq!(mst.len(), 2);
        assert!(mst.iter().all(|e| e.2.is_infinite()));
        assert_eq!((mst[0].0, mst[0].1), (0, 1));
    }

    #[test]
    fn prim_breaks_ties_by_lowest_index() {
        // Every pair at distance 1: vertex 0 parents everyone, in index order.
        let mst = prim_mst(4, |_, _| 1.0);
        assert_eq!(mst, vec![(0, 1, 1.0), (0, 2, 1.0), (0, 3, 1.0)]);
    }

    #[test]
    fn region_query_excludes_self() {
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(5.0, 0.0)];
        assert_eq!(region_query(&points, 0, 1.0), vec![1]);
        assert!(region_query(&points, 2, 1.0).is_empty());
    }
}
