//! Spatial indexing for proximity queries.
//!
//! Connection lines between nearby particles and the neighbour links of a
//! click-spawned particle are both answered by a KD-tree built per query.

use kdtree::distance::squared_euclidean;
use kdtree::{ErrorKind as KdTreeError, KdTree};

/// Type alias for 2D spatial KD-tree used for neighbour queries.
type Tree2D = KdTree<f32, usize, Vec<f32>>;

const BUCKET_CAPACITY: usize = 16;

/// A proximity line between two points, by index into the queried slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    /// Lower index of the pair.
    pub a: usize,
    /// Higher index of the pair.
    pub b: usize,
    /// Line opacity, fading with distance.
    pub alpha: f32,
}

/// Peak opacity of a proximity line between coincident points.
pub const LINK_ALPHA: f32 = 0.12;

/// Finds every pair of points closer than `range`, each pair reported once.
///
/// Opacity falls off as `LINK_ALPHA * (1 - d² / range²)`. A tree that cannot
/// be built (non-finite coordinates) yields no links.
pub fn proximity_links<T>(items: &[T], get_pos: impl Fn(&T) -> [f32; 2], range: f32) -> Vec<Link> {
    let range_sq = range * range;
    if items.len() < 2 || range_sq <= 0.0 {
        return Vec::new();
    }

    let tree = match build_tree(items, &get_pos) {
        Ok(tree) => tree,
        Err(err) => {
            tracing::debug!(?err, "skipping proximity links");
            return Vec::new();
        }
    };

    let mut links = Vec::new();
    for (a, item) in items.iter().enumerate() {
        let pos = get_pos(item);
        let neighbours = tree
            .within(&pos, range_sq, &squared_euclidean)
            .unwrap_or_default();

        for (d2, &b) in neighbours {
            if b <= a || d2 >= range_sq {
                continue;
            }
            links.push(Link {
                a,
                b,
                alpha: LINK_ALPHA * (1.0 - d2 / range_sq),
            });
        }
    }
    links
}

/// Indices of the `k` items nearest to `point`, closest first.
pub fn nearest_indices<T>(
    items: &[T],
    get_pos: impl Fn(&T) -> [f32; 2],
    point: [f32; 2],
    k: usize,
) -> Vec<usize> {
    if items.is_empty() || k == 0 {
        return Vec::new();
    }
    let Ok(tree) = build_tree(items, &get_pos) else {
        return Vec::new();
    };
    tree.nearest(&point, k, &squared_euclidean)
        .map(|found| found.into_iter().map(|(_, &idx)| idx).collect())
        .unwrap_or_default()
}

/// Helper function to build a KD-tree from a collection of items.
fn build_tree<T>(items: &[T], get_pos: &impl Fn(&T) -> [f32; 2]) -> Result<Tree2D, KdTreeError> {
    let mut tree = KdTree::with_capacity(2, BUCKET_CAPACITY);
    for (i, item) in items.iter().enumerate() {
        tree.add(get_pos(item).to_vec(), i)?;
    }
    Ok(tree)
}
