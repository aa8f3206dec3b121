//! Axis-aligned rectangles, the strict overlap test and a bulk-loaded plane index.
//!
//! Overlap here always means a strictly positive-area intersection: shared
//! edges do not count, and a rectangle with zero width or height overlaps
//! nothing.

use geo_index::rtree::sort::HilbertSort;
use geo_index::rtree::{RTree, RTreeBuilder, RTreeIndex};

/// A 2D point (easting, northing).
pub type Point = (f64, f64);

/// An axis-aligned rectangle in projected units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Bounds {
    pub const fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    /// A square cell with its south-west corner at `origin`.
    pub fn from_origin(origin: Point, size: f64) -> Self {
        let (x, y) = origin;
        Self::new(x, x + size, y, y + size)
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    pub fn origin(&self) -> Point {
        (self.xmin, self.ymin)
    }

    pub fn center(&self) -> Point {
        (
            self.xmin + self.width() / 2.0,
            self.ymin + self.height() / 2.0,
        )
    }

    /// True when the rectangle has no positive area (also true for NaN extents).
    pub fn is_degenerate(&self) -> bool {
        !(self.xmax > self.xmin && self.ymax > self.ymin)
    }

    /// Strict intersection test; see [`overlaps`].
    pub fn intersects(&self, other: &Bounds) -> bool {
        overlaps(self, other)
    }
}

/// Returns true if `a` and `b` share a region of strictly positive area.
pub fn overlaps(a: &Bounds, b: &Bounds) -> bool {
    if a.is_degenerate() || b.is_degenerate() {
        return false;
    }
    a.xmin < b.xmax && b.xmin < a.xmax && a.ymin < b.ymax && b.ymin < a.ymax
}

/// Corner-pair variant of [`overlaps`].
///
/// Each rectangle is given by its top-left and bottom-right corners, with the
/// top edge at the larger y. Corner pairs must not be mixed with [`Bounds`]
/// min/max values.
pub fn do_overlap(tl1: Point, br1: Point, tl2: Point, br2: Point) -> bool {
    // a line has no area
    if tl1.0 == br1.0 || tl1.1 == br1.1 || tl2.0 == br2.0 || tl2.1 == br2.1 {
        return false;
    }

    // one rectangle is left of the other
    if tl1.0 >= br2.0 || tl2.0 >= br1.0 {
        return false;
    }

    // one rectangle is above the other
    if br1.1 >= tl2.1 || br2.1 >= tl1.1 {
        return false;
    }

    true
}

/// Trait for objects that have a bounding box.
pub trait HasBBox {
    fn bbox(&self) -> Bounds;
}

impl HasBBox for Bounds {
    fn bbox(&self) -> Bounds {
        *self
    }
}

/// A static set of objects placed on a plane.
///
/// Objects are bulk-loaded once into a packed Hilbert R-tree; ids are their
/// insertion positions. The tree answers candidate lookups and every
/// candidate is then re-checked with the strict [`overlaps`] test.
pub struct Plane<T> {
    seq: Vec<T>,
    bboxes: Vec<Bounds>,
    tree: Option<RTree<f64>>,
}

impl<T: HasBBox> Plane<T> {
    /// Builds the plane from all of its objects.
    pub fn new(objs: impl IntoIterator<Item = T>) -> Self {
        let seq: Vec<T> = objs.into_iter().collect();
        let bboxes: Vec<Bounds> = seq.iter().map(HasBBox::bbox).collect();

        let tree = if bboxes.is_empty() {
            None
        } else {
            let mut builder: RTreeBuilder<f64> = RTreeBuilder::new(bboxes.len() as u32);
            for b in &bboxes {
                builder.add(b.xmin, b.ymin, b.xmax, b.ymax);
            }
            Some(builder.finish::<HilbertSort>())
        };

        Self { seq, bboxes, tree }
    }

    /// Finds objects that overlap `region`.
    pub fn find(&self, region: &Bounds) -> Vec<&T> {
        self.find_with_indices(region)
            .into_iter()
            .map(|(_, obj)| obj)
            .collect()
    }

    /// Finds objects that overlap `region`, returning (index, object) pairs in index order.
    pub fn find_with_indices(&self, region: &Bounds) -> Vec<(usize, &T)> {
        let Some(tree) = &self.tree else {
            return Vec::new();
        };
        if region.is_degenerate() {
            return Vec::new();
        }

        let mut ids: Vec<usize> = tree
            .search(region.xmin, region.ymin, region.xmax, region.ymax)
            .into_iter()
            .map(|id| id as usize)
            .filter(|&id| overlaps(&self.bboxes[id], region))
            .collect();
        ids.sort_unstable();
        ids.into_iter().map(|id| (id, &self.seq[id])).collect()
    }

    pub fn get(&self, id: usize) -> Option<&T> {
        self.seq.get(id)
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.seq.iter()
    }
}
