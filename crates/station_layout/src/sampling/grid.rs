//! Square cell grid over a station's bounding box, used to limit separation checks
//! to points in nearby cells.
//!
//! The grid covers `[-max_radius, max_radius]²` with `size × size` cells where
//! `size = min(100, ceil(2 · max_radius / min_separation))`. It never stores
//! coordinates, only indices into the caller's accepted point list. Each cell keeps
//! the first and last index it holds plus a count, and every inserted index carries
//! a forward link to the next index in the same cell, so insertion is O(1) and
//! walking a cell is O(k) in its population.
use std::ops::Range;

use glam::DVec2;

/// Upper bound on cells per axis, independent of how small the separation is.
pub const MAX_GRID_SIZE: usize = 100;

/// Smallest neighbourhood half-width scanned around a candidate's home cell.
pub const MIN_NEIGHBOR_REACH: usize = 2;

const NO_LINK: usize = usize::MAX;

/// Bucketed index of accepted points.
#[derive(Debug, Clone)]
pub struct CellGrid {
    size: usize,
    cell_size: f64,
    max_radius: f64,
    reach: usize,
    start: Vec<usize>,
    end: Vec<usize>,
    count: Vec<usize>,
    next: Vec<usize>,
}

impl CellGrid {
    /// Build an empty grid for a disk of `max_radius` with points at least
    /// `min_separation` apart. Both values must be positive and finite.
    pub fn new(max_radius: f64, min_separation: f64) -> Self {
        debug_assert!(max_radius > 0.0 && min_separation > 0.0);
        let extent = 2.0 * max_radius;
        let size = ((extent / min_separation).ceil() as usize).clamp(1, MAX_GRID_SIZE);
        let cell_size = extent / size as f64;
        // A point `k` cells away is at least `(k - 1) · cell_size` from the candidate,
        // so scanning `reach` cells catches every neighbour closer than `min_separation`.
        let reach = ((min_separation / cell_size).ceil() as usize).max(MIN_NEIGHBOR_REACH);
        let cells = size * size;

        Self {
            size,
            cell_size,
            max_radius,
            reach,
            start: vec![NO_LINK; cells],
            end: vec![NO_LINK; cells],
            count: vec![0; cells],
            next: Vec::new(),
        }
    }

    /// Reserve link storage for `points` indices.
    pub fn with_capacity(mut self, points: usize) -> Self {
        self.next.reserve(points);
        self
    }

    /// Number of cells along each axis.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Side length of one cell in metres.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Half-width, in cells, of the neighbourhood scanned by [`Self::neighbors`].
    pub fn reach(&self) -> usize {
        self.reach
    }

    /// Number of indices inserted so far.
    pub fn len(&self) -> usize {
        self.next.len()
    }

    pub fn is_empty(&self) -> bool {
        self.next.is_empty()
    }

    #[inline]
    fn cell_index(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    /// Home cell of `point`. Coordinates outside the box are clamped to the edge cells.
    #[inline]
    pub fn cell_of(&self, point: DVec2) -> (usize, usize) {
        let last = self.size as isize - 1;
        let axis = |c: f64| {
            (((c + self.max_radius) / self.cell_size).floor() as isize).clamp(0, last) as usize
        };
        (axis(point.x), axis(point.y))
    }

    /// Append `index` to the bucket of `point`'s home cell.
    ///
    /// Indices must be inserted densely in increasing order starting at zero, which
    /// is how the sampler assigns them to accepted points.
    pub fn insert(&mut self, index: usize, point: DVec2) {
        debug_assert_eq!(index, self.next.len(), "indices must be inserted in order");
        let (x, y) = self.cell_of(point);
        let cell = self.cell_index(x, y);

        self.next.push(NO_LINK);
        if self.count[cell] == 0 {
            self.start[cell] = index;
        } else {
            let tail = self.end[cell];
            self.next[tail] = index;
        }
        self.end[cell] = index;
        self.count[cell] += 1;
    }

    /// Indices stored in cell `(x, y)`, in insertion order.
    pub fn cell_members(&self, x: usize, y: usize) -> CellMembers<'_> {
        let cell = self.cell_index(x, y);
        CellMembers {
            next: &self.next,
            current: self.start[cell],
            remaining: self.count[cell],
        }
    }

    /// Cell ranges covered by the neighbourhood of `cell`, clipped to the grid.
    pub fn window(&self, (jx, jy): (usize, usize)) -> (Range<usize>, Range<usize>) {
        let xs = jx.saturating_sub(self.reach)..(jx + self.reach + 1).min(self.size);
        let ys = jy.saturating_sub(self.reach)..(jy + self.reach + 1).min(self.size);
        (xs, ys)
    }

    /// Indices of every point stored in the neighbourhood of `cell`.
    pub fn neighbors(&self, cell: (usize, usize)) -> impl Iterator<Item = usize> + '_ {
        let (xs, ys) = self.window(cell);
        ys.flat_map(move |ky| xs.clone().flat_map(move |kx| self.cell_members(kx, ky)))
    }
}

/// Iterator over the indices held by one grid cell.
#[derive(Debug, Clone)]
pub struct CellMembers<'a> {
    next: &'a [usize],
    current: usize,
    remaining: usize,
}

impl Iterator for CellMembers<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.current;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.current = self.next[index];
        }
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
