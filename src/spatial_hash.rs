use std::collections::HashMap;
use std::hash::Hash;

use crate::config::GridConfig;
use crate::coord::{CellCoord, CellRange, Point};
use crate::error::SpatialHashError;

// Per-object bookkeeping kept on the grid side so callers never have to carry
// grid scratch fields on their own types.
#[derive(Copy, Clone, Debug)]
struct Registration {
    bounds: CellRange,
    query_tag: u32,
}

/// Fixed-size uniform grid for broad-phase proximity queries.
///
/// Objects are identified by a caller-chosen key `K` (an entity id, an arena
/// index, ...). Buckets only ever hold keys; the objects themselves stay with
/// the caller. Every registered key is present in exactly the buckets covered
/// by its [`CellRange`] and in no others.
///
/// The grid is not synchronized. Wrap it in a lock if it must be shared across
/// threads, and hold that lock across a whole [`update`](Self::update) since it
/// is a remove followed by an insert.
#[derive(Clone, Debug)]
pub struct SpatialHash<K> {
    cell_size: u32,
    width: u32,
    height: u32,
    // Index = y * width + x
    buckets: Vec<Vec<K>>,
    registry: HashMap<K, Registration>,
    nearby: Vec<K>,
    query_counter: u32,
}

impl<K> SpatialHash<K>
where
    K: Copy + Eq + Hash,
{
    /// Allocates a `width x height` grid of empty buckets, each covering a
    /// `cell_size x cell_size` square of world space.
    pub fn new(width: u32, height: u32, cell_size: u32) -> Result<Self, SpatialHashError> {
        if width == 0 || height == 0 {
            return Err(SpatialHashError::ZeroDimension { width, height });
        }
        if cell_size == 0 {
            return Err(SpatialHashError::ZeroCellSize);
        }

        let bucket_count = width as usize * height as usize;
        log::debug!("allocating {width}x{height} spatial hash ({bucket_count} buckets, cell size {cell_size})");

        Ok(Self {
            cell_size,
            width,
            height,
            buckets: vec![Vec::new(); bucket_count],
            registry: HashMap::new(),
            nearby: Vec::new(),
            query_counter: 0,
        })
    }

    pub fn from_config(config: &GridConfig) -> Result<Self, SpatialHashError> {
        Self::new(config.width, config.height, config.cell_size)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Number of registered objects.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn contains(&self, key: K) -> bool {
        self.registry.contains_key(&key)
    }

    /// The cell range `key` currently occupies, or `None` if it is not inserted.
    pub fn registered_bounds(&self, key: K) -> Option<CellRange> {
        self.registry.get(&key).map(|reg| reg.bounds)
    }

    /// Contents of one bucket, in insertion order. `None` if `cell` lies
    /// outside the grid.
    pub fn bucket(&self, cell: CellCoord) -> Option<&[K]> {
        if cell.x >= self.width || cell.y >= self.height {
            return None;
        }
        Some(&self.buckets[self.bucket_index(cell)])
    }

    /// Maps a world position to the cell containing it. Positions outside the
    /// world collapse onto the nearest border cell.
    pub fn cell_of(&self, position: Point) -> CellCoord {
        CellCoord::new(
            axis_cell(position.x, self.cell_size, self.width),
            axis_cell(position.y, self.cell_size, self.height),
        )
    }

    /// Registers `key` in every bucket touched by the box spanned by
    /// `top_left` and `bottom_right`.
    ///
    /// If `key` is already registered its old registration is dropped first.
    /// Corners that map to an inverted range register the key with no bucket
    /// membership at all.
    pub fn insert(&mut self, key: K, top_left: Point, bottom_right: Point) {
        self.remove(key);
        let bounds = self.range_of(top_left, bottom_right);
        self.register(key, bounds);
    }

    /// Drops `key` from the grid. Returns `false` if it was not registered.
    pub fn remove(&mut self, key: K) -> bool {
        // Take the registration out before touching buckets so `key` already
        // reads as absent while they are purged.
        let Some(reg) = self.registry.remove(&key) else {
            return false;
        };

        log::trace!("removing from {} buckets", reg.bounds.cell_count());
        for cell in reg.bounds.cells() {
            let idx = self.bucket_index(cell);
            self.buckets[idx].retain(|&other| other != key);
        }
        true
    }

    /// Moves `key` to new bounds. Buckets are only rewritten when the mapped
    /// cell range differs from the registered one; returns whether that
    /// happened. A key that was never inserted always counts as moved.
    pub fn update(&mut self, key: K, top_left: Point, bottom_right: Point) -> bool {
        let bounds = self.range_of(top_left, bottom_right);
        if self.registered_bounds(key) == Some(bounds) {
            return false;
        }

        self.remove(key);
        self.register(key, bounds);
        true
    }

    /// Collects every distinct object found in the buckets within `radius`
    /// cells of `key`'s registered range.
    ///
    /// `key` itself is never returned, and neither is any other object
    /// registered with exactly the same range. An unregistered `key` yields an
    /// empty slice.
    ///
    /// The slice is a reused internal buffer: it stays valid only until the
    /// next call that borrows the grid mutably.
    ///
    /// Each call stamps the objects it collects with a fresh tag from a
    /// wrapping `u32` counter. After 2^32 queries a stale tag can collide with
    /// the current one and hide an object from that single query.
    pub fn find_nearby_colliders(&mut self, key: K, radius: u32) -> &[K] {
        self.nearby.clear();
        let Some(own) = self.registered_bounds(key) else {
            return &self.nearby;
        };

        self.query_counter = self.query_counter.wrapping_add(1);
        let tag = self.query_counter;
        let window = own.expand(radius, self.width, self.height);

        for cell in window.cells() {
            let idx = self.bucket_index(cell);
            for &other in &self.buckets[idx] {
                let Some(reg) = self.registry.get_mut(&other) else {
                    continue;
                };
                if reg.bounds == own || reg.query_tag == tag {
                    continue;
                }
                reg.query_tag = tag;
                self.nearby.push(other);
            }
        }

        &self.nearby
    }

    /// Unregisters everything. Bucket capacity is kept.
    pub fn clear(&mut self) {
        log::debug!("clearing spatial hash ({} objects)", self.registry.len());
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.registry.clear();
        self.nearby.clear();
    }

    fn register(&mut self, key: K, bounds: CellRange) {
        log::trace!("registering in {} buckets", bounds.cell_count());
        for cell in bounds.cells() {
            let idx = self.bucket_index(cell);
            self.buckets[idx].push(key);
        }
        self.registry.insert(key, Registration { bounds, query_tag: 0 });
    }

    fn range_of(&self, top_left: Point, bottom_right: Point) -> CellRange {
        CellRange::new(self.cell_of(top_left), self.cell_of(bottom_right))
    }

    #[inline]
    fn bucket_index(&self, cell: CellCoord) -> usize {
        cell.y as usize * self.width as usize + cell.x as usize
    }
}

// `as` saturates out-of-range floats and sends NaN to 0, so the clamp below
// covers every input.
fn axis_cell(coord: f64, cell_size: u32, cells: u32) -> u32 {
    let raw = (coord / f64::from(cell_size)).floor() as i64;
    raw.clamp(0, i64::from(cells) - 1) as u32
}
