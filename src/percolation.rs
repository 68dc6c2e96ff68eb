//! Percolation model on an N-by-N grid of sites
//!
//! Sites are addressed by 1-based `(row, col)` with `(1, 1)` at the top-left.
//! Each site maps to a union-find element id in `1..=N²` (row-major); id `0`
//! is the virtual top sentinel and `N² + 1` the virtual bottom sentinel, so no
//! real site ever shares an id with a sentinel.
//!
//! Two forests are kept over the same id space. `percolation` is wired to both
//! sentinels and answers `percolates()`. `fullness` is only ever wired to the
//! top sentinel, so a site that reaches the bottom row but not the top is never
//! reported full once the system percolates (no backwash).
use log::{debug, info, trace};

use crate::error::PercolationError;
use crate::union_find::UnionFind;

/// Element id of the sentinel sitting above the top row
pub const VIRTUAL_TOP: usize = 0;

#[derive(Clone, Debug)]
pub struct Percolation {
    n: usize,
    /// Site state indexed by `id - 1`
    open: Vec<bool>,
    open_count: usize,
    percolation: UnionFind,
    fullness: UnionFind,
}

impl Percolation {
    /// Create an N-by-N grid with every site blocked
    pub fn new(size: i64) -> Result<Self, PercolationError> {
        let invalid = PercolationError::InvalidArgument { size };
        if size <= 0 {
            return Err(invalid);
        }
        let n = usize::try_from(size).map_err(|_| invalid)?;
        let sites = n.checked_mul(n).ok_or(invalid)?;
        let elements = sites.checked_add(2).ok_or(invalid)?;

        debug!("Creating {n}x{n} percolation grid ({elements} union-find elements)");

        Ok(Percolation {
            n,
            open: vec![false; sites],
            open_count: 0,
            percolation: UnionFind::new(elements),
            fullness: UnionFind::new(elements),
        })
    }

    /// Grid side length N
    pub fn size(&self) -> usize {
        self.n
    }

    /// Element id of the sentinel sitting below the bottom row
    pub fn virtual_bottom(&self) -> usize {
        self.n * self.n + 1
    }

    /// Map `(row, col)` to its union-find element id in `1..=N²`
    pub fn site_id(&self, row: i64, col: i64) -> Result<usize, PercolationError> {
        let (row, col) = self.validate(row, col)?;
        Ok(self.id(row, col))
    }

    /// Inverse of [`Percolation::site_id`]. Sentinel and out-of-range ids have no
    /// coordinates.
    pub fn site_coordinates(&self, id: usize) -> Option<(i64, i64)> {
        if id == VIRTUAL_TOP || id > self.n * self.n {
            return None;
        }
        let row = (id - 1) / self.n + 1;
        let col = (id - 1) % self.n + 1;
        Some((row as i64, col as i64))
    }

    /// In-grid neighbors of a site: up, down, left, right, fewer at the edges
    pub fn neighbors(&self, row: i64, col: i64) -> Result<Vec<(i64, i64)>, PercolationError> {
        let (row, col) = self.validate(row, col)?;
        Ok(adjacent(self.n, row, col)
            .map(|(r, c)| (r as i64, c as i64))
            .collect())
    }

    /// Open a site if it is not open already, connecting it to its open
    /// neighbors and, on the first or last row, to the matching sentinel
    pub fn open(&mut self, row: i64, col: i64) -> Result<(), PercolationError> {
        let (row, col) = self.validate(row, col)?;
        let id = self.id(row, col);
        if self.open[id - 1] {
            return Ok(());
        }

        let was_percolating = self.percolates();
        self.open[id - 1] = true;
        self.open_count += 1;
        trace!("Opened site ({row}, {col}) as id {id}");

        if row == 1 {
            self.percolation.union(id, VIRTUAL_TOP);
            self.fullness.union(id, VIRTUAL_TOP);
        }
        if row == self.n {
            let bottom = self.virtual_bottom();
            self.percolation.union(id, bottom);
        }

        for (r, c) in adjacent(self.n, row, col) {
            let neighbor = self.id(r, c);
            if self.open[neighbor - 1] {
                trace!("Connecting id {id} to open neighbor id {neighbor}");
                self.percolation.union(id, neighbor);
                self.fullness.union(id, neighbor);
            }
        }

        if !was_percolating && self.percolates() {
            info!(
                "System percolates after {} open sites (threshold {:.4})",
                self.open_count,
                self.threshold()
            );
        }

        Ok(())
    }

    /// Is the site open?
    pub fn is_open(&self, row: i64, col: i64) -> Result<bool, PercolationError> {
        let (row, col) = self.validate(row, col)?;
        Ok(self.open[self.id(row, col) - 1])
    }

    /// Is the site open and connected to the top row through open sites?
    pub fn is_full(&self, row: i64, col: i64) -> Result<bool, PercolationError> {
        let (row, col) = self.validate(row, col)?;
        let id = self.id(row, col);
        Ok(self.open[id - 1] && self.fullness.connected(id, VIRTUAL_TOP))
    }

    /// Does an open path join the top row to the bottom row?
    pub fn percolates(&self) -> bool {
        self.percolation.connected(VIRTUAL_TOP, self.virtual_bottom())
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Fraction of the grid that is open
    pub fn threshold(&self) -> f64 {
        self.open_count as f64 / (self.n * self.n) as f64
    }

    fn validate(&self, row: i64, col: i64) -> Result<(usize, usize), PercolationError> {
        let in_range = |v: i64| v >= 1 && (v as u64) <= self.n as u64;
        if in_range(row) && in_range(col) {
            Ok((row as usize, col as usize))
        } else {
            Err(PercolationError::IndexOutOfRange {
                row,
                col,
                size: self.n,
            })
        }
    }

    /// Row-major id shifted past the top sentinel; coordinates must be validated
    fn id(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.n + col
    }
}

fn adjacent(n: usize, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    [
        (row > 1).then(|| (row - 1, col)),
        (row < n).then(|| (row + 1, col)),
        (col > 1).then(|| (row, col - 1)),
        (col < n).then(|| (row, col + 1)),
    ]
    .into_iter()
    .flatten()
}
