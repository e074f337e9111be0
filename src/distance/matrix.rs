//! Dense travel matrix.

use crate::error::{Error, Result};

/// Tolerance used when checking matrix symmetry.
pub const SYMMETRY_TOLERANCE: f64 = 1e-6;

/// A dense n×n travel matrix (time or distance) stored in row-major order.
///
/// Indexed by global node index: depots first, then service stops. Matrices
/// built through [`TravelMatrix::from_rows`] are guaranteed square,
/// non-negative, zero on the diagonal and symmetric.
///
/// # Examples
///
/// ```
/// use u_techroute::distance::TravelMatrix;
///
/// let m = TravelMatrix::from_rows("durations", vec![
///     vec![0.0, 5.0, 8.0],
///     vec![5.0, 0.0, 4.0],
///     vec![8.0, 4.0, 0.0],
/// ]).unwrap();
/// assert_eq!(m.get(0, 2), 8.0);
/// assert_eq!(m.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TravelMatrix {
    data: Vec<f64>,
    size: usize,
}

impl TravelMatrix {
    /// Creates a matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Builds a validated matrix from explicit rows.
    ///
    /// `name` only labels error messages (`"distances"`, `"durations"`).
    pub fn from_rows(name: &str, rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(Error::data(
                    format!("{name} row {i}"),
                    format!("expected {size} columns, found {}", row.len()),
                ));
            }
            data.extend(row);
        }
        let matrix = Self { data, size };
        matrix.validate(name)?;
        Ok(matrix)
    }

    /// Checks that every entry is finite and non-negative, the diagonal is
    /// zero and the matrix is symmetric.
    pub(crate) fn validate(&self, name: &str) -> Result<()> {
        for i in 0..self.size {
            for j in 0..self.size {
                let v = self.get(i, j);
                if !v.is_finite() || v < 0.0 {
                    return Err(Error::data(
                        format!("{name}[{i}][{j}]"),
                        format!("entry must be finite and non-negative, found {v}"),
                    ));
                }
            }
            if self.get(i, i) != 0.0 {
                return Err(Error::data(
                    format!("{name}[{i}][{i}]"),
                    format!("diagonal must be zero, found {}", self.get(i, i)),
                ));
            }
        }
        if let Some((i, j)) = self.first_asymmetry(SYMMETRY_TOLERANCE) {
            return Err(Error::data(
                format!("{name}[{i}][{j}]"),
                format!(
                    "matrix is not symmetric: {} vs {}",
                    self.get(i, j),
                    self.get(j, i)
                ),
            ));
        }
        Ok(())
    }

    /// Returns the entry from node `from` to node `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the entry from node `from` to node `to`.
    pub fn set(&mut self, from: usize, to: usize, value: f64) {
        self.data[from * self.size + to] = value;
    }

    /// Sets both `(a, b)` and `(b, a)`.
    pub fn set_symmetric(&mut self, a: usize, b: usize, value: f64) {
        self.set(a, b, value);
        self.set(b, a, value);
    }

    /// Number of nodes in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        self.first_asymmetry(tol).is_none()
    }

    fn first_asymmetry(&self, tol: f64) -> Option<(usize, usize)> {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return Some((i, j));
                }
            }
        }
        None
    }

    /// Returns the nearest node to `from` among `candidates`.
    pub fn nearest(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }

    /// Iterates over the entries of the square block `start..size`.
    pub(crate) fn block_values(&self, start: usize) -> impl Iterator<Item = f64> + '_ {
        (start..self.size).flat_map(move |i| (start..self.size).map(move |j| self.get(i, j)))
    }
}
