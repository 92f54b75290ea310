use crate::{Error, Result};

/// N-dimensional tensor passed between the host and its layers
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    /// Flattened row-major storage of tensor elements
    pub data: Vec<f32>,
    /// Size of each axis, outermost first
    pub shape: Vec<usize>,
}

impl Tensor {
    /// Creates a new one-dimensional tensor of shape [n]
    pub fn new(data: Vec<f32>) -> Self {
        let n = data.len();
        Tensor {
            data,
            shape: vec![n],
        }
    }

    /// Creates a new tensor with specified shape,
    /// the caller keeps `data.len()` equal to the shape product
    pub fn new_with_shape(data: Vec<f32>, shape: Vec<usize>) -> Self {
        Tensor { data, shape }
    }

    /// Creates a tensor filled with zeros
    pub fn zeros(shape: Vec<usize>) -> Self {
        Tensor {
            data: vec![0.0; shape.iter().product()],
            shape,
        }
    }

    /// Creates a zero-filled tensor with same shape as self
    pub fn zeros_like(&self) -> Self {
        Tensor {
            data: vec![0.0; self.data.len()],
            shape: self.shape.clone(),
        }
    }

    /// Number of elements described by `shape`, `None` on overflow
    pub fn checked_count(shape: &[usize]) -> Option<usize> {
        shape.iter().try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
    }

    /// Total number of elements described by the shape,
    /// saturates at `usize::MAX` so it never matches real storage on overflow
    pub fn count(&self) -> usize {
        Tensor::checked_count(&self.shape).unwrap_or(usize::MAX)
    }

    /// Changes the shape, reallocating zero-filled storage only when the
    /// element count changes. Leaves the tensor untouched on overflow.
    pub fn reshape(&mut self, shape: Vec<usize>) -> Result<()> {
        let count =
            Tensor::checked_count(&shape).ok_or_else(|| Error::SizeOverflow(shape.clone()))?;
        if self.data.len() != count {
            self.data = vec![0.0; count];
        }
        self.shape = shape;
        Ok(())
    }

    /// Iterates over contiguous rows of the innermost axis
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        let width = self.shape.last().copied().unwrap_or(1).max(1);
        self.data.chunks(width)
    }
}

impl Default for Tensor {
    fn default() -> Self {
        Tensor::zeros(vec![0])
    }
}
