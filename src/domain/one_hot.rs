// ============================================================
// Layer 3 - One-Hot Sequence
// ============================================================
// A dense [timesteps, width] matrix of f32 where each row holds
// at most one 1.0 (rows past the end of the input stay all-zero).
// Stored row-major in a flat Vec so it can be handed to a tensor
// constructor without copying row by row.

/// A zero-padded one-hot matrix, shape `[timesteps, width]`.
#[derive(Debug, Clone, PartialEq)]
pub struct OneHotSequence {
    timesteps: usize,
    width:     usize,
    data:      Vec<f32>,
}

impl OneHotSequence {
    /// An all-zero matrix.
    pub fn zeros(timesteps: usize, width: usize) -> Self {
        Self { timesteps, width, data: vec![0.0; timesteps * width] }
    }

    /// Set row `timestep` to the one-hot vector for `index`.
    ///
    /// # Panics
    /// Panics if either coordinate is out of range.
    pub fn set(&mut self, timestep: usize, index: usize) {
        assert!(timestep < self.timesteps && index < self.width,
            "one-hot position ({timestep}, {index}) outside [{}, {}]",
            self.timesteps, self.width);
        let row = &mut self.data[timestep * self.width..(timestep + 1) * self.width];
        row.fill(0.0);
        row[index] = 1.0;
    }

    pub fn timesteps(&self) -> usize { self.timesteps }

    pub fn width(&self) -> usize { self.width }

    pub fn as_slice(&self) -> &[f32] { &self.data }

    /// One row of the matrix.
    #[cfg(test)]
    pub fn row(&self, timestep: usize) -> &[f32] {
        &self.data[timestep * self.width..(timestep + 1) * self.width]
    }
}

/// A single one-hot vector of length `width`.
pub fn one_hot(index: usize, width: usize) -> Vec<f32> {
    let mut v = vec![0.0; width];
    v[index] = 1.0;
    v
}

/// Index of the hot entry, or None when the vector is all-zero.
#[cfg(test)]
pub fn hot_index(vector: &[f32]) -> Option<usize> {
    vector.iter().position(|&x| x == 1.0)
}
