use std::iter::Iterator;

/// Iterate over every index of a mixed-radix counter (the last position
/// moves fastest), e.g. `[2, 3]` yields `[0, 0], [0, 1], [0, 2], [1, 0], ...`.
///
/// An empty `array_lengths` yields exactly one (empty) index, a zero length
/// anywhere yields nothing.
pub struct IterIndex {
    array_lengths: Vec<usize>,
    current_val_index: Vec<usize>,
    is_start: bool,
    is_end: bool,
}

impl IterIndex {
    pub fn new(array_lengths: Vec<usize>) -> IterIndex {
        IterIndex {
            current_val_index: vec![0; array_lengths.len()],
            is_start: true,
            is_end: array_lengths.iter().any(|&n| n == 0),
            array_lengths,
        }
    }

    /// Total number of indices the iterator produces
    pub fn numel(&self) -> usize {
        self.array_lengths.iter().product()
    }
}

impl Iterator for IterIndex {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_end {
            return None;
        }

        if self.is_start {
            self.is_start = false;
            return Some(self.current_val_index.clone());
        }

        if self.current_val_index.len() == 0 {
            self.is_end = true;
            return None;
        }

        let mut i = self.current_val_index.len() - 1;
        loop {
            // move to next state, carry over to the slower positions
            self.current_val_index[i] += 1;
            if self.current_val_index[i] == self.array_lengths[i] {
                self.current_val_index[i] = 0;
                if i == 0 {
                    self.is_end = true;
                    return None;
                }

                i -= 1;
            } else {
                break;
            }
        }

        Some(self.current_val_index.clone())
    }
}

/// Formular: index: [a1, a2, ..., a_n], dims: [d1, d2, ..., d_n]
/// Output: a_n + a_(n-1) * d_n + a_(n-2) * d_n * d_(n-1) + ... + a1 * d_n * ... * d2
pub fn ravel_index(index: &[usize], dims: &[usize]) -> usize {
    let mut ravelled_idx = 0;
    let mut accum_dimsize = 1;

    for i in (0..index.len()).rev() {
        ravelled_idx += accum_dimsize * index[i];
        accum_dimsize *= dims[i];
    }

    ravelled_idx
}
