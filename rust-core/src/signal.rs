//! Complex-valued signal container
//!
//! A `Signal` is the unit of exchange between generators, transforms and
//! output. Transforms never mutate their input; each call returns a new signal.

use num_complex::Complex64;
use std::ops::Index;

/// Ordered, finite sequence of complex samples indexed 0..N-1
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signal {
    samples: Vec<Complex64>,
}

impl Signal {
    /// Wrap complex samples
    pub fn new(samples: Vec<Complex64>) -> Self {
        Self { samples }
    }

    /// Build a signal from real values (imaginary parts are zero)
    pub fn from_real(values: &[f64]) -> Self {
        values.iter().map(|&re| Complex64::new(re, 0.0)).collect()
    }

    /// Signal of `len` zero samples
    pub fn zeros(len: usize) -> Self {
        Self::new(vec![Complex64::new(0.0, 0.0); len])
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Borrow the samples
    pub fn samples(&self) -> &[Complex64] {
        &self.samples
    }

    pub fn get(&self, index: usize) -> Option<&Complex64> {
        self.samples.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Complex64> {
        self.samples.iter()
    }

    /// Real component of every sample
    pub fn real_parts(&self) -> Vec<f64> {
        self.samples.iter().map(|c| c.re).collect()
    }

    /// Imaginary component of every sample
    pub fn imag_parts(&self) -> Vec<f64> {
        self.samples.iter().map(|c| c.im).collect()
    }

    /// Consume the signal and return the raw samples
    pub fn into_inner(self) -> Vec<Complex64> {
        self.samples
    }

    /// New signal with every sample multiplied by `factor`
    pub fn scale(&self, factor: f64) -> Self {
        self.samples.iter().map(|&c| c * factor).collect()
    }

    /// Largest component-wise distance |a[i] - b[i]|
    ///
    /// # Returns
    /// `None` when the lengths differ
    pub fn max_abs_difference(&self, other: &Signal) -> Option<f64> {
        if self.len() != other.len() {
            return None;
        }

        let max = self
            .samples
            .iter()
            .zip(other.samples.iter())
            .map(|(a, b)| (a - b).norm())
            .fold(0.0, f64::max);

        Some(max)
    }
}

impl From<Vec<Complex64>> for Signal {
    fn from(samples: Vec<Complex64>) -> Self {
        Self::new(samples)
    }
}

impl FromIterator<Complex64> for Signal {
    fn from_iter<I: IntoIterator<Item = Complex64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl AsRef<[Complex64]> for Signal {
    fn as_ref(&self) -> &[Complex64] {
        &self.samples
    }
}

impl Index<usize> for Signal {
    type Output = Complex64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.samples[index]
    }
}

impl<'a> IntoIterator for &'a Signal {
    type Item = &'a Complex64;
    type IntoIter = std::slice::Iter<'a, Complex64>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
