use num_complex::Complex64;
use num_traits::{One, Zero};

/// A block of the forward recurrence of a continued fraction whose partial
/// denominators are all one, `b_0 / (1 + c_1 / (1 + c_2 / (1 + ..)))`.
///
/// The convergents follow `p_(k+1) = p_k + c p_(k-1)` and `q_(k+1) = q_k + c q_(k-1)`.
/// After every move the block is divided through by the newest denominator,
/// so `q_k` stays one and only three numbers have to be kept. The magnitudes
/// stay bounded however deep the fraction is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pm1: Complex64, // p_k / q_k
    pm2: Complex64, // p_(k-1) / q_k
    qm2: Complex64, // q_(k-1) / q_k
}

impl Block {
    /// create a block holding the first convergent `b_0 / 1`
    pub fn new(b0: Complex64) -> Self {
        Block { pm1: b0, pm2: Complex64::zero(), qm2: Complex64::one() }
    }

    /// The value of the latest convergent
    #[inline]
    pub fn value(&self) -> Complex64 {
        self.pm1
    }

    /// move with the partial numerator `c`, returning the new convergent.
    /// Returns `None` and leaves the block untouched when the new denominator is exactly zero.
    pub fn checked_gmove(&mut self, c: Complex64) -> Option<Complex64> {
        let p = self.pm1 + c * self.pm2;
        let q = Complex64::one() + c * self.qm2;
        if q.is_zero() {
            return None;
        }

        self.pm2 = self.pm1 / q;
        self.pm1 = p / q;
        self.qm2 = Complex64::one() / q;
        Some(self.pm1)
    }
}
