use nalgebra::Vector2;

/// Closed half-plane `n · x <= c`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hs2 {
    pub n: Vector2<f64>,
    pub c: f64,
}

impl Hs2 {
    #[inline]
    pub fn new(n: Vector2<f64>, c: f64) -> Self {
        Self { n, c }
    }

    /// Side of the perpendicular bisector of `g → q` that contains `g`:
    /// `(q − g) · x <= (|q|² − |g|²) / 2`.
    #[inline]
    pub fn bisector(g: Vector2<f64>, q: Vector2<f64>) -> Self {
        Self::new(q - g, 0.5 * (q.norm_squared() - g.norm_squared()))
    }

    #[inline]
    pub fn satisfies_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        self.n.dot(&p) <= self.c + eps
    }

    /// Unit-normal copy, or `None` for a zero / non-finite normal.
    #[inline]
    pub fn normalized(&self) -> Option<Self> {
        let norm = self.n.norm();
        if !norm.is_finite() || norm <= 0.0 || !self.c.is_finite() {
            return None;
        }
        Some(Self::new(self.n / norm, self.c / norm))
    }

    #[inline]
    pub(crate) fn angle(&self) -> f64 {
        self.n.y.atan2(self.n.x)
    }
}
