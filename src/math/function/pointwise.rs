use nalgebra::DVector;

use crate::math::function::realfunction::RealFunction;

/// 逐點相加 `(g + h)(x) = g(x) + h(x)`，用於分配律檢驗。
#[derive(Clone, Copy)]
pub struct PointwiseSum<G, H> {
    lhs: G,
    rhs: H
}

impl<G, H> PointwiseSum<G, H>
where
    G: RealFunction,
    H: RealFunction,
{
    pub fn new(lhs: G, rhs: H) -> PointwiseSum<G, H> {
        PointwiseSum { lhs, rhs }
    }

    pub fn lhs(&self) -> &G {
        &self.lhs
    }

    pub fn rhs(&self) -> &H {
        &self.rhs
    }
}

impl<G, H> RealFunction for PointwiseSum<G, H>
where
    G: RealFunction,
    H: RealFunction,
{
    fn value(&self, x: f64) -> f64 {
        self.lhs.value(x) + self.rhs.value(x)
    }

    fn values(&self, xs: &DVector<f64>) -> DVector<f64> {
        self.lhs.values(xs) + self.rhs.values(xs)
    }
}
