use crate::convolution::convolutionerror::ConvolutionError;
use crate::math::function::realfunction::RealFunction;
use crate::verification::testgrid::TestGrid;

/// 逐點差平方的累加器，`finalize` 時除以點數並開根號。
#[derive(Debug, Clone, Copy, Default)]
pub struct RmsdAccumulator {
    sum_of_squares: f64,
    count: usize
}

impl RmsdAccumulator {
    pub fn new() -> RmsdAccumulator {
        RmsdAccumulator::default()
    }

    pub fn push(&mut self, lhs: f64, rhs: f64) {
        let diff = lhs - rhs;
        self.sum_of_squares += diff * diff;
        self.count += 1;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn finalize(&self) -> Result<f64, ConvolutionError> {
        if self.count == 0 {
            return Err(ConvolutionError::EmptyTestGrid);
        }
        Ok((self.sum_of_squares / self.count as f64).sqrt())
    }
}

/// `sqrt( (1/|T|) · Σ_{t∈T} (a(t) - b(t))² )`
pub fn rmsd<A, B>(lhs: &A, rhs: &B, test_grid: &TestGrid) -> Result<f64, ConvolutionError>
where
    A: RealFunction + ?Sized,
    B: RealFunction + ?Sized,
{
    let lhs_values = lhs.values(test_grid.points());
    let rhs_values = rhs.values(test_grid.points());
    let mut acc = RmsdAccumulator::new();
    for (a, b) in lhs_values.iter().zip(rhs_values.iter()) {
        acc.push(*a, *b);
    }
    acc.finalize()
}
