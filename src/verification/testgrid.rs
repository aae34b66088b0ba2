use nalgebra::DVector;

use crate::convolution::convolutionerror::ConvolutionError;

/// 性質檢驗時的求值點序列，與卷積引擎內部的取樣網格無關。
#[derive(Debug, Clone, PartialEq)]
pub struct TestGrid {
    points: DVector<f64>
}

impl TestGrid {
    /// 含兩端點的等距序列，`count == 1` 時只含 `start`。
    pub fn linspace(start: f64, end: f64, count: usize) -> Result<TestGrid, ConvolutionError> {
        if count == 0 {
            return Err(ConvolutionError::EmptyTestGrid);
        }
        if !start.is_finite() || !end.is_finite() {
            return Err(ConvolutionError::InvalidTestGrid(format!(
                "bounds must be finite, got ({}, {})", start, end
            )));
        }
        if count == 1 {
            return Ok(TestGrid { points: DVector::from_element(1, start) });
        }
        let step = (end - start) / (count - 1) as f64;
        let mut points = DVector::from_fn(count, |i, _| start + i as f64 * step);
        points[count - 1] = end;
        Ok(TestGrid { points })
    }

    pub fn from_points(points: Vec<f64>) -> Result<TestGrid, ConvolutionError> {
        if points.is_empty() {
            return Err(ConvolutionError::EmptyTestGrid);
        }
        if let Some(bad) = points.iter().find(|x| !x.is_finite()) {
            return Err(ConvolutionError::InvalidTestGrid(format!(
                "test point {} is not finite", bad
            )));
        }
        Ok(TestGrid { points: DVector::from_vec(points) })
    }

    pub fn points(&self) -> &DVector<f64> {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().copied()
    }
}
