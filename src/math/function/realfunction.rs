use std::sync::Arc;

use nalgebra::DVector;

/// 實數函數 trait，取代原本依輸入型別（純量 / 陣列）動態分派的寫法。
///
/// 呼叫方自行選擇入口：
///   - `value`：純量求值
///   - `values`：向量求值（逐元素）
///
/// 任何覆寫 `values` 的實作都必須與逐元素呼叫 `value` 的結果逐位元相同。
///
/// # 多執行緒安全
/// `Send + Sync` 是 supertrait，卷積結果可在多執行緒間唯讀共享。
pub trait RealFunction: Send + Sync {
    fn value(&self, x: f64) -> f64;

    fn values(&self, xs: &DVector<f64>) -> DVector<f64> {
        xs.map(|x| self.value(x))
    }
}

impl<T: RealFunction + ?Sized> RealFunction for &T {
    fn value(&self, x: f64) -> f64 {
        (**self).value(x)
    }

    fn values(&self, xs: &DVector<f64>) -> DVector<f64> {
        (**self).values(xs)
    }
}

impl<T: RealFunction + ?Sized> RealFunction for Arc<T> {
    fn value(&self, x: f64) -> f64 {
        (**self).value(x)
    }

    fn values(&self, xs: &DVector<f64>) -> DVector<f64> {
        (**self).values(xs)
    }
}

/// 以 closure 包裝的實數函數，額外參數須事先綁定（partial application）。
#[derive(Clone, Copy)]
pub struct FnFunction<F> {
    f: F,
}

impl<F> FnFunction<F>
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    pub fn new(f: F) -> FnFunction<F> {
        FnFunction { f }
    }
}

impl<F> RealFunction for FnFunction<F>
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    fn value(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

pub fn from_fn<F>(f: F) -> FnFunction<F>
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    FnFunction::new(f)
}
