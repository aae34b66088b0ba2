use thiserror::Error;

/// 卷積引擎與性質檢驗的錯誤分類。
///
/// 數值精度不足（取樣寬度過粗導致 RMSD 偏大）不屬於錯誤，會以資料形式回報。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvolutionError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("impulse width {width} holds no sample of a grid with sample width {sample_width}")]
    ImpulseTooNarrow {
        width: f64,
        sample_width: f64
    },
    #[error("test grid is empty")]
    EmptyTestGrid,
    #[error("invalid test grid: {0}")]
    InvalidTestGrid(String)
}

impl ConvolutionError {
    pub fn invalid_configuration(message: impl Into<String>) -> ConvolutionError {
        ConvolutionError::InvalidConfiguration(message.into())
    }
}
