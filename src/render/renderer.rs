use serde::{
    Deserialize,
    Serialize
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error)
}

/// 圖上的一條曲線，點以 `[x, y]` 表示。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    label: String,
    points: Vec<[f64; 2]>
}

impl Series {
    pub fn new(label: String, points: Vec<[f64; 2]>) -> Series {
        Series { label, points }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }
}

/// 單一影格，以值傳遞給 Renderer；核心不持有任何共享畫布。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotFrame {
    index: usize,
    title: String,
    series: Vec<Series>
}

impl PlotFrame {
    pub fn new(index: usize, title: String, series: Vec<Series>) -> PlotFrame {
        PlotFrame { index, title, series }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }
}

/// 影像輸出端（GIF、圖例、標題排版等）由外部實作。
pub trait Renderer {
    fn render(&mut self, frame: PlotFrame) -> Result<(), RenderError>;

    fn finish(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}

/// 依序送出所有影格並結束輸出，回傳影格數。
pub fn render_all<R>(renderer: &mut R, frames: Vec<PlotFrame>) -> Result<usize, RenderError>
where
    R: Renderer + ?Sized,
{
    let count = frames.len();
    for frame in frames {
        renderer.render(frame)?;
    }
    renderer.finish()?;
    Ok(count)
}
