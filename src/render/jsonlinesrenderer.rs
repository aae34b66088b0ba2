use std::io::Write;

use crate::render::renderer::{
    PlotFrame,
    RenderError,
    Renderer
};

/// 每個影格寫成一行 JSON，供外部繪圖工具組成動畫。
pub struct JsonLinesRenderer<W: Write> {
    writer: W,
    frames_written: usize
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(writer: W) -> JsonLinesRenderer<W> {
        JsonLinesRenderer { writer, frames_written: 0 }
    }

    pub fn frames_written(&self) -> usize {
        self.frames_written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Renderer for JsonLinesRenderer<W> {
    fn render(&mut self, frame: PlotFrame) -> Result<(), RenderError> {
        serde_json::to_writer(&mut self.writer, &frame)?;
        self.writer.write_all(b"\n")?;
        self.frames_written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::renderer::{
        render_all,
        Series
    };

    #[test]
    fn writes_one_line_per_frame() {
        let frames: Vec<PlotFrame> = (0..3)
            .map(|i| PlotFrame::new(i, format!("frame {}", i), vec![Series::new("f".to_string(), vec![[0.0, 1.0]])]))
            .collect();
        let mut renderer = JsonLinesRenderer::new(Vec::new());
        assert_eq!(render_all(&mut renderer, frames.clone()).unwrap(), 3);
        assert_eq!(renderer.frames_written(), 3);
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        let parsed: Vec<PlotFrame> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(parsed, frames);
    }
}
