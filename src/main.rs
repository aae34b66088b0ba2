use std::fs::File;
use std::io::BufWriter;
use std::process::ExitCode;

use compconv::configuration::Configuration;
use compconv::render::convolutionanimation::ConvolutionAnimation;
use compconv::render::jsonlinesrenderer::JsonLinesRenderer;
use compconv::render::renderer::render_all;
use compconv::telemetry::init_tracing;
use compconv::verification::testgrid::TestGrid;

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(config_path) => Configuration::from_reader(&config_path)?,
        None => Configuration::new()
    };

    let verifier = config.verifier()?;
    let report = verifier.verify_all(config.impulse_width())?;
    println!("{}", report);

    if let Some(report_path) = config.report_path() {
        let writer = BufWriter::new(File::create(report_path)?);
        report.to_writer(writer)?;
        tracing::info!(report_path, "report written");
    }

    if let Some(animation) = config.animation() {
        let f = config.function(animation.f())?;
        let g = config.function(animation.g())?;
        let (x_min, x_max) = config.x_bounds();
        let x_axis = verifier.test_grid().clone();
        let shifts = TestGrid::linspace(x_min, x_max, animation.frame_count())?;
        let animator = ConvolutionAnimation::new(verifier.engine(), x_axis);
        let mut frames = animator.frames(&f, &g, &shifts);
        if let Some(width) = config.impulse_width() {
            let pairs = verifier.identity_pairs(width)?;
            frames.extend(animator.identity_frames(&pairs));
        }
        let mut renderer = JsonLinesRenderer::new(BufWriter::new(File::create(animation.output_path())?));
        let frame_count = render_all(&mut renderer, frames)?;
        tracing::info!(output_path = animation.output_path(), frame_count, "frames written");
    }
    Ok(())
}

fn main() -> ExitCode {
    if let Err(error) = init_tracing() {
        eprintln!("{}", error);
    }
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "run failed");
            ExitCode::FAILURE
        }
    }
}
