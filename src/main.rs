use greyscale_histogram::errors::Result;
use greyscale_histogram::image_loader::{compute_histogram, load_image, to_greyscale};
use greyscale_histogram::settings::Settings;
use greyscale_histogram::{app, logging};
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    let settings = Settings::load().with_path_override(std::env::args().nth(1));
    logging::init_tracing(settings.debug_logging);

    match run(settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            e.log_and_report();
            ExitCode::FAILURE
        }
    }
}

fn run(settings: Settings) -> Result<()> {
    let image = load_image(&settings.image_path)?;
    log::info!(
        "Loaded {} ({}x{})",
        settings.image_path.display(),
        image.width(),
        image.height()
    );
    log::info!("Number of pixels in the image: {}", image.pixel_count());

    let started = Instant::now();
    let grey = to_greyscale(&image)?;
    let histogram = compute_histogram(&grey, None)?;
    tracing::debug!(
        duration_ms = started.elapsed().as_millis() as u64,
        peak = ?histogram.peak_level(),
        max_count = histogram.max_count(),
        "histogram computed"
    );

    app::present(&image, histogram, settings)
}
