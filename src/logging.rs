use tracing_subscriber::EnvFilter;

// Log targets of the library and of the `greyhist` binary
const TARGETS: [&str; 2] = ["greyscale_histogram", "greyhist"];

/// Filter used when `RUST_LOG` is unset: this tool at `level`, dependencies
/// (winit, wgpu, eframe) at warn.
fn default_directives(enable_debug: bool) -> String {
    let level = if enable_debug { "debug" } else { "info" };
    let mut directives = vec!["warn".to_string()];
    directives.extend(TARGETS.iter().map(|target| format!("{}={}", target, level)));
    directives.join(",")
}

/// Installs the subscriber for load, conversion and viewer events and
/// forwards `log` records into it. Later calls are ignored.
pub fn init_tracing(enable_debug: bool) {
    let _ = tracing_log::LogTracer::init();

    // The settings debug flag wins over RUST_LOG
    let env_filter = if enable_debug {
        EnvFilter::new(default_directives(true))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(false)))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_names(false)
        .try_init()
        .ok();
}
