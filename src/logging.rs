use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber. `-v` flags raise the level from warn.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("gitbars={level}")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
