use tracing::Level;

/// Installs the fmt subscriber. Best effort: if a global subscriber is
/// already set, this does nothing.
pub fn init(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}
