//! Print the settings of the default store as JSON.
//!
//! Opening an empty store populates it with defaults, as the app would.

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let shared = flex_settings::runtime::shared()?;
    let model = shared.lock();

    if let flex_settings::Initialization::Loaded(report) = model.initialization() {
        if !report.malformed.is_empty() {
            tracing::warn!(keys = ?report.malformed, "Unreadable settings replaced by defaults");
        }
    }

    println!("{}", serde_json::to_string_pretty(model.settings())?);
    Ok(())
}
