use log::{info, warn};

use softphone_ui::components::App;
use softphone_ui::UiConfig;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    // Parsed once here; App picks it up through UiConfig::current
    let config = UiConfig::from_env()?;
    info!("Starting {}", config.window_title);
    if !config.install() {
        warn!("Configuration was already installed");
    }

    // Launch the Dioxus desktop application
    dioxus::launch(App);
    Ok(())
}
