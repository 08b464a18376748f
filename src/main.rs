use env_logger::Env;
use forest_showcase::{ShowcaseApp, ShowcaseConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut config = ShowcaseConfig::default();
    if let Ok(asset_dir) = std::env::var("SHOWCASE_ASSET_DIR") {
        config = config.with_asset_dir(asset_dir);
    }
    log::info!("loading stage assets from {}", config.asset_dir.display());

    ShowcaseApp::new(config)?.run()?;
    Ok(())
}
