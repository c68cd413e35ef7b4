use gpui::{Application, AssetSource, SharedString};
use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
};

use viz_core::AppConfig;

/// Serves `assets/` from the workspace, addressed either by bare relative
/// paths or by urls under the configured base path.
#[derive(Clone)]
pub struct DashboardAssets {
    root: PathBuf,
    config: AppConfig,
}

impl DashboardAssets {
    pub fn new(config: AppConfig) -> Self {
        Self {
            root: Path::new(env!("CARGO_MANIFEST_DIR")).join("../assets"),
            config,
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let relative = self.config.strip_base(path).unwrap_or(path);
        self.root.join(relative.trim_start_matches('/'))
    }
}

impl AssetSource for DashboardAssets {
    fn load(&self, path: &str) -> gpui::Result<Option<Cow<'static, [u8]>>> {
        let resolved = self.resolve(path);
        match fs::read(&resolved) {
            Ok(bytes) => Ok(Some(Cow::Owned(bytes))),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn list(&self, path: &str) -> gpui::Result<Vec<SharedString>> {
        let resolved = self.resolve(path);
        let entries = match fs::read_dir(&resolved) {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(vec![]),
            Err(err) => return Err(err.into()),
        };

        let mut files = Vec::new();
        for entry in entries.flatten() {
            files.push(entry.path().to_string_lossy().into_owned().into());
        }
        Ok(files)
    }
}

pub fn application_with_assets(config: &AppConfig) -> Application {
    Application::new().with_assets(DashboardAssets::new(config.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_path_urls_resolve_into_the_asset_root() {
        let assets = DashboardAssets::new(AppConfig::default());
        let url = AppConfig::default().asset_url("icons/globe.svg");
        assert_eq!(assets.resolve(&url), assets.resolve("icons/globe.svg"));
        assert!(assets.resolve(&url).ends_with("assets/icons/globe.svg"));
    }

    #[test]
    fn bundled_icons_load() {
        let assets = DashboardAssets::new(AppConfig::default());
        let svg = assets.load("/dataviz-portfolio/icons/zap.svg").unwrap();
        assert!(svg.is_some());
        assert!(assets.load("icons/missing.svg").unwrap().is_none());
    }
}
