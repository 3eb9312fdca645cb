use anyhow::{Context, Result};
use log::{info, warn};
use std::path::Path;

use crate::types::Cfg;

/// Leser inn heatmap-konfig fra disk (JSON).
/// Hvis filen ikke finnes, returneres default-konfig.
pub fn load_cfg(path: &str) -> Result<Cfg> {
    if Path::new(path).exists() {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading cfg from {path}"))?;
        let cfg: Cfg = serde_json::from_str(&contents)
            .with_context(|| format!("parsing cfg in {path}"))?;
        info!(
            "cfg lastet fra {} (clamp_intensity={})",
            path, cfg.clamp_intensity
        );
        Ok(cfg)
    } else {
        warn!("fant ikke cfg på {}, bruker default", path);
        Ok(Cfg::default())
    }
}

/// Lagrer konfig til disk som JSON (pretty-print).
pub fn save_cfg(cfg: &Cfg, path: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(cfg)?;
    std::fs::write(path, json).with_context(|| format!("writing cfg to {path}"))?;
    info!(
        "cfg lagret til {} (clamp_intensity={})",
        path, cfg.clamp_intensity
    );
    Ok(())
}
