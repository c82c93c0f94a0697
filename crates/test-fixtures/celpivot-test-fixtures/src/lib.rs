//! Shared test fixtures: JSON-described scenes plus a scripted fake host
//! session, used by the core crate's integration tests.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;

use celpivot_core::{FrameIndex, FrameSelection, PivotMode, PivotPoint, UnitsAspect};

mod fake_host;

pub use fake_host::FakeHost;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    scenes: HashMap<String, String>,
}

/// One scripted host scene: a node, its timeline selection, the cel exposed
/// at each selected frame, and the host settings the run reads.
#[derive(Clone, Debug, Deserialize)]
pub struct SceneFixture {
    /// Selected node, or `None` for an empty selection.
    pub node: Option<String>,
    #[serde(default = "default_true")]
    pub node_is_drawing: bool,
    #[serde(default)]
    pub element_mode: bool,
    pub selection: FrameSelection,
    /// Cel per selected frame, starting at `selection.first_frame`.
    pub cels: Vec<String>,
    /// Pivot positions by frame, in normalized scene units.
    #[serde(default)]
    pub pivots: HashMap<FrameIndex, PivotPoint>,
    pub pivot_mode: PivotMode,
    #[serde(default)]
    pub units_aspect: UnitsAspect,
}

fn default_true() -> bool {
    true
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = fixtures_root().join(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

pub mod scenes {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.scenes.keys().cloned().collect()
    }

    pub fn load(name: &str) -> Result<SceneFixture> {
        let rel = MANIFEST
            .scenes
            .get(name)
            .ok_or_else(|| anyhow!("unknown scene fixture '{name}'"))?;
        let text = read_to_string(rel)?;
        serde_json::from_str(&text).with_context(|| format!("failed to parse scene fixture {rel}"))
    }

    /// Load a scene fixture and wrap it in a ready-to-run fake host.
    pub fn fake_host(name: &str) -> Result<FakeHost> {
        Ok(FakeHost::from_fixture(&load(name)?))
    }
}
