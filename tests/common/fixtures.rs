//! Shared test doubles and asset helpers.

use folio::{EngineError, Flowable, FontRegistry, PageSize, RegistryError, RenderEngine};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// One recorded `build` call.
#[derive(Debug, Clone)]
pub struct RecordedBuild {
    pub story: Vec<Flowable>,
    pub page_size: PageSize,
    pub output: PathBuf,
}

/// Engine fake that records every build call and optionally fails.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    pub calls: Mutex<Vec<RecordedBuild>>,
    pub fail: bool,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { calls: Mutex::new(Vec::new()), fail: true }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> RecordedBuild {
        self.calls.lock().unwrap().last().cloned().expect("no build call recorded")
    }
}

impl RenderEngine for RecordingEngine {
    fn build(
        &self,
        story: &[Flowable],
        page_size: &PageSize,
        output: &Path,
    ) -> Result<(), EngineError> {
        if self.fail {
            return Err(EngineError::Render("engine exploded".to_string()));
        }
        self.calls.lock().unwrap().push(RecordedBuild {
            story: story.to_vec(),
            page_size: page_size.clone(),
            output: output.to_path_buf(),
        });
        fs::write(output, b"%PDF-fake")?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "RecordingEngine"
    }
}

/// Registry fake backed by a plain name list.
#[derive(Debug, Default)]
pub struct FakeRegistry {
    names: Mutex<Vec<String>>,
}

impl FakeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registered_names(&self) -> Vec<String> {
        self.names.lock().unwrap().clone()
    }
}

impl FontRegistry for FakeRegistry {
    fn register(&self, name: &str, _path: &Path) -> Result<(), RegistryError> {
        self.names.lock().unwrap().push(name.to_string());
        Ok(())
    }

    fn contains(&self, name: &str) -> bool {
        self.names.lock().unwrap().iter().any(|n| n == name)
    }

    fn name(&self) -> &'static str {
        "FakeRegistry"
    }
}

/// Writes a placeholder font file and returns its path.
pub fn write_font(dir: &Path, file_name: &str) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, b"placeholder font bytes").unwrap();
    path
}

/// Writes a PNG of the given dimensions and returns its path.
pub fn write_png(dir: &Path, file_name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(file_name);
    image::RgbaImage::new(width, height).save(&path).unwrap();
    path
}
