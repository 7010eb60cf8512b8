//! Test fixture loader for Pathway golden datasets.
//!
//! Fixtures live under `data/` in this crate and are shared by the
//! integration tests of every other crate in the workspace.

use std::collections::BTreeMap;
use std::path::PathBuf;

use pathway_core::models::{Competency, DiagnosticScoreMap, RawSurveyResponse, Resource, SurveyAnswers};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw text.
pub fn load_fixture_text(relative_path: &str) -> String {
    let path = fixtures_root().join(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    paths.sort();
    paths
}

/// A course with its catalogue, learner diagnostics, and the plan a
/// generation run is expected to produce.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseFixture {
    pub course_id: String,
    #[serde(default)]
    pub description: String,
    pub competencies: Vec<Competency>,
    pub resources: Vec<Resource>,
    /// learner id → diagnostic scores.
    pub diagnostics: BTreeMap<String, DiagnosticScoreMap>,
    pub expected: ExpectedPlan,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedPlan {
    pub learner_id: String,
    /// Competency ids in sequenced order.
    pub order: Vec<String>,
    /// Steps the banding table asks for, before pool shortfalls.
    pub planned_steps: BTreeMap<String, usize>,
    pub total_steps: u32,
    #[serde(default)]
    pub forced: Vec<String>,
    #[serde(default)]
    pub empty_pools: Vec<String>,
    #[serde(default)]
    pub thin_pools: Vec<String>,
}

impl CourseFixture {
    /// Diagnostics of the learner named in `expected`.
    pub fn expected_scores(&self) -> DiagnosticScoreMap {
        self.diagnostics
            .get(&self.expected.learner_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Active and inactive resources of one competency, in file order.
    pub fn resources_for(&self, competency_id: &str) -> Vec<Resource> {
        self.resources
            .iter()
            .filter(|r| r.competency_id == competency_id)
            .cloned()
            .collect()
    }
}

/// Load `data/courses/<name>.json`.
pub fn load_course(name: &str) -> CourseFixture {
    load_fixture(&format!("courses/{name}.json"))
}

/// Every course fixture.
pub fn all_courses() -> Vec<CourseFixture> {
    list_fixtures("courses")
        .into_iter()
        .map(|path| {
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_else(|| panic!("Bad fixture name {}", path.display()))
                .to_string();
            load_course(&name)
        })
        .collect()
}

/// A raw form submission and what translating then profiling it yields.
#[derive(Debug, Clone, Deserialize)]
pub struct SurveyCase {
    pub name: String,
    pub raw: RawSurveyResponse,
    pub expected_answers: SurveyAnswers,
    pub expected_dropped: Vec<String>,
    pub expected_dominant: String,
}

/// Raw JSON of the VARK survey mapping.
pub fn survey_mapping_json() -> String {
    load_fixture_text("surveys/vark_mapping.json")
}

pub fn survey_cases() -> Vec<SurveyCase> {
    load_fixture("surveys/responses.json")
}
