//! StorageEngine: owns the ConnectionPool and implements every store trait
//! the planning core depends on.

use std::path::Path;

use rusqlite::Connection;
use tracing::debug;

use pathway_core::config::StorageConfig;
use pathway_core::errors::PathwayResult;
use pathway_core::models::{
    Competency, DiagnosticScoreMap, LearningPath, Resource, Step, StyleProfile,
};
use pathway_core::traits::{
    CompetencyRepository, DiagnosticScoreProvider, PathStore, ResourcePool, StyleProfileStore,
};

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{catalog_ops, diagnostic_ops, path_ops, profile_ops};

pub struct StorageEngine {
    pool: ConnectionPool,
}

impl StorageEngine {
    /// Open a file-backed database with default pool settings.
    pub fn open(path: &Path) -> PathwayResult<Self> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    /// Open a file-backed database using the pool size and busy timeout
    /// from `config`. `config.db_path` is not consulted.
    pub fn open_with_config(path: &Path, config: &StorageConfig) -> PathwayResult<Self> {
        let engine = Self {
            pool: ConnectionPool::open(path, config)?,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open the database named by `config.db_path`.
    pub fn from_config(config: &StorageConfig) -> PathwayResult<Self> {
        Self::open_with_config(Path::new(&config.db_path), config)
    }

    /// Open an in-memory database.
    pub fn open_in_memory() -> PathwayResult<Self> {
        let engine = Self {
            pool: ConnectionPool::open_in_memory()?,
        };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> PathwayResult<()> {
        self.pool.write(|conn| {
            let version = migrations::run_migrations(conn)?;
            debug!(version, "storage ready");
            Ok(())
        })
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    fn with_reader<F, T>(&self, f: F) -> PathwayResult<T>
    where
        F: FnOnce(&Connection) -> PathwayResult<T>,
    {
        self.pool.read(f)
    }

    fn with_writer<F, T>(&self, f: F) -> PathwayResult<T>
    where
        F: FnOnce(&Connection) -> PathwayResult<T>,
    {
        self.pool.write(f)
    }

    // Reference-data writes used by hosts and tests.

    pub fn upsert_competency(&self, competency: &Competency) -> PathwayResult<()> {
        self.with_writer(|conn| catalog_ops::upsert_competency(conn, competency))
    }

    pub fn upsert_resource(&self, resource: &Resource) -> PathwayResult<()> {
        self.with_writer(|conn| catalog_ops::upsert_resource(conn, resource))
    }

    pub fn get_resource(&self, id: &str) -> PathwayResult<Option<Resource>> {
        self.with_reader(|conn| catalog_ops::get_resource(conn, id))
    }

    pub fn record_diagnostic(
        &self,
        learner_id: &str,
        course_id: &str,
        competency_id: &str,
        percentage: f64,
    ) -> PathwayResult<()> {
        self.with_writer(|conn| {
            diagnostic_ops::record_diagnostic(conn, learner_id, course_id, competency_id, percentage)
        })
    }
}

impl CompetencyRepository for StorageEngine {
    fn list(&self, course_id: &str) -> PathwayResult<Vec<Competency>> {
        self.with_reader(|conn| catalog_ops::list_competencies(conn, course_id))
    }
}

impl ResourcePool for StorageEngine {
    fn get_active(&self, competency_id: &str) -> PathwayResult<Vec<Resource>> {
        self.with_reader(|conn| catalog_ops::get_active_resources(conn, competency_id))
    }
}

impl DiagnosticScoreProvider for StorageEngine {
    fn get_scores(&self, learner_id: &str, course_id: &str) -> PathwayResult<DiagnosticScoreMap> {
        self.with_reader(|conn| diagnostic_ops::get_scores(conn, learner_id, course_id))
    }
}

impl StyleProfileStore for StorageEngine {
    fn get_profile(&self, learner_id: &str) -> PathwayResult<Option<StyleProfile>> {
        self.with_reader(|conn| profile_ops::get_profile(conn, learner_id))
    }

    fn save_profile(
        &self,
        learner_id: &str,
        profile: &StyleProfile,
        replace: bool,
    ) -> PathwayResult<()> {
        self.with_writer(|conn| profile_ops::save_profile(conn, learner_id, profile, replace))
    }
}

impl PathStore for StorageEngine {
    // Path reads go through the writer: callers follow them with writes and
    // must see their own latest state.
    fn find_active_path(
        &self,
        learner_id: &str,
        course_id: &str,
    ) -> PathwayResult<Option<LearningPath>> {
        self.with_writer(|conn| path_ops::find_active_path(conn, learner_id, course_id))
    }

    fn get_path(&self, path_id: &str) -> PathwayResult<Option<LearningPath>> {
        self.with_writer(|conn| path_ops::get_path(conn, path_id))
    }

    fn create_path(&self, path: &LearningPath) -> PathwayResult<()> {
        self.with_writer(|conn| path_ops::create_path(conn, path))
    }

    fn save_step_transition(&self, path: &LearningPath, order: u32) -> PathwayResult<()> {
        self.with_writer(|conn| path_ops::save_step_transition(conn, path, order))
    }

    fn append_steps(&self, path: &LearningPath, new_steps: &[Step]) -> PathwayResult<()> {
        self.with_writer(|conn| path_ops::append_steps(conn, path, new_steps))
    }

    fn deactivate_path(&self, path_id: &str) -> PathwayResult<()> {
        self.with_writer(|conn| path_ops::deactivate_path(conn, path_id))
    }
}
