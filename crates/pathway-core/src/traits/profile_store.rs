use crate::errors::PathwayResult;
use crate::models::StyleProfile;

/// Learner style profiles. Profiles are write-once unless `replace` is set.
pub trait StyleProfileStore: Send + Sync {
    fn get_profile(&self, learner_id: &str) -> PathwayResult<Option<StyleProfile>>;

    /// Fails with `ProfileAlreadyRecorded` when a profile exists and
    /// `replace` is false.
    fn save_profile(
        &self,
        learner_id: &str,
        profile: &StyleProfile,
        replace: bool,
    ) -> PathwayResult<()>;
}
