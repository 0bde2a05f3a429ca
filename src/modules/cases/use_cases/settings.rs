// Reference data and knobs shared by the case use cases.

use crate::modules::cases::core::areas::AreaCatalog;
use crate::modules::cases::core::identity::{RandomSuffix, SuffixSource};
use crate::modules::cases::core::process_templates::ProcessCatalog;
use crate::modules::cases::core::state::TransitionPolicy;
use crate::shared::core::clock::{Clock, SystemClock};
use crate::shared::infrastructure::store::DEFAULT_STORE_TIMEOUT;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct WorkflowSettings {
    pub areas: Arc<AreaCatalog>,
    pub processes: Arc<ProcessCatalog>,
    pub clock: Arc<dyn Clock>,
    pub suffixes: Arc<dyn SuffixSource>,
    pub store_timeout: Duration,
    pub transition_policy: TransitionPolicy,
}

impl Default for WorkflowSettings {
    fn default() -> Self {
        Self {
            areas: Arc::new(AreaCatalog::builtin()),
            processes: Arc::new(ProcessCatalog::builtin()),
            clock: Arc::new(SystemClock),
            suffixes: Arc::new(RandomSuffix),
            store_timeout: DEFAULT_STORE_TIMEOUT,
            transition_policy: TransitionPolicy::default(),
        }
    }
}
