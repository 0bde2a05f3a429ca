// Reference data for tests: the built-in catalogs plus two short areas ("Legal",
// "Finance") and a template that tracks them.

use crate::modules::cases::core::areas::{Area, AreaCatalog};
use crate::modules::cases::core::identity::SequentialSuffix;
use crate::modules::cases::core::process_templates::{DwellRange, ProcessCatalog, template};
use crate::modules::cases::core::state::TransitionPolicy;
use crate::modules::cases::use_cases::settings::WorkflowSettings;
use crate::shared::core::clock::ManualClock;
use crate::tests::fixtures::cases::FIXED_CREATED_AT;
use std::sync::Arc;
use std::time::Duration;

pub const TEST_TEMPLATE: &str = "proceso_test";

pub fn test_areas() -> AreaCatalog {
    let mut areas = AreaCatalog::builtin().areas().to_vec();
    areas.push(Area::new("Legal", "LEGA"));
    areas.push(Area::new("Finance", "FINA"));
    areas.push(Area::new("Archive", "ARCH"));
    AreaCatalog::new(areas)
}

pub fn test_processes() -> ProcessCatalog {
    let mut templates = ProcessCatalog::builtin().templates().to_vec();
    templates.push(template(
        TEST_TEMPLATE,
        "Legal review and payment",
        vec![
            ("Legal", Some(DwellRange::new(1, 5, "1–5 días"))),
            ("Finance", Some(DwellRange::new(2, 10, "2–10 días"))),
            ("Archive", None),
        ],
    ));
    ProcessCatalog::new(templates)
}

/// Settings on a pinned clock with suffixes counting up from 1.
pub fn test_settings() -> (WorkflowSettings, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::starting_at(FIXED_CREATED_AT));
    let settings = WorkflowSettings {
        areas: Arc::new(test_areas()),
        processes: Arc::new(test_processes()),
        clock: clock.clone(),
        suffixes: Arc::new(SequentialSuffix::starting_at(1)),
        store_timeout: Duration::from_secs(1),
        transition_policy: TransitionPolicy::Permissive,
    };
    (settings, clock)
}
