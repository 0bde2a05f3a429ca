use crate::modules::cases::core::case::CaseCode;
use crate::modules::cases::core::ports::TimeInAreaRepository;
use crate::modules::cases::core::process_templates::SlaLevel;
use crate::modules::cases::core::session::Session;
use crate::modules::cases::core::state::CaseState;
use crate::modules::cases::use_cases::track_time_in_area::tracker::TimeInAreaTracker;
use crate::shell::state::{AppState, InMemoryStores};
use crate::tests::fixtures::commands::create_case::CreateCaseBuilder;
use crate::tests::fixtures::commands::transfer_case::TransferCaseBuilder;
use crate::tests::fixtures::settings::{TEST_TEMPLATE, test_settings};
use std::time::Duration;

fn ana() -> Session {
    Session::member("Ana Pérez", "Legal")
}

#[tokio::test]
async fn keeps_a_single_open_interval_across_transfers() {
    let stores = InMemoryStores::new("documentos");
    let (settings, clock) = test_settings();
    let app = AppState::wire(&stores, settings);

    let case = app
        .create_handler
        .handle(&ana(), CreateCaseBuilder::new().process_template(Some(TEST_TEMPLATE)).build())
        .await
        .unwrap()
        .value;

    for destination in ["Finance", "Legal", "Archive", "Finance", "Finance", "Legal"] {
        clock.advance_days(1);
        app.transfer_handler
            .handle(
                &ana(),
                TransferCaseBuilder::new(case.code.as_str())
                    .destination_area(destination)
                    .build(),
            )
            .await
            .unwrap();

        let intervals = stores.intervals.list_for_case(&case.code).await.unwrap();
        let open: Vec<_> = intervals.iter().filter(|i| i.is_open()).collect();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].area_name, destination);
    }

    let report = app.dwell_handler.handle(&case.code).await.unwrap();
    let legal = report.per_area.iter().find(|a| a.area == "Legal").unwrap();
    assert_eq!(legal.visits, 3);
}

#[tokio::test]
async fn completing_a_case_closes_its_interval_without_opening_another() {
    let stores = InMemoryStores::new("documentos");
    let (settings, clock) = test_settings();
    let app = AppState::wire(&stores, settings.clone());

    let case = app
        .create_handler
        .handle(&ana(), CreateCaseBuilder::new().process_template(Some(TEST_TEMPLATE)).build())
        .await
        .unwrap()
        .value;
    clock.advance_days(2);

    app.transfer_handler
        .handle(
            &ana(),
            TransferCaseBuilder::new(case.code.as_str())
                .destination_area("Archive")
                .next_state(Some(CaseState::Completado))
                .build(),
        )
        .await
        .unwrap();

    let tracker = TimeInAreaTracker::new(stores.intervals.clone(), settings.clock.clone(), settings.store_timeout);
    assert_eq!(tracker.current_open_interval(&case.code).await.unwrap(), None);
    let intervals = tracker.all_intervals(&case.code).await.unwrap();
    assert_eq!(intervals.len(), 1);
    assert!(intervals.iter().all(|i| !i.is_open()));

    let report = app.dwell_handler.handle(&case.code).await.unwrap();
    assert_eq!(report.current, None);
}

#[tokio::test]
async fn closing_without_intervals_is_a_no_op() {
    let stores = InMemoryStores::new("documentos");
    let (settings, _) = test_settings();
    let tracker = TimeInAreaTracker::new(stores.intervals.clone(), settings.clock, Duration::from_secs(1));
    let code = CaseCode::new("LEGA-000404");

    tracker.close_current_interval(&code).await.unwrap();

    assert_eq!(stores.intervals.row_count().await, 0);
    assert!(tracker.all_intervals(&code).await.unwrap().is_empty());
}

#[tokio::test]
async fn flags_stays_that_outgrow_the_template() {
    let stores = InMemoryStores::new("documentos");
    let (settings, clock) = test_settings();
    let app = AppState::wire(&stores, settings);

    let case = app
        .create_handler
        .handle(&ana(), CreateCaseBuilder::new().process_template(Some(TEST_TEMPLATE)).build())
        .await
        .unwrap()
        .value;

    clock.advance_days(4);
    let report = app.dwell_handler.handle(&case.code).await.unwrap();
    assert_eq!(report.current.as_ref().map(|c| c.level), Some(SlaLevel::Warning));

    clock.advance_days(1);
    let report = app.dwell_handler.handle(&case.code).await.unwrap();
    assert_eq!(report.current.map(|c| c.level), Some(SlaLevel::Overdue));
}
