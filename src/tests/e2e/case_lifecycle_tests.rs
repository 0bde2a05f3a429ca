use crate::modules::cases::core::evolve::replay;
use crate::modules::cases::core::identity::RandomSuffix;
use crate::modules::cases::core::ports::{CaseRepository, MovementLedger};
use crate::modules::cases::core::session::Session;
use crate::modules::cases::core::state::CaseState;
use crate::modules::cases::use_cases::create_case::handler::CREATION_NOTE;
use crate::shell::state::{AppState, InMemoryStores};
use crate::tests::fixtures::commands::create_case::CreateCaseBuilder;
use crate::tests::fixtures::commands::transfer_case::TransferCaseBuilder;
use crate::tests::fixtures::settings::test_settings;
use std::collections::HashSet;
use std::sync::Arc;

fn ana() -> Session {
    Session::member("Ana Pérez", "Legal")
}

#[tokio::test]
async fn creates_a_case_then_transfers_it_to_finance() {
    let stores = InMemoryStores::new("documentos");
    let (settings, clock) = test_settings();
    let app = AppState::wire(&stores, settings);

    let command = CreateCaseBuilder::new()
        .title("Budget request")
        .external_ref(None)
        .sender_name("Ana Pérez")
        .first_area("Legal")
        .final_area("Finance")
        .build();
    let case = app.create_handler.handle(&ana(), command).await.unwrap().value;

    assert_eq!(case.current_area, "Legal");
    assert_eq!(case.state, CaseState::EnTransito);
    let movements = stores.ledger.list_by_case(&case.code).await.unwrap();
    assert_eq!(movements.len(), 1);
    assert_eq!(
        (movements[0].origin_area.as_str(), movements[0].destination_area.as_str()),
        ("Legal", "Legal")
    );
    assert_eq!(movements[0].notes.as_deref(), Some(CREATION_NOTE));

    clock.advance_millis(1_000);
    let transfer = TransferCaseBuilder::new(case.code.as_str())
        .origin_area("Legal")
        .destination_area("Finance")
        .external_ref("OF-2025-001")
        .acting_user("Ana Pérez")
        .next_state(Some(CaseState::Procesado))
        .build();
    let transferred = app.transfer_handler.handle(&ana(), transfer).await.unwrap().value;

    assert_eq!(transferred.case.current_area, "Finance");
    assert_eq!(transferred.case.state, CaseState::Procesado);
    let movements = stores.ledger.list_by_case(&case.code).await.unwrap();
    assert_eq!(movements.len(), 2);
    assert_eq!(movements[0].origin_area, "Legal");
    assert_eq!(movements[0].destination_area, "Finance");
}

#[tokio::test]
async fn mints_distinct_codes_for_every_case() {
    let stores = InMemoryStores::new("documentos");
    let (settings, clock) = test_settings();
    let app = AppState::wire(&stores, settings);

    let mut codes = HashSet::new();
    for _ in 0..25 {
        let case = app
            .create_handler
            .handle(&ana(), CreateCaseBuilder::new().build())
            .await
            .unwrap()
            .value;
        clock.advance_millis(1);
        assert!(codes.insert(case.code), "code minted twice");
    }
    assert_eq!(codes.len(), 25);
}

#[tokio::test]
async fn keeps_codes_unique_with_random_suffixes_on_the_same_instant() {
    let stores = InMemoryStores::new("documentos");
    let (mut settings, _) = test_settings();
    settings.suffixes = Arc::new(RandomSuffix);
    let app = AppState::wire(&stores, settings);

    let mut codes = HashSet::new();
    for _ in 0..50 {
        let case = app
            .create_handler
            .handle(&ana(), CreateCaseBuilder::new().build())
            .await
            .unwrap()
            .value;
        assert!(case.code.as_str().starts_with("LEGA-"));
        codes.insert(case.code);
    }
    assert_eq!(codes.len(), 50);
}

#[tokio::test]
async fn replaying_the_ledger_rebuilds_area_and_state() {
    let stores = InMemoryStores::new("documentos");
    let (settings, clock) = test_settings();
    let app = AppState::wire(&stores, settings);

    let case = app
        .create_handler
        .handle(&ana(), CreateCaseBuilder::new().build())
        .await
        .unwrap()
        .value;

    let route = [
        ("Finance", Some(CaseState::Detenido)),
        ("Legal", None),
        ("Archive", Some(CaseState::Firmado)),
        ("Finance", Some(CaseState::EnTransito)),
        ("Legal", None),
        ("Archive", Some(CaseState::Completado)),
    ];
    for (destination, next_state) in route {
        clock.advance_millis(60_000);
        app.transfer_handler
            .handle(
                &ana(),
                TransferCaseBuilder::new(case.code.as_str())
                    .destination_area(destination)
                    .next_state(next_state)
                    .build(),
            )
            .await
            .unwrap();

        let stored = stores.cases.get(&case.code).await.unwrap().unwrap();
        let movements = stores.ledger.list_by_case(&case.code).await.unwrap();
        let position = replay(&movements).unwrap();
        assert_eq!(position.area, stored.current_area);
        assert_eq!(position.state, stored.state);
    }

    let history = app.history_handler.history(&case.code).await.unwrap();
    assert!(history.consistent);
    assert_eq!(history.case.state, CaseState::Completado);
    assert_eq!(history.movements.len(), route.len() + 1);
}
