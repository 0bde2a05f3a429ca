use crate::modules::cases::core::session::Session;
use crate::modules::cases::core::state::CaseState;
use crate::modules::cases::use_cases::list_cases::handler::ListCases;
use crate::shell::state::{AppState, InMemoryStores};
use crate::tests::fixtures::commands::create_case::CreateCaseBuilder;
use crate::tests::fixtures::commands::transfer_case::TransferCaseBuilder;
use crate::tests::fixtures::settings::test_settings;

async fn seeded() -> AppState {
    let stores = InMemoryStores::new("documentos");
    let (settings, clock) = test_settings();
    let app = AppState::wire(&stores, settings);
    let creator = Session::member("Ana Pérez", "Legal");

    for (title, first_area) in [
        ("Contrato de obra", "Legal"),
        ("Pago a proveedor", "Finance"),
        ("Dictamen", "Legal"),
        ("Presupuesto", "Finance"),
    ] {
        clock.advance_millis(1_000);
        app.create_handler
            .handle(
                &creator,
                CreateCaseBuilder::new().title(title).first_area(first_area).build(),
            )
            .await
            .unwrap();
    }
    app
}

#[tokio::test]
async fn members_only_see_cases_held_by_their_area() {
    let app = seeded().await;
    let page = app
        .list_handler
        .handle(&Session::member("Luis", "Legal"), ListCases::default())
        .await
        .unwrap();
    assert_eq!(page.total, 2);
    assert!(page.items.iter().all(|case| case.current_area == "Legal"));
    assert_eq!(page.items[0].title, "Dictamen");
}

#[tokio::test]
async fn members_without_area_see_nothing() {
    let app = seeded().await;
    let session = Session {
        display_name: "Luis".into(),
        area: None,
        is_admin: false,
    };
    let page = app.list_handler.handle(&session, ListCases::default()).await.unwrap();
    assert_eq!(page.total, 0);
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn admins_see_everything_and_can_filter() {
    let app = seeded().await;
    let admin = Session::admin("Root");

    let all = app.list_handler.handle(&admin, ListCases::default()).await.unwrap();
    assert_eq!(all.total, 4);

    let searched = app
        .list_handler
        .handle(
            &admin,
            ListCases {
                search: Some("PAGO".into()),
                ..ListCases::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(searched.total, 1);
    assert_eq!(searched.items[0].title, "Pago a proveedor");
}

#[tokio::test]
async fn listing_follows_cases_as_they_move() {
    let app = seeded().await;
    let legal = Session::member("Luis", "Legal");
    let before = app.list_handler.handle(&legal, ListCases::default()).await.unwrap();
    let moving = before.items[0].code.clone();

    app.transfer_handler
        .handle(
            &legal,
            TransferCaseBuilder::new(moving.as_str())
                .destination_area("Finance")
                .next_state(Some(CaseState::Completado))
                .build(),
        )
        .await
        .unwrap();

    let legal_after = app.list_handler.handle(&legal, ListCases::default()).await.unwrap();
    assert_eq!(legal_after.total, 1);

    let finance = Session::member("Marta", "Finance");
    let finance_open = app
        .list_handler
        .handle(
            &finance,
            ListCases {
                hide_completed: true,
                ..ListCases::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(finance_open.total, 2);
    assert!(finance_open.items.iter().all(|case| case.code != moving));
}
