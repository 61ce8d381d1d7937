use super::*;
use crate::net::actions::{quick_add, save_component};
use crate::state::catalog_draft::ComponentDraft;
use rest::mock::MockServer;

#[tokio::test]
async fn compliance_loads_every_register() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();
    quick_add::<CraProduct>(&client).await.unwrap();
    quick_add::<Nis2Attestation>(&client).await.unwrap();

    let lists = load_compliance(&client).await;
    assert_eq!(lists.cra.items.len(), 1);
    assert_eq!(lists.nis2.items.len(), 1);
    assert!(lists.eudr.is_empty());
    assert_eq!(lists.first_error(), None);
}

#[tokio::test]
async fn one_failed_register_surfaces_one_error() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();
    quick_add::<AiSystem>(&client).await.unwrap();
    server.fail_next(502, "gateway");

    let lists = load_compliance(&client).await;
    assert_eq!(lists.first_error().as_deref(), Some("gateway"));
    let errors = [&lists.cra.error, &lists.eudr.error, &lists.ai.error, &lists.epd.error, &lists.nis2.error];
    assert_eq!(errors.iter().filter(|e| e.is_some()).count(), 1);
}

#[tokio::test]
async fn catalog_records_are_selected_by_id() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();
    let draft = ComponentDraft { name: "BMS board".to_owned(), ..ComponentDraft::default() };
    let saved = save_component(&client, None, &draft).await.unwrap();

    assert_eq!(find_component(&client, &saved.id).await.map(|c| c.name), Some("BMS board".to_owned()));
    assert!(find_component(&client, "missing").await.is_none());
    assert!(find_template(&client, &saved.id).await.is_none());
}
