use crate::shell::graphql::build_schema;
use crate::tests::fixtures::app::TestApp;
use crate::tests::fixtures::directory::at;
use async_graphql::{Request, Variables};
use serde_json::json;

#[tokio::test]
async fn it_should_run_a_shift_through_the_schema() {
    let app = TestApp::new().with_grant("op-ana", "sec-center", None, at(2024, 1, 1), None);
    let schema = build_schema(app.state());

    let opened = schema
        .execute(
            r#"mutation { openShift(operatorId: "op-ana", deviceId: "dev-1", openingFloat: 10000) { shiftId status } }"#,
        )
        .await;
    assert!(opened.errors.is_empty(), "{:?}", opened.errors);
    let opened = opened.data.into_json().unwrap();
    assert_eq!(opened["openShift"]["status"], "OPEN");
    let shift_id = opened["openShift"]["shiftId"].as_str().unwrap().to_string();

    let posted = schema
        .execute(
            Request::new(
                r#"mutation($id: ID!) {
                    postMovement(shiftId: $id, idempotencyKey: "k-1", movement: { method: CASH, amount: 5000 }) { sequence duplicate }
                }"#,
            )
            .variables(Variables::from_json(json!({ "id": shift_id }))),
        )
        .await;
    assert!(posted.errors.is_empty(), "{:?}", posted.errors);
    assert_eq!(posted.data.into_json().unwrap()["postMovement"]["sequence"], 1);

    let allowed = schema
        .execute(r#"{ canAccess(operatorId: "op-ana", sectorId: "sec-center", streetId: "st-main") }"#)
        .await;
    assert_eq!(allowed.data.into_json().unwrap()["canAccess"], true);

    let closed = schema
        .execute(
            Request::new(
                r#"mutation($id: ID!) { closeShift(shiftId: $id, closingDeclaredCash: 15000) { expectedCash difference } }"#,
            )
            .variables(Variables::from_json(json!({ "id": shift_id }))),
        )
        .await;
    assert!(closed.errors.is_empty(), "{:?}", closed.errors);
    let closed = closed.data.into_json().unwrap();
    assert_eq!(closed["closeShift"]["expectedCash"], 15_000);
    assert_eq!(closed["closeShift"]["difference"], 0);
}

#[tokio::test]
async fn it_should_expose_error_codes_as_extensions() {
    let app = TestApp::new();
    let schema = build_schema(app.state());
    let response = schema
        .execute(r#"{ reconciliation(shiftId: "sh-missing") { expectedCash } }"#)
        .await;
    assert_eq!(response.errors.len(), 1);
    let error = serde_json::to_value(&response.errors[0]).unwrap();
    assert_eq!(error["extensions"]["code"], "SHIFT_NOT_FOUND");
}
