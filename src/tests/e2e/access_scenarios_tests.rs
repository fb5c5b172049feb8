use crate::modules::access::core::errors::AccessError;
use crate::modules::access::use_cases::manage_assignments::command::{
    GrantAssignment, RevokeAssignment,
};
use crate::tests::fixtures::app::TestApp;
use crate::tests::fixtures::directory::at;
use chrono::Duration;
use rstest::{fixture, rstest};

#[fixture]
fn app() -> TestApp {
    TestApp::new()
}

fn grant(operator_id: &str, sector_id: &str, street_id: Option<&str>) -> GrantAssignment {
    GrantAssignment {
        operator_id: operator_id.to_string(),
        sector_id: sector_id.to_string(),
        street_id: street_id.map(str::to_string),
        valid_from: at(2024, 1, 1),
        valid_to: None,
    }
}

#[rstest]
#[tokio::test]
async fn it_should_stop_authorizing_after_revocation(app: TestApp) {
    let assignment = app.manager.grant(grant("op-ana", "sec-center", None)).await.unwrap();
    assert!(app.resolver.can_access("op-ana", "sec-center", Some("st-main"), None).await.unwrap());

    let revoked_at = at(2024, 6, 1);
    app.manager
        .revoke(RevokeAssignment {
            assignment_id: assignment.assignment_id.clone(),
            at: Some(revoked_at),
        })
        .await
        .unwrap();

    // Inclusive end: still valid at the revocation instant, not after it.
    assert!(app.resolver.can_access("op-ana", "sec-center", None, Some(revoked_at)).await.unwrap());
    app.clock.advance(Duration::seconds(1));
    assert!(!app.resolver.can_access("op-ana", "sec-center", None, None).await.unwrap());
    assert!(!app.resolver.can_access("op-ana", "sec-center", Some("st-main"), None).await.unwrap());
}

#[rstest]
#[tokio::test]
async fn it_should_keep_street_grants_to_their_street(app: TestApp) {
    app.manager.grant(grant("op-ben", "sec-center", Some("st-oak"))).await.unwrap();
    assert!(app.resolver.can_access("op-ben", "sec-center", Some("st-oak"), None).await.unwrap());
    assert!(!app.resolver.can_access("op-ben", "sec-center", Some("st-main"), None).await.unwrap());
    assert!(!app.resolver.can_access("op-ben", "sec-center", None, None).await.unwrap());
}

#[rstest]
#[tokio::test]
async fn it_should_not_leak_grants_between_operators(app: TestApp) {
    app.manager.grant(grant("op-ana", "sec-harbor", None)).await.unwrap();
    assert!(app.resolver.can_access("op-ana", "sec-harbor", Some("st-pier"), None).await.unwrap());
    assert!(!app.resolver.can_access("op-ben", "sec-harbor", Some("st-pier"), None).await.unwrap());
}

#[rstest]
#[tokio::test]
async fn it_should_let_private_sectors_through_for_active_operators_only(app: TestApp) {
    assert!(app.resolver.can_access("op-ben", "sec-mall", None, None).await.unwrap());
    assert_eq!(
        app.resolver.can_access("op-carl", "sec-mall", None, None).await,
        Err(AccessError::OperatorInactive("op-carl".into()))
    );
    assert_eq!(
        app.resolver.can_access("op-zed", "sec-mall", None, None).await,
        Err(AccessError::OperatorNotFound("op-zed".into()))
    );
}

#[rstest]
#[tokio::test]
async fn it_should_honour_future_dated_grants_only_from_their_start(app: TestApp) {
    let mut future = grant("op-ana", "sec-harbor", None);
    future.valid_from = at(2024, 7, 1);
    future.valid_to = Some(at(2024, 7, 31));
    app.manager.grant(future).await.unwrap();

    assert!(!app.resolver.can_access("op-ana", "sec-harbor", None, None).await.unwrap());
    assert!(app.resolver.can_access("op-ana", "sec-harbor", None, Some(at(2024, 7, 1))).await.unwrap());
    assert!(app.resolver.can_access("op-ana", "sec-harbor", None, Some(at(2024, 7, 31))).await.unwrap());
    assert!(!app.resolver.can_access("op-ana", "sec-harbor", None, Some(at(2024, 8, 1))).await.unwrap());
}
