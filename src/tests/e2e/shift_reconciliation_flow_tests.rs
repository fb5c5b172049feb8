use crate::modules::access::core::errors::AccessError;
use crate::modules::shifts::core::decision::DecideError;
use crate::modules::shifts::core::ledger::{AdjustmentKind, PaymentMethod};
use crate::modules::shifts::core::state::ShiftStatus;
use crate::modules::shifts::use_cases::close_shift::command::CloseShift;
use crate::modules::shifts::use_cases::lifecycle::ApplicationError;
use crate::tests::fixtures::app::TestApp;
use crate::tests::fixtures::commands::{
    CapturePaymentBuilder, OpenShiftBuilder, card, cash, deposit, post, withdrawal,
};
use crate::tests::fixtures::directory::at;
use chrono::Duration;
use rstest::rstest;

fn close(shift_id: &str, declared: i64) -> CloseShift {
    CloseShift {
        shift_id: shift_id.to_string(),
        closing_declared_cash: declared,
        notes: None,
    }
}

#[rstest]
#[tokio::test]
async fn it_should_run_a_full_shift_from_open_to_close() {
    let app = TestApp::new().with_grant("op-ana", "sec-center", None, at(2024, 1, 1), None);

    let shift = app
        .lifecycle
        .open_shift(
            OpenShiftBuilder::new()
                .sector_id("sec-center")
                .opening_float(10_000)
                .notes("morning")
                .build(),
        )
        .await
        .unwrap();

    app.clock.advance(Duration::minutes(30));
    app.lifecycle
        .capture_payment(
            CapturePaymentBuilder::new(&shift.shift_id)
                .amount(5_000)
                .idempotency_key("pay-1")
                .build(),
        )
        .await
        .unwrap();
    app.lifecycle
        .capture_payment(
            CapturePaymentBuilder::new(&shift.shift_id)
                .method(PaymentMethod::Card)
                .amount(2_500)
                .idempotency_key("pay-2")
                .build(),
        )
        .await
        .unwrap();
    // Retried by the device after a timeout.
    app.lifecycle
        .capture_payment(
            CapturePaymentBuilder::new(&shift.shift_id)
                .amount(5_000)
                .idempotency_key("pay-1")
                .build(),
        )
        .await
        .unwrap();
    app.lifecycle
        .post_movement(post(&shift.shift_id, "adj-1", withdrawal(2_000)))
        .await
        .unwrap();

    let preview = app
        .lifecycle
        .preview_reconciliation(&shift.shift_id)
        .await
        .unwrap();
    assert_eq!(preview.expected_cash, 13_000);
    assert_eq!(preview.declared_cash, None);

    app.clock.advance(Duration::hours(8));
    let report = app
        .lifecycle
        .close_shift(close(&shift.shift_id, 12_950))
        .await
        .unwrap();

    assert_eq!(report.movement_count, 3);
    assert_eq!(report.total_payments, 7_500);
    assert_eq!(report.expected_cash, 13_000);
    assert_eq!(report.difference, Some(-50));
    assert_eq!(
        report
            .payments
            .iter()
            .map(|t| (t.method, t.count, t.total))
            .collect::<Vec<_>>(),
        vec![(PaymentMethod::Cash, 1, 5_000), (PaymentMethod::Card, 1, 2_500)]
    );
    assert_eq!(report.adjustments[0].kind, AdjustmentKind::Withdrawal);

    let view = app.lifecycle.shift(&shift.shift_id).await.unwrap();
    assert_eq!(view.status, ShiftStatus::Closed);
    assert_eq!(app.lifecycle.current_shift("op-ana", "dev-1").await.unwrap(), None);

    let late = app
        .lifecycle
        .capture_payment(
            CapturePaymentBuilder::new(&shift.shift_id)
                .idempotency_key("pay-3")
                .build(),
        )
        .await;
    assert!(matches!(
        late,
        Err(ApplicationError::Rejected(DecideError::ShiftNotOpen))
    ));
}

#[rstest]
#[tokio::test]
async fn it_should_reach_the_same_figures_in_any_posting_order() {
    let movements = [cash(1_200), card(800), withdrawal(300), deposit(150), cash(50)];
    let mut expected = Vec::new();
    for order in [[0, 1, 2, 3, 4], [4, 3, 2, 1, 0], [2, 0, 4, 1, 3]] {
        let app = TestApp::new();
        let shift = app
            .lifecycle
            .open_shift(OpenShiftBuilder::new().opening_float(1_000).build())
            .await
            .unwrap();
        for i in order {
            app.lifecycle
                .post_movement(post(&shift.shift_id, &format!("k-{i}"), movements[i].clone()))
                .await
                .unwrap();
        }
        let report = app
            .lifecycle
            .close_shift(close(&shift.shift_id, 2_100))
            .await
            .unwrap();
        expected.push((
            report.expected_cash,
            report.difference,
            report.total_payments,
            report.payments,
            report.adjustments,
        ));
    }
    assert_eq!(expected[0].0, 2_100);
    assert_eq!(expected[0].1, Some(0));
    assert!(expected.windows(2).all(|w| w[0] == w[1]));
}

#[rstest]
#[tokio::test]
async fn it_should_refuse_to_open_in_a_sector_without_a_grant() {
    let app = TestApp::new();
    let result = app
        .lifecycle
        .open_shift(OpenShiftBuilder::new().sector_id("sec-harbor").build())
        .await;
    assert!(matches!(
        result,
        Err(ApplicationError::Access(AccessError::Unauthorized { .. }))
    ));
    assert_eq!(app.lifecycle.current_shift("op-ana", "dev-1").await.unwrap(), None);
}

#[rstest]
#[tokio::test]
async fn it_should_refuse_to_open_for_an_inactive_operator() {
    let app = TestApp::new();
    let result = app
        .lifecycle
        .open_shift(OpenShiftBuilder::new().operator_id("op-carl").build())
        .await;
    assert!(matches!(
        result,
        Err(ApplicationError::Access(AccessError::OperatorInactive(_)))
    ));
}

#[rstest]
#[tokio::test]
async fn it_should_allow_one_open_shift_per_device_not_per_operator() {
    let app = TestApp::new();
    let first = app
        .lifecycle
        .open_shift(OpenShiftBuilder::new().device_id("dev-1").build())
        .await
        .unwrap();
    let second = app
        .lifecycle
        .open_shift(OpenShiftBuilder::new().device_id("dev-2").build())
        .await
        .unwrap();
    assert_ne!(first.shift_id, second.shift_id);
}
