use pretty_assertions::assert_eq;
use reel_core_form_contracts::{ContactFormService, MockContactSendAction, SubmitOutcome};
use reel_models::form::{FormStatus, SendResult};
use reel_shared_contracts::toast::MockToastService;

use super::*;

#[tokio::test(start_paused = true)]
async fn submit_while_loading_is_ignored() {
    // Arrange
    let (send_action, resolve) = MockContactSendAction::new().with_pending_send(valid_message());
    let toast = MockToastService::new().with_toast(success_toast());

    let sut = shared(make_sut(send_action, toast));
    fill_valid(&*sut);
    let mut status = sut.watch_status();

    let first = tokio::spawn({
        let sut = Arc::clone(&sut);
        async move { sut.submit().await }
    });
    status
        .wait_for(|status| *status == FormStatus::Loading)
        .await
        .unwrap();

    // Act
    let second = sut.submit().await;
    let third = sut.submit().await;

    // Assert
    assert_eq!(second, SubmitOutcome::Disabled);
    assert_eq!(third, SubmitOutcome::Disabled);
    assert!(!sut.can_submit());

    resolve.send(SendResult::ok()).unwrap();
    assert_eq!(first.await.unwrap(), SubmitOutcome::Sent);
    assert_eq!(sut.status(), FormStatus::Success);
}

#[tokio::test(start_paused = true)]
async fn status_transitions() {
    // Arrange
    let (send_action, resolve) = MockContactSendAction::new().with_pending_send(valid_message());
    let toast = MockToastService::new().with_toast(success_toast());

    let sut = shared(make_sut(send_action, toast));
    fill_valid(&*sut);
    let mut status = sut.watch_status();
    assert_eq!(*status.borrow_and_update(), FormStatus::Idle);

    // Act
    let submit = tokio::spawn({
        let sut = Arc::clone(&sut);
        async move { sut.submit().await }
    });

    // Assert
    status.changed().await.unwrap();
    assert_eq!(*status.borrow_and_update(), FormStatus::Loading);

    resolve.send(SendResult::ok()).unwrap();
    status.changed().await.unwrap();
    assert_eq!(*status.borrow_and_update(), FormStatus::Success);
    assert_eq!(submit.await.unwrap(), SubmitOutcome::Sent);

    status.changed().await.unwrap();
    assert_eq!(*status.borrow_and_update(), FormStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn submit_while_settled_is_ignored() {
    // Arrange
    let send_action =
        MockContactSendAction::new().with_send(valid_message(), SendResult::failure(None));
    let toast = MockToastService::new().with_toast(fallback_toast());

    let sut = make_sut(send_action, toast);
    fill_valid(&sut);
    sut.submit().await;

    // Act
    let result = sut.submit().await;

    // Assert
    assert_eq!(result, SubmitOutcome::Disabled);
    assert_eq!(sut.status(), FormStatus::Error);
}
