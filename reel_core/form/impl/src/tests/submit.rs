use pretty_assertions::assert_eq;
use reel_core_form_contracts::{ContactFormService, MockContactSendAction, SubmitOutcome};
use reel_models::form::{ContactFormErrors, ContactFormFields, FormStatus, SendResult};
use reel_shared_contracts::toast::MockToastService;

use super::*;

#[tokio::test(start_paused = true)]
async fn ok() {
    // Arrange
    let send_action = MockContactSendAction::new().with_send(valid_message(), SendResult::ok());
    let toast = MockToastService::new().with_toast(success_toast());

    let sut = make_sut(send_action, toast);
    fill_valid(&sut);

    // Act
    let result = sut.submit().await;

    // Assert
    assert_eq!(result, SubmitOutcome::Sent);
    assert_eq!(sut.status(), FormStatus::Success);
    assert_eq!(sut.fields(), ContactFormFields::default());
    assert_eq!(sut.errors(), ContactFormErrors::default());
    assert!(!sut.can_submit());
}

#[tokio::test(start_paused = true)]
async fn ok_message_is_trimmed() {
    // Arrange
    let send_action = MockContactSendAction::new().with_send(valid_message(), SendResult::ok());
    let toast = MockToastService::new().with_toast(success_toast());

    let sut = make_sut(send_action, toast);
    fill(
        &sut,
        "  Ada  ",
        " ada@example.com ",
        "\nI need an editor for my short film.\n",
    );

    // Act
    let result = sut.submit().await;

    // Assert
    assert_eq!(result, SubmitOutcome::Sent);
}

#[tokio::test(start_paused = true)]
async fn failed_with_server_error() {
    // Arrange
    let send_action = MockContactSendAction::new().with_send(
        valid_message(),
        SendResult::failure(Some("Rate limited".into())),
    );
    let toast = MockToastService::new().with_toast(failure_toast("Rate limited"));

    let sut = make_sut(send_action, toast);
    fill_valid(&sut);

    // Act
    let result = sut.submit().await;

    // Assert
    assert_eq!(
        result,
        SubmitOutcome::Failed {
            description: "Rate limited".into()
        }
    );
    assert_eq!(sut.status(), FormStatus::Error);
    assert_eq!(sut.fields(), valid_fields());
}

#[tokio::test(start_paused = true)]
async fn failed_without_error_uses_fallback() {
    // Arrange
    let send_action =
        MockContactSendAction::new().with_send(valid_message(), SendResult::failure(None));
    let toast = MockToastService::new().with_toast(fallback_toast());

    let sut = make_sut(send_action, toast);
    fill_valid(&sut);

    // Act
    let result = sut.submit().await;

    // Assert
    assert_eq!(
        result,
        SubmitOutcome::Failed {
            description: FAILURE_DESCRIPTION.into()
        }
    );
    assert_eq!(sut.status(), FormStatus::Error);
    assert_eq!(sut.fields(), valid_fields());
}

#[tokio::test(start_paused = true)]
async fn failed_with_empty_error_uses_fallback() {
    // Arrange
    let send_action = MockContactSendAction::new()
        .with_send(valid_message(), SendResult::failure(Some(String::new())));
    let toast = MockToastService::new().with_toast(fallback_toast());

    let sut = make_sut(send_action, toast);
    fill_valid(&sut);

    // Act
    let result = sut.submit().await;

    // Assert
    assert_eq!(
        result,
        SubmitOutcome::Failed {
            description: FAILURE_DESCRIPTION.into()
        }
    );
}

#[tokio::test(start_paused = true)]
async fn retry_after_failure() {
    // Arrange
    let mut send_action = MockContactSendAction::new();
    let mut seq = mockall::Sequence::new();
    for result in [SendResult::failure(None), SendResult::ok()] {
        send_action
            .expect_send()
            .once()
            .in_sequence(&mut seq)
            .with(mockall::predicate::eq(valid_message()))
            .return_once(move |_| Box::pin(std::future::ready(result)));
    }

    let mut toast = MockToastService::new();
    toast
        .expect_toast()
        .times(2)
        .return_const(reel_models::toast::ToastId(0));

    let sut = make_sut(send_action, toast);
    fill_valid(&sut);

    // Act
    let first = sut.submit().await;
    sut.watch_status()
        .wait_for(|status| status.is_idle())
        .await
        .unwrap();
    let second = sut.submit().await;

    // Assert
    assert_eq!(
        first,
        SubmitOutcome::Failed {
            description: FAILURE_DESCRIPTION.into()
        }
    );
    assert_eq!(second, SubmitOutcome::Sent);
    assert_eq!(sut.fields(), ContactFormFields::default());
}
