use axum::http::StatusCode;
use std::time::Duration;

use github_status::services::status::Status;
use github_status::services::webhook::{NotifyOutcome, SkipReason, SlackNotifier, SlackWebhook, WebhookError};

use crate::common::FakeSlack;

fn notifier(slack: &FakeSlack, channel: &str) -> SlackNotifier {
    let webhook = SlackWebhook::with_base_url(&slack.base_url, "123456", channel).unwrap();
    SlackNotifier::new(Some(webhook), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_posts_plain_text_message() {
    let slack = FakeSlack::start().await;

    let outcome = notifier(&slack, "github").notify(Status::Minor).await.unwrap();
    assert_eq!(outcome, NotifyOutcome::Sent);

    let requests = slack.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].body, "github has minor issue :construction:");
    assert_eq!(requests[0].content_type.as_deref(), Some("text/plain"));
    assert_eq!(requests[0].query.get("token").map(String::as_str), Some("123456"));
    assert_eq!(requests[0].query.get("channel").map(String::as_str), Some("#github"));
}

#[tokio::test]
async fn test_channel_with_special_characters_round_trips() {
    let slack = FakeSlack::start().await;

    notifier(&slack, "ops & alerts").notify(Status::Major).await.unwrap();

    let requests = slack.requests();
    assert_eq!(requests[0].query.get("channel").map(String::as_str), Some("#ops & alerts"));
}

#[tokio::test]
async fn test_unknown_sends_nothing() {
    let slack = FakeSlack::start().await;

    let outcome = notifier(&slack, "github").notify(Status::Unknown).await.unwrap();

    assert_eq!(outcome, NotifyOutcome::Skipped(SkipReason::NoMessage));
    assert!(slack.requests().is_empty());
}

#[tokio::test]
async fn test_rejected_delivery_is_api_error() {
    let slack = FakeSlack::replying(StatusCode::FORBIDDEN).await;

    let result = notifier(&slack, "github").notify(Status::Good).await;

    assert!(matches!(result, Err(WebhookError::Api(code)) if code.as_u16() == 403));
    assert_eq!(slack.requests().len(), 1);
}
