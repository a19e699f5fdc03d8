//! Integration tests for the full transactional pipeline.
//!
//! Run against an in-memory SQLite database with the real schema, so the
//! store-enforced constraints (unique columns, grant pair key, foreign keys)
//! are exercised, not simulated.

use gatehouse_access::Registration;
use gatehouse_core::{AccessError, DecisionOutcome, SwipeResult, UserStatus};

use crate::analytics::{self, Interval};
use crate::db::connect_in_memory;
use crate::service::AccessService;

async fn setup() -> AccessService {
    let pool = connect_in_memory().await.expect("in-memory pool");
    AccessService::new(pool)
}

fn registration(campus_id: &str, email: &str) -> Registration {
    Registration {
        campus_id: campus_id.to_string(),
        email: email.to_string(),
        first_name: "Alex".to_string(),
        last_name: "Kim".to_string(),
        role: None,
        terms_accepted: true,
    }
}

#[tokio::test]
async fn registration_creates_pending_user() {
    let service = setup().await;
    let id = service.register(&registration("C1", "a@x")).await.unwrap();

    let users = service.list_users(None).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, id);
    assert_eq!(users[0].status, "pending");
    assert_eq!(users[0].role, "student");
}

#[tokio::test]
async fn registration_rejects_unaccepted_terms() {
    let service = setup().await;
    let mut reg = registration("C1", "a@x");
    reg.terms_accepted = false;

    let err = service.register(&reg).await.unwrap_err();
    assert!(matches!(err, AccessError::InvalidRequest(_)));
    assert!(service.list_users(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_campus_id_or_email_conflicts_without_new_row() {
    let service = setup().await;
    service.register(&registration("C1", "a@x")).await.unwrap();

    let same_campus = service.register(&registration("C1", "b@x")).await;
    assert!(matches!(same_campus, Err(AccessError::Conflict(_))));

    let same_email = service.register(&registration("C2", "a@x")).await;
    assert!(matches!(same_email, Err(AccessError::Conflict(_))));

    assert_eq!(service.list_users(None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn decision_overwrites_status_and_audits() {
    let service = setup().await;
    let id = service.register(&registration("C1", "a@x")).await.unwrap();

    let status = service
        .decide(id, DecisionOutcome::Active, "admin1")
        .await
        .unwrap();
    assert_eq!(status, UserStatus::Active);

    // Re-deciding a terminal user is allowed and overwrites.
    let status = service
        .decide(id, DecisionOutcome::Denied, "admin1")
        .await
        .unwrap();
    assert_eq!(status, UserStatus::Denied);

    let actions = service.list_staff_actions().await.unwrap();
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0].action, "user_active");
    assert_eq!(actions[1].action, "user_denied");
    assert_eq!(actions[0].user_id, Some(id));
    assert_eq!(actions[0].performed_by, "admin1");
}

#[tokio::test]
async fn deciding_missing_user_is_not_found_and_unaudited() {
    let service = setup().await;
    let err = service
        .decide(42, DecisionOutcome::Active, "admin1")
        .await
        .unwrap_err();
    assert!(matches!(err, AccessError::NotFound(_)));
    assert!(service.list_staff_actions().await.unwrap().is_empty());
}

#[tokio::test]
async fn decision_gates_plain_swipe() {
    let service = setup().await;
    let id = service.register(&registration("C1", "a@x")).await.unwrap();

    // Pending users are denied, but the attempt is attributed.
    let verdict = service.evaluate_swipe("C1", None).await.unwrap();
    assert_eq!(verdict.result, SwipeResult::Denied);
    assert_eq!(verdict.user_id, Some(id));

    service
        .decide(id, DecisionOutcome::Active, "admin1")
        .await
        .unwrap();
    let verdict = service.evaluate_swipe("C1", None).await.unwrap();
    assert_eq!(verdict.result, SwipeResult::Approved);
    assert_eq!(verdict.user_id, Some(id));

    service
        .decide(id, DecisionOutcome::Denied, "admin1")
        .await
        .unwrap();
    let verdict = service.evaluate_swipe("C1", None).await.unwrap();
    assert_eq!(verdict.result, SwipeResult::Denied);
}

#[tokio::test]
async fn swipe_matches_on_email_too() {
    let service = setup().await;
    let id = service.register(&registration("C1", "a@x")).await.unwrap();
    service
        .decide(id, DecisionOutcome::Active, "admin1")
        .await
        .unwrap();

    let verdict = service.evaluate_swipe("a@x", None).await.unwrap();
    assert_eq!(verdict.result, SwipeResult::Approved);
    assert_eq!(verdict.user_id, Some(id));
}

#[tokio::test]
async fn every_swipe_logs_exactly_one_event_matching_the_verdict() {
    let service = setup().await;
    let id = service.register(&registration("C1", "a@x")).await.unwrap();
    service
        .decide(id, DecisionOutcome::Active, "admin1")
        .await
        .unwrap();

    for (input, expected) in [("C1", "approved"), ("ghost@x", "denied"), ("C1", "approved")] {
        let before = service.list_swipe_events().await.unwrap().len();
        let verdict = service.evaluate_swipe(input, None).await.unwrap();

        let events = service.list_swipe_events().await.unwrap();
        assert_eq!(events.len(), before + 1);
        let logged = events.last().unwrap();
        assert_eq!(logged.result, expected);
        assert_eq!(logged.result, verdict.result.as_str());
        assert_eq!(logged.user_id, verdict.user_id);
        assert_eq!(logged.input_value, input);
    }
}

#[tokio::test]
async fn unknown_identifier_is_denied_and_logged_with_null_user() {
    let service = setup().await;

    let verdict = service.evaluate_swipe("nonexistent@x", None).await.unwrap();
    assert_eq!(verdict.result, SwipeResult::Denied);
    assert_eq!(verdict.user_id, None);

    let events = service.list_swipe_events().await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].user_id, None);
    assert_eq!(events[0].result, "denied");
    assert_eq!(events[0].certification_checked, None);
}

#[tokio::test]
async fn empty_input_is_rejected_without_logging() {
    let service = setup().await;
    let err = service.evaluate_swipe("", None).await.unwrap_err();
    assert!(matches!(err, AccessError::InvalidRequest(_)));
    assert!(service.list_swipe_events().await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_grant_conflicts_with_single_row_kept() {
    let service = setup().await;
    let user = service.register(&registration("C1", "a@x")).await.unwrap();
    let cert = service
        .create_certification("Lab", "lab", None)
        .await
        .unwrap();

    service
        .grant_certification(user, cert, "admin1")
        .await
        .unwrap();
    let err = service
        .grant_certification(user, cert, "admin1")
        .await
        .unwrap_err();
    assert!(matches!(err, AccessError::Conflict(_)));

    // Exactly one grant row, and exactly one audit entry for it.
    let actions = service.list_staff_actions().await.unwrap();
    let granted: Vec<_> = actions.iter().filter(|a| a.action == "cert_granted").collect();
    assert_eq!(granted.len(), 1);
    assert_eq!(granted[0].metadata.as_deref(), Some(cert.to_string().as_str()));
}

#[tokio::test]
async fn grant_to_missing_user_is_not_found() {
    let service = setup().await;
    let cert = service
        .create_certification("Lab", "lab", None)
        .await
        .unwrap();

    let err = service
        .grant_certification(99, cert, "admin1")
        .await
        .unwrap_err();
    assert!(matches!(err, AccessError::NotFound(_)));
    assert!(service.list_staff_actions().await.unwrap().is_empty());
}

#[tokio::test]
async fn revoking_missing_grant_is_not_found_and_state_unchanged() {
    let service = setup().await;
    let user = service.register(&registration("C1", "a@x")).await.unwrap();
    let cert = service
        .create_certification("Lab", "lab", None)
        .await
        .unwrap();

    let err = service
        .revoke_certification(user, cert, "admin1")
        .await
        .unwrap_err();
    assert!(matches!(err, AccessError::NotFound(_)));
    assert!(service.list_staff_actions().await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_certification_name_conflicts() {
    let service = setup().await;
    service
        .create_certification("Lab", "lab", Some("Lab access"))
        .await
        .unwrap();
    let err = service
        .create_certification("Lab", "workshop", None)
        .await
        .unwrap_err();
    assert!(matches!(err, AccessError::Conflict(_)));
    assert_eq!(service.list_certifications().await.unwrap().len(), 1);
}

#[tokio::test]
async fn certification_swipe_lifecycle() {
    // Register A, activate, create "Lab", grant, swipe approved;
    // revoke, same swipe now denied but still attributed.
    let service = setup().await;
    let user = service.register(&registration("C1", "a@x")).await.unwrap();
    service
        .decide(user, DecisionOutcome::Active, "admin1")
        .await
        .unwrap();
    let cert = service
        .create_certification("Lab", "lab", None)
        .await
        .unwrap();
    service
        .grant_certification(user, cert, "admin1")
        .await
        .unwrap();

    let verdict = service.evaluate_swipe("C1", Some(cert)).await.unwrap();
    assert_eq!(verdict.result, SwipeResult::Approved);
    assert_eq!(verdict.user_id, Some(user));

    service
        .revoke_certification(user, cert, "admin1")
        .await
        .unwrap();

    let verdict = service.evaluate_swipe("C1", Some(cert)).await.unwrap();
    assert_eq!(verdict.result, SwipeResult::Denied);
    assert_eq!(verdict.user_id, Some(user));

    let events = service.list_swipe_events().await.unwrap();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.certification_checked == Some(cert)));
}

#[tokio::test]
async fn certification_swipe_denied_for_inactive_holder() {
    let service = setup().await;
    let user = service.register(&registration("C1", "a@x")).await.unwrap();
    let cert = service
        .create_certification("Lab", "lab", None)
        .await
        .unwrap();
    service
        .grant_certification(user, cert, "admin1")
        .await
        .unwrap();

    // Holds the grant but was never activated.
    let verdict = service.evaluate_swipe("C1", Some(cert)).await.unwrap();
    assert_eq!(verdict.result, SwipeResult::Denied);
    assert_eq!(verdict.user_id, Some(user));
}

#[tokio::test]
async fn registration_and_certification_creation_are_unaudited() {
    let service = setup().await;
    service.register(&registration("C1", "a@x")).await.unwrap();
    service
        .create_certification("Lab", "lab", None)
        .await
        .unwrap();
    assert!(service.list_staff_actions().await.unwrap().is_empty());
}

#[tokio::test]
async fn user_list_filters_by_status() {
    let service = setup().await;
    let a = service.register(&registration("C1", "a@x")).await.unwrap();
    service.register(&registration("C2", "b@x")).await.unwrap();
    service
        .decide(a, DecisionOutcome::Active, "admin1")
        .await
        .unwrap();

    let active = service.list_users(Some(UserStatus::Active)).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, a);

    let pending = service.list_users(Some(UserStatus::Pending)).await.unwrap();
    assert_eq!(pending.len(), 1);
}

#[tokio::test]
async fn analytics_buckets_cover_seeded_history() {
    let service = setup().await;
    let user = service.register(&registration("C1", "a@x")).await.unwrap();
    service
        .decide(user, DecisionOutcome::Active, "admin1")
        .await
        .unwrap();
    let cert = service
        .create_certification("Lab", "lab", None)
        .await
        .unwrap();
    service
        .grant_certification(user, cert, "admin1")
        .await
        .unwrap();

    service.evaluate_swipe("C1", None).await.unwrap();
    service.evaluate_swipe("C1", Some(cert)).await.unwrap();
    service.evaluate_swipe("ghost@x", None).await.unwrap();

    // All three events land in today's bucket.
    let daily = analytics::swipe_counts(service.pool(), Interval::Day)
        .await
        .unwrap();
    assert_eq!(daily.len(), 1);
    assert_eq!(daily[0].count, 3);

    let weekly = analytics::swipe_counts(service.pool(), Interval::Week)
        .await
        .unwrap();
    assert_eq!(weekly[0].count, 3);

    // Unresolved swipe is excluded; two resolved events, one distinct user.
    let unique = analytics::unique_user_counts(service.pool()).await.unwrap();
    assert_eq!(unique.len(), 1);
    assert_eq!(unique[0].count, 1);

    let usage = analytics::certification_usage(service.pool()).await.unwrap();
    assert_eq!(usage.len(), 1);
    assert_eq!(usage[0].name, "Lab");
    assert_eq!(usage[0].count, 1);

    let cells = analytics::heatmap(service.pool()).await.unwrap();
    assert_eq!(cells.iter().map(|c| c.count).sum::<i64>(), 3);
}
