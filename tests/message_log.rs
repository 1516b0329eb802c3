use chat2rec::api::models::HistoryMessage;
use chat2rec::chat::{
    MessageLog, TurnOutcome, RECOMMENDATION_ERROR_NOTICE, WELCOME_MESSAGE,
};
use chat2rec::error::ChatError;
use chat2rec::models::{MessageKind, Product, Role};

fn product(id: &str, name: &str) -> Product {
    Product {
        id: id.to_string(),
        name: Some(name.to_string()),
        brand: None,
        category: None,
        price: None,
        rating: None,
        score: None,
        semantic: None,
    }
}

fn pending_count(log: &MessageLog) -> usize {
    log.messages().iter().filter(|m| m.pending).count()
}

#[test]
fn test_seed_welcome() {
    let mut log = MessageLog::new();
    log.seed_welcome();

    assert_eq!(log.messages().len(), 1);
    let welcome = &log.messages()[0];
    assert_eq!(welcome.role, Role::Assistant);
    assert_eq!(welcome.content(), Some(WELCOME_MESSAGE));
    assert!(!welcome.pending);
}

#[test]
fn test_begin_turn_appends_user_and_placeholder() {
    let mut log = MessageLog::new();
    log.seed_welcome();

    log.begin_turn("show me sneakers").unwrap();

    let messages = log.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].role, Role::User);
    assert_eq!(messages[1].content(), Some("show me sneakers"));
    assert!(!messages[1].pending);
    assert_eq!(messages[2].role, Role::Assistant);
    assert!(messages[2].pending);
    assert!(log.is_awaiting_response());
}

#[test]
fn test_resolve_turn_replaces_placeholder_with_results() {
    let mut log = MessageLog::new();
    log.seed_welcome();

    let ticket = log.begin_turn("show me sneakers").unwrap();
    let resolved = log.resolve_turn(
        ticket,
        TurnOutcome::Results {
            results: vec![product("p1", "Sneaker A")],
            summary: None,
        },
    );

    assert_eq!(resolved.role, Role::Assistant);
    match &resolved.kind {
        MessageKind::ProductResults { results, summary } => {
            assert_eq!(results.len(), 1);
            assert_eq!(results[0].id, "p1");
            // Fallback summary fills in when the service provides none
            assert!(summary.is_some());
        }
        other => panic!("expected product results, got {:?}", other),
    }

    assert_eq!(log.messages().len(), 3);
    assert_eq!(pending_count(&log), 0);
    assert!(!log.is_awaiting_response());
}

#[test]
fn test_failed_turn_resolves_to_error_notice() {
    let mut log = MessageLog::new();
    log.seed_welcome();

    let ticket = log.begin_turn("find gifts").unwrap();
    let resolved = log.resolve_turn(ticket, TurnOutcome::Failed);

    assert_eq!(resolved.role, Role::Assistant);
    assert_eq!(resolved.content(), Some(RECOMMENDATION_ERROR_NOTICE));
    assert_eq!(pending_count(&log), 0);

    // The failed state is operationally equivalent to idle
    assert!(log.begin_turn("try again").is_ok());
}

#[test]
fn test_user_message_survives_failed_turn() {
    let mut log = MessageLog::new();

    let ticket = log.begin_turn("find gifts").unwrap();
    log.resolve_turn(ticket, TurnOutcome::Failed);

    let messages = log.messages();
    assert_eq!(messages[0].role, Role::User);
    assert_eq!(messages[0].content(), Some("find gifts"));
}

#[test]
fn test_submit_rejected_while_awaiting_response() {
    let mut log = MessageLog::new();

    let _ticket = log.begin_turn("first").unwrap();
    let second = log.begin_turn("second");

    assert!(matches!(second, Err(ChatError::TurnInProgress)));
    // No second placeholder appeared
    assert_eq!(pending_count(&log), 1);
    assert_eq!(log.messages().len(), 2);
}

#[test]
fn test_empty_query_rejected() {
    let mut log = MessageLog::new();

    assert!(matches!(log.begin_turn(""), Err(ChatError::EmptyQuery)));
    assert!(matches!(log.begin_turn("   "), Err(ChatError::EmptyQuery)));
    assert!(log.is_empty());
}

#[test]
fn test_two_sequential_turns_append_four_messages() {
    let mut log = MessageLog::new();
    log.seed_welcome();

    let ticket = log.begin_turn("first query").unwrap();
    log.resolve_turn(
        ticket,
        TurnOutcome::Results {
            results: vec![product("p1", "A")],
            summary: Some("First".to_string()),
        },
    );

    let ticket = log.begin_turn("second query").unwrap();
    log.resolve_turn(
        ticket,
        TurnOutcome::Results {
            results: vec![product("p2", "B")],
            summary: Some("Second".to_string()),
        },
    );

    let messages = log.messages();
    assert_eq!(messages.len(), 5);

    let roles: Vec<Role> = messages.iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        vec![
            Role::Assistant,
            Role::User,
            Role::Assistant,
            Role::User,
            Role::Assistant
        ]
    );
    assert_eq!(messages[1].content(), Some("first query"));
    assert_eq!(messages[3].content(), Some("second query"));
}

#[test]
fn test_error_isolation_between_turns() {
    let mut log = MessageLog::new();
    log.seed_welcome();

    let ticket = log.begin_turn("good query").unwrap();
    log.resolve_turn(
        ticket,
        TurnOutcome::Results {
            results: vec![product("p1", "A")],
            summary: Some("ok".to_string()),
        },
    );

    let before: Vec<_> = log.messages().to_vec();

    let ticket = log.begin_turn("bad query").unwrap();
    log.resolve_turn(ticket, TurnOutcome::Failed);

    // The failed turn did not disturb earlier messages
    assert_eq!(&log.messages()[..before.len()], &before[..]);
}

#[test]
fn test_ids_monotonic_and_match_append_order() {
    let mut log = MessageLog::new();
    log.seed_welcome();

    let ticket = log.begin_turn("query").unwrap();
    log.resolve_turn(
        ticket,
        TurnOutcome::Results {
            results: vec![],
            summary: None,
        },
    );

    let ids: Vec<u64> = log.messages().iter().map(|m| m.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_hydrate_maps_persisted_roles() {
    let mut log = MessageLog::new();
    log.hydrate(vec![
        HistoryMessage {
            role: "user".to_string(),
            content: Some("older query".to_string()),
        },
        HistoryMessage {
            role: "bot".to_string(),
            content: Some("older reply".to_string()),
        },
        HistoryMessage {
            role: "system".to_string(),
            content: Some("ignored".to_string()),
        },
    ]);

    let messages = log.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, Role::User);
    assert_eq!(messages[0].content(), Some("older query"));
    assert_eq!(messages[1].role, Role::Assistant);
    assert_eq!(messages[1].content(), Some("older reply"));
}

#[test]
fn test_at_most_one_pending_at_any_instant() {
    let mut log = MessageLog::new();
    log.seed_welcome();

    assert_eq!(pending_count(&log), 0);
    let ticket = log.begin_turn("query").unwrap();
    assert_eq!(pending_count(&log), 1);
    let _ = log.begin_turn("another");
    assert_eq!(pending_count(&log), 1);
    log.resolve_turn(ticket, TurnOutcome::Failed);
    assert_eq!(pending_count(&log), 0);
}
