use chrono::Local;
use omniflow::models::{Category, Role, Temperature, TurnStatistics};
use omniflow::session::Session;

fn new_session() -> Session {
    Session::new("tester", Temperature::default(), Category::default())
}

fn stats(response_time: f64, has_error: bool, tools: u32, thread: Option<&str>) -> TurnStatistics {
    TurnStatistics {
        response_time,
        timestamp: Local::now(),
        has_error,
        tool_calls_count: tools,
        thread_id: thread.map(|t| t.to_string()),
        temperature: 0.7,
        error_detail: None,
    }
}

#[test]
fn test_new_session_is_empty() {
    let session = new_session();

    assert!(session.messages().is_empty());
    assert!(session.turn_stats().is_empty());
    assert_eq!(session.thread_id(), None);
    assert!(!session.debug());
    assert_eq!(session.current_user(), "tester");
    assert!(session.known_users().contains("tester"));
    assert!(!session.id().is_empty());
}

#[test]
fn test_append_exchange_keeps_messages_and_stats_aligned() {
    let mut session = new_session();

    for i in 0..5 {
        session.append_exchange(
            format!("question {}", i),
            format!("answer {}", i),
            stats(1.0, i % 2 == 0, 1, Some("t1")),
        );

        assert_eq!(session.messages().len() % 2, 0);
        assert_eq!(session.turn_stats().len(), session.messages().len() / 2);
    }

    let roles: Vec<Role> = session.messages().iter().map(|m| m.role).collect();
    assert_eq!(&roles[..2], &[Role::User, Role::Assistant]);
    assert_eq!(session.messages()[8].content, "question 4");
    assert_eq!(session.messages()[9].content, "answer 4");
}

#[test]
fn test_successful_exchange_sets_thread_id() {
    let mut session = new_session();
    session.append_exchange("hi", "hello", stats(0.5, false, 0, Some("thread-1")));

    assert_eq!(session.thread_id(), Some("thread-1"));
}

#[test]
fn test_failed_exchange_does_not_touch_thread_id() {
    let mut session = new_session();
    session.append_exchange("hi", "hello", stats(0.5, false, 0, Some("thread-1")));
    session.append_exchange("again", "oops", stats(0.5, true, 0, Some("thread-2")));

    assert_eq!(session.thread_id(), Some("thread-1"));
}

#[test]
fn test_missing_thread_id_never_clears_existing_one() {
    let mut session = new_session();
    session.append_exchange("hi", "hello", stats(0.5, false, 0, Some("thread-1")));
    session.append_exchange("more", "sure", stats(0.5, false, 0, None));

    assert_eq!(session.thread_id(), Some("thread-1"));
}

#[test]
fn test_reset_clears_conversation_but_keeps_settings() {
    let mut session = new_session();
    session.toggle_debug();
    session.set_temperature(1.5).unwrap();
    session.append_exchange("hi", "hello", stats(0.5, false, 2, Some("thread-1")));

    session.reset();

    assert!(session.messages().is_empty());
    assert!(session.turn_stats().is_empty());
    assert_eq!(session.thread_id(), None);
    assert!(session.debug());
    assert_eq!(session.temperature().value(), 1.5);
    assert_eq!(session.current_user(), "tester");
}

#[test]
fn test_toggle_debug_leaves_conversation_alone() {
    let mut session = new_session();
    session.append_exchange("hi", "hello", stats(0.5, false, 0, Some("thread-1")));

    assert!(session.toggle_debug());
    assert!(!session.toggle_debug());
    assert_eq!(session.messages().len(), 2);
    assert_eq!(session.thread_id(), Some("thread-1"));
}

#[test]
fn test_average_response_time_empty_is_none() {
    let session = new_session();

    assert_eq!(session.average_response_time(), None);
    assert_eq!(session.last_response_time(), None);
}

#[test]
fn test_aggregates() {
    let mut session = new_session();
    session.append_exchange("a", "b", stats(1.0, false, 2, Some("t")));
    session.append_exchange("c", "d", stats(3.0, true, 0, Some("t")));

    assert_eq!(session.average_response_time(), Some(2.0));
    assert_eq!(session.last_response_time(), Some(3.0));
    assert_eq!(session.total_exchanges(), 2);
    assert_eq!(session.total_tool_calls(), 2);
    assert_eq!(session.error_count(), 1);

    let summary = session.summary();
    assert_eq!(summary.total_exchanges, 2);
    assert_eq!(summary.average_response_time, Some(2.0));
}

#[test]
fn test_invalid_temperature_keeps_previous_value() {
    let mut session = new_session();
    session.set_temperature(0.2).unwrap();

    assert!(session.set_temperature(2.5).is_err());
    assert!(session.set_temperature(-0.1).is_err());
    assert!(session.set_temperature(f32::NAN).is_err());
    assert_eq!(session.temperature().value(), 0.2);

    assert!(session.set_temperature(0.0).is_ok());
    assert!(session.set_temperature(2.0).is_ok());
}

#[test]
fn test_set_category() {
    let mut session = new_session();
    session.set_category(Category::Ml);

    assert_eq!(session.category(), Category::Ml);
}

#[test]
fn test_temperature_and_category_parsing() {
    assert_eq!("1.25".parse::<Temperature>().unwrap().value(), 1.25);
    assert!("warm".parse::<Temperature>().is_err());
    assert_eq!("sys".parse::<Category>().unwrap(), Category::Sys);
    assert!("XYZ".parse::<Category>().is_err());
}
