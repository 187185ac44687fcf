use std::sync::{Arc, Mutex};
use std::time::Duration;

use pretty_assertions::assert_eq;
use shortener_engine::{CreateError, EngineEvent, EngineHandle, FailureKind, Shortener};

#[derive(Default)]
struct ScriptedShortener {
    seen: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl Shortener for ScriptedShortener {
    async fn create(&self, long_url: &str) -> Result<String, CreateError> {
        self.seen.lock().unwrap().push(long_url.to_string());
        if long_url.contains("panic") {
            panic!("shortener bug");
        }
        if long_url.contains("fail") {
            Err(CreateError {
                kind: FailureKind::HttpStatus(502),
                message: "bad gateway".to_string(),
            })
        } else {
            Ok(format!("s{}", long_url.len()))
        }
    }
}

const WAIT: Duration = Duration::from_secs(5);

#[test]
fn create_reports_one_completion_per_request() {
    let shortener = Arc::new(ScriptedShortener::default());
    let (engine, events) = EngineHandle::spawn(shortener.clone()).expect("engine");

    engine.create(1, "https://ok.example");
    let first = events.recv_timeout(WAIT).expect("first event");
    assert_eq!(
        first,
        EngineEvent::CreateCompleted {
            request_id: 1,
            result: Ok("s18".to_string()),
        }
    );

    engine.create(2, "https://fail.example");
    let second = events.recv_timeout(WAIT).expect("second event");
    match second {
        EngineEvent::CreateCompleted { request_id, result } => {
            assert_eq!(request_id, 2);
            assert_eq!(result.unwrap_err().kind, FailureKind::HttpStatus(502));
        }
    }

    assert!(events.try_recv().is_none());
    assert_eq!(
        *shortener.seen.lock().unwrap(),
        vec!["https://ok.example".to_string(), "https://fail.example".to_string()]
    );
}

#[test]
fn events_end_after_handle_is_dropped() {
    let (engine, events) = EngineHandle::spawn(Arc::new(ScriptedShortener::default())).unwrap();
    engine.create(9, "https://ok.example");
    drop(engine);

    assert!(matches!(
        events.recv_timeout(WAIT),
        Some(EngineEvent::CreateCompleted { request_id: 9, .. })
    ));
    assert_eq!(events.recv(), None);
}

#[test]
fn panicking_request_still_reports_failure() {
    let (engine, events) = EngineHandle::spawn(Arc::new(ScriptedShortener::default())).unwrap();

    assert!(engine.create(3, "https://panic.example"));
    match events.recv_timeout(WAIT).expect("completion") {
        EngineEvent::CreateCompleted { request_id, result } => {
            assert_eq!(request_id, 3);
            assert_eq!(result.unwrap_err().kind, FailureKind::Aborted);
        }
    }

    engine.create(4, "https://ok.example");
    assert_eq!(
        events.recv_timeout(WAIT),
        Some(EngineEvent::CreateCompleted {
            request_id: 4,
            result: Ok("s18".to_string()),
        })
    );
}
