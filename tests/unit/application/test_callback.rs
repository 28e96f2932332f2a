use super::common::{LogBuffer, RecordingReceiver};
use std::sync::{Arc, Mutex};
use tinypaste_client::application::callback::{CallbackArg, CallbackTarget};
use tinypaste_client::constants::{DEFAULT_FAILURE_METHOD, DEFAULT_SUCCESS_METHOD};
use tinypaste_client::model::responses::PasteResponse;
use tracing::Level;

type Seen = Arc<Mutex<Vec<(Option<String>, Option<String>)>>>;

fn recording_handler(seen: &Seen) -> impl FnOnce(Option<String>, Option<String>) + Send + 'static {
    let seen = Arc::clone(seen);
    move |body, error| seen.lock().unwrap().push((body, error))
}

#[test]
fn test_resolve_receiver_with_default_names() {
    let receiver = RecordingReceiver::new(&[]);
    let target = CallbackTarget::resolve(vec![CallbackArg::Receiver(receiver)]);
    match target {
        CallbackTarget::Named {
            success, failure, ..
        } => {
            assert_eq!(success, DEFAULT_SUCCESS_METHOD);
            assert_eq!(failure, DEFAULT_FAILURE_METHOD);
        }
        other => panic!("Expected named target, got {other:?}"),
    }
}

#[test]
fn test_resolve_receiver_with_custom_names() {
    let receiver = RecordingReceiver::new(&[]);
    let target = CallbackTarget::resolve(vec![
        CallbackArg::Receiver(receiver),
        CallbackArg::method("Done"),
        CallbackArg::method("Oops"),
    ]);
    match target {
        CallbackTarget::Named {
            success, failure, ..
        } => {
            assert_eq!(success, "Done");
            assert_eq!(failure, "Oops");
        }
        other => panic!("Expected named target, got {other:?}"),
    }
}

#[test]
fn test_resolve_receiver_ignores_non_name_arguments() {
    let receiver = RecordingReceiver::new(&[]);
    let target = CallbackTarget::resolve(vec![
        CallbackArg::Receiver(receiver),
        CallbackArg::handler(|_, _| {}),
        CallbackArg::method("Oops"),
    ]);
    match target {
        CallbackTarget::Named {
            success, failure, ..
        } => {
            assert_eq!(success, DEFAULT_SUCCESS_METHOD);
            assert_eq!(failure, "Oops");
        }
        other => panic!("Expected named target, got {other:?}"),
    }
}

#[test]
fn test_resolve_handler_and_fallbacks() {
    assert!(matches!(
        CallbackTarget::resolve(vec![CallbackArg::handler(|_, _| {})]),
        CallbackTarget::Direct(_)
    ));
    assert!(matches!(
        CallbackTarget::resolve(vec![CallbackArg::method("OnlyAName")]),
        CallbackTarget::Default
    ));
    assert!(matches!(
        CallbackTarget::resolve(Vec::new()),
        CallbackTarget::Default
    ));
    assert!(matches!(CallbackTarget::default(), CallbackTarget::Default));
}

#[test]
fn test_direct_delivery_success_and_failure() {
    let seen: Seen = Arc::default();

    CallbackTarget::direct(recording_handler(&seen))
        .deliver(PasteResponse::Succeeded("OK".to_string()));
    CallbackTarget::direct(recording_handler(&seen))
        .deliver(PasteResponse::Failed("timeout".to_string()));

    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            (Some("OK".to_string()), None),
            (None, Some("timeout".to_string())),
        ]
    );
}

#[test]
fn test_named_delivery_routes_by_outcome() {
    let receiver = RecordingReceiver::new(&[DEFAULT_SUCCESS_METHOD, DEFAULT_FAILURE_METHOD]);

    CallbackTarget::named(receiver.clone()).deliver(PasteResponse::Succeeded("body".to_string()));
    CallbackTarget::named(receiver.clone()).deliver(PasteResponse::Failed("err".to_string()));

    assert_eq!(
        receiver.received(),
        vec![
            (DEFAULT_SUCCESS_METHOD.to_string(), "body".to_string()),
            (DEFAULT_FAILURE_METHOD.to_string(), "err".to_string()),
        ]
    );
}

#[test]
fn test_named_delivery_tolerates_missing_method() {
    let receiver = RecordingReceiver::new(&["SomethingElse"]);
    CallbackTarget::named_with(receiver.clone(), "Done", "Oops")
        .deliver(PasteResponse::Failed("err".to_string()));
    assert!(receiver.received().is_empty());
}

#[test]
fn test_default_sink_logs_errors_once_and_drops_successes() {
    let logs = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(Level::WARN)
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    CallbackTarget::Default.deliver(PasteResponse::Succeeded("quiet".to_string()));
    CallbackTarget::Default.deliver(PasteResponse::Failed("timeout".to_string()));

    let lines = logs.lines();
    assert_eq!(lines.len(), 1, "unexpected log lines: {lines:?}");
    assert!(lines[0].contains("WARN"));
    assert!(lines[0].contains("timeout"));
}

#[test]
fn test_from_args_vec() {
    let target: CallbackTarget = vec![CallbackArg::handler(|_, _| {})].into();
    assert!(matches!(target, CallbackTarget::Direct(_)));
}
