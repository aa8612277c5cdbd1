//! Command dispatch integration tests
//! Run with: cargo test --test dispatch_test

use std::cell::RefCell;
use std::sync::{Arc, Mutex, Once};

use plugkit::{
    CommandError, CommandNode, CommandService, Dispatch, LocaleCode, MessageRenderer, MessageService, Rejection,
    Sender, StyledText, TemplateStore,
};

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// Sender that keeps every delivered message
struct RecordingSender {
    interactive: bool,
    permissions: Vec<String>,
    locale: Option<String>,
    received: RefCell<Vec<StyledText>>,
}

impl RecordingSender {
    fn console() -> Self {
        Self {
            interactive: false,
            permissions: Vec::new(),
            locale: None,
            received: RefCell::new(Vec::new()),
        }
    }

    fn with_locale(mut self, locale: &str) -> Self {
        self.locale = Some(locale.to_string());
        self
    }

    fn transcript(&self) -> Vec<StyledText> {
        self.received.borrow().clone()
    }
}

impl Sender for RecordingSender {
    fn name(&self) -> &str {
        "tester"
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }

    // the console holds every permission
    fn has_permission(&self, permission: &str) -> bool {
        !self.interactive || self.permissions.iter().any(|p| p == permission)
    }

    fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    fn deliver(&self, text: StyledText) {
        self.received.borrow_mut().push(text);
    }
}

type Calls = Arc<Mutex<Vec<(&'static str, Vec<String>)>>>;

fn recording(name: &'static str, calls: &Calls) -> CommandNode {
    let calls = Arc::clone(calls);
    CommandNode::new(name, move |_, args| {
        calls.lock().unwrap().push((name, args.to_vec()));
        Ok(())
    })
}

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn messages() -> MessageService {
    let mut store = TemplateStore::new();
    store
        .load(
            LocaleCode::parse("en").unwrap(),
            "command.no_permission=%&dark_red%No permission\n\
             command.wrong_sender=%&dark_red%Players only\n\
             command.usage=Usage: {0}\n\
             demo.failed=Could not find %&gold%{0}",
        )
        .unwrap();
    store
        .load(LocaleCode::parse("de").unwrap(), "command.no_permission=%&dark_red%Keine Berechtigung")
        .unwrap();
    let renderer = MessageRenderer::new(store, LocaleCode::parse("en").unwrap()).unwrap();
    MessageService::new(Arc::new(renderer))
}

/// root -> group -> sub (leaf), group requires `demo.group`
fn service(calls: &Calls) -> CommandService {
    let mut service = CommandService::new(messages());
    let root = recording("root", calls).allow_console().with_child(
        recording("group", calls)
            .with_permission("demo.group")
            .with_child(recording("sub", calls)),
    );
    service.register_root(root).unwrap();
    service
}

fn player(perms: &[&str]) -> RecordingSender {
    RecordingSender {
        interactive: true,
        permissions: args(perms),
        ..RecordingSender::console()
    }
}

#[test]
fn test_deepest_node_gets_remaining_args() {
    ensure_init();

    let calls = Calls::default();
    let sender = player(&["demo.group"]);
    let outcome = service(&calls).dispatch("root", &sender, &args(&["group", "sub", "x", "y"]));

    assert!(matches!(outcome, Dispatch::Executed { .. }));
    assert_eq!(*calls.lock().unwrap(), vec![("sub", args(&["x", "y"]))]);
}

#[test]
fn test_unknown_subcommand_is_an_argument() {
    ensure_init();

    let calls = Calls::default();
    let sender = player(&["demo.group"]);
    service(&calls).dispatch("root", &sender, &args(&["group", "unknown", "x"]));

    assert_eq!(*calls.lock().unwrap(), vec![("group", args(&["unknown", "x"]))]);
    assert!(sender.transcript().is_empty());
}

/// Without permission nothing runs, whatever the arguments
#[test]
fn test_missing_permission_never_runs_action() {
    ensure_init();

    let calls = Calls::default();
    let service = service(&calls);
    for input in [vec!["group"], vec!["group", "sub"], vec!["group", "sub", "a", "b"], vec!["group", "zzz"]] {
        let sender = player(&[]);
        let outcome = service.dispatch("root", &sender, &args(&input));
        assert!(matches!(outcome, Dispatch::Rejected { reason: Rejection::NoPermission, .. }));
        let transcript = sender.transcript();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].plain(), "No permission");
    }
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn test_rejection_is_localized() {
    ensure_init();

    let calls = Calls::default();
    let sender = player(&[]).with_locale("de_DE");
    service(&calls).dispatch("root", &sender, &args(&["group"]));
    assert_eq!(sender.transcript()[0].plain(), "Keine Berechtigung");
}

#[test]
fn test_console_gate_checked_per_node() {
    ensure_init();

    let calls = Calls::default();
    let console = RecordingSender::console();
    let service = service(&calls);

    // root allows the console, group does not
    assert!(matches!(service.dispatch("root", &console, &[]), Dispatch::Executed { .. }));
    let outcome = service.dispatch("root", &console, &args(&["group", "sub"]));
    assert_eq!(
        outcome,
        Dispatch::Rejected {
            path: args(&["root", "group"]),
            reason: Rejection::WrongSender,
        }
    );
    assert_eq!(console.transcript().last().map(|t| t.plain()), Some("Players only".to_string()));
    assert_eq!(*calls.lock().unwrap(), vec![("root", Vec::<String>::new())]);
}

#[test]
fn test_action_failure_is_reported() {
    ensure_init();

    let mut service = CommandService::new(messages());
    let node = CommandNode::new("find", |_, args| {
        Err(CommandError::failed("demo.failed", args.to_vec()))
    });
    service.register_root(node).unwrap();

    let sender = player(&[]);
    let outcome = service.dispatch("find", &sender, &args(&["diamonds"]));
    assert!(matches!(outcome, Dispatch::Executed { .. }));
    assert_eq!(sender.transcript()[0].plain(), "Could not find diamonds");
}

#[test]
fn test_duplicate_siblings_rejected_at_registration() {
    ensure_init();

    let calls = Calls::default();
    let mut service = CommandService::new(messages());
    let root = recording("dup", &calls)
        .with_child(recording("a", &calls))
        .with_child(recording("a", &calls));
    assert!(service.register_root(root).is_err());
    assert!(service.root("dup").is_none());
}

#[test]
fn test_first_registered_child_wins_completion_order() {
    ensure_init();

    let calls = Calls::default();
    let mut service = CommandService::new(messages());
    let root = recording("tools", &calls)
        .with_child(recording("start", &calls))
        .with_child(recording("status", &calls))
        .with_child(recording("stop", &calls).with_permission("tools.stop"));
    service.register_root(root).unwrap();

    let sender = player(&[]);
    assert_eq!(service.complete("tools", &sender, &args(&["st"])), args(&["start", "status"]));
}
