use super::*;
use crate::kernel::notify::Severity;
use crate::kernel::services::adapters::{TokioExecutor, WatchToolChannel};
use crate::kernel::services::ports::{
    EngineError, Parser, Settings, WorkspaceError, WorkspaceFuture, WORKSPACE_NOT_FOUND,
};
use crate::models::flow::FlowNodeKind;
use crate::models::{FlowDesign, FlowEdge, FlowNode, Leaf};
use serde_json::{json, Value};
use std::sync::Mutex;

struct FakeParser {
    names: Vec<String>,
}

impl Parser for FakeParser {
    fn parse(&mut self, filename: &str, body: &str) -> Result<(), EngineError> {
        if body.contains("error") {
            return Err(EngineError(format!("{filename}: unexpected token")));
        }
        self.names.push(filename.to_string());
        Ok(())
    }

    fn check(self: Box<Self>) -> Result<Value, EngineError> {
        Ok(json!({ "files": self.names }))
    }
}

struct FakeEngine;

impl SystemEngine for FakeEngine {
    fn parser(&self) -> Box<dyn Parser> {
        Box::new(FakeParser { names: Vec::new() })
    }

    fn gen_flow(&self, _system: &Value) -> Result<FlowDesign, EngineError> {
        let nodes = vec![
            FlowNode::new(".0", FlowNodeKind::Unit, None),
            FlowNode::child_of(".0.m", FlowNodeKind::Module, ".0"),
        ];
        Ok((nodes, Vec::<FlowEdge>::new()))
    }
}

#[derive(Default)]
struct FakeWorkspace {
    created: Mutex<Vec<Vec<Leaf>>>,
}

impl WorkspaceClient for FakeWorkspace {
    fn load(&self, id: &str) -> WorkspaceFuture<Vec<Leaf>> {
        let id = id.to_string();
        Box::pin(async move {
            if id != "abc" {
                return Err(WorkspaceError::NotFound);
            }
            Ok(vec![Leaf {
                name: "/lib/a.def".to_string(),
                body: "unit a;".to_string(),
            }])
        })
    }

    fn create(&self, files: Vec<Leaf>) -> WorkspaceFuture<String> {
        if let Ok(mut created) = self.created.lock() {
            created.push(files);
        }
        Box::pin(async { Ok("new-id".to_string()) })
    }
}

struct Harness {
    studio: Studio,
    tools: Arc<WatchToolChannel>,
    workspace: Arc<FakeWorkspace>,
}

fn harness(engine: bool) -> Harness {
    let tools = Arc::new(WatchToolChannel::new());
    let workspace = Arc::new(FakeWorkspace::default());
    let executor = Arc::new(TokioExecutor::new().unwrap());
    let studio = Studio::new(
        AppState::new(&Settings::default()),
        executor,
        workspace.clone(),
        tools.clone(),
    );
    let studio = if engine {
        studio.with_engine(Box::new(FakeEngine))
    } else {
        studio
    };
    Harness {
        studio,
        tools,
        workspace,
    }
}

fn message(studio: &Studio) -> Option<(Severity, String)> {
    studio
        .state()
        .notify
        .current()
        .map(|n| (n.severity, n.text.clone()))
}

#[test]
fn save_parses_lays_out_and_posts() {
    let mut h = harness(true);
    h.studio.dispatch(Action::SelectTool {
        name: "std@view v0.2.0".to_string(),
    });
    h.studio.dispatch(Action::SaveFile {
        path: "/design.def".to_string(),
        body: "unit design;".to_string(),
    });

    let state = h.studio.state();
    assert_eq!(
        state.system,
        Some(json!({ "files": ["/design.def"] }))
    );
    assert_eq!(message(&h.studio), Some((Severity::Success, "OK".to_string())));

    let (nodes, _) = state.flow.as_ref().unwrap();
    assert!(nodes.iter().all(|n| n.size.is_some()));

    let posted = h.tools.latest().unwrap();
    assert_eq!(posted.tool, "/std/view/0.2.0");
    assert_eq!(Some(posted.system), state.system);
}

#[test]
fn parse_error_is_shown_verbatim() {
    let mut h = harness(true);
    h.studio.dispatch(Action::SaveFile {
        path: "/design.def".to_string(),
        body: "error".to_string(),
    });
    assert_eq!(
        message(&h.studio),
        Some((Severity::Error, "/design.def: unexpected token".to_string()))
    );
    assert!(h.studio.state().flow.is_none());
    assert!(h.tools.latest().is_none());
}

#[test]
fn parse_without_engine_reports_error() {
    let mut h = harness(false);
    h.studio.dispatch(Action::Parse);
    assert_eq!(
        message(&h.studio),
        Some((Severity::Error, NO_ENGINE.to_string()))
    );
}

#[test]
fn workspace_load_arrives_through_bus() {
    let mut h = harness(true);
    h.studio.dispatch_and_wait(
        Action::WorkspaceOpen {
            id: "abc".to_string(),
        },
        Duration::from_secs(5),
    );

    let state = h.studio.state();
    assert_eq!(state.workspace.id(), Some("abc"));
    assert_eq!(state.target_file.as_deref(), Some("/lib/a.def"));
    assert_eq!(state.target_body(), Some("unit a;"));
}

#[test]
fn unknown_workspace_shows_not_found() {
    let mut h = harness(true);
    h.studio.dispatch_and_wait(
        Action::WorkspaceOpen {
            id: "missing".to_string(),
        },
        Duration::from_secs(5),
    );
    assert_eq!(
        message(&h.studio),
        Some((Severity::Error, WORKSPACE_NOT_FOUND.to_string()))
    );
    assert!(h.studio.state().fs.is_file("/design.def"));
}

#[test]
fn create_uploads_current_tree() {
    let mut h = harness(true);
    h.studio.dispatch_and_wait(Action::WorkspaceCreate, Duration::from_secs(5));

    assert_eq!(h.studio.state().workspace.id(), Some("new-id"));
    let created = h.workspace.created.lock().unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0][0].name, "/design.def");
}

#[test]
fn tick_hides_message() {
    let mut h = harness(false);
    h.studio.dispatch(Action::Parse);
    let shown_at = h.studio.state().notify.current().unwrap().shown_at;
    assert!(h.studio.tick(shown_at + Duration::from_secs(6)));
    assert!(message(&h.studio).is_none());
}
