//! Integration tests for termination conditions.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::scope::SolverScope;

fn started_scope() -> SolverScope {
    let mut scope = SolverScope::new();
    scope.start_solving();
    scope
}

#[test]
fn test_node_count_termination() {
    let mut scope = started_scope();
    let term = NodeCountTermination::new(3);

    assert!(!term.is_terminated(&scope));
    scope.record_node(1);
    scope.record_node(2);
    assert!(!term.is_terminated(&scope));
    scope.record_node(3);
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_time_termination() {
    let scope = started_scope();
    assert!(!TimeTermination::seconds(60).is_terminated(&scope));

    std::thread::sleep(Duration::from_millis(5));
    assert!(TimeTermination::millis(1).is_terminated(&scope));
}

#[test]
fn test_time_termination_zero_limit_fires_immediately() {
    let scope = started_scope();
    assert!(TimeTermination::new(Duration::ZERO).is_terminated(&scope));
}

#[test]
fn test_external_termination() {
    let scope = started_scope();
    let flag = Arc::new(AtomicBool::new(false));
    let term = ExternalTermination::new(flag.clone());

    assert!(!term.is_terminated(&scope));
    flag.store(true, Ordering::SeqCst);
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_no_termination() {
    let mut scope = started_scope();
    for depth in 0..1000 {
        scope.record_node(depth);
    }
    assert!(!NoTermination.is_terminated(&scope));
}

#[test]
fn test_optional_termination() {
    let mut scope = started_scope();
    scope.record_node(1);

    let absent: Option<NodeCountTermination> = None;
    let present = Some(NodeCountTermination::new(1));
    assert!(!absent.is_terminated(&scope));
    assert!(present.is_terminated(&scope));
}

#[test]
fn test_or_termination() {
    let mut scope = started_scope();
    let term = OrTermination((NodeCountTermination::new(2), TimeTermination::seconds(60)));

    scope.record_node(1);
    assert!(!term.is_terminated(&scope));
    scope.record_node(2);
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_or_termination_with_absent_members() {
    let mut scope = started_scope();
    let term = OrTermination((
        None::<NodeCountTermination>,
        None::<TimeTermination>,
        NoTermination,
    ));
    scope.record_node(1);
    assert!(!term.is_terminated(&scope));
}

#[test]
fn test_boxed_termination() {
    let mut scope = started_scope();
    let term: Box<dyn Termination> = Box::new(NodeCountTermination::new(1));
    assert!(!term.is_terminated(&scope));
    scope.record_node(1);
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_only_external_termination_is_cancellation() {
    let mut scope = started_scope();
    let flag = Arc::new(AtomicBool::new(false));
    let term = OrTermination((
        ExternalTermination::new(flag.clone()),
        NodeCountTermination::new(1),
    ));

    scope.record_node(1);
    assert!(term.is_terminated(&scope));
    assert!(!term.is_cancelled(&scope));

    flag.store(true, Ordering::SeqCst);
    assert!(term.is_cancelled(&scope));
    assert!(!NodeCountTermination::new(1).is_cancelled(&scope));
    assert!(Some(ExternalTermination::new(flag)).is_cancelled(&scope));
}
