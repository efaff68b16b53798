//! Test: failures halt the pipeline and are reported verbatim

use crate::support::*;
use create_module::core::{CreateOptions, ExecutionStatus, ScaffoldError, StepState};
use create_module::steps;

#[tokio::test]
async fn test_taken_name_stops_after_one_step() {
    let harness = Harness::new(MockHosting::taken(), MockTools::new());
    let report = harness.run("taken-pkg", CreateOptions { check: true }).await;

    assert_eq!(report.status, ExecutionStatus::Failed);
    assert_eq!(report.started_steps(), vec![steps::CHECK_NAME]);
    assert_failed(&report, steps::CHECK_NAME);
    assert!(report.steps[1..].iter().all(|r| matches!(r.state, StepState::Pending)));

    // Nothing created anywhere
    assert_eq!(entry_count(harness.cwd.path()), 0);
    assert_eq!(harness.hosting.calls(), vec!["package_exists taken-pkg".to_string()]);
    assert!(harness.tools.commands().is_empty());

    let err = report.into_result().unwrap_err();
    assert!(matches!(err, ScaffoldError::NameTaken { .. }));
    assert!(err.to_string().contains("already taken"));
}

#[tokio::test]
async fn test_repository_failure_creates_nothing_locally() {
    let harness = Harness::new(
        MockHosting::failing_create(422, r#"{"message":"name already exists on this account"}"#),
        MockTools::new(),
    );
    let report = harness.run("foo-bar", CreateOptions::default()).await;

    assert_eq!(report.started_steps(), vec![steps::CREATE_REPOSITORY]);
    assert!(!harness.module_dir("foo-bar").exists());
    assert!(harness.tools.commands().is_empty());

    match report.into_result() {
        Err(ScaffoldError::RemoteApi { status, body }) => {
            assert_eq!(status, Some(422));
            assert!(body.contains("already exists"));
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[tokio::test]
async fn test_existing_directory_fails_without_rollback() {
    let harness = Harness::new(MockHosting::new(), MockTools::new());
    std::fs::create_dir(harness.module_dir("foo-bar")).unwrap();

    let report = harness.run("foo-bar", CreateOptions::default()).await;

    assert_completed(&report, steps::CREATE_REPOSITORY);
    assert_failed(&report, steps::CREATE_DIRECTORY);
    assert!(matches!(report.error, Some(ScaffoldError::Filesystem { .. })));
    // The remote repository is left in place
    assert_eq!(harness.hosting.calls().len(), 1);
    assert!(harness.tools.commands().is_empty());
}

#[tokio::test]
async fn test_npm_init_failure_stops_before_manifest_edit() {
    let harness = Harness::new(MockHosting::new(), MockTools::failing_on("npm init"));
    let report = harness.run("foo-bar", CreateOptions::default()).await;

    assert_failed(&report, steps::NPM_INIT);
    assert!(matches!(report.step_state(steps::EDIT_MANIFEST), Some(StepState::Pending)));
    assert!(!harness.module_dir("foo-bar").join("test").exists());
    assert!(matches!(report.error, Some(ScaffoldError::ToolExecution { .. })));
}

#[tokio::test]
async fn test_group_failure_waits_for_siblings() {
    let harness = Harness::new(MockHosting::new(), MockTools::failing_on("npm install"));
    let report = harness.run("foo-bar", CreateOptions::default()).await;

    assert_eq!(report.status, ExecutionStatus::Failed);
    assert_failed(&report, steps::NPM_INSTALL);
    assert_completed(&report, steps::GIT_PUSH);
    assert_completed(&report, steps::SYNC_DESCRIPTION);

    assert!(harness
        .tools
        .commands()
        .contains(&"git push origin master".to_string()));
    assert_eq!(
        report.into_result().unwrap_err().to_string(),
        "npm install failed: exited with code 1"
    );
}

#[tokio::test]
async fn test_git_failure_in_push_group() {
    let harness = Harness::new(MockHosting::new(), MockTools::failing_on("git push"));
    let report = harness.run("foo-bar", CreateOptions::default()).await;

    assert_failed(&report, steps::GIT_PUSH);
    assert_completed(&report, steps::NPM_INSTALL);
    assert!(report.error.unwrap().to_string().starts_with("git push origin master failed"));
}

#[tokio::test]
async fn test_description_sync_failure_lets_siblings_finish() {
    let harness = Harness::new(
        MockHosting::failing_update(404, r#"{"message":"Not Found"}"#),
        MockTools::new(),
    );
    let report = harness.run("foo-bar", CreateOptions::default()).await;

    assert_eq!(report.status, ExecutionStatus::Failed);
    assert_failed(&report, steps::SYNC_DESCRIPTION);
    assert_completed(&report, steps::GIT_PUSH);
    assert_completed(&report, steps::NPM_INSTALL);
    assert!(harness
        .tools
        .commands()
        .contains(&"npm install".to_string()));

    match report.into_result() {
        Err(ScaffoldError::RemoteApi { status, body }) => {
            assert_eq!(status, Some(404));
            assert!(body.contains("Not Found"));
        }
        other => panic!("unexpected result {:?}", other),
    }
}
