//! Test: step list assembly

use crate::support::*;
use create_module::core::CreateOptions;
use create_module::steps::{self, assemble};

const BACKBONE: [&str; 13] = [
    steps::CREATE_REPOSITORY,
    steps::CREATE_DIRECTORY,
    steps::GIT_INIT,
    steps::GIT_REMOTE,
    steps::WRITE_README,
    steps::WRITE_GITIGNORE,
    steps::NPM_INIT,
    steps::EDIT_MANIFEST,
    steps::WRITE_TEST_STUB,
    steps::READ_MANIFEST_METADATA,
    steps::GIT_PUSH,
    steps::SYNC_DESCRIPTION,
    steps::NPM_INSTALL,
];

#[test]
fn test_ten_entries_without_check() {
    let harness = Harness::new(MockHosting::new(), MockTools::new());
    let list = assemble(&CreateOptions { check: false }, &harness.toolchain());

    assert_eq!(list.len(), 10);
    assert_eq!(list.step_ids(), BACKBONE.to_vec());
    assert_eq!(list.entries()[0].ids(), vec![steps::CREATE_REPOSITORY]);
}

#[test]
fn test_check_prepends_name_check() {
    let harness = Harness::new(MockHosting::new(), MockTools::new());
    let list = assemble(&CreateOptions { check: true }, &harness.toolchain());

    assert_eq!(list.len(), 11);
    assert_eq!(list.entries()[0].ids(), vec![steps::CHECK_NAME]);
    assert_eq!(list.step_ids()[1..].to_vec(), BACKBONE.to_vec());
}

#[test]
fn test_groups_are_where_expected() {
    let harness = Harness::new(MockHosting::new(), MockTools::new());
    let list = assemble(&CreateOptions::default(), &harness.toolchain());

    let groups: Vec<(usize, Vec<&str>)> = list
        .entries()
        .iter()
        .enumerate()
        .filter(|(_, e)| e.is_group())
        .map(|(i, e)| (i, e.ids()))
        .collect();

    assert_eq!(
        groups,
        vec![
            (7, vec![steps::EDIT_MANIFEST, steps::WRITE_TEST_STUB]),
            (9, vec![steps::GIT_PUSH, steps::SYNC_DESCRIPTION, steps::NPM_INSTALL]),
        ]
    );
}

#[test]
fn test_assembly_is_deterministic() {
    let harness = Harness::new(MockHosting::new(), MockTools::new());
    for check in [false, true] {
        let options = CreateOptions { check };
        let first = assemble(&options, &harness.toolchain()).step_ids();
        let second = assemble(&options, &harness.toolchain()).step_ids();
        assert_eq!(first, second);
    }
}

#[test]
fn test_assembly_has_no_side_effects() {
    let harness = Harness::new(MockHosting::new(), MockTools::new());
    let _ = assemble(&CreateOptions { check: true }, &harness.toolchain());

    assert!(harness.hosting.calls().is_empty());
    assert!(harness.tools.commands().is_empty());
    assert_eq!(entry_count(harness.cwd.path()), 0);
}
