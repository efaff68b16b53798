//! Scaffolding steps and the assembly of the step list

pub mod files;
pub mod git;
pub mod manifest;
pub mod npm;
pub mod remote;
pub mod templates;

use crate::clients::Toolchain;
use crate::core::{CreateOptions, StepEntry, StepList};

pub const CHECK_NAME: &str = "check-name";
pub const CREATE_REPOSITORY: &str = "create-repository";
pub const CREATE_DIRECTORY: &str = "create-directory";
pub const GIT_INIT: &str = "git-init";
pub const GIT_REMOTE: &str = "git-remote";
pub const WRITE_README: &str = "write-readme";
pub const WRITE_GITIGNORE: &str = "write-gitignore";
pub const NPM_INIT: &str = "npm-init";
pub const EDIT_MANIFEST: &str = "edit-manifest";
pub const WRITE_TEST_STUB: &str = "write-test-stub";
pub const READ_MANIFEST_METADATA: &str = "read-manifest-metadata";
pub const GIT_PUSH: &str = "git-push";
pub const SYNC_DESCRIPTION: &str = "sync-description";
pub const NPM_INSTALL: &str = "npm-install";

/// Build the step list for one run
///
/// The backbone is fixed; `options.check` only prepends the registry name check.
pub fn assemble(options: &CreateOptions, toolchain: &Toolchain) -> StepList {
    let hosting = &toolchain.hosting;
    let tools = &toolchain.tools;
    let config = &toolchain.config;

    let mut steps = StepList::new();
    steps.push(StepEntry::single(remote::CreateRepository {
        hosting: hosting.clone(),
    }));
    steps.push(StepEntry::single(files::CreateDirectory));
    steps.push(StepEntry::single(git::GitInit {
        tools: tools.clone(),
        config: config.clone(),
    }));
    steps.push(StepEntry::single(git::GitRemote {
        tools: tools.clone(),
        config: config.clone(),
    }));
    steps.push(StepEntry::single(files::WriteFile::readme()));
    steps.push(StepEntry::single(files::WriteFile::gitignore()));
    steps.push(StepEntry::single(npm::NpmCommand::init(tools.clone(), config.clone())));
    steps.push(StepEntry::Group(vec![
        Box::new(manifest::EditManifest),
        Box::new(files::WriteTestStub),
    ]));
    steps.push(StepEntry::single(manifest::ReadManifestMetadata));
    steps.push(StepEntry::Group(vec![
        Box::new(git::GitPush {
            tools: tools.clone(),
            config: config.clone(),
        }),
        Box::new(remote::SyncDescription {
            hosting: hosting.clone(),
        }),
        Box::new(npm::NpmCommand::install(tools.clone(), config.clone())),
    ]));

    if options.check {
        steps.prepend(StepEntry::single(remote::CheckName {
            hosting: hosting.clone(),
        }));
    }

    steps
}
