use crate::common::command::{init_repository, run_git_alot, scan_root, stdout_of};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn warn_about_repository_without_remotes(
    scan_root: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    init_repository(&scan_root.path().join("local-only"));

    let expected_output = "No remotes: local-only\n".to_string();
    let actual_output = stdout_of(&mut run_git_alot(scan_root.path(), &[]));

    assert_eq!(actual_output, expected_output);

    Ok(())
}
