use crate::common::command::{run_git_alot, scan_root};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn abort_when_root_is_missing(scan_root: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let assert = run_git_alot(scan_root.path(), &["does-not-exist"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cannot read scan root"));

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert_eq!(stderr.matches("No such file or directory").count(), 1);

    Ok(())
}
