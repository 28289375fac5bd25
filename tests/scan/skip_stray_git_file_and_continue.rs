use crate::common::command::{init_repository, run_git_alot, scan_root};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn skip_stray_git_file_and_continue(scan_root: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        scan_root.path().join("stray").join(".git"),
        "this is not a pointer".to_string(),
    ));
    init_repository(&scan_root.path().join("real"));

    run_git_alot(scan_root.path(), &[])
        .assert()
        .success()
        .stdout(predicate::eq("No remotes: real\n"))
        .stderr(predicate::str::contains("Failed to resolve repository"))
        .stderr(predicate::str::contains("stray"));

    Ok(())
}
