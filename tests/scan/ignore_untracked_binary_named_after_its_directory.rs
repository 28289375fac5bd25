use crate::common::command::{add_remote_ref, init_repository, run_git_alot, scan_root, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn ignore_untracked_binary_named_after_its_directory(
    scan_root: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let tool = init_repository(&scan_root.path().join("tool"));
    add_remote_ref(&tool);
    write_file(FileSpec::new(tool.join("tool"), "\x7fELF".to_string()));

    let actual_output = stdout_of(&mut run_git_alot(scan_root.path(), &[]));

    assert_eq!(actual_output, "");

    Ok(())
}

#[rstest]
fn report_untracked_file_with_another_name(
    scan_root: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let tool = init_repository(&scan_root.path().join("tool"));
    add_remote_ref(&tool);
    write_file(FileSpec::new(tool.join("other"), "\x7fELF".to_string()));

    let expected_output = "tool\n  \"??\": 1\n".to_string();
    let actual_output = stdout_of(&mut run_git_alot(scan_root.path(), &[]));

    assert_eq!(actual_output, expected_output);

    Ok(())
}
