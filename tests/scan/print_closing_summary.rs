use crate::common::command::{
    add_remote_ref, init_repository, run_git_alot, scan_root, stdout_of,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn print_closing_summary(scan_root: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    for name in ["one", "two", "three"] {
        let repository = init_repository(&scan_root.path().join(name));
        add_remote_ref(&repository);
    }
    write_file(FileSpec::new(
        scan_root.path().join("two").join("README.md"),
        "changed".to_string(),
    ));

    let expected_output =
        "two\n  \"M\": 1\n.. you have 2 clean repositories out of 3. Good!\n".to_string();
    let actual_output = stdout_of(&mut run_git_alot(scan_root.path(), &["--summary"]));

    assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn praise_when_everything_is_clean(scan_root: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let repository = init_repository(&scan_root.path().join("only"));
    add_remote_ref(&repository);

    let expected_output = "All of your 1 repositories are clean. Very Nice!\n".to_string();
    let actual_output = stdout_of(&mut run_git_alot(scan_root.path(), &["--summary"]));

    assert_eq!(actual_output, expected_output);

    Ok(())
}
