use crate::common::command::{
    clean_repository_with_remotes, run_git_alot, run_git_command, stdout_of,
};
use crate::common::file::{FileSpec, write_file, write_generated_files};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_counts_per_status_code(
    clean_repository_with_remotes: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let scan_root = clean_repository_with_remotes;
    let repository = scan_root.path().join("clean");

    write_file(FileSpec::new(
        repository.join("README.md"),
        "changed".to_string(),
    ));
    write_generated_files(&repository, 3);
    write_file(FileSpec::new(repository.join("staged.txt"), "staged".to_string()));
    run_git_command(&repository, &["add", "staged.txt"])
        .assert()
        .success();

    let expected_output = "clean\n  \"??\": 3\n  \"A\": 1\n  \"M\": 1\n".to_string();
    let actual_output = stdout_of(&mut run_git_alot(scan_root.path(), &[]));

    assert_eq!(actual_output, expected_output);

    Ok(())
}
