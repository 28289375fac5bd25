use crate::common::command::{
    add_remote_ref, detach_metadata, init_repository, run_git_alot, scan_root, stdout_of,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn end_to_end_reports_missing_remotes_and_dirty_trees(
    scan_root: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let a = init_repository(&scan_root.path().join("a"));
    add_remote_ref(&a);

    let b = init_repository(&scan_root.path().join("b"));
    write_file(FileSpec::new(b.join("x.txt"), "one".to_string()));
    crate::common::command::commit_all(&b, "Add x");
    detach_metadata(
        &b,
        &scan_root.path().join(".git-modules").join("b"),
        "../.git-modules/b",
    );
    write_file(FileSpec::new(b.join("x.txt"), "modified".to_string()));

    let expected_output = "No remotes: b (gitdir: .git-modules/b)\n\
                           b (gitdir: .git-modules/b)\n  \"M\": 1\n"
        .to_string();
    let actual_output = stdout_of(&mut run_git_alot(scan_root.path(), &[]));

    assert_eq!(actual_output, expected_output);

    Ok(())
}
