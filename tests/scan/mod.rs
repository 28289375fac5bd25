mod abort_when_root_is_missing;
mod end_to_end_reports_missing_remotes_and_dirty_trees;
mod ignore_untracked_binary_named_after_its_directory;
mod print_closing_summary;
mod report_counts_per_status_code;
mod skip_stray_git_file_and_continue;
mod warn_about_repository_without_remotes;
