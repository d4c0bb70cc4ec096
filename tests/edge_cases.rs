//! Edge case and error handling tests for ptree


use harness::{TestTree, run_ptree, tree_lines};
use std::fs;
#[cfg(unix)]
use std::os::unix::fs::{PermissionsExt, symlink};

// ============================================================================
// Unreadable Directories
// ============================================================================

#[test]
#[cfg(unix)]
fn test_unreadable_directory() {
    let tree = TestTree::english();
    tree.add_file("readable/file.rs", "fn readable() {}");
    tree.add_file("zz_after.txt", "");

    let unreadable = tree.add_dir("unreadable");
    fs::write(unreadable.join("hidden.rs"), "fn hidden() {}").expect("Failed to write file");

    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(&unreadable, perms).expect("Failed to set permissions");

    // Root ignores permission bits, in which case the directory is simply listed
    let enforced = fs::read_dir(&unreadable).is_err();

    let (stdout, _stderr, success) = run_ptree(&tree, &[]);

    // Restore permissions for cleanup
    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&unreadable, perms).expect("Failed to restore permissions");

    assert!(success, "ptree should handle unreadable directories gracefully");
    assert!(stdout.contains("[File] file.rs"), "sibling subtree still shown");
    assert!(stdout.contains("└── [File] zz_after.txt"), "later siblings still shown");
    if enforced {
        assert!(
            stdout.contains("│   ├── [Permission Denied] unreadable"),
            "inline annotation expected: {}",
            stdout
        );
        assert!(!stdout.contains("hidden.rs"));
    }
}

// ============================================================================
// Symlinks
// ============================================================================

#[test]
#[cfg(unix)]
fn test_symlink_to_directory_is_shown_as_directory() {
    let tree = TestTree::english();
    tree.add_file("realdir/file.rs", "");
    symlink(tree.path().join("realdir"), tree.path().join("linkdir"))
        .expect("Failed to create dir symlink");

    let (stdout, _stderr, success) = run_ptree(&tree, &[]);
    assert!(success);
    assert!(stdout.contains("[Dir] linkdir"), "{}", stdout);
    assert!(stdout.contains("[Dir] realdir"));
}

#[test]
#[cfg(unix)]
fn test_symlink_to_parent_bounded_by_depth() {
    let tree = TestTree::english();
    tree.add_file("subdir/file.rs", "");
    symlink("..", tree.path().join("subdir").join("parent"))
        .expect("Failed to create parent symlink");

    let (stdout, _stderr, success) = run_ptree(&tree, &[".", "-d", "4"]);
    assert!(success, "ptree should not hang on parent symlink");
    assert!(stdout.contains("[Dir] subdir"));
    assert!(stdout.contains("[Dir] parent"));
}

#[test]
#[cfg(unix)]
fn test_broken_symlink_is_a_file() {
    let tree = TestTree::english();
    symlink(tree.path().join("nowhere"), tree.path().join("dangling"))
        .expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_ptree(&tree, &[]);
    assert!(success);
    assert!(stdout.contains("[File] dangling"), "{}", stdout);
}

// ============================================================================
// Names
// ============================================================================

#[test]
fn test_filename_with_spaces() {
    let tree = TestTree::english();
    tree.add_file("my file.txt", "");

    let (stdout, _stderr, success) = run_ptree(&tree, &[]);
    assert!(success);
    assert!(stdout.contains("[File] my file.txt"));
}

#[test]
fn test_filename_with_unicode() {
    let tree = TestTree::english();
    tree.add_file("文档/说明.md", "");
    tree.add_file("émoji_🍎.txt", "");

    let (stdout, _stderr, success) = run_ptree(&tree, &[]);
    assert!(success);
    assert!(stdout.contains("[Dir] 文档"));
    assert!(stdout.contains("[File] 说明.md"));
    assert!(stdout.contains("[File] émoji_🍎.txt"));
}

#[test]
fn test_file_without_extension_hidden_by_types() {
    let tree = TestTree::english();
    tree.add_file("Makefile", "");
    tree.add_file("build.rs", "");

    let (stdout, _stderr, success) = run_ptree(&tree, &[".", "-t", "rs"]);
    assert!(success);
    assert!(!stdout.contains("Makefile"));
    assert!(stdout.contains("[File] build.rs"));
}

#[test]
fn test_extension_match_is_case_sensitive() {
    let tree = TestTree::english();
    tree.add_file("upper.PY", "");
    tree.add_file("lower.py", "");

    let (stdout, _stderr, success) = run_ptree(&tree, &[".", "-t", "py"]);
    assert!(success);
    assert!(!stdout.contains("upper.PY"));
    assert!(stdout.contains("lower.py"));
}

#[test]
fn test_multiple_types() {
    let tree = TestTree::english();
    tree.add_file("a.rs", "");
    tree.add_file("b.toml", "");
    tree.add_file("c.lock", "");

    let (stdout, _stderr, success) = run_ptree(&tree, &[".", "-t", "rs", "toml"]);
    assert!(success);
    assert!(stdout.contains("Filter types: rs, toml"));
    assert!(stdout.contains("a.rs"));
    assert!(stdout.contains("b.toml"));
    assert!(!stdout.contains("c.lock"));
}

// ============================================================================
// Structure
// ============================================================================

#[test]
fn test_empty_directory() {
    let tree = TestTree::english();

    let (stdout, _stderr, success) = run_ptree(&tree, &[]);
    assert!(success);
    assert!(tree_lines(&stdout).is_empty(), "{}", stdout);
}

#[test]
fn test_empty_subdirectory_is_listed() {
    let tree = TestTree::english();
    tree.add_dir("empty");

    let (stdout, _stderr, success) = run_ptree(&tree, &[]);
    assert!(success);
    assert_eq!(tree_lines(&stdout), vec!["└── [Dir] empty"]);
}

#[test]
fn test_very_deep_nesting_with_large_depth() {
    let tree = TestTree::english();
    let deep_path = (0..30)
        .map(|i| format!("level{}", i))
        .collect::<Vec<_>>()
        .join("/");
    tree.add_file(&format!("{}/deep.txt", deep_path), "");

    let (stdout, _stderr, success) = run_ptree(&tree, &[".", "-d", "100"]);
    assert!(success);
    assert!(stdout.contains("[File] deep.txt"));
    // 30 directory levels plus the file, each one prefix segment deeper
    let last = tree_lines(&stdout).last().copied().unwrap();
    assert!(last.starts_with(&"    ".repeat(30)), "{:?}", last);
}

#[test]
fn test_many_files_in_directory() {
    let tree = TestTree::english();
    for i in 0..200 {
        tree.add_file(&format!("file_{:03}.txt", i), "");
    }

    let (stdout, _stderr, success) = run_ptree(&tree, &[]);
    assert!(success);
    let lines = tree_lines(&stdout);
    assert_eq!(lines.len(), 200);
    assert_eq!(lines.iter().filter(|l| l.starts_with("└── ")).count(), 1);
    assert_eq!(lines[199], "└── [File] file_199.txt");
}

#[test]
fn test_sorting_order() {
    let tree = TestTree::english();
    tree.add_file("zebra.rs", "");
    tree.add_file("Apple.rs", "");
    tree.add_file("middle.rs", "");
    tree.add_dir("zdir");

    let (stdout, _stderr, success) = run_ptree(&tree, &[]);
    assert!(success);
    assert_eq!(
        tree_lines(&stdout),
        vec![
            "├── [Dir] zdir",
            "├── [File] Apple.rs",
            "├── [File] middle.rs",
            "└── [File] zebra.rs",
        ]
    );
}

// ============================================================================
// Settings
// ============================================================================

#[test]
fn test_malformed_settings_fall_back_with_warning() {
    let tree = TestTree::new();
    tree.write_settings("{ this is not json");
    tree.add_file("f.txt", "");

    let (stdout, stderr, success) = run_ptree(&tree, &[]);
    assert!(success);
    assert!(stdout.contains("[文件] f.txt"), "defaults to Chinese: {}", stdout);
    assert!(stderr.contains("failed to parse config file"), "{}", stderr);
}

#[test]
fn test_partial_settings_keep_valid_fields() {
    let tree = TestTree::new();
    tree.write_settings(r#"{"language": "en", "use_color": "sometimes"}"#);
    tree.add_file("f.txt", "");

    let (stdout, _stderr, success) = run_ptree(&tree, &[]);
    assert!(success);
    assert!(stdout.contains("[File] f.txt"));
}
