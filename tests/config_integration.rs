use std::path::PathBuf;

use linescope::config::{ConfigFlags, PolicyMode, load_config_flags, parse_flag_tokens};

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".linescoperc");
    let content = r#"
# comment
--debug-panes

--policy trailing

--edit-log=edits.log
"#;
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert!(flags.debug_panes);
    assert_eq!(flags.policy, Some(PolicyMode::Trailing));
    assert_eq!(flags.edit_log, Some(PathBuf::from("edits.log")));
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".linescoperc");
    let content = "--debug-panes\n--policy trailing\n--edit-log session.log\n";
    std::fs::write(&path, content).unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_args = vec![
        "linescope".to_string(),
        "--policy".to_string(),
        "scoped".to_string(),
        "--indent-width".to_string(),
        "4".to_string(),
    ];
    let cli_flags = parse_flag_tokens(&cli_args);

    let effective = file_flags.union(&cli_flags);
    assert!(effective.debug_panes, "file flags should remain enabled");
    assert_eq!(effective.indent_width, Some(4), "cli flags should be applied");
    assert_eq!(
        effective.policy,
        Some(PolicyMode::Scoped),
        "cli should override policy"
    );
    assert_eq!(
        effective.edit_log,
        Some(PathBuf::from("session.log")),
        "file config should be preserved when CLI does not override"
    );
}

#[test]
fn test_parse_flag_tokens_handles_equals_syntax() {
    let args = vec![
        "linescope".to_string(),
        "--policy=scoped".to_string(),
        "--indent-width=3".to_string(),
        "--edit-log=edits.log".to_string(),
    ];
    let flags = parse_flag_tokens(&args);
    assert_eq!(flags.policy, Some(PolicyMode::Scoped));
    assert_eq!(flags.indent_width, Some(3));
    assert_eq!(flags.edit_log, Some(PathBuf::from("edits.log")));
}

#[test]
fn test_config_union_merges_booleans() {
    let file = ConfigFlags {
        debug_panes: true,
        ..ConfigFlags::default()
    };
    let cli = ConfigFlags {
        no_debug_panes: true,
        ..ConfigFlags::default()
    };
    let merged = file.union(&cli);
    assert!(merged.debug_panes);
    assert!(merged.no_debug_panes);
}
