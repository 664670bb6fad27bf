use chunkedit::tooling::cli::{Cli, Commands};
use clap::{CommandFactory, Parser};

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["chunkedit"],
        vec!["chunkedit", "interactive"],
        vec!["chunkedit", "search", "alpha", "beta"],
        vec!["chunkedit", "search"],
        vec!["chunkedit", "search", "alpha", "--format", "json"],
        vec!["chunkedit", "save", "--id", "7", "--text", "hello world"],
        vec!["chunkedit", "save", "--id", "c-1", "--file", "./new.txt"],
        vec!["chunkedit", "status", "--test-connectivity"],
        vec!["chunkedit", "--config", "./chunkedit.toml", "status"],
        vec!["chunkedit", "status", "--log-level", "debug", "--log-output", "stderr"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_conflicting_save_sources() {
    let both = Cli::try_parse_from([
        "chunkedit", "save", "--id", "7", "--text", "x", "--file", "./x.txt",
    ]);
    assert!(both.is_err());

    let neither = Cli::try_parse_from(["chunkedit", "save", "--id", "7"]);
    assert!(neither.is_err());

    let no_id = Cli::try_parse_from(["chunkedit", "save", "--text", "x"]);
    assert!(no_id.is_err());
}

#[test]
fn no_subcommand_defaults_to_interactive() {
    let cli = Cli::try_parse_from(["chunkedit", "--verbose"]).unwrap();
    assert_eq!(cli.command_or_default(), Commands::Interactive);
    assert!(cli.logging_overrides().verbose);
}

#[test]
fn search_joins_keyword_tokens() {
    let cli = Cli::try_parse_from(["chunkedit", "search", "alpha", "beta"]).unwrap();
    match cli.command_or_default() {
        Commands::Search { keyword, format } => {
            assert_eq!(keyword, vec!["alpha", "beta"]);
            assert_eq!(format, "text");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}
