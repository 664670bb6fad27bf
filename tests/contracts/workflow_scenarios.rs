use chunkedit::config::UiConfig;
use chunkedit::session::{Selection, WorkflowState};
use chunkedit::types::{Chunk, ChunkId};

use crate::contracts::support::{chunk, memory_context, memory_context_with_ui, ScriptedPrompter, Step};

fn text_id(id: &str) -> ChunkId {
    ChunkId::Text(id.to_string())
}

#[test]
fn keyword_matches_require_every_token() {
    let (context, _) = memory_context(vec![
        Chunk::new(text_id("A"), "alpha text beta here"),
        Chunk::new(text_id("B"), "alpha only"),
        Chunk::new(text_id("C"), "beta only"),
    ]);
    let mut prompter = ScriptedPrompter::new(vec![Step::Keyword("alpha beta"), Step::Pick("Quit")]);

    context.run_interactive(&mut prompter).unwrap();

    let grids = prompter.grids();
    assert_eq!(grids.len(), 1);
    assert!(grids[0].contains("ID: A"));
    assert!(!grids[0].contains("ID: B"));
    assert!(!grids[0].contains("ID: C"));
    assert!(prompter
        .infos()
        .contains(&"Found 1 chunks for 'alpha beta'. Select a chunk:"));
}

#[test]
fn edit_and_save_is_visible_to_next_search() {
    let (context, store) = memory_context(vec![chunk(7, "hello"), chunk(8, "unrelated")]);
    let mut prompter = ScriptedPrompter::new(vec![
        Step::Keyword("hello"),
        Step::Pick("ID: 7 |"),
        Step::Edit("hello world"),
        Step::Pick("Save changes"),
        Step::Confirm(true),
        Step::Pick("Back to results"),
        Step::Pick("New search"),
        Step::Keyword("hello"),
        Step::Pick("Quit"),
    ]);

    context.run_interactive(&mut prompter).unwrap();

    assert_eq!(prompter.successes(), vec!["Chunk 7 updated."]);
    assert!(prompter.failures().is_empty());
    assert_eq!(prompter.editor_inputs, vec!["hello"]);
    assert_eq!(store.get(&ChunkId::Int(7)).unwrap().text, "hello world");
    // Grid after "Back to results" and grid of the fresh search both show the new text.
    let grids = prompter.grids();
    assert!(grids[1].contains("hello world"));
    assert!(grids.last().unwrap().contains("hello world"));
    assert!(prompter.is_exhausted());
}

#[test]
fn save_after_external_delete_fails_and_keeps_selection() {
    let (context, store) = memory_context(vec![chunk(7, "hello")]);
    let deleter = store.clone();
    let runner_store = store.clone();
    let mut prompter = ScriptedPrompter::new(vec![
        Step::Keyword("hello"),
        Step::Pick("ID: 7 |"),
        Step::Edit("hello world"),
        Step::Run(Box::new(move || {
            deleter.remove(&ChunkId::Int(7));
        })),
        Step::Pick("Save changes"),
        Step::Confirm(true),
        Step::Pick("Quit"),
    ]);

    let runner = chunkedit::tooling::InteractiveRunner::new(
        chunkedit::search::SearchService::new(runner_store.clone()),
        runner_store.as_ref(),
        &context.config().ui,
    );
    let session = runner.run(&mut prompter).unwrap();

    assert!(prompter.successes().is_empty());
    let failures = prompter.failures();
    assert_eq!(failures.len(), 1);
    assert!(failures[0].starts_with("Save failed for chunk 7 (not found)"));
    assert_eq!(
        session.selection(),
        Some(&Selection {
            id: ChunkId::Int(7),
            text: "hello".to_string()
        })
    );
    assert_eq!(session.draft(), Some("hello world"));
    assert_eq!(session.state(), WorkflowState::Selected);
    assert!(store.get(&ChunkId::Int(7)).is_none());
}

#[test]
fn save_can_be_retried_after_connection_loss() {
    let (context, store) = memory_context(vec![chunk(7, "hello")]);
    let cut = store.clone();
    let restore = store.clone();
    let mut prompter = ScriptedPrompter::new(vec![
        Step::Keyword("hello"),
        Step::Pick("ID: 7 |"),
        Step::Edit("hello again"),
        Step::Run(Box::new(move || cut.set_offline(true))),
        Step::Pick("Save changes"),
        Step::Confirm(true),
        Step::Run(Box::new(move || restore.set_offline(false))),
        Step::Pick("Save changes"),
        Step::Confirm(true),
        Step::Pick("Quit"),
    ]);

    context.run_interactive(&mut prompter).unwrap();

    assert_eq!(prompter.failures().len(), 1);
    assert!(prompter.failures()[0].contains("(connection)"));
    assert_eq!(prompter.successes(), vec!["Chunk 7 updated."]);
    assert_eq!(store.get(&ChunkId::Int(7)).unwrap().text, "hello again");
}

#[test]
fn declined_confirmation_writes_nothing() {
    let (context, store) = memory_context(vec![chunk(7, "hello")]);
    let mut prompter = ScriptedPrompter::new(vec![
        Step::Keyword("hello"),
        Step::Pick("ID: 7 |"),
        Step::Edit("discarded"),
        Step::Pick("Save changes"),
        Step::Confirm(false),
        Step::Pick("Quit"),
    ]);

    context.run_interactive(&mut prompter).unwrap();

    assert!(prompter.successes().is_empty());
    assert_eq!(store.get(&ChunkId::Int(7)).unwrap().text, "hello");
    assert_eq!(store.query_count(), 1);
}

#[test]
fn keyword_change_clears_selection_even_when_identical_or_empty() {
    for next_keyword in ["hello", ""] {
        let (_, store) = memory_context(vec![chunk(7, "hello")]);
        let mut steps = vec![
            Step::Keyword("hello"),
            Step::Pick("ID: 7 |"),
            Step::Edit("draft"),
            Step::Pick("Back to results"),
            Step::Pick("New search"),
            Step::Keyword(next_keyword),
        ];
        if !next_keyword.is_empty() {
            // A non-empty keyword lands in the grid again; leave from there.
            steps.push(Step::Pick("Quit"));
        }
        let mut prompter = ScriptedPrompter::new(steps);

        let ui = UiConfig::default();
        let runner = chunkedit::tooling::InteractiveRunner::new(
            chunkedit::search::SearchService::new(store.clone()),
            store.as_ref(),
            &ui,
        );
        let session = runner.run(&mut prompter).unwrap();

        assert!(session.selection().is_none(), "keyword {:?}", next_keyword);
        assert!(session.draft().is_none());
        assert_eq!(store.get(&ChunkId::Int(7)).unwrap().text, "hello");
    }
}

#[test]
fn empty_keyword_issues_no_query() {
    let (context, store) = memory_context(vec![chunk(7, "hello")]);
    let mut prompter = ScriptedPrompter::new(vec![Step::Keyword(""), Step::Keyword("   ")]);

    context.run_interactive(&mut prompter).unwrap();

    assert_eq!(store.query_count(), 0);
    assert_eq!(
        prompter.infos(),
        vec!["Enter a keyword to search.", "Enter a keyword to search."]
    );
}

#[test]
fn no_match_is_reported_as_empty_not_error() {
    let (context, store) = memory_context(vec![chunk(7, "hello")]);
    let mut prompter = ScriptedPrompter::new(vec![Step::Keyword("xyz_no_match")]);

    context.run_interactive(&mut prompter).unwrap();

    assert_eq!(store.query_count(), 1);
    assert!(prompter.failures().is_empty());
    assert_eq!(prompter.infos(), vec!["No chunks found for 'xyz_no_match'."]);
}

#[test]
fn search_failure_is_reported_distinctly() {
    let (context, store) = memory_context(vec![chunk(7, "hello")]);
    store.set_offline(true);
    let mut prompter = ScriptedPrompter::new(vec![Step::Keyword("hello")]);

    context.run_interactive(&mut prompter).unwrap();

    let failures = prompter.failures();
    assert_eq!(failures.len(), 1);
    assert!(failures[0].starts_with("Search failed (connection)"));
    assert!(prompter.grids().is_empty());
}

#[test]
fn activating_another_result_replaces_selection() {
    let (_, store) = memory_context(vec![chunk(7, "hello seven"), chunk(8, "hello eight")]);
    let mut prompter = ScriptedPrompter::new(vec![
        Step::Keyword("hello"),
        Step::Pick("ID: 7 |"),
        Step::Edit("seven draft"),
        Step::Pick("Back to results"),
        Step::Pick("ID: 8 |"),
        Step::AbortEdit,
        Step::Pick("Quit"),
    ]);

    let ui = UiConfig::default();
    let runner = chunkedit::tooling::InteractiveRunner::new(
        chunkedit::search::SearchService::new(store.clone()),
        store.as_ref(),
        &ui,
    );
    let session = runner.run(&mut prompter).unwrap();

    assert_eq!(
        session.selection(),
        Some(&Selection {
            id: ChunkId::Int(8),
            text: "hello eight".to_string()
        })
    );
    assert_eq!(session.draft(), Some("hello eight"));
    assert_eq!(prompter.editor_inputs, vec!["hello seven", "hello eight"]);
}

#[test]
fn grid_pages_hold_four_per_row() {
    let chunks: Vec<Chunk> = (0..10).map(|i| chunk(i, &format!("needle {}", i))).collect();
    let ui = UiConfig {
        rows_per_page: 1,
        ..UiConfig::default()
    };
    let (context, _) = memory_context_with_ui(chunks, ui);
    let mut prompter = ScriptedPrompter::new(vec![
        Step::Keyword("needle"),
        Step::Pick("Next page"),
        Step::Pick("Next page"),
        Step::Pick("ID: 9 |"),
        Step::AbortEdit,
        Step::Pick("Back to results"),
        Step::Pick("Previous page"),
        Step::Pick("Quit"),
    ]);

    context.run_interactive(&mut prompter).unwrap();

    let grids = prompter.grids();
    assert!(grids[0].contains("ID: 3") && !grids[0].contains("ID: 4"));
    assert!(grids[0].ends_with("Page 1 of 3 (10 results)"));
    assert!(grids[1].contains("ID: 4") && grids[1].contains("ID: 7"));
    assert!(grids[2].contains("ID: 8") && grids[2].contains("ID: 9"));
    // Returning from the editor keeps the current page.
    assert!(grids[3].ends_with("Page 3 of 3 (10 results)"));
    assert!(grids[4].ends_with("Page 2 of 3 (10 results)"));
}
