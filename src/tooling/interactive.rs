//! Interactive session: keyword prompt, paginated result grid, edit and save.
//!
//! The loop is written against the [`Prompter`] trait so it can run on a
//! terminal through `dialoguer` or on a scripted prompter in tests.

use crate::config::UiConfig;
use crate::error::ApiError;
use crate::search::{SearchOutcome, SearchService};
use crate::session::Session;
use crate::store::ChunkStore;
use crate::tooling::grid::{menu_label, ResultGrid};
use crate::types::Chunk;
use owo_colors::OwoColorize;
use tracing::debug;

/// Something to show the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Grid(String),
    Success(String),
    Failure(String),
}

/// Terminal interaction primitives.
pub trait Prompter {
    /// Read the next keyword. `None` ends the session.
    fn keyword(&mut self, previous: &str) -> Result<Option<String>, ApiError>;

    /// Pick one of `items`. `None` means the menu was dismissed.
    fn choose(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>, ApiError>;

    /// Edit `text`. `None` means the edit was aborted.
    fn edit(&mut self, text: &str) -> Result<Option<String>, ApiError>;

    fn confirm(&mut self, prompt: &str) -> Result<bool, ApiError>;

    fn show(&mut self, notice: Notice);
}

/// [`Prompter`] on the real terminal.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn keyword(&mut self, previous: &str) -> Result<Option<String>, ApiError> {
        use dialoguer::Input;
        use std::io::IsTerminal;

        // Piped input: one keyword per line until end of input.
        if !std::io::stdin().is_terminal() {
            return read_keyword_line(&mut std::io::stdin().lock());
        }

        let result: Result<String, dialoguer::Error> = Input::new()
            .with_prompt("Keyword (Ctrl-C to quit)")
            .with_initial_text(previous)
            .allow_empty(true)
            .interact_text();
        keyword_from_prompt(result)
    }

    fn choose(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>, ApiError> {
        use dialoguer::Select;
        use std::io::IsTerminal;

        // Without a terminal the grid is display-only; go back to the keyword.
        if !std::io::stdin().is_terminal() {
            return Ok(None);
        }

        Ok(Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()?)
    }

    fn edit(&mut self, text: &str) -> Result<Option<String>, ApiError> {
        use dialoguer::Editor;

        Editor::new()
            .extension(".txt")
            .require_save(true)
            .trim_newlines(false)
            .edit(text)
            .map_err(|e| ApiError::InputError(format!("Failed to open editor: {}", e)))
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, ApiError> {
        use dialoguer::Confirm;

        Ok(Confirm::new().with_prompt(prompt).default(true).interact()?)
    }

    fn show(&mut self, notice: Notice) {
        match notice {
            Notice::Info(text) | Notice::Grid(text) => println!("{}", text),
            Notice::Success(text) => println!("{}", text.green()),
            Notice::Failure(text) => eprintln!("{}", text.red()),
        }
    }
}

/// Map the keyword prompt result; an interrupt or end of input ends the session.
fn keyword_from_prompt(
    result: Result<String, dialoguer::Error>,
) -> Result<Option<String>, ApiError> {
    match result {
        Ok(keyword) => Ok(Some(keyword)),
        Err(dialoguer::Error::IO(e))
            if matches!(
                e.kind(),
                std::io::ErrorKind::Interrupted | std::io::ErrorKind::UnexpectedEof
            ) =>
        {
            Ok(None)
        }
        Err(e) => Err(ApiError::from(e)),
    }
}

/// Read one keyword line. `None` at end of input.
fn read_keyword_line<R: std::io::BufRead>(reader: &mut R) -> Result<Option<String>, ApiError> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|e| ApiError::InputError(format!("Failed to read keyword: {}", e)))?;
    if read == 0 {
        return Ok(None);
    }
    let kept = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(kept);
    Ok(Some(line))
}

enum Flow {
    Back,
    NewSearch,
    Quit,
}

enum GridAction {
    Activate(Chunk),
    NextPage,
    PreviousPage,
    NewSearch,
    Quit,
}

const EDIT_MENU: [&str; 4] = ["Save changes", "Edit again", "Back to results", "Quit"];

/// Runs the search-select-edit-save loop until the operator quits.
pub struct InteractiveRunner<'a> {
    search: SearchService,
    store: &'a dyn ChunkStore,
    ui: &'a UiConfig,
}

impl<'a> InteractiveRunner<'a> {
    pub fn new(search: SearchService, store: &'a dyn ChunkStore, ui: &'a UiConfig) -> Self {
        Self { search, store, ui }
    }

    /// Run to completion, returning the final session state.
    pub fn run(&self, prompter: &mut dyn Prompter) -> Result<Session, ApiError> {
        let mut session = Session::new();
        while let Some(keyword) = prompter.keyword(session.keyword())? {
            session.on_keyword_change(&keyword);
            match self.search.search(&keyword) {
                Ok(SearchOutcome::NoQuery) => {
                    session.record_results(SearchOutcome::NoQuery);
                    prompter.show(Notice::Info("Enter a keyword to search.".to_string()));
                    continue;
                }
                Ok(outcome) => {
                    session.record_results(outcome);
                }
                Err(e) => {
                    prompter.show(Notice::Failure(format!(
                        "Search failed ({}): {}",
                        e.kind(),
                        e
                    )));
                    continue;
                }
            }

            if session.results().is_empty() {
                prompter.show(Notice::Info(format!(
                    "No chunks found for '{}'.",
                    keyword
                )));
                continue;
            }
            prompter.show(Notice::Info(format!(
                "Found {} chunks for '{}'. Select a chunk:",
                session.results().len(),
                keyword
            )));

            if let Flow::Quit = self.browse(&mut session, prompter)? {
                break;
            }
        }
        Ok(session)
    }

    fn browse(&self, session: &mut Session, prompter: &mut dyn Prompter) -> Result<Flow, ApiError> {
        let mut page = 0;
        loop {
            let (labels, actions) = {
                let grid = ResultGrid::new(session.results(), self.ui);
                page = page.min(grid.page_count().saturating_sub(1));
                prompter.show(Notice::Grid(grid.render_page(page)));

                let mut labels = Vec::new();
                let mut actions = Vec::new();
                for chunk in grid.page(page) {
                    labels.push(menu_label(chunk, grid.preview_length()));
                    actions.push(GridAction::Activate(chunk.clone()));
                }
                if page + 1 < grid.page_count() {
                    labels.push("Next page".to_string());
                    actions.push(GridAction::NextPage);
                }
                if page > 0 {
                    labels.push("Previous page".to_string());
                    actions.push(GridAction::PreviousPage);
                }
                labels.push("New search".to_string());
                actions.push(GridAction::NewSearch);
                labels.push("Quit".to_string());
                actions.push(GridAction::Quit);
                (labels, actions)
            };

            let choice = prompter.choose("Select a chunk", &labels)?;
            let Some(action) = choice.and_then(|i| actions.into_iter().nth(i)) else {
                return Ok(Flow::NewSearch);
            };
            match action {
                GridAction::Activate(chunk) => {
                    debug!(chunk_id = %chunk.id, "Result activated");
                    session.on_result_activated(chunk.id, chunk.text);
                    if let Flow::Quit = self.edit_selected(session, prompter)? {
                        return Ok(Flow::Quit);
                    }
                }
                GridAction::NextPage => page += 1,
                GridAction::PreviousPage => page = page.saturating_sub(1),
                GridAction::NewSearch => return Ok(Flow::NewSearch),
                GridAction::Quit => return Ok(Flow::Quit),
            }
        }
    }

    /// Edit loop for the selected chunk. Returns `Back` to go back to the
    /// result grid.
    fn edit_selected(
        &self,
        session: &mut Session,
        prompter: &mut dyn Prompter,
    ) -> Result<Flow, ApiError> {
        let Some(selection) = session.selection().cloned() else {
            return Ok(Flow::Back);
        };
        prompter.show(Notice::Info(format!(
            "Selected chunk ID: {}\n\n{}",
            selection.id, selection.text
        )));
        self.open_editor(session, prompter)?;

        let items: Vec<String> = EDIT_MENU.iter().map(|s| s.to_string()).collect();
        loop {
            let prompt = format!("Chunk {}", selection.id);
            match prompter.choose(&prompt, &items)? {
                Some(0) => {
                    let draft_len = session.draft().map_or(0, |d| d.chars().count());
                    let question = format!(
                        "Write {} characters to chunk {}?",
                        draft_len, selection.id
                    );
                    if !prompter.confirm(&question)? {
                        continue;
                    }
                    match session.save(self.store) {
                        Ok(receipt) => prompter.show(Notice::Success(format!(
                            "Chunk {} updated.",
                            receipt.id
                        ))),
                        Err(e) => prompter.show(Notice::Failure(format!(
                            "Save failed for chunk {} ({}): {}",
                            selection.id,
                            e.kind(),
                            e
                        ))),
                    }
                }
                Some(1) => self.open_editor(session, prompter)?,
                Some(3) => return Ok(Flow::Quit),
                _ => return Ok(Flow::Back),
            }
        }
    }

    fn open_editor(&self, session: &mut Session, prompter: &mut dyn Prompter) -> Result<(), ApiError> {
        let draft = session.draft().unwrap_or_default().to_string();
        match prompter.edit(&draft)? {
            Some(edited) => session.set_draft(edited),
            None => {
                prompter.show(Notice::Info("Edit aborted; draft unchanged.".to_string()));
                Ok(())
            }
        }
    }
}
