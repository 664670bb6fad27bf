use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use chunkedit::config::{ChunkEditConfig, UiConfig};
use chunkedit::error::ApiError;
use chunkedit::store::MemoryChunkStore;
use chunkedit::tooling::cli::CliContext;
use chunkedit::tooling::interactive::{Notice, Prompter};
use chunkedit::types::{Chunk, ChunkId};

/// One scripted operator action.
pub enum Step {
    Keyword(&'static str),
    /// Pick the first menu item starting with this prefix.
    Pick(&'static str),
    Dismiss,
    Edit(&'static str),
    AbortEdit,
    Confirm(bool),
    /// Side effect between interactions, e.g. another process changing the graph.
    Run(Box<dyn FnOnce()>),
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Keyword(k) => write!(f, "Keyword({:?})", k),
            Step::Pick(p) => write!(f, "Pick({:?})", p),
            Step::Dismiss => write!(f, "Dismiss"),
            Step::Edit(t) => write!(f, "Edit({:?})", t),
            Step::AbortEdit => write!(f, "AbortEdit"),
            Step::Confirm(c) => write!(f, "Confirm({})", c),
            Step::Run(_) => write!(f, "Run(..)"),
        }
    }
}

/// Prompter that replays a fixed script and records what it was shown.
/// Running out of steps at the keyword prompt ends the session.
pub struct ScriptedPrompter {
    steps: VecDeque<Step>,
    pub notices: Vec<Notice>,
    pub editor_inputs: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: steps.into(),
            notices: Vec::new(),
            editor_inputs: Vec::new(),
        }
    }

    fn next_step(&mut self) -> Option<Step> {
        loop {
            match self.steps.pop_front() {
                Some(Step::Run(action)) => action(),
                other => return other,
            }
        }
    }

    pub fn successes(&self) -> Vec<&str> {
        self.notices
            .iter()
            .filter_map(|n| match n {
                Notice::Success(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn failures(&self) -> Vec<&str> {
        self.notices
            .iter()
            .filter_map(|n| match n {
                Notice::Failure(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn grids(&self) -> Vec<&str> {
        self.notices
            .iter()
            .filter_map(|n| match n {
                Notice::Grid(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn infos(&self) -> Vec<&str> {
        self.notices
            .iter()
            .filter_map(|n| match n {
                Notice::Info(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn is_exhausted(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Prompter for ScriptedPrompter {
    fn keyword(&mut self, _previous: &str) -> Result<Option<String>, ApiError> {
        match self.next_step() {
            Some(Step::Keyword(keyword)) => Ok(Some(keyword.to_string())),
            None => Ok(None),
            Some(other) => panic!("expected a keyword step, script has {:?}", other),
        }
    }

    fn choose(&mut self, _prompt: &str, items: &[String]) -> Result<Option<usize>, ApiError> {
        match self.next_step() {
            Some(Step::Pick(prefix)) => {
                let index = items
                    .iter()
                    .position(|item| item.starts_with(prefix))
                    .unwrap_or_else(|| panic!("no menu item starts with {:?}: {:?}", prefix, items));
                Ok(Some(index))
            }
            Some(Step::Dismiss) => Ok(None),
            other => panic!("expected a menu step, script has {:?}", other),
        }
    }

    fn edit(&mut self, text: &str) -> Result<Option<String>, ApiError> {
        self.editor_inputs.push(text.to_string());
        match self.next_step() {
            Some(Step::Edit(edited)) => Ok(Some(edited.to_string())),
            Some(Step::AbortEdit) => Ok(None),
            other => panic!("expected an edit step, script has {:?}", other),
        }
    }

    fn confirm(&mut self, _prompt: &str) -> Result<bool, ApiError> {
        match self.next_step() {
            Some(Step::Confirm(answer)) => Ok(answer),
            other => panic!("expected a confirm step, script has {:?}", other),
        }
    }

    fn show(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

pub fn chunk(id: i64, text: &str) -> Chunk {
    Chunk::new(ChunkId::Int(id), text)
}

pub fn memory_context(chunks: Vec<Chunk>) -> (CliContext, Arc<MemoryChunkStore>) {
    memory_context_with_ui(chunks, UiConfig::default())
}

pub fn memory_context_with_ui(
    chunks: Vec<Chunk>,
    ui: UiConfig,
) -> (CliContext, Arc<MemoryChunkStore>) {
    let store = Arc::new(MemoryChunkStore::with_chunks(chunks));
    let config = ChunkEditConfig {
        ui,
        ..ChunkEditConfig::default()
    };
    (CliContext::with_store(store.clone(), config), store)
}
