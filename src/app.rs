use std::path::{Path, PathBuf};

use crate::core::{Entry, list_entries, parent_dir};
use crate::error::{AppError, AppResult};

pub trait EntryOpener {
    fn open(&mut self, path: &Path) -> AppResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Down,
    Up,
    Open,
    Parent,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Browsing position inside the tree under `root`.
///
/// `history` holds the cursor of every ancestor below `root`, so its length
/// is the current depth. `entries` is never empty.
#[derive(Debug, Clone)]
pub struct App {
    pub root: PathBuf,
    pub current_dir: PathBuf,
    pub entries: Vec<Entry>,
    pub cursor: usize,
    pub history: Vec<usize>,
}

impl App {
    pub fn new(root: PathBuf, entries: Vec<Entry>) -> Self {
        Self {
            current_dir: root.clone(),
            root,
            entries,
            cursor: 0,
            history: Vec::new(),
        }
    }

    pub fn load(root: PathBuf) -> AppResult<Self> {
        let root = std::path::absolute(&root)?;
        let entries = list_entries(&root);
        if entries.is_empty() {
            return Err(AppError::EmptyListing { path: root });
        }
        Ok(Self::new(root, entries))
    }

    pub fn apply(&mut self, command: Command, opener: &mut dyn EntryOpener) -> AppResult<Flow> {
        match command {
            Command::Down => self.move_cursor_down(),
            Command::Up => self.move_cursor_up(),
            Command::Open => self.open_selected(opener)?,
            Command::Parent => self.move_to_parent()?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    pub fn move_cursor_up(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor + 1 >= self.entries.len() {
            return;
        }
        self.cursor += 1;
    }

    pub fn open_selected(&mut self, opener: &mut dyn EntryOpener) -> AppResult<()> {
        let Some(selected) = self.selected_entry() else {
            return Ok(());
        };
        let target = self.current_dir.join(&selected.name);
        if selected.is_dir {
            self.enter_dir(target);
            return Ok(());
        }
        opener.open(&target)
    }

    // An empty child listing leaves everything untouched.
    fn enter_dir(&mut self, target: PathBuf) {
        let entries = list_entries(&target);
        if entries.is_empty() {
            log::debug!("not entering empty directory {}", target.display());
            return;
        }
        log::debug!("entering {}", target.display());
        self.history.push(self.cursor);
        self.entries = entries;
        self.current_dir = target;
        self.cursor = 0;
    }

    pub fn move_to_parent(&mut self) -> AppResult<()> {
        let Some(&saved_cursor) = self.history.last() else {
            return Ok(());
        };
        let parent = parent_dir(&self.current_dir)
            .ok_or_else(|| AppError::InvalidPath {
                path: self.current_dir.clone(),
            })?
            .to_path_buf();
        let entries = list_entries(&parent);
        if entries.is_empty() {
            return Err(AppError::EmptyListing { path: parent });
        }
        log::debug!("leaving for {}", parent.display());
        self.history.pop();
        self.cursor = saved_cursor.min(entries.len() - 1);
        self.entries = entries;
        self.current_dir = parent;
        Ok(())
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.entries.get(self.cursor)
    }

    /// Current directory with the `root` prefix stripped: empty at root,
    /// `/a/b` below it.
    pub fn relative_dir(&self) -> String {
        let relative = self
            .current_dir
            .strip_prefix(&self.root)
            .unwrap_or(&self.current_dir);
        relative
            .components()
            .map(|component| format!("/{}", component.as_os_str().to_string_lossy()))
            .collect()
    }
}
