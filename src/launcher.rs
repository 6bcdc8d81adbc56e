use std::path::Path;
use std::process::{Command, ExitStatus};

use crate::app::EntryOpener;
use crate::config::ExtensionMap;
use crate::core::extname;
use crate::error::AppResult;

/// Exclusive owner of the terminal that can hand it to a child process.
pub trait Screen {
    fn release(&mut self) -> AppResult<()>;
    fn acquire(&mut self) -> AppResult<()>;
}

pub trait Spawner {
    fn spawn_and_wait(&self, program: &Path, file: &Path) -> std::io::Result<ExitStatus>;
}

pub struct ProcessSpawner;

impl Spawner for ProcessSpawner {
    fn spawn_and_wait(&self, program: &Path, file: &Path) -> std::io::Result<ExitStatus> {
        Command::new(program).arg(file).status()
    }
}

pub struct Launcher<S: Spawner = ProcessSpawner> {
    extensions: ExtensionMap,
    spawner: S,
}

impl Launcher {
    pub fn new(extensions: ExtensionMap) -> Self {
        Self::with_spawner(extensions, ProcessSpawner)
    }
}

impl<S: Spawner> Launcher<S> {
    pub fn with_spawner(extensions: ExtensionMap, spawner: S) -> Self {
        Self {
            extensions,
            spawner,
        }
    }

    /// Runs the program mapped to the extension of `file`, if any, while
    /// `screen` is released. Unmapped extensions are ignored.
    pub fn launch(&self, file: &Path, screen: &mut dyn Screen) -> AppResult<()> {
        let name = file
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();
        let Some(program) = self.extensions.program_for(extname(&name)) else {
            log::debug!("no program mapped for {}", file.display());
            return Ok(());
        };

        screen.release()?;
        log::info!("launching {} {}", program.display(), file.display());
        match self.spawner.spawn_and_wait(program, file) {
            Ok(status) => log::debug!("{} exited with {status}", program.display()),
            Err(error) => log::warn!("failed to run {}: {error}", program.display()),
        }
        screen.acquire()
    }
}

/// Adapter handing the screen to a [`Launcher`] for each opened file.
pub struct LaunchContext<'a, S: Spawner> {
    pub launcher: &'a Launcher<S>,
    pub screen: &'a mut dyn Screen,
}

impl<S: Spawner> EntryOpener for LaunchContext<'_, S> {
    fn open(&mut self, path: &Path) -> AppResult<()> {
        self.launcher.launch(path, &mut *self.screen)
    }
}
