//! Trigger discovery
//!
//! Scans `.lighthouse` directories for trigger folders, parses each
//! `triggers.yaml` and resolves every job that references a pipeline source.
//! Any failure aborts the whole load: selection needs the complete set.

use super::{
    JobKind, LIGHTHOUSE_DIR, LoadError, PipelineResolver, TRIGGERS_FILE, Trigger, TriggerConfig,
};
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Collects triggers from one or more `.lighthouse` directories
pub struct TriggerLoader<'r> {
    resolver: &'r dyn PipelineResolver,
    triggers: Vec<Trigger>,
}

impl<'r> TriggerLoader<'r> {
    /// Creates a loader that resolves pipelines with `resolver`
    #[must_use]
    pub fn new(resolver: &'r dyn PipelineResolver) -> Self {
        Self {
            resolver,
            triggers: Vec::new(),
        }
    }

    /// Loads triggers below `root`
    ///
    /// Without `recursive` only `<root>/.lighthouse` is scanned; otherwise
    /// every directory named `.lighthouse` in the tree is.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] naming the failing path.
    pub fn load(&mut self, root: &Path, recursive: bool) -> Result<(), LoadError> {
        if recursive {
            self.walk(root)
        } else {
            self.process_dir(&join(root, LIGHTHOUSE_DIR))
        }
    }

    /// Consumes the loader, returning the triggers
    #[must_use]
    pub fn into_triggers(self) -> Vec<Trigger> {
        self.triggers
    }

    fn walk(&mut self, dir: &Path) -> Result<(), LoadError> {
        if dir.file_name().is_some_and(|name| name == LIGHTHOUSE_DIR) {
            self.process_dir(dir)?;
        }
        for name in sub_dirs(dir)? {
            self.walk(&join(dir, &name))?;
        }
        Ok(())
    }

    /// Loads every trigger folder directly inside a `.lighthouse` directory
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the directory cannot be read or any
    /// trigger in it fails to load.
    pub fn process_dir(&mut self, dir: &Path) -> Result<(), LoadError> {
        debug!("scanning {}", dir.display());

        for name in sub_dirs(dir)? {
            if name.starts_with('.') {
                continue;
            }

            let trigger_dir = join(dir, &name);
            let triggers_file = trigger_dir.join(TRIGGERS_FILE);
            if !file_exists(&triggers_file)? {
                debug!("no {} in {}", TRIGGERS_FILE, trigger_dir.display());
                continue;
            }

            let config = load_config(&triggers_file)?;
            let mut trigger = Trigger::new(triggers_file, config);
            self.load_trigger_pipelines(&mut trigger, &trigger_dir)?;
            self.triggers.push(trigger);
        }
        Ok(())
    }

    fn load_trigger_pipelines(&self, trigger: &mut Trigger, dir: &Path) -> Result<(), LoadError> {
        let Trigger {
            path: trigger_path,
            config,
            ..
        } = &mut *trigger;

        let mut resolved = Vec::new();
        let groups = [
            (JobKind::Presubmit, &mut config.spec.presubmits),
            (JobKind::Postsubmit, &mut config.spec.postsubmits),
        ];
        for (kind, jobs) in groups {
            for job in jobs.iter_mut() {
                if job.has_source() {
                    let path = clean_path(&dir.join(&job.source_path));
                    let document =
                        self.resolver
                            .resolve(&path)
                            .map_err(|source| LoadError::LoadPipeline {
                                trigger: trigger_path.clone(),
                                path: path.clone(),
                                source,
                            })?;
                    debug!("resolved {} from {}", kind.qualify(&job.name), path.display());
                    resolved.push((kind.qualify(&job.name), document));
                }
                job.apply_default_agent();
            }
        }

        for (name, document) in resolved {
            trigger.insert_pipeline(name, document);
        }
        Ok(())
    }
}

/// Loads all triggers below `root` using `resolver`
///
/// # Errors
///
/// Returns a [`LoadError`] naming the failing path.
pub fn load_triggers(
    resolver: &dyn PipelineResolver,
    root: &Path,
    recursive: bool,
) -> Result<Vec<Trigger>, LoadError> {
    let mut loader = TriggerLoader::new(resolver);
    loader.load(root, recursive)?;
    Ok(loader.into_triggers())
}

/// Lexically normalizes `path`
///
/// Drops `.` components and folds `name/..` pairs; `..` at the root is
/// dropped and leading `..` of a relative path is kept. Symlinks are not
/// consulted. An empty result becomes `.`.
#[must_use]
pub fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => cleaned.push(".."),
            },
            other => cleaned.push(other),
        }
    }
    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}

/// Joins `name` onto `dir` and normalizes the result, so `.` as `dir` adds no `./`.
fn join(dir: &Path, name: &str) -> PathBuf {
    clean_path(&dir.join(name))
}

/// Names of the immediate subdirectories of `dir`, sorted. Symlinks are not followed.
fn sub_dirs(dir: &Path) -> Result<Vec<String>, LoadError> {
    let read_dir_err = |source| LoadError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        if entry.file_type().map_err(read_dir_err)?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

fn file_exists(path: &Path) -> Result<bool, LoadError> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(!metadata.is_dir()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(source) => Err(LoadError::Stat {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn load_config(path: &Path) -> Result<TriggerConfig, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::ReadTriggers {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| LoadError::ParseTriggers {
        path: path.to_path_buf(),
        source,
    })
}
