//! Test doubles for the resolver, input and command runner seams

use crate::executor::{Command, CommandError, CommandRunner};
use crate::infrastructure::{Input, InputError};
use crate::pipeline::{PipelineDocument, PipelineResolver, ResolveError};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Resolver serving fixed documents and recording every request
#[derive(Default)]
pub struct StaticResolver {
    documents: HashMap<PathBuf, PipelineDocument>,
    calls: RefCell<Vec<PathBuf>>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: impl Into<PathBuf>, yaml: &str) -> Self {
        let document = PipelineDocument::from_yaml_str(yaml).unwrap();
        self.documents.insert(path.into(), document);
        self
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.borrow().clone()
    }
}

impl PipelineResolver for StaticResolver {
    fn resolve(&self, path: &Path) -> Result<PipelineDocument, ResolveError> {
        self.calls.borrow_mut().push(path.to_path_buf());
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| ResolveError::NotFound {
                path: path.to_path_buf(),
            })
    }
}

/// Input answering prompts from a queue; an exhausted queue cancels
#[derive(Default)]
pub struct ScriptedInput {
    answers: RefCell<VecDeque<String>>,
    prompts: RefCell<Vec<(String, Vec<String>)>>,
}

impl ScriptedInput {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(ToString::to_string).collect()),
            prompts: RefCell::new(Vec::new()),
        }
    }

    /// Prompt messages and the candidates offered with each
    pub fn prompts(&self) -> Vec<(String, Vec<String>)> {
        self.prompts.borrow().clone()
    }
}

impl Input for ScriptedInput {
    fn pick_name_with_default(
        &self,
        names: &[String],
        message: &str,
        _default: &str,
        _help: &str,
    ) -> Result<String, InputError> {
        self.prompts
            .borrow_mut()
            .push((message.to_string(), names.to_vec()));
        Ok(self.answers.borrow_mut().pop_front().unwrap_or_default())
    }
}

/// Runner capturing commands instead of executing them
#[derive(Default)]
pub struct RecordingRunner {
    commands: RefCell<Vec<Command>>,
    fail: bool,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn commands(&self) -> Vec<Command> {
        self.commands.borrow().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &Command) -> Result<(), CommandError> {
        self.commands.borrow_mut().push(command.clone());
        if self.fail {
            return Err(CommandError::Spawn {
                name: command.name.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            });
        }
        Ok(())
    }
}

/// Shared buffer that log output is written into
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    /// Captured output with any terminal styling removed
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap().clone();
        console::strip_ansi_codes(&String::from_utf8_lossy(&bytes)).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a thread-local subscriber and returns its result and the log lines
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer.contents())
}

/// Writes `content` to `root/relative`, creating parent directories
pub fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

pub const PR_PIPELINE: &str = "apiVersion: tekton.dev/v1beta1
kind: PipelineRun
metadata:
  name: pr
spec:
  pipelineSpec:
    tasks:
    - name: from-build-pack
      taskSpec:
        steps:
        - name: build
          image: golang:1.21
          script: make build
";

pub const RELEASE_PIPELINE: &str = "apiVersion: tekton.dev/v1beta1
kind: PipelineRun
metadata:
  name: release
spec:
  pipelineSpec:
    tasks:
    - name: from-build-pack
      taskSpec:
        steps:
        - name: promote
          image: golang:1.21
          script: make release
";

pub const PR_TRIGGERS: &str = "apiVersion: config.lighthouse.jenkins-x.io/v1alpha1
kind: TriggerConfig
spec:
  presubmits:
  - name: pr
    context: pr
    always_run: true
    source: pullrequest.yaml
";

pub const JX_TRIGGERS: &str = "apiVersion: config.lighthouse.jenkins-x.io/v1alpha1
kind: TriggerConfig
spec:
  presubmits:
  - name: pr
    source: pullrequest.yaml
  - name: lint
    pipelineRunSpec:
      params: []
  postsubmits:
  - name: release
    source: release.yaml
";
