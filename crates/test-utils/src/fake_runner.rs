use std::collections::HashMap;
use std::ffi::OsStr;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use ku_release::errors::{KuError, Result};
use ku_release::exec::{CommandOutput, CommandRunner, CommandSpec, StdoutTarget};
use ku_release::fs::mock::MockFileSystem;

/// A fake command runner that:
/// - records every `CommandSpec` it was asked to run
/// - returns scripted stdout / exit codes keyed by program basename
/// - optionally materialises the files a real tool would have written
///   (`> file` redirects, `--out=<path>`, `-o <path>`) in a `MockFileSystem`.
#[derive(Clone, Default)]
pub struct FakeCommandRunner {
    calls: Arc<Mutex<Vec<CommandSpec>>>,
    stdout: HashMap<String, Vec<(Vec<String>, String)>>,
    exit_codes: HashMap<String, i32>,
    fs: Option<MockFileSystem>,
}

impl FakeCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write simulated outputs into `fs`.
    pub fn with_fs(mut self, fs: MockFileSystem) -> Self {
        self.fs = Some(fs);
        self
    }

    /// Reply with `stdout` when `program` is run with arguments starting with
    /// `args_prefix`. The first matching rule wins.
    pub fn with_stdout(mut self, program: &str, args_prefix: &[&str], stdout: &str) -> Self {
        self.stdout.entry(program.to_string()).or_default().push((
            args_prefix.iter().map(|s| s.to_string()).collect(),
            stdout.to_string(),
        ));
        self
    }

    /// Make every run of `program` exit with `code`.
    pub fn failing(mut self, program: &str, code: i32) -> Self {
        self.exit_codes.insert(program.to_string(), code);
        self
    }

    /// Canned git + meson answers for a `ku-1.0.3.abcdef` package.
    pub fn with_default_metadata(self) -> Self {
        self.with_stdout("git", &["rev-parse"], "abcdef\n")
            .with_stdout("git", &["rev-list"], "3\n")
            .with_stdout(
                "meson",
                &["introspect"],
                r#"{"version": "1.0", "descriptive_name": "ku"}"#,
            )
    }

    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.lock().unwrap().clone()
    }

    /// Program basenames in invocation order.
    pub fn programs(&self) -> Vec<String> {
        self.calls().iter().map(|c| key_of(&c.program)).collect()
    }

    fn scripted_stdout(&self, spec: &CommandSpec) -> String {
        self.stdout
            .get(&key_of(&spec.program))
            .and_then(|rules| {
                rules
                    .iter()
                    .find(|(prefix, _)| {
                        prefix.len() <= spec.args.len()
                            && prefix.iter().zip(&spec.args).all(|(want, got)| got == want.as_str())
                    })
                    .map(|(_, out)| out.clone())
            })
            .unwrap_or_default()
    }

    fn materialise(&self, spec: &CommandSpec, stdout: &str) {
        let Some(fs) = &self.fs else {
            return;
        };

        if let StdoutTarget::File(path) = &spec.stdout {
            fs.write(path, stdout.as_bytes());
        }

        for (i, arg) in spec.args.iter().enumerate() {
            if let Some(out) = arg.to_str().and_then(|a| a.strip_prefix("--out=")) {
                fs.write(Path::new(out), b"<testsuites/>");
            }
            if arg == "-o" {
                if let Some(out) = spec.args.get(i + 1) {
                    fs.write(&PathBuf::from(out), b"<svg/>");
                }
            }
        }
    }
}

fn key_of(program: &OsStr) -> String {
    Path::new(program)
        .file_name()
        .unwrap_or(program)
        .to_string_lossy()
        .into_owned()
}

impl CommandRunner for FakeCommandRunner {
    fn run(
        &self,
        spec: CommandSpec,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutput>> + Send + '_>> {
        Box::pin(async move {
            self.calls.lock().unwrap().push(spec.clone());

            let key = key_of(&spec.program);
            if let Some(code) = self.exit_codes.get(&key) {
                return Err(KuError::CommandFailed {
                    program: spec.program_name(),
                    code: Some(*code),
                });
            }

            let stdout = self.scripted_stdout(&spec);
            self.materialise(&spec, &stdout);

            let captured = match spec.stdout {
                StdoutTarget::Capture => stdout,
                _ => String::new(),
            };
            Ok(CommandOutput { stdout: captured })
        })
    }
}
