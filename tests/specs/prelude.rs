//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for testing cchell CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Environment variables that change cchell's output and must not leak in
/// from the developer's shell.
const SCRUBBED_ENV: &[&str] = &[
    "NO_COLOR",
    "COLOR",
    "CCHELL_CONFIG",
    "CCHELL_LOG",
    "CCHELL_LOG_FILE",
];

/// Returns the path to a binary, checking llvm-cov target directory first.
/// Falls back to assert_cmd's lookup relative to the test binary when
/// CARGO_MANIFEST_DIR is stale.
fn binary_path(name: &str) -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));

    let llvm_cov_path = manifest_dir.join("target/llvm-cov-target/debug").join(name);
    if llvm_cov_path.exists() {
        return llvm_cov_path;
    }

    let standard = manifest_dir.join("target/debug").join(name);
    if standard.exists() {
        return standard;
    }

    assert_cmd::cargo::cargo_bin(name)
}

/// Returns a Command configured to run the cchell binary
pub fn cchell_cmd() -> Command {
    Command::new(binary_path("cchell"))
}

/// Create a CLI builder for cchell
pub fn cli() -> CliBuilder {
    CliBuilder::new()
}

/// High-level CLI builder for fluent test assertions
pub struct CliBuilder {
    args: Vec<String>,
    dir: Option<PathBuf>,
    envs: Vec<(String, String)>,
    stdin: Option<String>,
}

impl CliBuilder {
    fn new() -> Self {
        Self {
            args: Vec::new(),
            dir: None,
            // Keep the user's config file out of the way.
            envs: vec![(
                "XDG_CONFIG_HOME".into(),
                "/nonexistent/cchell-specs".into(),
            )],
            stdin: None,
        }
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set working directory
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.envs.push((
            key.to_string(),
            value.as_ref().to_string_lossy().to_string(),
        ));
        self
    }

    /// Bytes fed to stdin. Without this, stdin is empty.
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    /// Build the command without running it
    pub fn command(&self) -> Command {
        let mut cmd = cchell_cmd();
        cmd.args(&self.args);

        if let Some(dir) = &self.dir {
            cmd.current_dir(dir);
        }
        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }

        cmd
    }

    fn output(self) -> Output {
        let mut cmd = assert_cmd::Command::from_std(self.command());
        cmd.write_stdin(self.stdin.unwrap_or_default());
        cmd.output().expect("command should run")
    }

    /// Run and expect success (exit code 0)
    pub fn passes(self) -> RunAssert {
        let output = self.output();
        assert!(
            output.status.success(),
            "expected command to pass, got exit code {:?}\nstdout: {}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    /// Run and expect failure (non-zero exit code)
    pub fn fails(self) -> RunAssert {
        let output = self.output();
        assert!(
            !output.status.success(),
            "expected command to fail, but it passed\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }
}

/// Result of a CLI run for chaining assertions
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert the exit code.
    pub fn code(self, expected: i32) -> Self {
        assert_eq!(
            self.output.status.code(),
            Some(expected),
            "unexpected exit code\nstdout: {}\nstderr: {}",
            self.stdout(),
            self.stderr()
        );
        self
    }

    /// Assert stdout equals expected exactly (with diff on failure).
    /// **Prefer this for format specs** - catches format regressions.
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = self.stdout();
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stderr equals expected exactly (with diff on failure).
    pub fn stderr_eq(self, expected: &str) -> Self {
        let stderr = self.stderr();
        similar_asserts::assert_eq!(stderr, expected);
        self
    }

    /// Assert stdout contains substring.
    /// Use when exact comparison isn't practical.
    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout does not contain '{}'\nstdout: {}",
            expected,
            stdout
        );
        self
    }

    /// Assert stderr contains substring.
    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr does not contain '{}'\nstderr: {}",
            expected,
            stderr
        );
        self
    }

    /// Assert stderr does not contain substring.
    pub fn stderr_lacks(self, unexpected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            !stderr.contains(unexpected),
            "stderr should not contain '{}'\nstderr: {}",
            unexpected,
            stderr
        );
        self
    }

    /// Parse stdout as JSON.
    pub fn stdout_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout()).expect("stdout should be JSON")
    }

    /// Parse stderr as JSON.
    pub fn stderr_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stderr()).expect("stderr should be JSON")
    }
}

// =============================================================================
// Bin
// =============================================================================

/// A temporary `$PATH` directory of shell-script programs, plus a working
/// directory for `./` commands.
pub struct Bin {
    bin: tempfile::TempDir,
    work: tempfile::TempDir,
}

impl Bin {
    /// A bin directory with the standard programs:
    ///
    /// - `greet ARGS...` prints `hello ARGS...`
    /// - `exit-with` exits with status `$CODE`
    /// - `show-env NAME` prints the value of `$NAME`
    pub fn standard() -> Self {
        let bin = Self {
            bin: tempfile::tempdir().unwrap(),
            work: tempfile::tempdir().unwrap(),
        };
        bin.program("greet", "echo hello \"$@\"");
        bin.program("exit-with", "exit \"$CODE\"");
        bin.program("show-env", "eval \"echo \\$$1\"");
        bin
    }

    /// The `$PATH` directory
    pub fn path(&self) -> &Path {
        self.bin.path()
    }

    /// The working directory
    pub fn work(&self) -> &Path {
        self.work.path()
    }

    /// Write an executable `#!/bin/sh` script into the `$PATH` directory
    pub fn program(&self, name: &str, body: &str) {
        write_script(&self.path().join(name), body, 0o755);
    }

    /// Write a script into the working directory with the given mode
    pub fn local(&self, name: &str, body: &str, mode: u32) {
        write_script(&self.work().join(name), body, mode);
    }

    /// Run cchell with this bin as `$PATH`, from the working directory
    pub fn cchell(&self) -> CliBuilder {
        cli().pwd(self.work()).env("PATH", self.path())
    }
}

fn write_script(path: &Path, body: &str, mode: u32) {
    use std::os::unix::fs::PermissionsExt;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode)).unwrap();
}
