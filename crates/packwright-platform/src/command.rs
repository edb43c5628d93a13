//! Thin process builder used to spawn elevation helpers.

use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::process::{Command as StdCommand, Output};

#[derive(Debug)]
pub struct Command {
    inner:   StdCommand,
    program: String,
}

impl Command {
    pub fn new(program: impl Into<String>) -> Self {
        let program = program.into();
        Self {
            inner: StdCommand::new(&program),
            program,
        }
    }

    /// Resolves `program` through `PATH` before building the command.
    pub fn which(program: &str) -> Result<Self> {
        let path = which::which(program).map_err(|_| Error::CommandNotFound {
            cmd: program.to_string(),
        })?;
        let mut cmd = Self::new(program);
        cmd.inner = StdCommand::new(path);
        Ok(cmd)
    }

    pub fn program(&self) -> &str { &self.program }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.inner.arg(arg);
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.inner.args(args);
        self
    }

    pub fn env<K, V>(mut self, key: K, val: V) -> Self
    where
        K: AsRef<OsStr>,
        V: AsRef<OsStr>,
    {
        self.inner.env(key, val);
        self
    }

    pub fn get_args(&self) -> impl Iterator<Item = &OsStr> { self.inner.get_args() }

    pub fn output(&mut self) -> Result<Output> {
        self.inner.output().map_err(|e| Error::CommandFailed {
            cmd: self.program.clone(),
            source: e,
        })
    }

    /// Runs the command to completion and returns its exit code.
    pub fn exit_code(&mut self) -> Result<i32> {
        let status = self.inner.status().map_err(|e| Error::CommandFailed {
            cmd: self.program.clone(),
            source: e,
        })?;
        status.code().ok_or_else(|| Error::Terminated {
            cmd: self.program.clone(),
        })
    }
}
