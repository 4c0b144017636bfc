//!
//! The gas report harness runner.
//!

pub mod error;


use std::io::Read;
use std::path::PathBuf;
use std::process::Child;
use std::process::ExitStatus;
use std::process::Stdio;
use std::sync::mpsc::Receiver;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use std::time::Instant;

use crate::report::format::Format as ReportFormat;

use self::error::Error;

///
/// The gas report harness runner.
///
/// Runs an external build tool with gas reporting enabled, persists its standard output
/// verbatim and returns it.
///
#[derive(Debug, Clone)]
pub struct Harness {
    /// The program name as given by the user.
    program: String,
    /// The resolved executable path.
    executable: PathBuf,
    /// The program arguments.
    arguments: Vec<String>,
    /// The time the process is allowed to run.
    timeout: Duration,
    /// Where the raw standard output is persisted.
    raw_output_path: PathBuf,
}

impl Harness {
    /// The default harness program.
    pub const DEFAULT_PROGRAM: &'static str = "forge";

    /// The default harness arguments.
    pub const DEFAULT_ARGUMENTS: [&'static str; 2] = ["test", "--gas-report"];

    /// The harness argument switching the report to JSON.
    pub const JSON_ARGUMENT: &'static str = "--json";

    /// The default raw output path.
    pub const DEFAULT_RAW_OUTPUT_PATH: &'static str = "gas-report.json";

    /// The default timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

    /// How often the process status is polled.
    const POLL_INTERVAL: Duration = Duration::from_millis(20);

    ///
    /// A shortcut constructor.
    ///
    /// Fails if `program` cannot be resolved in `${PATH}`.
    ///
    pub fn new(
        program: String,
        arguments: Vec<String>,
        timeout: Duration,
        raw_output_path: PathBuf,
    ) -> Result<Self, Error> {
        let executable = which::which(program.as_str()).map_err(|error| Error::NotFound {
            program: program.clone(),
            error,
        })?;
        Ok(Self {
            program,
            executable,
            arguments,
            timeout,
            raw_output_path,
        })
    }

    ///
    /// Returns the harness arguments for the given report format.
    ///
    /// The JSON format requires [`Self::JSON_ARGUMENT`], which is appended unless present.
    ///
    pub fn arguments_for(report_format: ReportFormat, mut arguments: Vec<String>) -> Vec<String> {
        if report_format == ReportFormat::Json
            && !arguments
                .iter()
                .any(|argument| argument == Self::JSON_ARGUMENT)
        {
            arguments.push(Self::JSON_ARGUMENT.to_owned());
        }
        arguments
    }

    ///
    /// Runs the harness and returns its standard output.
    ///
    /// The timeout covers the whole run, including the processes spawned by the harness
    /// which keep its output streams open. The output is written to the raw output path
    /// before the exit status is checked.
    ///
    pub fn run(&self) -> Result<String, Error> {
        let mut command = std::process::Command::new(self.executable.as_path());
        command
            .args(self.arguments.as_slice())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        #[cfg(unix)]
        std::os::unix::process::CommandExt::process_group(&mut command, 0);
        let mut process = command.spawn().map_err(|error| Error::Spawning {
            program: self.program.clone(),
            error,
        })?;
        let deadline = Instant::now().checked_add(self.timeout);

        let stdout_reader = Self::drain(process.stdout.take());
        let stderr_reader = Self::drain(process.stderr.take());

        let status = self.wait(&mut process, deadline)?;

        let stdout = self.collect(&mut process, &stdout_reader, "stdout", deadline)?;
        let stderr = self.collect(&mut process, &stderr_reader, "stderr", deadline)?;

        std::fs::write(self.raw_output_path.as_path(), stdout.as_bytes()).map_err(|error| {
            Error::Writing {
                path: self.raw_output_path.clone(),
                error,
            }
        })?;

        if !status.success() {
            return Err(Error::ExitStatus {
                program: self.program.clone(),
                status,
                stderr: stderr.trim().to_owned(),
            });
        }
        Ok(stdout)
    }

    ///
    /// Returns the raw output path.
    ///
    pub fn raw_output_path(&self) -> &std::path::Path {
        self.raw_output_path.as_path()
    }

    ///
    /// Waits for the process to exit, killing its process group once the deadline passes.
    ///
    fn wait(&self, process: &mut Child, deadline: Option<Instant>) -> Result<ExitStatus, Error> {
        loop {
            let status = process.try_wait().map_err(|error| Error::Waiting {
                program: self.program.clone(),
                error,
            })?;
            if let Some(status) = status {
                return Ok(status);
            }

            if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                Self::kill(process);
                return Err(self.timeout_error());
            }
            std::thread::sleep(Self::POLL_INTERVAL);
        }
    }

    ///
    /// Reads a child stream to the end on a separate thread, so that neither pipe fills up
    /// while the other one is being waited on.
    ///
    fn drain<R>(stream: Option<R>) -> Receiver<std::io::Result<Vec<u8>>>
    where
        R: Read + Send + 'static,
    {
        let (sender, receiver) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let mut buffer = Vec::new();
            let result = match stream {
                Some(mut stream) => stream.read_to_end(&mut buffer).map(|_| buffer),
                None => Ok(buffer),
            };
            let _ = sender.send(result);
        });
        receiver
    }

    ///
    /// Receives a stream reader output and decodes it.
    ///
    /// The stream stays open while any process of the group holds it, so the deadline
    /// applies here as well.
    ///
    fn collect(
        &self,
        process: &mut Child,
        reader: &Receiver<std::io::Result<Vec<u8>>>,
        stream: &'static str,
        deadline: Option<Instant>,
    ) -> Result<String, Error> {
        let received = match deadline {
            Some(deadline) => {
                reader.recv_timeout(deadline.saturating_duration_since(Instant::now()))
            }
            None => reader.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };
        let bytes = match received {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => {
                Self::kill(process);
                return Err(self.timeout_error());
            }
            Err(RecvTimeoutError::Disconnected) => {
                Err(std::io::Error::other("the reader thread panicked"))
            }
        }
        .map_err(|error| Error::Reading {
            program: self.program.clone(),
            stream,
            error,
        })?;
        Ok(String::from_utf8_lossy(bytes.as_slice()).into_owned())
    }

    ///
    /// Kills the process together with its process group and reaps it.
    ///
    fn kill(process: &mut Child) {
        #[cfg(unix)]
        if let Ok(process_group) = libc::pid_t::try_from(process.id()) {
            // SAFETY: a negative PID addresses the process group created at spawn.
            unsafe {
                libc::kill(-process_group, libc::SIGKILL);
            }
        }
        let _ = process.kill();
        let _ = process.wait();
    }

    ///
    /// Returns the timeout error.
    ///
    fn timeout_error(&self) -> Error {
        Error::Timeout {
            program: self.program.clone(),
            timeout: self.timeout,
        }
    }
}

impl std::fmt::Display for Harness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for argument in self.arguments.iter() {
            write!(f, " {argument}")?;
        }
        Ok(())
    }
}
