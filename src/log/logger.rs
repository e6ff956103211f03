use crate::log::{
    error::ConfigureError,
    file_sink::FileSink,
    log_level::LogLevel,
    log_msg::{LogMsg, Origin},
    log_sink::{FanOutSink, LogSink, StdoutSink},
    noop_log_sink::NoopLogSink,
    sink_flag::{Route, SinkFlag},
};

use std::{
    fmt, fs,
    panic::Location,
    path::{Path, PathBuf},
    sync::{
        Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard,
        atomic::{AtomicI32, Ordering},
    },
};

/// Frames between a direct `Logger` call and the code that made it.
pub const DEFAULT_CALL_DEPTH: i32 = 1;

/// Directory, relative to the working directory, that holds log files.
pub const DEFAULT_LOG_DIR: &str = "log";

/// File stem used when `configure` is given an empty name.
pub const DEFAULT_LOG_NAME: &str = "default";

const LOG_EXTENSION: &str = ".log";

/// Routing shared by every emission call. Replaced as a whole by `configure`.
struct State {
    sink: Arc<dyn LogSink>,
    route: Route,
    flag: SinkFlag,
    min_level: LogLevel,
    file: Option<Arc<FileSink>>,
    configured: bool,
}

impl State {
    fn unconfigured() -> Self {
        Self {
            sink: Arc::new(NoopLogSink),
            route: Route::Discard,
            flag: SinkFlag::NONE,
            min_level: LogLevel::Trace,
            file: None,
            configured: false,
        }
    }

    #[inline]
    fn emits(&self, level: LogLevel) -> bool {
        self.route != Route::Discard && level >= self.min_level
    }
}

/// Leveled logger writing to the console, a log file, both, or nowhere.
///
/// A new logger discards everything until [`configure`](Self::configure) is
/// called. Configuration can be repeated at any time; each call replaces the
/// previous sinks and threshold together.
///
/// # Architecture
///
/// 1. **Gate**: a call below the threshold (or on a discarding logger)
///    returns before its arguments are formatted.
/// 2. **Render**: the record becomes one line: tag, date, time, `file:line`
///    and the message.
/// 3. **Write**: the gate is checked again and the line goes to the active
///    sink in one write while the routing read lock is held, so `configure`
///    never races a write. No lock is held while arguments are formatted.
///
/// # Example
///
/// ```rust,no_run
/// use lvlog::{LogLevel, Logger, SinkFlag};
///
/// let logger = Logger::new();
/// logger.configure("app", SinkFlag::CONSOLE_FILE, LogLevel::Info);
/// logger.info(format_args!("listening on port {}", 8080));
/// logger.trace(format_args!("suppressed"));
/// ```
pub struct Logger {
    state: RwLock<State>,
    call_depth: AtomicI32,
    console: Arc<dyn LogSink>,
    log_dir: PathBuf,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read_state();
        f.debug_struct("Logger")
            .field("flag", &state.flag)
            .field("min_level", &state.min_level)
            .field("configured", &state.configured)
            .field("call_depth", &self.call_depth())
            .field("log_dir", &self.log_dir)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Creates an unconfigured logger writing nowhere.
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::default().build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Selects the sinks and threshold, replacing any previous configuration.
    ///
    /// `name` is the log file stem used when `flag` has the file bit set; an
    /// empty name becomes `default` and a missing `.log` extension is added.
    /// The file lives in the logger's log directory, which is created on
    /// demand.
    ///
    /// Setup failures never reach the caller. They are reported on standard
    /// error and the file half of the route discards its output. Use
    /// [`try_configure`](Self::try_configure) to observe them.
    pub fn configure(&self, name: &str, flag: impl Into<SinkFlag>, level: LogLevel) {
        let flag = flag.into();
        if flag == SinkFlag::NONE {
            eprintln!("lvlog: log flag is none, there is nothing to output");
        }
        for err in self.apply(name, flag, level) {
            eprintln!("lvlog: {err}");
        }
    }

    /// Same state transition as [`configure`](Self::configure), but returns the
    /// first setup error instead of printing it.
    ///
    /// The new sinks and threshold are installed even when an error is
    /// returned.
    ///
    /// # Errors
    /// - [`ConfigureError::CreateDir`] when the log directory cannot be created.
    /// - [`ConfigureError::OpenFile`] when the log file cannot be opened.
    pub fn try_configure(
        &self,
        name: &str,
        flag: impl Into<SinkFlag>,
        level: LogLevel,
    ) -> Result<(), ConfigureError> {
        match self.apply(name, flag.into(), level).into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn apply(&self, name: &str, flag: SinkFlag, level: LogLevel) -> Vec<ConfigureError> {
        let mut errors = Vec::new();

        let file = if flag.wants_file() {
            match self.open_log_file(name, &mut errors) {
                Ok(sink) => Some(Arc::new(sink)),
                Err(err) => {
                    errors.push(err);
                    None
                }
            }
        } else {
            None
        };

        // A file that failed to open still occupies its half of the route.
        let file_out: Arc<dyn LogSink> = match &file {
            Some(f) => f.clone(),
            None => Arc::new(NoopLogSink),
        };
        let route = flag.route();
        let sink: Arc<dyn LogSink> = match route {
            Route::Discard => Arc::new(NoopLogSink),
            Route::Console => self.console.clone(),
            Route::File => file_out,
            Route::ConsoleAndFile => {
                Arc::new(FanOutSink::new(vec![self.console.clone(), file_out]))
            }
        };

        let mut state = self.write_state();
        *state = State {
            sink,
            route,
            flag,
            min_level: level,
            file,
            configured: true,
        };

        errors
    }

    /// Creates the log directory if needed and opens `<dir>/<name>.log`.
    /// A directory failure is recorded and the open is still attempted.
    fn open_log_file(
        &self,
        name: &str,
        errors: &mut Vec<ConfigureError>,
    ) -> Result<FileSink, ConfigureError> {
        if let Err(source) = fs::create_dir_all(&self.log_dir) {
            errors.push(ConfigureError::CreateDir {
                path: self.log_dir.clone(),
                source,
            });
        }

        let path = self.log_dir.join(log_file_name(name));
        FileSink::open(&path).map_err(|source| ConfigureError::OpenFile { path, source })
    }

    /// Sets how many frames above the emission point the recorded `file:line`
    /// comes from. `0` records the logger's own emission site, a negative
    /// depth records `???:0`. Any positive depth resolves to the caller.
    ///
    /// Depths beyond the first caller cannot be resolved, so raising the depth
    /// does not skip a logging wrapper. Mark such wrappers `#[track_caller]`
    /// instead; their callers are then recorded.
    pub fn set_call_depth(&self, depth: i32) {
        self.call_depth.store(depth, Ordering::Relaxed);
    }

    #[must_use]
    pub fn call_depth(&self) -> i32 {
        self.call_depth.load(Ordering::Relaxed)
    }

    /// Current threshold.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.read_state().min_level
    }

    #[must_use]
    pub fn sink_flag(&self) -> SinkFlag {
        self.read_state().flag
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.read_state().configured
    }

    /// Whether a record at `level` would currently produce output.
    #[must_use]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.read_state().emits(level)
    }

    /// Path of the open log file, when the file sink is active.
    #[must_use]
    pub fn log_file(&self) -> Option<PathBuf> {
        self.read_state()
            .file
            .as_ref()
            .map(|f| f.path().to_path_buf())
    }

    #[must_use]
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    #[track_caller]
    pub fn trace(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Trace, args, Location::caller());
    }

    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Info, args, Location::caller());
    }

    #[track_caller]
    pub fn warning(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Warning, args, Location::caller());
    }

    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Error, args, Location::caller());
    }

    /// Emits a record at an arbitrary level.
    #[track_caller]
    pub fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.emit(level, args, Location::caller());
    }

    fn emit(&self, level: LogLevel, args: fmt::Arguments<'_>, caller: &'static Location<'static>) {
        if !self.read_state().emits(level) {
            return;
        }

        let origin = match self.call_depth() {
            d if d < 0 => Origin::Unknown,
            0 => Origin::from_location(Location::caller()),
            _ => Origin::from_location(caller),
        };
        // No lock while user `Display` impls run: they may log themselves.
        let line = LogMsg::new(level, args, origin).render();

        let state = self.read_state();
        if state.emits(level) {
            state.sink.write_line(&line);
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Builder for loggers that need a non-default console, directory or depth.
#[derive(Default)]
pub struct LoggerBuilder {
    console: Option<Arc<dyn LogSink>>,
    log_dir: Option<PathBuf>,
    call_depth: Option<i32>,
}

impl LoggerBuilder {
    /// Replaces standard output as the console destination.
    #[must_use]
    pub fn console_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.console = Some(sink);
        self
    }

    /// Directory for log files, `log` under the working directory by default.
    #[must_use]
    pub fn log_dir<D: AsRef<Path>>(mut self, dir: D) -> Self {
        self.log_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn call_depth(mut self, depth: i32) -> Self {
        self.call_depth = Some(depth);
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            state: RwLock::new(State::unconfigured()),
            call_depth: AtomicI32::new(self.call_depth.unwrap_or(DEFAULT_CALL_DEPTH)),
            console: self.console.unwrap_or_else(|| Arc::new(StdoutSink)),
            log_dir: self
                .log_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR)),
        }
    }
}

/// `""` -> `default.log`, `app` -> `app.log`, `app.log` unchanged.
fn log_file_name(name: &str) -> String {
    let name = if name.is_empty() { DEFAULT_LOG_NAME } else { name };
    if name.ends_with(LOG_EXTENSION) {
        name.to_owned()
    } else {
        format!("{name}{LOG_EXTENSION}")
    }
}
