use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
    fs,
    io::{self, BufRead, Write},
    rc::Rc,
};

/// Everything the interpreter needs from the outside world.
///
/// Built-ins never touch stdin, stdout or the filesystem directly; they go
/// through the host the [`Interpreter`](crate::Interpreter) was created with.
pub trait Host {
    /// Writes `text` followed by a newline.
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Reads one line without its line terminator. `Ok(None)` means the
    /// input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Clears the screen.
    fn clear(&mut self) -> io::Result<()>;

    /// Loads the source text of the script `name`, as requested by `RUN`.
    fn load(&mut self, name: &str) -> io::Result<String>;
}

/// The process's own terminal and filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdHost;

impl Host for StdHost {
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{text}")
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn clear(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "\x1B[2J\x1B[1;1H")?;
        stdout.flush()
    }

    fn load(&mut self, name: &str) -> io::Result<String> {
        fs::read_to_string(name)
    }
}

/// An in-memory host with scripted input, captured output and a table of
/// loadable scripts.
///
/// Clones share the same buffers, so a caller can keep one handle while the
/// interpreter owns another.
///
/// # Example
/// ```
/// use basil::{Interpreter, interpreter::host::BufferedHost};
///
/// let host = BufferedHost::with_input(["Ada"]);
/// let mut interpreter = Interpreter::with_host(host.clone());
///
/// interpreter.run("demo", "PRINT(\"Hello, \" + INPUT())").unwrap();
///
/// assert_eq!(host.output(), vec!["Hello, Ada".to_string()]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct BufferedHost {
    inner: Rc<RefCell<Buffers>>,
}

#[derive(Debug, Default)]
struct Buffers {
    input:   VecDeque<String>,
    output:  Vec<String>,
    scripts: HashMap<String, String>,
    clears:  usize,
}

impl BufferedHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a host whose `read_line` answers with `lines`, in order.
    #[must_use]
    pub fn with_input<I, S>(lines: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        let host = Self::new();
        host.inner
            .borrow_mut()
            .input
            .extend(lines.into_iter().map(Into::into));
        host
    }

    /// Makes `text` loadable under `name`.
    #[must_use]
    pub fn with_script(self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.inner
            .borrow_mut()
            .scripts
            .insert(name.into(), text.into());
        self
    }

    /// Every line written so far.
    #[must_use]
    pub fn output(&self) -> Vec<String> {
        self.inner.borrow().output.clone()
    }

    /// How many times the screen was cleared.
    #[must_use]
    pub fn clears(&self) -> usize {
        self.inner.borrow().clears
    }
}

impl Host for BufferedHost {
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.inner.borrow_mut().output.push(text.to_string());
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.inner.borrow_mut().input.pop_front())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.inner.borrow_mut().clears += 1;
        Ok(())
    }

    fn load(&mut self, name: &str) -> io::Result<String> {
        self.inner
            .borrow()
            .scripts
            .get(name)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("No script named '{name}'")))
    }
}
