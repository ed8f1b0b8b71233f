//! Interactive line-based browser.
//!
//! Reads one command per line and reprints the screen after each:
//!
//! | command                 | effect                                   |
//! |-------------------------|------------------------------------------|
//! | `tabs`                  | list tabs                                |
//! | `tab <key or index>`    | switch tab                               |
//! | `/text`, `search text`  | search (jumps to the Advanced tab)       |
//! | `search`                | clear the search                         |
//! | `next`, `prev`          | open the next/previous file in the folder|
//! | `esc`                   | clear the search, or quit if empty       |
//! | `reload`                | re-read settings and reload the file     |
//! | `quit`                  | leave                                    |

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use mediascope_core::{Direction, Escape, MetadataEngine, Session};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::config::Settings;
use crate::display::Display;
use crate::loader::Loader;

const HELP: &str = "\
commands:
  tabs                 list tabs
  tab <key|index>      switch tab
  /<text>              search (also: search <text>)
  search               clear search
  next, prev           open the next/previous file in this folder
  esc                  clear search, or quit when there is none
  reload               re-read settings and reload the file
  help                 this text
  quit                 leave
";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tabs,
    Tab(String),
    Search(String),
    Next,
    Previous,
    Escape,
    Reload,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if let Some(term) = line.strip_prefix('/') {
            return Command::Search(term.trim().to_string());
        }

        let (cmd, arg) = line
            .split_once(char::is_whitespace)
            .map(|(c, a)| (c, a.trim()))
            .unwrap_or((line, ""));

        match cmd {
            "" => Command::Empty,
            "tabs" => Command::Tabs,
            "tab" | "t" => Command::Tab(arg.to_string()),
            "search" | "s" => Command::Search(arg.to_string()),
            "next" | "n" => Command::Next,
            "prev" | "previous" | "p" => Command::Previous,
            "esc" | "escape" => Command::Escape,
            "reload" => Command::Reload,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// Whether the browser keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Produces an engine and the settings it was built from.
pub type EngineSource<E> = Box<dyn Fn() -> Result<(E, Settings)> + Send>;

pub struct Browser<E> {
    source: EngineSource<E>,
    loader: Loader<E>,
    session: Session,
    display: Display,
}

impl<E: MetadataEngine + 'static> Browser<E> {
    pub fn new(source: EngineSource<E>) -> Result<Self> {
        let (engine, settings) = source()?;
        Ok(Self {
            loader: Loader::new(engine, Duration::from_secs(settings.load_timeout_secs)),
            display: Display::from_settings(&settings),
            session: Session::new(),
            source,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Load the first file. Failure here ends the browser.
    pub async fn open(&mut self, file: impl Into<PathBuf>) -> Result<()> {
        self.loader.load(&mut self.session, file).await?;
        Ok(())
    }

    /// Process commands from `input` until `quit`, `esc` or end of input.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        write!(out, "{}", self.display.screen(&self.session))?;

        let mut lines = input.lines();
        loop {
            write!(out, "> ")?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(out)?;
                break;
            };
            if self.execute(Command::parse(&line), out).await? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Apply one command and print its result.
    pub async fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        match command {
            Command::Tabs => {
                for (i, c) in self.session.categories().iter().enumerate() {
                    writeln!(out, "{i:>3}  {}", c.caption)?;
                }
                return Ok(Flow::Continue);
            }
            Command::Tab(arg) => {
                let found = match arg.parse::<usize>() {
                    Ok(i) => self.session.select_index(i),
                    Err(_) => self.session.select(&arg),
                };
                if !found {
                    writeln!(out, "unknown tab: {arg}")?;
                    return Ok(Flow::Continue);
                }
            }
            Command::Search(term) => self.session.set_search(term),
            Command::Next => self.navigate(Direction::Next, out).await?,
            Command::Previous => self.navigate(Direction::Previous, out).await?,
            Command::Escape => {
                if self.session.escape() == Escape::Quit {
                    return Ok(Flow::Quit);
                }
            }
            Command::Reload => self.reload(out).await?,
            Command::Help => {
                write!(out, "{HELP}")?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
            Command::Empty => return Ok(Flow::Continue),
            Command::Unknown(cmd) => {
                writeln!(out, "unknown command: {cmd} (type help)")?;
                return Ok(Flow::Continue);
            }
        }

        write!(out, "{}", self.display.screen(&self.session))?;
        Ok(Flow::Continue)
    }

    async fn navigate<W: Write>(&mut self, direction: Direction, out: &mut W) -> Result<()> {
        let target = if self.session.can_navigate() {
            self.session.sibling(direction)
        } else {
            None
        };
        let Some(path) = target else {
            writeln!(out, "no other files in this folder")?;
            return Ok(());
        };

        if let Err(e) = self.loader.load(&mut self.session, path).await {
            writeln!(out, "error: {e}")?;
        }
        Ok(())
    }

    async fn reload<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let (engine, settings) = match (self.source)() {
            Ok(pair) => pair,
            Err(e) => {
                writeln!(out, "error: {e:#}")?;
                return Ok(());
            }
        };
        self.loader = Loader::new(engine, Duration::from_secs(settings.load_timeout_secs));
        self.display = Display::from_settings(&settings);

        if let Some(path) = self.session.path().map(PathBuf::from) {
            if let Err(e) = self.loader.load(&mut self.session, path).await {
                writeln!(out, "error: {e}")?;
            }
        }
        Ok(())
    }
}
