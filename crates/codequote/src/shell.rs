//! Interactive workbench session
//!
//! Reads one command per line, applies it to a [`Workbench`] and writes the
//! rendered results. Status messages go through [`crate::notify`], so output
//! stays clean when piped.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::Config;
use crate::notify;
use crate::render::Renderer;
use crate::sources::read_source;
use crate::workbench::Workbench;
use crate::{Category, QuoteError, Result};

const HELP: &str = "\
Commands:
  tab <html|css|js>   switch the active tab
  add <text>          append a line to the active tab
  load <file>         append a file to the active tab
  show                print the active tab
  info                code info for the active tab
  estimate            price and time for all tabs
  sample              load the sample project
  refresh             clear every tab
  help                this list
  quit                leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  Tab(Category),
  Add(String),
  Load(PathBuf),
  Show,
  Info,
  Estimate,
  Sample,
  Refresh,
  Help,
  Quit,
}

impl FromStr for Command {
  type Err = QuoteError;

  fn from_str(s: &str) -> Result<Self> {
    let (word, rest) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
    let rest = rest.trim();

    match word {
      "tab" => Ok(Command::Tab(rest.parse()?)),
      "add" => Ok(Command::Add(rest.to_string())),
      "load" if rest.is_empty() => Err(QuoteError::MissingArgument { command: "load" }),
      "load" => Ok(Command::Load(PathBuf::from(rest))),
      "show" => Ok(Command::Show),
      "info" => Ok(Command::Info),
      "estimate" => Ok(Command::Estimate),
      "sample" => Ok(Command::Sample),
      "refresh" => Ok(Command::Refresh),
      "help" | "?" => Ok(Command::Help),
      "quit" | "exit" => Ok(Command::Quit),
      _ => Err(QuoteError::unknown_command(s)),
    }
  }
}

pub struct Session<'a> {
  workbench: Workbench,
  config: &'a Config,
  renderer: Renderer,
}

impl<'a> Session<'a> {
  pub fn new(workbench: Workbench, config: &'a Config) -> Self {
    let renderer = Renderer::new(workbench.theme(), config.currency_symbol.as_str());
    Self { workbench, config, renderer }
  }

  pub fn workbench(&self) -> &Workbench {
    &self.workbench
  }

  /// Apply one command; returns `false` once the session should end
  pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<bool> {
    let active = self.workbench.active();

    match command {
      Command::Tab(category) => self.workbench.switch_tab(category),
      Command::Add(text) => self.workbench.append_text(active, &text),
      Command::Load(path) => {
        let text = read_source(&path)?;
        self.workbench.append_text(active, &text);
        notify::info(&format!("Loaded {} into {}", path.display(), active.label()));
      }
      Command::Show => writeln!(out, "{}", self.workbench.text(active))?,
      Command::Info => writeln!(out, "{}", self.renderer.code_info(&self.workbench.code_info(self.config)))?,
      Command::Estimate => {
        if self.workbench.is_empty() {
          notify::warn("No code given; estimating empty buffers");
        }
        let result = self.workbench.estimate(self.config);
        writeln!(out, "{}", self.renderer.estimate(&result))?;
        notify::success("Price calculation completed successfully!");
      }
      Command::Sample => {
        self.workbench.load_samples();
        notify::info("Sample project loaded");
      }
      Command::Refresh => {
        self.workbench.refresh();
        notify::success("All fields have been refreshed!");
      }
      Command::Help => writeln!(out, "{HELP}")?,
      Command::Quit => return Ok(false),
    }

    tracing::debug!(tab = %self.workbench.active(), "command applied");
    Ok(true)
  }

  /// Prompt, read and execute commands until `quit` or end of input
  ///
  /// A failing command is reported and the session carries on.
  pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
    loop {
      write!(out, "{}> ", self.workbench.active().label().to_lowercase())?;
      out.flush()?;

      let mut line = String::new();
      if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(());
      }

      let line = line.trim();
      if line.is_empty() {
        continue;
      }

      match line.parse::<Command>().and_then(|command| self.execute(command, out)) {
        Ok(true) => {}
        Ok(false) => return Ok(()),
        Err(e) => notify::error(&e.to_string()),
      }
    }
  }
}
