use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;
use std::thread;
use std::time::Duration;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use codequote::config::CONFIG_PATHS;
use codequote::counting::strip_bom;
use codequote::render::{code_info_json, estimate_json, OutputFormat, Renderer};
use codequote::samples::sample;
use codequote::shell::Session;
use codequote::sources::{collect_files, load_files, read_source};
use codequote::{notify, Category, Config, Preferences, Theme, Workbench};

#[derive(Parser)]
#[command(name = "codequote")]
#[command(about = "Heuristic price and time estimates for HTML, CSS and JavaScript")]
#[command(version)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Configuration file (defaults to .codequote.json, codequote.json or .codequote/config.json)
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,

  /// Enable debug logging
  #[arg(short, long, global = true)]
  verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
  /// Estimate price and time for a set of files
  Estimate {
    /// Files or directories, bucketed by extension
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,
    /// Markup file, or `-` for stdin
    #[arg(long, value_name = "FILE")]
    markup: Option<PathBuf>,
    /// Styling file, or `-` for stdin
    #[arg(long, value_name = "FILE")]
    styling: Option<PathBuf>,
    /// Scripting file, or `-` for stdin
    #[arg(long, value_name = "FILE")]
    scripting: Option<PathBuf>,
    /// Start from the bundled sample project
    #[arg(long)]
    sample: bool,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,
    /// Pause before printing results, in milliseconds
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,
  },
  /// Show line, character and complexity info for one file
  Info {
    /// File to inspect, or `-` for stdin
    file: PathBuf,
    /// Category, when it cannot be told from the extension
    #[arg(long)]
    category: Option<Category>,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,
  },
  /// Print the bundled sample project
  Sample {
    /// Only print one category
    #[arg(long)]
    category: Option<Category>,
  },
  /// Work on the three tabs interactively
  Shell {
    /// Start from the bundled sample project
    #[arg(long)]
    sample: bool,
  },
  /// Show or set the color theme
  Theme {
    /// New theme (light or dark)
    theme: Option<Theme>,
    /// Switch to the other theme
    #[arg(long, conflicts_with = "theme")]
    toggle: bool,
  },
  /// Show the effective configuration, or write the default one
  Config {
    /// Write the default configuration to .codequote.json
    #[arg(long)]
    init: bool,
    /// Overwrite an existing file with --init
    #[arg(long, requires = "init")]
    force: bool,
  },
}

fn main() {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  if let Err(e) = run(cli) {
    notify::error(&format!("{e:#}"));
    process::exit(1);
  }
}

fn init_tracing(verbose: bool) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
    if verbose {
      EnvFilter::new("codequote=debug")
    } else {
      EnvFilter::new("codequote=warn")
    }
  });

  tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter).init();
}

fn run(cli: Cli) -> Result<()> {
  let config = load_config(cli.config.as_deref())?;

  match cli.command {
    Commands::Estimate { paths, markup, styling, scripting, sample, format, delay_ms } => {
      let explicit = [
        (Category::Markup, markup),
        (Category::Styling, styling),
        (Category::Scripting, scripting),
      ];
      estimate(&config, &paths, explicit, sample, format, delay_ms)
    }
    Commands::Info { file, category, format } => info(&config, &file, category, format),
    Commands::Sample { category } => {
      print_sample(category);
      Ok(())
    }
    Commands::Shell { sample } => shell(&config, sample),
    Commands::Theme { theme, toggle } => set_theme(theme, toggle),
    Commands::Config { init, force } => show_config(&config, init, force),
  }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
  match path {
    Some(path) => Config::load_from_file(path)
      .with_context(|| format!("Failed to load config from {}", path.display())),
    None => Config::load().context("Failed to load config"),
  }
}

fn read_input(path: &Path) -> Result<String> {
  if path == Path::new("-") {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer).context("Failed to read stdin")?;
    return Ok(strip_bom(&buffer).to_string());
  }
  read_source(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn estimate(
  config: &Config,
  paths: &[PathBuf],
  explicit: [(Category, Option<PathBuf>); 3],
  with_sample: bool,
  format: OutputFormat,
  delay_ms: u64,
) -> Result<()> {
  let stdin_uses = explicit.iter().filter(|(_, path)| path.as_deref() == Some(Path::new("-"))).count();
  if stdin_uses > 1 {
    bail!("Only one category can be read from stdin");
  }

  let theme = Preferences::load().theme;
  let mut workbench =
    if with_sample { Workbench::with_samples(theme) } else { Workbench::new(theme) };

  let files = collect_files(paths, config)?;
  load_files(&mut workbench, &files)?;

  for (category, path) in explicit {
    if let Some(path) = path {
      let text = read_input(&path)?;
      workbench.append_text(category, &text);
    }
  }

  if workbench.is_empty() {
    notify::warn("No code given; estimating empty buffers");
  }

  if delay_ms > 0 {
    notify::info("Calculating...");
    thread::sleep(Duration::from_millis(delay_ms));
  }

  let result = workbench.estimate(config);

  match format {
    OutputFormat::Pretty => {
      let renderer = Renderer::new(workbench.theme(), config.currency_symbol.as_str());
      println!("{}", renderer.estimate(&result));
      notify::success("Price calculation completed successfully!");
    }
    OutputFormat::Json => println!("{}", estimate_json(&result, &config.currency_symbol)?),
  }

  Ok(())
}

fn info(config: &Config, file: &Path, category: Option<Category>, format: OutputFormat) -> Result<()> {
  let category = match category.or_else(|| Category::from_path(file)) {
    Some(category) => category,
    None => return Err(codequote::QuoteError::unsupported_file(file).into()),
  };

  let mut workbench = Workbench::new(Preferences::load().theme);
  workbench.set_text(category, read_input(file)?);
  workbench.switch_tab(category);
  let metrics = workbench.code_info(config);

  match format {
    OutputFormat::Pretty => {
      let renderer = Renderer::new(workbench.theme(), config.currency_symbol.as_str());
      println!("{}", renderer.code_info(&metrics));
    }
    OutputFormat::Json => println!("{}", code_info_json(&metrics)?),
  }

  Ok(())
}

fn shell(config: &Config, with_sample: bool) -> Result<()> {
  let theme = Preferences::load().theme;
  let workbench = if with_sample { Workbench::with_samples(theme) } else { Workbench::new(theme) };

  let stdin = std::io::stdin();
  let stdout = std::io::stdout();
  Session::new(workbench, config).run(stdin.lock(), &mut stdout.lock())?;
  Ok(())
}

fn print_sample(category: Option<Category>) {
  match category {
    Some(category) => print!("{}", sample(category)),
    None => {
      for category in Category::ALL {
        println!("==> {} <==", category.label());
        print!("{}", sample(category));
        println!();
      }
    }
  }
}

fn set_theme(theme: Option<Theme>, toggle: bool) -> Result<()> {
  let mut preferences = Preferences::load();

  let new_theme = match (theme, toggle) {
    (Some(theme), _) => theme,
    (None, true) => preferences.theme.toggled(),
    (None, false) => {
      println!("{}", preferences.theme);
      return Ok(());
    }
  };

  preferences.theme = new_theme;
  let path = preferences.save().context("Failed to save preferences")?;
  tracing::debug!(path = %path.display(), "saved preferences");
  notify::success(&format!("Theme set to {new_theme}"));
  Ok(())
}

fn show_config(config: &Config, init: bool, force: bool) -> Result<()> {
  if !init {
    println!("{}", serde_json::to_string_pretty(config)?);
    return Ok(());
  }

  let path = Path::new(CONFIG_PATHS[0]);
  if path.exists() && !force {
    bail!("{} already exists (use --force to overwrite)", path.display());
  }

  Config::default().save_to_file(path).with_context(|| format!("Failed to write {}", path.display()))?;
  notify::success(&format!("Wrote default configuration to {}", path.display()));
  Ok(())
}
