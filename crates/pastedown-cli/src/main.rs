//! pastedown: convert clipboard HTML to Markdown, render previews and export
//! standalone HTML.

mod config;

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgGroup, Args, Parser, Subcommand};
use log::{debug, error, info};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

use pastedown_editor::{export_html, render_markdown, Document, Selection, Snippet, ToolbarAction};

use crate::config::{Loader, PastedownConfig};

#[derive(Parser, Debug)]
#[command(name = "pastedown")]
#[command(about = "Convert pasted HTML to Markdown, preview and export")]
#[command(version)]
#[command(after_help = "Examples:
  pastedown convert clip.html               # HTML fragment to Markdown on stdout
  pastedown export notes.md -o notes.html   # Standalone HTML document
  pastedown paste notes.md --html clip.html --at 120
  pastedown snippet notes.md bold --range 10..14")]
struct Cli {
    /// Configuration file layered over the built-in defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode - only show errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert an HTML fragment to Markdown
    Convert {
        /// Input HTML file (stdin if absent or `-`)
        input: Option<PathBuf>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render Markdown to an HTML fragment
    Render {
        /// Input Markdown file (stdin if absent or `-`)
        input: Option<PathBuf>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render Markdown to a standalone HTML document
    Export {
        /// Input Markdown file (stdin if absent or `-`)
        input: Option<PathBuf>,

        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Document title (defaults to `export.title` from the config)
        #[arg(long)]
        title: Option<String>,
    },

    /// Paste clipboard content into a Markdown document at a selection
    #[command(group(ArgGroup::new("clipboard").required(true).multiple(true).args(["html", "text"])))]
    Paste {
        /// Markdown document to edit
        doc: PathBuf,

        /// HTML flavour of the clipboard
        #[arg(long)]
        html: Option<PathBuf>,

        /// Plain-text flavour, used when the HTML flavour is missing or empty
        #[arg(long)]
        text: Option<PathBuf>,

        #[command(flatten)]
        target: Target,

        /// Write the result here instead of back to DOC (`-` for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Apply a toolbar action to a Markdown document
    Snippet {
        /// Markdown document to edit
        doc: PathBuf,

        /// bold, italic, heading, link, image, list, code, quote, hr or table
        action: ToolbarAction,

        #[command(flatten)]
        target: Target,

        /// Write the result here instead of back to DOC (`-` for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Selection to edit; the end of the document if neither flag is given
#[derive(Args, Debug)]
struct Target {
    /// Cursor byte offset
    #[arg(long, conflicts_with = "range")]
    at: Option<usize>,

    /// Selected byte range, START..END
    #[arg(long, value_parser = parse_range)]
    range: Option<Selection>,
}

impl Target {
    fn apply(&self, document: Document) -> Result<Document> {
        let selection = match (self.at, self.range) {
            (Some(at), _) => Selection::cursor(at),
            (None, Some(range)) => range,
            (None, None) => return Ok(document),
        };
        document
            .with_selection(selection)
            .context("Selection does not fit the document")
    }
}

fn parse_range(s: &str) -> std::result::Result<Selection, String> {
    let (start, end) = s
        .split_once("..")
        .ok_or_else(|| format!("expected START..END, got `{s}`"))?;
    let start = start.trim().parse().map_err(|e| format!("invalid start `{start}`: {e}"))?;
    let end = end.trim().parse().map_err(|e| format!("invalid end `{end}`: {e}"))?;
    Ok(Selection::new(start, end))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_logging(&cli, &config)?;

    if let Err(err) = run(cli, &config) {
        error!("{err:#}");
        return Err(err);
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<PastedownConfig> {
    let mut loader = Loader::new();
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    loader
        .with_env()
        .build()
        .context("Failed to load configuration")
}

fn init_logging(cli: &Cli, config: &PastedownConfig) -> Result<()> {
    let level = if cli.quiet {
        LevelFilter::Error
    } else if cli.verbose {
        LevelFilter::Debug
    } else {
        config.log.level_filter()?
    };

    TermLogger::init(
        level,
        simplelog::ConfigBuilder::new()
            .add_filter_ignore_str("html5ever")
            .add_filter_ignore_str("selectors")
            .build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logging")
}

fn run(cli: Cli, config: &PastedownConfig) -> Result<()> {
    match cli.command {
        Command::Convert { input, output } => {
            let html = read_input(input.as_deref())?;
            let markdown = config.convert.converter().convert(&html);
            info!("Converted {} bytes of HTML", html.len());
            write_output(output.as_deref(), &with_newline(markdown))
        }
        Command::Render { input, output } => {
            let markdown = read_input(input.as_deref())?;
            write_output(output.as_deref(), &render_markdown(&markdown))
        }
        Command::Export {
            input,
            output,
            title,
        } => {
            let markdown = read_input(input.as_deref())?;
            let title = title.as_deref().unwrap_or(&config.export.title);
            write_output(output.as_deref(), &export_html(&markdown, title))
        }
        Command::Paste {
            doc,
            html,
            text,
            target,
            output,
        } => {
            let mut document = target.apply(Document::new(read_file(&doc)?))?;
            let html = html.as_deref().map(read_file).transpose()?;

            match (html, text) {
                (Some(html), _) if !html.trim().is_empty() => {
                    document.paste_html(&config.convert.converter(), &html);
                }
                (_, Some(text)) => document.paste_text(&read_file(&text)?),
                (_, None) => debug!("HTML flavour is empty, nothing to paste"),
            }

            info!("Cursor at {:?}", document.selection());
            write_document(&doc, output.as_deref(), document)
        }
        Command::Snippet {
            doc,
            action,
            target,
            output,
        } => {
            let mut document = target.apply(Document::new(read_file(&doc)?))?;
            document.insert_snippet(&Snippet::for_action(action));
            info!("Applied {} snippet, selection {:?}", action, document.selection());
            write_document(&doc, output.as_deref(), document)
        }
    }
}

fn with_newline(mut text: String) -> String {
    if !text.is_empty() {
        text.push('\n');
    }
    text
}

fn is_stdio(path: Option<&Path>) -> bool {
    path.map_or(true, |p| p == Path::new("-"))
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if !is_stdio(Some(path)) => read_file(path),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) if !is_stdio(Some(path)) => {
            fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
        }
        _ => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Failed to write stdout")
        }
    }
}

fn write_document(doc: &Path, output: Option<&Path>, document: Document) -> Result<()> {
    write_output(Some(output.unwrap_or(doc)), &document.into_text())
}
