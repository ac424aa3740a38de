//! `clistyles` command-line front end.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use clistyles::{OutputMode, StyleCatalog, Stylesheet};
use clistyles_cursor::{Ioctl, TerminalSize, Tput};
use console::Term;

#[derive(Parser, Debug)]
#[command(name = "clistyles", version, about = "Render <tag> markup as styled terminal text")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve markup text into terminal escape codes
    Render(RenderArgs),
    /// Print the terminal size as WIDTHxHEIGHT
    Size {
        /// Ask `tput` instead of the terminal directly
        #[arg(long)]
        tput: bool,
    },
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// YAML stylesheet defining the styles tags refer to
    #[arg(short, long, value_name = "FILE")]
    stylesheet: Option<PathBuf>,

    /// Do not append a reset code after the output
    #[arg(long)]
    no_reset: bool,

    /// Strip registered tags and emit no escape codes
    #[arg(long)]
    plain: bool,

    /// Markup text; read from stdin when omitted
    text: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let term = Term::stdout();

    match cli.command {
        Command::Render(args) => {
            let output = render(args)?;
            term.write_str(&output).context("failed to write output")?;
        }
        Command::Size { tput } => {
            let query: Box<dyn TerminalSize> = if tput {
                Box::new(Tput)
            } else {
                Box::new(Ioctl)
            };
            let width = query.width().context("failed to query terminal width")?;
            let height = query.height().context("failed to query terminal height")?;
            term.write_line(&format!("{}x{}", width, height))
                .context("failed to write output")?;
        }
    }

    Ok(())
}

fn render(args: RenderArgs) -> Result<String> {
    let catalog = match &args.stylesheet {
        Some(path) => Stylesheet::from_file(path)
            .with_context(|| format!("failed to load stylesheet {}", path.display()))?
            .into_catalog(),
        None => StyleCatalog::new(),
    };

    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read text from stdin")?;
            buf
        }
    };

    let mode = if args.plain {
        OutputMode::Text
    } else {
        OutputMode::Term
    };

    let output = catalog
        .with_text(text)
        .resolve_with(mode, !args.no_reset)
        .context("failed to resolve markup")?;
    Ok(output)
}
