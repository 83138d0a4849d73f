//! Entry point: input → parser → JSON or HTML on stdout.

mod cli;

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;
use markdown_lexis_config::{Config, OutputFormat};
use markdown_lexis_engine::{HtmlRenderer, MarkdownParser, ParserOptions, Renderer};

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Warning: ignoring config file: {e}");
            Config::default()
        }
    };

    let options = ParserOptions {
        debug: cli.debug || config.parser_options().debug,
    };
    let format = cli.format.unwrap_or(config.format);

    env_logger::Builder::from_default_env()
        .filter_level(if options.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let source = read_input(&cli)?;
    log::debug!("read {} bytes, writing {format}", source.len());

    let tokens = MarkdownParser::new(options).parse(&source);

    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut stdout, &tokens)
                .context("Failed to serialize token stream")?;
            writeln!(stdout)?;
        }
        OutputFormat::Html => {
            stdout.write_all(HtmlRenderer.render(&tokens).as_bytes())?;
        }
    }
    stdout.flush()?;
    Ok(())
}

fn read_input(cli: &Cli) -> Result<String> {
    match cli.input_path() {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin as UTF-8")?;
            Ok(source)
        }
    }
}
