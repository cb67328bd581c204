use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indexmap::IndexMap;

use pathquill::config::Config;
use pathquill::document::convert::parse_document;
use pathquill::document::value::Value;
use pathquill::file::loader::{load_document_file, load_document_from_stdin};
use pathquill::file::output::{render, OutputFormat};
use pathquill::{all_paths_with, detail_with, exists, set_with, AccessOptions};

/// PathQuill - read and write nested values in YAML/JSON documents
#[derive(Parser)]
#[command(name = "pathquill")]
#[command(version)]
#[command(about = "Read and write nested values with dot/bracket paths", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format (default from config, otherwise yaml)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Reject constructor/__proto__/prototype segments instead of ignoring them
    #[arg(long, global = true)]
    strict: bool,

    /// Nesting limit for `paths`
    #[arg(long, global = true)]
    max_depth: Option<usize>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the value at PATH
    Get {
        /// Document to read (`-` for stdin)
        file: String,
        path: String,
    },
    /// Write VALUE (parsed as YAML) at PATH and print the whole document
    Set {
        /// Document to read (`-` for stdin); it is not modified on disk
        file: String,
        path: String,
        value: String,
    },
    /// Report whether KEY is a direct member of the document root
    Exists {
        /// Document to read (`-` for stdin)
        file: String,
        key: String,
    },
    /// Print the name, existence and value for PATH
    Detail {
        /// Document to read (`-` for stdin)
        file: String,
        path: String,
    },
    /// List the path of every member in the document
    Paths {
        /// Document to read (`-` for stdin)
        file: String,
        /// Raw keys to prepend to every listed path
        #[arg(long)]
        prefix: Vec<String>,
    },
    /// Write the effective settings (config file plus flags) to the config file
    Init,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load(file: &str) -> Result<Value> {
    if file == "-" {
        load_document_from_stdin()
    } else {
        load_document_file(file)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // CLI flags override config
    let config = Config::load();
    let format = cli.format.unwrap_or(config.output_format);
    let options = AccessOptions {
        strict_reserved: cli.strict || config.strict_reserved,
        max_depth: cli.max_depth.unwrap_or(config.max_depth),
    };
    let print = |value: &Value| -> Result<()> {
        println!("{}", render(value, format, config.indent_size)?);
        Ok(())
    };

    match cli.command {
        Command::Get { file, path } => {
            let doc = load(&file)?;
            let result = detail_with(&doc, &path, options)
                .with_context(|| format!("Invalid path '{}'", path))?;
            match result.value {
                Some(value) => print(value)?,
                None => anyhow::bail!("No value at path '{}'", path),
            }
        }
        Command::Set { file, path, value } => {
            let mut doc = load(&file)?;
            let value = parse_document(&value).context("Failed to parse VALUE")?;
            let updated = set_with(&mut doc, &path, value, options)
                .with_context(|| format!("Failed to set '{}'", path))?;
            print(updated)?;
        }
        Command::Exists { file, key } => {
            let doc = load(&file)?;
            println!("{}", exists(&doc, &key));
        }
        Command::Detail { file, path } => {
            let doc = load(&file)?;
            let result = detail_with(&doc, &path, options)
                .with_context(|| format!("Invalid path '{}'", path))?;

            let mut report = IndexMap::new();
            report.insert(
                "name".to_string(),
                result
                    .name
                    .map(|name| Value::String(name.to_string()))
                    .unwrap_or(Value::Null),
            );
            report.insert("exists".to_string(), Value::Boolean(result.exists));
            report.insert(
                "value".to_string(),
                result.value.cloned().unwrap_or(Value::Null),
            );
            print(&Value::Object(report))?;
        }
        Command::Init => {
            let updated = Config {
                strict_reserved: options.strict_reserved,
                max_depth: options.max_depth,
                output_format: format,
                indent_size: config.indent_size,
            };
            updated.save().context("Failed to save config")?;
            if let Some(path) = Config::config_path() {
                println!("{}", path.display());
            }
        }
        Command::Paths { file, prefix } => {
            let doc = load(&file)?;
            let prefix: Vec<&str> = prefix.iter().map(String::as_str).collect();
            for path in all_paths_with(&doc, &prefix, options)? {
                println!("{}", path);
            }
        }
    }

    Ok(())
}
