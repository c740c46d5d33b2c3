use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;

use beanclean::cleaner::BeanCleaner;
use beanclean::config::get_config_path;

/// Normalizes Java bean classes into a regenerable model.
#[derive(Parser)]
#[command(name = "beanclean", about = "Normalizes Java bean classes into a regenerable model")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration for a project
    Init {
        /// Project path (default: current directory)
        path: Option<String>,
    },
    /// Print the beans of one source file as JSON
    Bean {
        /// Java source file
        file: PathBuf,
        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },
    /// Clean every included file of a project
    Scan {
        /// Project path (default: current directory)
        path: Option<String>,
        /// Print all beans as JSON instead of a summary
        #[arg(short, long)]
        json: bool,
    },
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Logs to stderr, quiet unless `RUST_LOG` asks for more.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> beanclean::errors::Result<()> {
    match cli.command {
        Commands::Init { path } => {
            let project_path = resolve_path(path);
            BeanCleaner::init(&project_path)?;
            println!(
                "Wrote default configuration to {}",
                get_config_path(&project_path).display()
            );
        }
        Commands::Bean { file, pretty } => {
            let project_path = resolve_path(None);
            let cleaner = BeanCleaner::open(&project_path)?;
            let beans = cleaner.clean_file(&file)?;
            let json = if pretty {
                serde_json::to_string_pretty(&beans)?
            } else {
                serde_json::to_string(&beans)?
            };
            println!("{}", json);
        }
        Commands::Scan { path, json } => {
            let project_path = resolve_path(path);
            let cleaner = BeanCleaner::open(&project_path)?;
            let result = cleaner.clean_all()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!(
                    "Cleaned {} files: {} beans, {} failures in {}ms",
                    result.file_count,
                    result.beans.len(),
                    result.failures.len(),
                    result.duration_ms
                );
                for bean in &result.beans {
                    println!(
                        "  {}.{} ({} fields, {} static, {} inner)",
                        bean.package_name(),
                        bean.type_name(),
                        bean.instance_fields().len(),
                        bean.static_fields().len(),
                        bean.inner_classes().len()
                    );
                }
                for failure in &result.failures {
                    println!("  failed: {} - {}", failure.path, failure.message);
                }
            }
        }
    }
    Ok(())
}

/// Resolves an optional path argument to a `PathBuf`.
///
/// Defaults to the current working directory if no path is provided.
fn resolve_path(path: Option<String>) -> PathBuf {
    match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}
