// commands-search - find that command you keep forgetting
//
// This is the main entry point. Parses CLI args and dispatches to handlers.

use anyhow::Context;
use clap::{Parser, Subcommand};
use commands_search_lib::{
    core::{Recorder, Retriever, SearchEngine},
    logging, CommandsError, Config, Record, RecordStore,
};
use log::debug;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "commands-search")]
#[command(about = "Search a list of commands and their descriptions")]
struct Cli {
    /// CSV file holding the commands (default: final.csv)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Show debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find commands whose name or description contains the query
    Search {
        query: Vec<String>,

        /// Show at most this many results
        #[arg(short, long)]
        limit: Option<usize>,

        #[arg(long)]
        json: bool,
    },
    /// Add a command to the file
    Add {
        name: String,
        description: String,

        #[arg(long)]
        json: bool,
    },
    /// Show every command
    List {
        #[arg(long)]
        json: bool,
    },
    /// How to use this tool
    Guide,
    /// Show version
    Version,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::resolve(cli.file, cli.verbose) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            return ExitCode::FAILURE;
        }
    };
    logging::init(config.verbose);

    match run(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("{:#}", err);
            match err.downcast_ref::<CommandsError>() {
                Some(e) if e.is_validation() => eprintln!("Warning: {}", e.user_message()),
                Some(e) => eprintln!("Error: {}", e.user_message()),
                None => eprintln!("Error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Option<Commands>, config: &Config) -> anyhow::Result<()> {
    match command {
        Some(Commands::Search { query, limit, json }) => {
            handle_search(config, &query.join(" "), limit, json).await
        }
        Some(Commands::Add {
            name,
            description,
            json,
        }) => handle_add(config, &name, &description, json).await,
        Some(Commands::List { json }) => handle_list(config, json).await,
        Some(Commands::Version) => {
            println!("commands-search v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(Commands::Guide) | None => {
            print_guide();
            Ok(())
        }
    }
}

async fn handle_search(
    config: &Config,
    query: &str,
    limit: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let store = RecordStore::load(&config.data_file)
        .await
        .with_context(|| format!("loading {}", config.data_file.display()))?;

    let results = match limit {
        Some(limit) => SearchEngine::search_limited(store.records(), query, limit),
        None => SearchEngine::search(store.records(), query),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if query.is_empty() {
        println!("Enter a keyword to search for.");
    } else if results.is_empty() {
        println!("No commands found matching '{}'", query);
    } else {
        println!("\nFound {} command(s) matching '{}':", results.len(), query);
        print_table(&results);
    }

    Ok(())
}

async fn handle_add(
    config: &Config,
    name: &str,
    description: &str,
    json: bool,
) -> anyhow::Result<()> {
    let mut store = RecordStore::load_or_empty(&config.data_file)
        .await
        .with_context(|| format!("loading {}", config.data_file.display()))?;

    let record = Recorder::new()
        .record(&mut store, name, description)
        .await
        .with_context(|| format!("adding '{}'", name))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!("✓ Added '{}'", record.name());

    // Show the whole list after an add
    let all: Vec<&Record> = Retriever::new(&store).all().iter().collect();
    print_table(&all);

    Ok(())
}

async fn handle_list(config: &Config, json: bool) -> anyhow::Result<()> {
    let store = RecordStore::load(&config.data_file)
        .await
        .with_context(|| format!("loading {}", config.data_file.display()))?;
    let retriever = Retriever::new(&store);

    if json {
        println!("{}", serde_json::to_string_pretty(retriever.all())?);
        return Ok(());
    }

    let summary = retriever.summary();
    if summary.total_commands == 0 {
        println!("No commands in {}.", summary.path.display());
        return Ok(());
    }

    println!(
        "\n{} command(s) in {}:",
        summary.total_commands,
        summary.path.display()
    );
    let all: Vec<&Record> = retriever.all().iter().collect();
    print_table(&all);

    Ok(())
}

fn print_table(records: &[&Record]) {
    let width = records
        .iter()
        .map(|r| r.name().chars().count())
        .max()
        .unwrap_or(0)
        .clamp(7, 30);

    println!("{}", "=".repeat(60));
    println!("{:>4} {:<width$}  {}", "#", "Command", "Description", width = width);
    println!("{}", "-".repeat(60));
    for (i, record) in records.iter().enumerate() {
        println!(
            "{:3}. {:<width$}  {}",
            i + 1,
            record.name(),
            record.description(),
            width = width
        );
    }
    println!("{}", "=".repeat(60));
}

fn print_guide() {
    println!(
        r#"commands-search v{} - look up commands by keyword

HOW TO USE:
    1. Type a keyword after 'search'.
    2. Every command whose name or description contains it is listed.
    3. Matching ignores case; results keep the order of the file.
    4. Add your own commands with 'add'. They are saved right away.

USAGE:
    commands-search [--file <PATH>] <COMMAND> [OPTIONS]

COMMANDS:
    search <query>             Search commands (--limit N, --json)
    add <name> <description>   Add a command (--json)
    list                       Show every command (--json)
    guide                      Show this guide
    version                    Show version

EXAMPLES:
    commands-search search file
    commands-search add "cp" "Copy file"
    commands-search --file ~/cheatsheet.csv list

DATA FILE:
    --file, then $COMMANDS_SEARCH_FILE, then ./final.csv.
    It is a CSV file with a 'Command,Description' header.
"#,
        env!("CARGO_PKG_VERSION")
    );
}
