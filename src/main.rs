//! mcp-switcher CLI

use std::io::Write;

use clap::{Parser, Subcommand};
use mcp_switcher::{
    add_row, delete_row, edit_row, format_args, format_env, parse_args, parse_env, set_active,
    ConfigStore, DisplayRow, Paths, ServerEntry,
};

#[derive(Parser)]
#[command(name = "mcp-switcher")]
#[command(about = "Edit MCP server configs and switch the active set")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List all servers with their active state
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a server (active unless --inactive)
    Add {
        /// Server name
        name: String,

        /// Executable path or name
        #[arg(long)]
        command: String,

        /// Comma-separated arguments (e.g. "-y,@modelcontextprotocol/server-fetch")
        #[arg(long)]
        args: Option<String>,

        /// Comma-separated KEY=VALUE environment pairs
        #[arg(long)]
        env: Option<String>,

        /// Add without marking active
        #[arg(long)]
        inactive: bool,
    },

    /// Edit an existing server
    Edit {
        /// Server name
        name: String,

        /// New server name
        #[arg(long)]
        rename: Option<String>,

        /// New executable path or name
        #[arg(long)]
        command: Option<String>,

        /// New comma-separated arguments
        #[arg(long)]
        args: Option<String>,

        /// New comma-separated KEY=VALUE environment pairs
        #[arg(long)]
        env: Option<String>,
    },

    /// Remove a server (asks for confirmation)
    Remove {
        /// Server name
        name: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Mark a server active
    Enable {
        /// Server name
        name: String,
    },

    /// Mark a server inactive
    Disable {
        /// Server name
        name: String,
    },

    /// Show resolved paths (for debugging)
    Paths,
}

fn main() {
    let cli = Cli::parse();
    let paths = Paths::resolve();
    let store = ConfigStore::new(paths.clone());
    let debug = cli.debug;

    match cli.command {
        Commands::Paths => {
            println!("All-servers config: {}", paths.all_config_path().display());
            println!("Active config:      {}", paths.active_config_path().display());
            println!("All exists:         {}", paths.all_config_path().exists());
            println!("Active exists:      {}", paths.active_config_path().exists());
        }
        Commands::List { json } => {
            let rows = store.load(debug);
            if json {
                let output = serde_json::to_string_pretty(&rows).unwrap();
                println!("{output}");
            } else {
                if rows.is_empty() {
                    println!("No MCP servers configured.");
                    return;
                }
                print_rows_table(&rows);
            }
        }
        Commands::Add {
            name,
            command,
            args,
            env,
            inactive,
        } => {
            let mut rows = store.load(debug);
            let entry = ServerEntry {
                command,
                args: parse_args(&args.unwrap_or_default()),
                env: parse_env(&env.unwrap_or_default()),
            };
            add_row(&mut rows, name.clone(), entry);
            if inactive {
                // add_row marks new rows active; flip the one just appended
                let last = rows.len() - 1;
                let _ = set_active(&mut rows, Some(last), false);
            }
            save_or_exit(&store, &rows);
            println!("Added {}", name);
        }
        Commands::Edit {
            name,
            rename,
            command,
            args,
            env,
        } => {
            let mut rows = store.load(debug);
            let selection = rows.iter().position(|r| r.name == name);
            let current = selection
                .map(|i| rows[i].entry.clone())
                .unwrap_or_default();
            let entry = ServerEntry {
                command: command.unwrap_or(current.command),
                args: args.map(|a| parse_args(&a)).unwrap_or(current.args),
                env: env.map(|e| parse_env(&e)).unwrap_or(current.env),
            };
            let new_name = rename.unwrap_or_else(|| name.clone());
            match edit_row(&mut rows, selection, new_name.clone(), entry) {
                Ok(()) => {
                    save_or_exit(&store, &rows);
                    println!("Updated {}", new_name);
                }
                Err(e) => {
                    eprintln!("Warning: {}: {}", e, name);
                    std::process::exit(1);
                }
            }
        }
        Commands::Remove { name, yes } => {
            let mut rows = store.load(debug);
            let selection = rows.iter().position(|r| r.name == name);
            if selection.is_none() {
                eprintln!("Warning: No server selected: {}", name);
                std::process::exit(1);
            }
            let confirmed = yes || confirm(&format!("Delete server '{}'?", name));
            match delete_row(&mut rows, selection, confirmed) {
                Ok(true) => {
                    save_or_exit(&store, &rows);
                    println!("Removed {}", name);
                }
                Ok(false) => println!("Not removed."),
                Err(e) => {
                    eprintln!("Warning: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Enable { name } => {
            set_active_by_name(&store, &name, true, debug);
            println!("Enabled {}", name);
        }
        Commands::Disable { name } => {
            set_active_by_name(&store, &name, false, debug);
            println!("Disabled {}", name);
        }
    }
}

fn set_active_by_name(store: &ConfigStore, name: &str, active: bool, debug: bool) {
    let mut rows = store.load(debug);
    let selection = rows.iter().position(|r| r.name == name);
    match set_active(&mut rows, selection, active) {
        Ok(()) => save_or_exit(store, &rows),
        Err(e) => {
            eprintln!("Warning: {}: {}", e, name);
            std::process::exit(1);
        }
    }
}

fn save_or_exit(store: &ConfigStore, rows: &[DisplayRow]) {
    if let Err(e) = store.save(rows) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn confirm(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    let _ = std::io::stdout().flush();

    let mut answer = String::new();
    if std::io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn print_rows_table(rows: &[DisplayRow]) {
    const INDENT: &str = "        ";

    for row in rows {
        let state = if row.active { "active" } else { "inactive" };
        println!("{} [{}]", row.name, state);
        println!("{}Command: {}", INDENT, row.entry.command);
        if !row.entry.args.is_empty() {
            println!("{}Args:    {}", INDENT, format_args(&row.entry.args));
        }
        if !row.entry.env.is_empty() {
            println!("{}Env:     {}", INDENT, format_env(&row.entry.env));
        }
        println!();
    }
}
