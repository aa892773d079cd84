use blocksmith::document::{ComponentKind, Document};
use blocksmith::{config, deploy, export, mutate, output, store};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "blocksmith")]
#[command(about = "Component-tree website builder with a static exporter")]
#[command(long_about = "\
Component-tree website builder with a static exporter

A site is a document: an ordered tree of typed components you edit with
structural commands and export to three static files. The navbar always
renders first and the footer always renders last; everything in between
is movable content.

Document structure:

  site.json                        # The component tree (JSON, diffable)
  ├── navbar                       # Pinned first — title, links, fixed flag
  ├── container                    # 12-column grid cell, holds children
  │   ├── text                     # Heading or paragraph
  │   └── button                   # Link styled by variant/size
  ├── text                         # Content nodes render top to bottom
  └── footer                       # Pinned last — links, social, copyright

Node ids (shown by `show` in brackets) address nodes for remove/set/select.
`move` takes the 1-based content indexes `show` displays — the navbar and
footer sit outside the numbering and never move.

Run 'blocksmith gen-config' to generate a documented builder.toml.")]
#[command(version)]
struct Cli {
    /// Document file
    #[arg(long, default_value = "site.json", global = true)]
    file: PathBuf,

    /// Output directory for exports
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for named snapshots
    #[arg(long, default_value = ".blocksmith", global = true)]
    store: PathBuf,

    /// Site config file
    #[arg(long, default_value = "builder.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new document seeded with a navbar and footer
    New {
        /// Overwrite an existing document file
        #[arg(long)]
        force: bool,
    },
    /// Add a component (container, text, button, navbar, footer)
    Add {
        kind: ComponentKind,
        /// Insert into this container instead of at root level
        #[arg(long)]
        parent: Option<String>,
        /// Root position among content nodes (1-based, default: append)
        #[arg(long)]
        at: Option<usize>,
    },
    /// Remove a component by id
    Remove { id: String },
    /// Move a root content node between 1-based positions
    Move { from: usize, to: usize },
    /// Replace a component's props with a JSON object
    Set {
        id: String,
        /// Full prop bag as JSON, e.g. '{"text":"Hi","variant":"heading1"}'
        props: String,
    },
    /// Select a component (no id clears the selection)
    Select { id: Option<String> },
    /// Display the document tree
    Show,
    /// Validate the document invariants
    Check,
    /// Export the site to the output directory
    Export {
        /// Override the configured site name
        #[arg(long)]
        name: Option<String>,
    },
    /// Export and deploy to a directory host
    Publish {
        /// Project name on the host (default: the configured site name)
        name: Option<String>,
        /// Host root directory
        #[arg(long, default_value = "deploy")]
        dest: PathBuf,
    },
    /// Manage named document snapshots
    #[command(subcommand)]
    Snapshot(SnapshotCommand),
    /// Print a stock builder.toml with all options documented
    GenConfig,
}

#[derive(Subcommand)]
enum SnapshotCommand {
    /// Save the current document under a name
    Save { name: String },
    /// Replace the current document with a saved snapshot
    Restore { name: String },
    /// List saved snapshots
    List,
    /// Delete a saved snapshot
    Remove { name: String },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::New { force } => {
            if cli.file.exists() && !force {
                return Err(format!(
                    "{} already exists (use --force to overwrite)",
                    cli.file.display()
                )
                .into());
            }
            let doc = Document::new();
            doc.save(&cli.file)?;
            println!("Created {}", cli.file.display());
            output::print_tree(&doc);
        }
        Command::Add { kind, parent, at } => {
            let mut doc = load_document(&cli.file)?;
            let node = doc.create_node(kind);
            let id = node.id.clone();
            let outcome = match parent {
                Some(parent_id) => {
                    let outcome = mutate::insert_child(&mut doc, &parent_id, node)?;
                    warn_if_missing(outcome, &parent_id);
                    outcome
                }
                None => mutate::insert_root(&mut doc, node, at.map(to_zero_based))?,
            };
            if outcome.applied() {
                doc.save(&cli.file)?;
                println!("Added {kind} [{id}]");
                output::print_tree(&doc);
            }
        }
        Command::Remove { id } => {
            let mut doc = load_document(&cli.file)?;
            let outcome = mutate::delete_by_id(&mut doc, &id)?;
            warn_if_missing(outcome, &id);
            if outcome.applied() {
                doc.save(&cli.file)?;
                println!("Removed [{id}]");
                output::print_tree(&doc);
            }
        }
        Command::Move { from, to } => {
            let mut doc = load_document(&cli.file)?;
            mutate::reorder_root(&mut doc, to_zero_based(from), to_zero_based(to))?;
            doc.save(&cli.file)?;
            output::print_tree(&doc);
        }
        Command::Set { id, props } => {
            let mut doc = load_document(&cli.file)?;
            let parsed: serde_json::Value = serde_json::from_str(&props)?;
            let serde_json::Value::Object(bag) = parsed else {
                return Err("props must be a JSON object".into());
            };
            let outcome = mutate::patch_props(&mut doc, &id, bag)?;
            warn_if_missing(outcome, &id);
            if outcome.applied() {
                doc.save(&cli.file)?;
                output::print_tree(&doc);
            }
        }
        Command::Select { id } => {
            let mut doc = load_document(&cli.file)?;
            let outcome = mutate::select(&mut doc, id.as_deref());
            if let Some(id) = &id {
                warn_if_missing(outcome, id);
            }
            if outcome.applied() {
                doc.save(&cli.file)?;
                output::print_tree(&doc);
            }
        }
        Command::Show => {
            let doc = load_document(&cli.file)?;
            output::print_tree(&doc);
        }
        Command::Check => {
            let doc = load_document(&cli.file)?;
            let issues = doc.validate();
            output::print_check(&issues);
            if !issues.is_empty() {
                return Err(format!("document has {} issue(s)", issues.len()).into());
            }
        }
        Command::Export { name } => {
            let doc = load_document(&cli.file)?;
            let mut site = config::load(&cli.config)?;
            if let Some(name) = name {
                site.name = name;
            }
            let bundle = export::export(&doc, &site);
            bundle.write_to(&cli.output)?;
            output::print_export(&bundle, &cli.output);
        }
        Command::Publish { name, dest } => {
            let doc = load_document(&cli.file)?;
            let site = config::load(&cli.config)?;
            let project = name.unwrap_or_else(|| site.name.clone());
            let host = deploy::DirectoryHost::new(dest);
            let outcome = deploy::publish(&doc, &site, &project, &host)?;
            for message in &outcome.messages {
                println!("{message}");
            }
            match outcome.url {
                Some(url) if outcome.success => println!("Published at {url}"),
                _ if outcome.success => println!("Published"),
                _ => return Err("publish failed".into()),
            }
        }
        Command::Snapshot(cmd) => run_snapshot(cmd, &cli.file, &cli.store)?,
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn run_snapshot(
    cmd: SnapshotCommand,
    file: &Path,
    store_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        SnapshotCommand::Save { name } => {
            let doc = load_document(file)?;
            let mut snapshots = store::SnapshotStore::load(store_dir);
            snapshots.insert(&name, &doc);
            snapshots.save(store_dir)?;
            println!("Saved snapshot '{name}'");
        }
        SnapshotCommand::Restore { name } => {
            let snapshots = store::SnapshotStore::load(store_dir);
            let Some(snapshot) = snapshots.get(&name) else {
                return Err(format!("no snapshot named '{name}'").into());
            };
            snapshot.document.save(file)?;
            println!("Restored snapshot '{name}' to {}", file.display());
            output::print_tree(&snapshot.document);
        }
        SnapshotCommand::List => {
            let snapshots = store::SnapshotStore::load(store_dir);
            output::print_snapshots(&snapshots);
        }
        SnapshotCommand::Remove { name } => {
            let mut snapshots = store::SnapshotStore::load(store_dir);
            if !snapshots.remove(&name) {
                println!("Warning: no snapshot named '{name}'");
                return Ok(());
            }
            snapshots.save(store_dir)?;
            println!("Removed snapshot '{name}'");
        }
    }
    Ok(())
}

/// Load the document, with a pointer at `new` when the file is missing.
fn load_document(path: &Path) -> Result<Document, Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!(
            "{} not found (run `blocksmith new` to create a document)",
            path.display()
        )
        .into());
    }
    Ok(Document::load(path)?)
}

/// Convert the CLI's 1-based content positions to mutator indexes.
fn to_zero_based(position: usize) -> usize {
    position.saturating_sub(1)
}

/// Dangling ids are no-ops; tell the user nothing happened.
fn warn_if_missing(outcome: mutate::Outcome, id: &str) {
    if outcome == mutate::Outcome::NoTarget {
        println!("Warning: no node with id '{id}' — nothing changed");
    }
}
