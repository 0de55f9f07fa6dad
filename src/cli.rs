//! Diagnostics CLI: scan a route directory, or explain how one path is
//! classified.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::pattern::{ExtensionSet, ParseOutcome, Style};
use crate::router::{FrameworkRouter, ScanOptions};

#[derive(Parser)]
#[command(name = "fsrouter")]
#[command(about = "File-system router CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a route directory and print the routing tree as JSON
    Scan {
        /// Route root directory (e.g. src/pages)
        #[arg(short, long)]
        root: PathBuf,

        /// Naming style: nextjs-pages, nextjs-app-ui, or nextjs-app-routes
        #[arg(short, long, default_value = "nextjs-pages")]
        style: String,

        /// Skip underscore-prefixed directories and non-reserved files
        #[arg(long, default_value_t = false)]
        ignore_underscores: bool,

        /// Recognize every extension instead of the style's source set
        #[arg(long, default_value_t = false)]
        any_extension: bool,
    },
    /// Classify a single relative path and report the result
    Check {
        /// Naming style: nextjs-pages, nextjs-app-ui, or nextjs-app-routes
        #[arg(short, long, default_value = "nextjs-pages")]
        style: String,

        /// Path relative to the route root (e.g. /blog/[slug].tsx)
        path: String,
    },
}

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Scan {
            root,
            style,
            ignore_underscores,
            any_extension,
        } => {
            let style: Style = style.parse()?;
            let options = ScanOptions {
                ignore_underscores: *ignore_underscores,
                extensions: any_extension.then_some(ExtensionSet::Any),
                ..ScanOptions::default()
            };
            let router = FrameworkRouter::with_options(root, style, options);
            let tree = router
                .scan()
                .with_context(|| format!("failed to scan {}", root.display()))?;
            println!("{}", serde_json::to_string_pretty(&tree.to_json())?);
            Ok(())
        }
        Commands::Check { style, path } => {
            let style: Style = style.parse()?;
            match crate::pattern::parse(style, path) {
                ParseOutcome::Route { role, pattern } => {
                    let shown = if pattern.is_empty() { "/" } else { pattern.as_str() };
                    println!("{role}: {shown}");
                    Ok(())
                }
                ParseOutcome::NotARoute => {
                    println!("not a route under style {style}");
                    Ok(())
                }
                ParseOutcome::Invalid(err) => {
                    // Underline the offending span the way an editor would.
                    eprintln!("error: {}", err.message());
                    eprintln!("  {path}");
                    eprintln!("  {}{}", " ".repeat(err.column), "^".repeat(err.length.max(1)));
                    anyhow::bail!("{err}");
                }
            }
        }
    }
}
