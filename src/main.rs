//! Prismify Templates CLI
//!
//! Usage:
//!   prismify-templates [OPTIONS] <COMMAND>
//!
//! Commands:
//!   list        List templates, optionally filtered
//!   panel       Quick-pick listing searched by name, cut to the panel limit
//!   show        Show one template as JSON
//!   categories  List gallery categories
//!   apply       Apply a template to the editor state file
//!   save        Save the editor state as a custom template
//!   remove      Remove a custom template
//!
//! Options:
//!   -c, --config <FILE>  Gallery configuration (TOML format)
//!   -s, --state <FILE>   Editor state file (JSON format)

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use prismify_templates::config::DisplayConfig;
use prismify_templates::search::{
    filter_templates, truncate, CategoryFilter, SearchScope, TemplateQuery,
};
use prismify_templates::{open_store, Category, EditorState, GalleryConfig, Template, TemplateError};

#[derive(Parser)]
#[command(name = "prismify-templates")]
#[command(about = "Browse, apply, and save Prismify canvas templates")]
struct Cli {
    /// Gallery configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Editor state file (JSON format); created on first apply
    #[arg(short, long, default_value = "prismify-state.json")]
    state: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List templates, optionally filtered by category and search text
    List {
        /// all, custom, or a category slug
        #[arg(long, default_value = "all")]
        category: CategoryFilter,

        /// Case-insensitive search over name, description, and tags
        #[arg(long, default_value = "")]
        search: String,

        /// Show at most this many templates (defaults to no limit)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Quick-pick listing matched on name only, cut to the configured panel limit
    Panel {
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Show one template as JSON
    Show { id: String },
    /// List gallery categories
    Categories,
    /// Apply a template to the editor state
    Apply { id: String },
    /// Save the current editor state as a custom template
    Save {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long, default_value = "social-media")]
        category: Category,
    },
    /// Remove a custom template
    Remove { id: String },
}

fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match GalleryConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => GalleryConfig::default(),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    if let Err(e) = run(&cli, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &GalleryConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(config)?;

    match &cli.command {
        Command::List {
            category,
            search,
            limit,
        } => {
            let query = TemplateQuery::new()
                .with_text(search.as_str())
                .with_category(*category);
            let matches = filter_templates(store.all_templates(), &query);
            let page = truncate(&matches, limit.unwrap_or(usize::MAX));
            for template in page.shown {
                println!("{}", format_row(template, &config.gallery));
            }
            if let Some(more) = page.overflow_label() {
                println!("{} more templates", more);
            }
            if matches.is_empty() {
                println!("No templates found");
            }
        }
        Command::Panel { search } => {
            let query = TemplateQuery::new()
                .with_text(search.as_str())
                .with_scope(SearchScope::Name);
            let matches = filter_templates(store.all_templates(), &query);
            let page = config.gallery.panel(&matches);
            for template in page.shown {
                println!("{}", format_row(template, &config.gallery));
            }
            if let Some(more) = page.overflow_label() {
                println!("{} more", more);
            }
            if matches.is_empty() {
                println!("No templates found");
            }
        }
        Command::Show { id } => {
            let template = store
                .find(id)
                .ok_or_else(|| TemplateError::NotFound { id: id.clone() })?;
            println!("{}", serde_json::to_string_pretty(template)?);
        }
        Command::Categories => {
            for tab in CategoryFilter::tabs() {
                println!("{:<14} {}", tab.as_str(), tab.label());
            }
        }
        Command::Apply { id } => {
            let mut editor = EditorState::load(&cli.state)?;
            let applied = store.apply_template_by_id(id, &mut editor.context())?;
            println!(
                "Applied '{}' ({}x{})",
                applied.name, applied.config.canvas.width, applied.config.canvas.height
            );
            editor.save(&cli.state)?;
        }
        Command::Save {
            name,
            description,
            category,
        } => {
            let mut editor = EditorState::load(&cli.state)?;
            let saved =
                store.save_as_template(name.trim(), description.trim(), *category, &editor.context())?;
            println!("Saved '{}' as {}", saved.name, saved.id);
        }
        Command::Remove { id } => {
            if store.remove_custom_template(id)? {
                println!("Removed {}", id);
            } else {
                println!("No custom template with id {}", id);
            }
        }
    }

    Ok(())
}

fn format_row(template: &Template, display: &DisplayConfig) -> String {
    let tags = display.tag_chips(&template.tags);
    let mut tag_list = tags.shown.join(", ");
    if let Some(more) = tags.overflow_label() {
        tag_list.push_str(&format!(", {}", more));
    }
    let marker = if template.is_custom { "*" } else { " " };
    format!(
        "{}{:<26} {:<13} {:>4}x{:<4} [{}]",
        marker,
        template.id,
        template.category,
        template.config.canvas.width,
        template.config.canvas.height,
        tag_list
    )
}
