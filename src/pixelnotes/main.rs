use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use pixelnotes::clock::SystemClock;
use pixelnotes::config::NotesConfig;
use pixelnotes::editor::{edit_note, EditorContent};
use pixelnotes::error::{NotesError, Result};
use pixelnotes::notebook::Notebook;
use pixelnotes::store::fs::FileStore;
use std::path::PathBuf;
use uuid::Uuid;

mod args;
mod print;

use args::{Cli, Commands};

static LONG_VERSION: Lazy<String> = Lazy::new(|| {
    format!(
        "{} (commit {} {})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("GIT_COMMIT_DATE")
    )
});

pub(crate) fn long_version() -> &'static str {
    &LONG_VERSION
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    notebook: Notebook<FileStore, SystemClock>,
    config: NotesConfig,
    data_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::New {
            title,
            body,
            no_editor,
        }) => handle_new(&mut ctx, title, body, no_editor),
        Some(Commands::List { search }) => handle_list(&ctx, search.as_deref()),
        Some(Commands::Search { term }) => handle_list(&ctx, Some(&term)),
        Some(Commands::View { index }) => handle_view(&mut ctx, index),
        Some(Commands::Edit {
            index,
            title,
            body,
            no_editor,
        }) => handle_edit(&mut ctx, index, title, body, no_editor),
        Some(Commands::Delete { index }) => handle_delete(&mut ctx, index),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&ctx, None),
    }
}

fn init_context() -> Result<AppContext> {
    let data_dir = resolve_data_dir()?;
    let config = NotesConfig::load(&data_dir).unwrap_or_default();
    let store = FileStore::new(data_dir.clone());
    let notebook = Notebook::open(store, SystemClock)?;

    Ok(AppContext {
        notebook,
        config,
        data_dir,
    })
}

fn resolve_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("PIXELNOTES_DATA") {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    let proj_dirs = ProjectDirs::from("com", "pixelnotes", "pixelnotes")
        .ok_or_else(|| NotesError::Store("Could not determine data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

/// Resolves a 1-based listing position to a note id. Positions follow
/// the recency ordering shown by `list`.
fn note_id_at(ctx: &AppContext, index: usize) -> Result<Uuid> {
    let listed = ctx.notebook.search("");
    index
        .checked_sub(1)
        .and_then(|i| listed.get(i))
        .map(|n| n.id)
        .ok_or_else(|| NotesError::Api(format!("No note at index {}", index)))
}

fn handle_new(
    ctx: &mut AppContext,
    title: Option<String>,
    body: Option<String>,
    no_editor: bool,
) -> Result<()> {
    ctx.notebook.begin_new();

    let (title, body) = if no_editor {
        (title.unwrap_or_default(), body.unwrap_or_default())
    } else {
        let initial = EditorContent::new(title.unwrap_or_default(), body.unwrap_or_default());
        let edited = edit_note(&initial, ctx.config.editor.as_deref())?;
        (edited.title, edited.body)
    };

    let note = ctx.notebook.save_active(&title, &body)?;
    println!(
        "{}",
        format!("Note saved: {}", note.display_title()).green()
    );
    Ok(())
}

fn handle_list(ctx: &AppContext, term: Option<&str>) -> Result<()> {
    let notes = ctx.notebook.search(term.unwrap_or(""));
    print::print_notes(&notes, ctx.config.relative_times);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, index: usize) -> Result<()> {
    let id = note_id_at(ctx, index)?;
    let note = ctx.notebook.select(id)?.clone();
    print::print_note(index, &note, ctx.config.relative_times);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    index: usize,
    title: Option<String>,
    body: Option<String>,
    no_editor: bool,
) -> Result<()> {
    let id = note_id_at(ctx, index)?;
    let current = ctx.notebook.select(id)?.clone();

    let (title, body) = if no_editor {
        (title.unwrap_or(current.title), body.unwrap_or(current.body))
    } else {
        let initial = EditorContent::new(title.unwrap_or(current.title), body.unwrap_or(current.body));
        let edited = edit_note(&initial, ctx.config.editor.as_deref())?;
        (edited.title, edited.body)
    };

    let note = ctx.notebook.save_active(&title, &body)?;
    println!(
        "{}",
        format!("Note updated: {}", note.display_title()).green()
    );
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, index: usize) -> Result<()> {
    let id = note_id_at(ctx, index)?;
    let title = ctx.notebook.select(id)?.display_title().to_string();
    ctx.notebook.delete_active()?;
    println!("{}", format!("Note deleted: {}", title).green());
    Ok(())
}

fn handle_config(
    ctx: &mut AppContext,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    match (key, value) {
        (None, _) => {
            println!("editor = {}", ctx.config.get("editor")?);
            println!("relative-times = {}", ctx.config.get("relative-times")?);
            Ok(())
        }
        (Some(key), None) => {
            println!("{}", ctx.config.get(&key)?);
            Ok(())
        }
        (Some(key), Some(value)) => {
            ctx.config.set(&key, &value)?;
            ctx.config.save(&ctx.data_dir)?;
            println!("{}", format!("Set {} = {}", key, value).green());
            Ok(())
        }
    }
}
