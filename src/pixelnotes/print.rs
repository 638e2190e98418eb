use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use pixelnotes::model::Note;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 16;

pub(crate) fn print_notes(notes: &[Note], relative_times: bool) {
    if notes.is_empty() {
        println!("No notes found.");
        return;
    }

    for (i, note) in notes.iter().enumerate() {
        let idx_str = format!("{}. ", i + 1);
        let time_str = format_updated(note.updated, relative_times);

        let body_preview: String = note
            .body
            .chars()
            .take(50)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let line = if body_preview.is_empty() {
            note.display_title().to_string()
        } else {
            format!("{} {}", note.display_title(), body_preview)
        };

        let available = LINE_WIDTH.saturating_sub(idx_str.width() + TIME_WIDTH + 2);
        let shown = truncate_to_width(&line, available);
        let padding = available.saturating_sub(shown.width());

        println!(
            "{}{}{}  {}",
            idx_str,
            shown,
            " ".repeat(padding),
            time_str.dimmed()
        );
    }
}

pub(crate) fn print_note(index: usize, note: &Note, relative_times: bool) {
    println!(
        "{} {}",
        format!("{}.", index).yellow(),
        note.display_title().bold()
    );
    println!(
        "{}",
        format_updated(note.updated, relative_times).dimmed()
    );
    println!("--------------------------------");
    println!("{}", note.body);
}

fn format_updated(updated: DateTime<Utc>, relative: bool) -> String {
    if relative {
        let elapsed = (Utc::now() - updated).to_std().unwrap_or_default();
        Formatter::new().convert(elapsed)
    } else {
        updated
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string()
    }
}

fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
