use crate::db::journal::load_entries;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// Color by recorded operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "start" => Colour::Green,
        "stop" => Colour::Red,
        "add" => Colour::Yellow,
        "list" => Colour::Cyan,
        "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct JournalLogic;

impl JournalLogic {
    pub fn print_journal(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_entries(pool)?;

        if entries.is_empty() {
            println!("📜 Journal is empty.");
            return Ok(());
        }

        let op_w = entries
            .iter()
            .map(|e| {
                if e.target.is_empty() {
                    e.operation.len()
                } else {
                    e.operation.len() + e.target.len() + 3
                }
            })
            .max()
            .unwrap_or(10)
            .min(60);

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);

        println!("📜 Journal:\n");

        for e in entries {
            let color = color_for_operation(&e.operation);

            let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(e.date);

            let op_target = if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            };

            // truncate on visible length, then re-color only the operation word
            let visible = strip_ansi(&op_target);
            let truncated = if visible.len() > 60 {
                let mut s = visible.chars().take(57).collect::<String>();
                s.push_str("...");
                s
            } else {
                visible
            };

            let colored = if let Some((op_word, rest)) = truncated.split_once(' ') {
                format!("{} {}", color.paint(op_word), rest)
            } else {
                color.paint(truncated.as_str()).to_string()
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).len()));

            println!(
                "{:>id_w$}  {}  {}{}  {}",
                e.id,
                date,
                colored,
                padding,
                e.message,
                id_w = id_w
            );
        }

        Ok(())
    }
}
