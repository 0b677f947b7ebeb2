//! Movetext read/write for sharing a move list as plain text.
//!
//! Writes bracketed headers followed by numbered movetext (`1. e2 e4 2. g1`)
//! and parses the same format back by replaying every cell through
//! `MoveListStore::add_square`.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};

use crate::move_list::move_list_store::MoveListStore;

pub const DEFAULT_EVENT_NAME: &str = "Move List Session";

#[derive(Debug, Clone)]
pub struct MoveTextGame {
    pub headers: BTreeMap<String, String>,
    pub store: MoveListStore,
}

/// Write with `Event`, `Date` (today, local time) and `Moves` headers.
pub fn write_move_text_today(store: &MoveListStore, event: &str) -> Result<String, String> {
    write_move_text_with_date(store, event, Local::now().date_naive())
}

pub fn write_move_text_with_date(
    store: &MoveListStore,
    event: &str,
    date: NaiveDate,
) -> Result<String, String> {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), event.to_owned());
    headers.insert("Date".to_owned(), date.format("%Y.%m.%d").to_string());
    headers.insert("Moves".to_owned(), store.moves().len().to_string());

    write_move_text(store, &headers)
}

pub fn write_move_text(
    store: &MoveListStore,
    headers: &BTreeMap<String, String>,
) -> Result<String, String> {
    let mut out = String::new();

    for (key, value) in headers {
        if key.is_empty() || key.contains(char::is_whitespace) {
            return Err(format!("Invalid movetext header key: {key:?}"));
        }
        if value.contains(['\n', '\r']) {
            return Err(format!("Movetext header {key} value spans lines: {value:?}"));
        }
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_header_value(value)));
    }
    out.push('\n');

    let mut parts = Vec::<String>::with_capacity(store.move_history().len() * 3);
    for formatted in store.moves() {
        check_writable_cell(&formatted.first_cell)?;
        parts.push(formatted.move_number);
        parts.push(formatted.first_cell);
        if !formatted.second_cell.is_empty() {
            check_writable_cell(&formatted.second_cell)?;
            parts.push(formatted.second_cell);
        }
    }
    out.push_str(&parts.join(" "));
    out.push('\n');

    Ok(out)
}

pub fn read_move_text(text: &str) -> Result<MoveTextGame, String> {
    let mut headers = BTreeMap::<String, String>::new();
    let mut movetext_lines = Vec::<&str>::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('[') {
            let (key, value) = parse_header_line(trimmed)?;
            headers.insert(key, value);
        } else {
            movetext_lines.push(trimmed);
        }
    }

    let mut store = MoveListStore::new();
    let mut dangling_number = None;
    for token in movetext_lines.iter().flat_map(|line| line.split_whitespace()) {
        if let Some(number) = move_number_token(token) {
            let history = store.move_history();
            if history.last().is_some_and(|pair| pair.is_pending()) {
                return Err(format!(
                    "Move {} has no second cell but is followed by {token}",
                    history.len()
                ));
            }
            if number != history.len() + 1 {
                return Err(format!(
                    "Expected move number {}. but found {token}",
                    history.len() + 1
                ));
            }
            dangling_number = Some(token);
            continue;
        }

        dangling_number = None;
        store.add_square(token);
    }

    if let Some(token) = dangling_number {
        return Err(format!("Movetext ends with move number {token} and no cells"));
    }

    Ok(MoveTextGame { headers, store })
}

fn parse_header_line(line: &str) -> Result<(String, String), String> {
    if !line.starts_with('[') || !line.ends_with(']') || line.len() < 2 {
        return Err(format!("Invalid movetext header line: {line}"));
    }
    let inner = &line[1..line.len() - 1];
    let mut parts = inner.splitn(2, ' ');
    let key = parts
        .next()
        .filter(|key| !key.is_empty())
        .ok_or_else(|| format!("Invalid movetext header key: {line}"))?;
    let value_raw = parts
        .next()
        .ok_or_else(|| format!("Invalid movetext header value: {line}"))?
        .trim();

    if !value_raw.starts_with('"') || !value_raw.ends_with('"') || value_raw.len() < 2 {
        return Err(format!("Invalid quoted movetext header value: {line}"));
    }
    let value = value_raw[1..value_raw.len() - 1].replace("\\\"", "\"");
    Ok((key.to_owned(), value))
}

/// `"12."` -> `Some(12)`.
fn move_number_token(token: &str) -> Option<usize> {
    let digits = token.strip_suffix('.')?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn check_writable_cell(cell: &str) -> Result<(), String> {
    if cell.is_empty() {
        return Err("Cannot write an empty cell as movetext".to_owned());
    }
    if cell.contains(char::is_whitespace) {
        return Err(format!("Cannot write cell containing whitespace: {cell:?}"));
    }
    if move_number_token(cell).is_some() || cell.starts_with('[') {
        return Err(format!("Cell would be read back as markup: {cell:?}"));
    }
    Ok(())
}

fn escape_header_value(value: &str) -> String {
    value.replace('"', "\\\"")
}
