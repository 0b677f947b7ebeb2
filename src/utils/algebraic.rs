//! Board coordinate naming for rendering and generated sessions.
//!
//! Converts between `(file, rank)` indices and names such as `e4`. Files run
//! `a..=z` and ranks `1..=99`. The move list engine itself never validates
//! cells against these names.

pub const MAX_BOARD_FILES: u8 = 26;
pub const MAX_BOARD_RANKS: u8 = 99;

/// Reject board sizes outside `1..=26` files and `1..=99` ranks.
#[inline]
pub fn check_board_size(files: u8, ranks: u8) -> Result<(), String> {
    if files == 0 || files > MAX_BOARD_FILES {
        return Err(format!(
            "Board file count must be 1..={MAX_BOARD_FILES}, got {files}"
        ));
    }
    if ranks == 0 || ranks > MAX_BOARD_RANKS {
        return Err(format!(
            "Board rank count must be 1..={MAX_BOARD_RANKS}, got {ranks}"
        ));
    }
    Ok(())
}

/// Convert zero-based `(file, rank)` to a square name (for example `(4, 3)` -> `"e4"`).
#[inline]
pub fn square_name(file: u8, rank: u8) -> Result<String, String> {
    if file >= MAX_BOARD_FILES {
        return Err(format!("Square file index out of bounds: {file}"));
    }
    if rank >= MAX_BOARD_RANKS {
        return Err(format!("Square rank index out of bounds: {rank}"));
    }

    let file_char = char::from(b'a' + file);
    Ok(format!("{file_char}{}", u16::from(rank) + 1))
}

/// Convert a square name (for example `"e4"`) to zero-based `(file, rank)`.
pub fn parse_square(square: &str) -> Result<(u8, u8), String> {
    let bytes = square.as_bytes();
    if !(2..=3).contains(&bytes.len()) {
        return Err(format!("Invalid square name: {square}"));
    }

    let file = bytes[0];
    if !file.is_ascii_lowercase() {
        return Err(format!("Invalid square file: {}", file as char));
    }

    let rank_text = &square[1..];
    if rank_text.starts_with('0') || !rank_text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("Invalid square rank: {rank_text}"));
    }
    let rank = rank_text
        .parse::<u8>()
        .map_err(|_| format!("Invalid square rank: {rank_text}"))?;
    if rank > MAX_BOARD_RANKS {
        return Err(format!("Invalid square rank: {rank_text}"));
    }

    Ok((file - b'a', rank - 1))
}

/// All square names of a `files` x `ranks` board, rank 1 first, files left to right.
pub fn board_squares(files: u8, ranks: u8) -> Result<Vec<String>, String> {
    check_board_size(files, ranks)?;

    let mut squares = Vec::with_capacity(usize::from(files) * usize::from(ranks));
    for rank in 0..ranks {
        for file in 0..files {
            squares.push(square_name(file, rank)?);
        }
    }
    Ok(squares)
}
