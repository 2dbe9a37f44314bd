use anyhow::{bail, Context, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    Move(usize, usize),
    Restart,
    Quit,
}

/// Parses one line of terminal input: `row col` (0-based, space or comma
/// separated), `r` to restart or `q` to quit.
pub(crate) fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "q" | "quit" => return Ok(Command::Quit),
        "r" | "restart" => return Ok(Command::Restart),
        _ => {}
    }

    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());
    let (row, col) = match (parts.next(), parts.next(), parts.next()) {
        (Some(row), Some(col), None) => (row, col),
        _ => bail!("expected a move as `row col`, e.g. `1 1`"),
    };
    let row: usize = row.parse().with_context(|| format!("invalid row '{}'", row))?;
    let col: usize = col.parse().with_context(|| format!("invalid column '{}'", col))?;
    if row > 2 || col > 2 {
        bail!("rows and columns go from 0 to 2");
    }

    Ok(Command::Move(row, col))
}
