//! Comma splitting for a single input line
//!
//! Double quotes open a quoted cell only at the start of a cell. Inside a
//! quoted cell `""` is a literal quote and commas do not split. A quote left
//! open runs to the end of the line, so every line yields cells.

/// Splits one line into cells. Cells are returned untrimmed.
pub fn split_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut cell_start = true;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
            continue;
        }

        match c {
            ',' => {
                cells.push(std::mem::take(&mut current));
                cell_start = true;
            }
            '"' if cell_start => {
                in_quotes = true;
                cell_start = false;
            }
            _ => {
                current.push(c);
                cell_start = false;
            }
        }
    }

    cells.push(current);
    cells
}
