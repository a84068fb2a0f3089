use crate::Result;

pub struct Parser {}

impl Parser {
    /// Extracts the tokens between the first '(' and the last ')' of a
    /// VALUES line, split on the literal `, ` separator. Quoted strings
    /// containing `, ` are NOT understood; positions shift if one occurs.
    pub fn value_list(line: &str) -> Result<Vec<String>> {
        let open = line
            .find('(')
            .ok_or(format!("No value list in line '{}'", line))?;
        let inner = match line.rfind(')') {
            Some(close) if close > open => &line[open + 1..close],
            // Open parenthesis only, take the rest of the line
            _ => &line[open + 1..],
        };

        let inner = inner.trim();
        if inner.is_empty() {
            return Ok(vec![]);
        }

        Ok(inner.split(", ").map(|s| s.to_string()).collect())
    }
}
