use crate::{parser::Parser, PatchReport, Result, SqlPatchConfig};

pub struct ReWriter;

impl ReWriter {
    /// Line-oriented rewrite of the single upsert statement described by
    /// `config`. A flag tracks whether the scan is inside the statement;
    /// everything outside it is copied through with its original bytes
    /// and line terminator.
    pub fn rewrite(config: &SqlPatchConfig, input: &str) -> Result<(String, PatchReport)> {
        let mut out = String::with_capacity(input.len());
        let mut matched = false;
        let mut lines_changed = 0;
        let mut in_statement = false;

        for segment in input.split_inclusive('\n') {
            let line = segment.trim_end_matches('\n').trim_end_matches('\r');
            let term = &segment[line.len()..];
            let trimmed = line.trim();

            if trimmed.starts_with(config.statement_prefix.as_str()) {
                in_statement = true;
                matched = true;
                out.push_str(&config.insert_line());
                out.push_str(term);
                lines_changed += 1;
            } else if in_statement && trimmed.starts_with("VALUES") {
                let values = Parser::value_list(trimmed)?;
                let mut list: Vec<&str> = values
                    .iter()
                    .take(config.keep_values)
                    .map(|s| s.as_str())
                    .collect();
                list.extend(config.append_values.iter().map(|s| s.as_str()));

                log::trace!("Rewrite values {:?} -> {:?}", values, list);

                out.push_str("  VALUES (");
                out.push_str(&list.join(", "));
                out.push(')');
                out.push_str(term);
                lines_changed += 1;
            } else if in_statement && trimmed.starts_with("ON DUPLICATE KEY UPDATE") {
                out.push_str("  ON DUPLICATE KEY UPDATE");
                out.push_str(term);
                for (i, col) in config.update_columns.iter().enumerate() {
                    out.push_str("  ");
                    out.push_str(col);
                    out.push_str(" = VALUES(");
                    out.push_str(col);
                    out.push(')');
                    if i + 1 < config.update_columns.len() {
                        out.push(',');
                    }
                    out.push_str(term);
                }
                lines_changed += 1;
            } else if in_statement && trimmed.ends_with(';') {
                out.push(';');
                out.push_str(term);
                in_statement = false;
                lines_changed += 1;
            } else if in_statement {
                // Old column list and old update clauses: dropped
                lines_changed += 1;
            } else {
                out.push_str(segment);
            }
        }

        Ok((
            out,
            PatchReport {
                matched,
                lines_changed,
            },
        ))
    }
}
