mod parser;
mod rewriter;
mod writer;

use rewriter::ReWriter;
use std::path::Path;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

pub struct SqlPatchConfig {
    pub statement_prefix: String,
    pub columns: Vec<String>,
    pub keep_values: usize,
    pub append_values: Vec<String>,
    pub update_columns: Vec<String>,
}

impl SqlPatchConfig {
    /// Rewrite plan for the datai_configuration upsert: the old
    /// (config_key .. create_dept, tenant_id) column list becomes the
    /// 12-column list with environment/sensitivity flags, keeping the
    /// first 7 positional values and appending literals for the rest.
    pub fn datai_configuration() -> Self {
        Self {
            statement_prefix: "INSERT INTO datai_configuration".to_string(),
            columns: vec![
                "config_key",
                "config_value",
                "create_by",
                "create_time",
                "update_by",
                "update_time",
                "remark",
                "environment_id",
                "is_sensitive",
                "is_encrypted",
                "is_active",
                "tenant_id",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            keep_values: 7,
            append_values: vec!["NULL", "0", "0", "1", "'1'"]
                .into_iter()
                .map(String::from)
                .collect(),
            update_columns: vec![
                "config_value",
                "update_by",
                "update_time",
                "remark",
                "environment_id",
                "is_sensitive",
                "is_encrypted",
                "is_active",
                "tenant_id",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }

    pub(crate) fn insert_line(&self) -> String {
        format!("{} ({})", self.statement_prefix, self.columns.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub matched: bool,
    pub lines_changed: usize,
}

pub struct SqlPatch {
    config: SqlPatchConfig,
}

impl SqlPatch {
    pub fn new(config: SqlPatchConfig) -> Result<Self> {
        // Every column must be covered by a kept or an appended value
        let covered = config.keep_values + config.append_values.len();
        if covered != config.columns.len() {
            return Err(format!(
                "{} kept + {} appended values do not cover {} columns",
                config.keep_values,
                config.append_values.len(),
                config.columns.len()
            )
            .into());
        }

        Ok(Self { config })
    }

    /// Applies the rewrite to `input` and returns the new text together
    /// with a report. Lines outside the target statement pass through
    /// byte-for-byte.
    pub fn patch_str(&self, input: &str) -> Result<(String, PatchReport)> {
        ReWriter::rewrite(&self.config, input)
    }

    /// Reads the file at `path`, rewrites it and replaces it atomically.
    /// A run that matched nothing leaves the file untouched and reports
    /// `matched: false`.
    pub fn patch_file<P: AsRef<Path>>(&self, path: P) -> Result<PatchReport> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path)?;
        let (output, report) = ReWriter::rewrite(&self.config, &input)?;

        if !report.matched {
            log::warn!(
                "No '{}' statement in {:?}, file left unchanged",
                self.config.statement_prefix,
                path
            );
            return Ok(report);
        }

        writer::write_atomic(path, &output)?;
        log::debug!("Patched {:?}: {} lines changed", path, report.lines_changed);

        Ok(report)
    }
}
