use sqlpatch::{SqlPatch, SqlPatchConfig};

const MIGRATION_SQL: &str = r#"-- Salesforce configuration seed
INSERT INTO datai_configuration (config_key, config_value, create_by, create_time, update_by, update_time, remark, create_dept, tenant_id)
VALUES ('sf.api.endpoint', 'https://login.salesforce.com', 'admin', NOW(), 'admin', NOW(), 'Salesforce API endpoint', 103, '000000')
ON DUPLICATE KEY UPDATE
  config_value = VALUES(config_value),
  update_by = VALUES(update_by),
  update_time = VALUES(update_time),
  remark = VALUES(remark),
  create_dept = VALUES(create_dept),
  tenant_id = VALUES(tenant_id)
;
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    std::fs::create_dir_all("/tmp/sqlpatch")?;
    let path = "/tmp/sqlpatch/salesforce_configuration.sql";
    std::fs::write(path, MIGRATION_SQL)?;

    let patch = SqlPatch::new(SqlPatchConfig::datai_configuration())?;
    let report = patch.patch_file(path)?;

    println!(
        "matched: {}, lines changed: {}",
        report.matched, report.lines_changed
    );
    println!("{}", std::fs::read_to_string(path)?);

    Ok(())
}
