use anyhow::Result;
use lproj_lint::{AuditConfig, Runner};

/// Run the audit and print the report. Returns whether every file passed.
pub fn check_command(config: AuditConfig) -> Result<bool> {
    println!(
        "Checking localized strings in: {} (base language: {})",
        config.root.display(),
        config.base_locale
    );

    let runner = Runner::new(config);
    let result = runner.run()?;

    print!("{}", result.render(Some(&runner.config().root)));
    Ok(result.is_success())
}
