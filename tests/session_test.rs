mod common;

use anyhow::Result;
use common::plain_service;
use tally::cli::Session;
use tally::domain::Amount;
use tempfile::TempDir;

fn run_script(service: &mut tally::LedgerService, script: &str) -> Result<String> {
    let mut out = Vec::new();
    Session::new(service, script.as_bytes(), &mut out).run()?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_session_starts_with_empty_screen() -> Result<()> {
    let mut service = plain_service();
    let text = run_script(&mut service, "")?;

    assert!(text.starts_with("Income:   0.00\n"));
    assert!(text.contains("Balance:  0.00\n"));
    assert!(text.ends_with("No transactions\n"));
    Ok(())
}

#[test]
fn test_session_records_and_rerenders() -> Result<()> {
    let mut service = plain_service();
    let text = run_script(
        &mut service,
        "income 50\n+ 10 gift from  grandma\nexpense 20.5 coffee\n",
    )?;

    assert!(text.contains("* Added income: 50.00"));
    assert!(text.contains("* Added expense: 20.50"));

    // Last screen shows the newest entry first
    let last_screen = text.rsplit("Income:").next().unwrap_or_default();
    let entries: Vec<&str> = last_screen.lines().skip(4).collect();
    assert_eq!(
        entries,
        [
            "🔴 coffee: -20.50",
            "🟢 gift from  grandma: +10.00",
            "🟢 income: +50.00"
        ]
    );
    assert_eq!(service.summary().balance, Amount::new(395, 1));
    Ok(())
}

#[test]
fn test_session_clear() -> Result<()> {
    let mut service = plain_service();
    let text = run_script(&mut service, "in 5\nout 2\nclear\nsummary\n")?;

    assert!(text.contains("* All data cleared"));
    assert!(text.ends_with("No transactions\n"));
    assert!(service.ledger().is_empty());
    Ok(())
}

#[test]
fn test_session_export_to_files() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let csv_path = temp_dir.path().join("entries.csv");
    let json_path = temp_dir.path().join("entries.json");

    let mut service = plain_service();
    let script = format!(
        "income 100 salary\nexpense 40\nexport csv {}\nexport json {}\nexport xml\n",
        csv_path.display(),
        json_path.display()
    );
    let text = run_script(&mut service, &script)?;

    assert!(text.contains("Exported 2 entries to"));
    assert!(text.contains("Unknown export format: xml"));

    let csv = std::fs::read_to_string(&csv_path)?;
    assert_eq!(
        csv,
        "kind,description,amount\nexpense,expense,40.00\nincome,salary,100.00\n"
    );

    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&json_path)?)?;
    assert_eq!(json["balance"], "60");
    assert_eq!(json["entries"].as_array().map(Vec::len), Some(2));
    Ok(())
}

#[test]
fn test_session_export_to_output() -> Result<()> {
    let mut service = plain_service();
    let text = run_script(&mut service, "income 1 a\nexport csv\n")?;

    assert!(text.contains("kind,description,amount\nincome,a,1.00\n"));
    Ok(())
}

#[test]
fn test_session_survives_a_failed_export() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("missing").join("x.csv");

    let mut service = plain_service();
    let script = format!(
        "income 50\nexport csv {}\nincome 7\n",
        missing.display()
    );
    let text = run_script(&mut service, &script)?;

    assert!(text.contains("! Failed to create file:"));
    assert!(text.contains("* Added income: 7.00"));
    assert_eq!(service.ledger().len(), 2);
    assert_eq!(service.summary().total_income, Amount::new(57, 0));
    Ok(())
}
