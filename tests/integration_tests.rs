use anyhow::Result;
use lot_sizer::core::pipeline::{NO_CHART_DATA, NO_TABLE_DATA, PROMPT};
use lot_sizer::render::chart::CHART_FILE_NAME;
use lot_sizer::{LocalStorage, LotPipeline, ReportEngine, TerminalConsole};
use tempfile::TempDir;

fn run(input: &str, output_dir: &TempDir) -> Result<(lot_sizer::core::LoadSummary, String)> {
    let storage = LocalStorage::new(output_dir.path().to_str().unwrap().to_string());
    let console = TerminalConsole::new(input.as_bytes(), Vec::new());
    let mut engine = ReportEngine::new(LotPipeline::new(console, storage));

    let summary = engine.run()?;

    let (console, _) = engine.into_pipeline().into_parts();
    let stdout = String::from_utf8(console.into_writer())?;
    Ok((summary, stdout))
}

#[test]
fn test_end_to_end_report_with_chart() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let (summary, stdout) = run("2000,3000,5000\n", &temp_dir)?;

    assert_eq!(summary.rows, 3);
    assert_eq!(summary.solved, 3);
    assert_eq!(summary.chart_path.as_deref(), Some(CHART_FILE_NAME));

    let chart = std::fs::read(temp_dir.path().join(CHART_FILE_NAME))?;
    assert!(chart.starts_with(&[0x89, b'P', b'N', b'G']));

    assert!(stdout.starts_with(PROMPT));
    assert!(stdout.contains(&format!("Chart generated: {}", CHART_FILE_NAME)));
    assert!(stdout.contains("Lot parameters"));
    for area in ["2000", "3000", "5000"] {
        assert!(stdout.contains(&format!(" {} ", area)));
    }
    Ok(())
}

#[test]
fn test_invalid_tokens_are_dropped_and_unsolvable_rows_kept() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let (summary, stdout) = run("2000, abc, -50, 3.5, 3000, 100", &temp_dir)?;

    // 2000, 3000 and 100 survive parsing; 100 has no solution.
    assert_eq!(summary.rows, 3);
    assert_eq!(summary.solved, 2);
    assert!(!stdout.contains("abc"));
    assert!(stdout.contains(" 100 "));
    assert!(stdout.contains("n/a"));
    Ok(())
}

#[test]
fn test_blank_input_skips_chart_and_table() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let (summary, stdout) = run(" , , \n", &temp_dir)?;

    assert_eq!(summary.rows, 0);
    assert_eq!(summary.chart_path, None);
    assert!(!temp_dir.path().join(CHART_FILE_NAME).exists());
    assert!(stdout.contains(NO_CHART_DATA));
    assert!(stdout.contains(NO_TABLE_DATA));
    assert!(!stdout.contains("Lot parameters"));
    Ok(())
}

#[test]
fn test_eof_behaves_like_blank_input() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let (summary, stdout) = run("", &temp_dir)?;

    assert_eq!(summary.rows, 0);
    assert!(stdout.contains(NO_TABLE_DATA));
    Ok(())
}

#[test]
fn test_rows_follow_input_order_with_duplicates() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let (summary, stdout) = run("5000,2000,2000", &temp_dir)?;

    assert_eq!(summary.rows, 3);
    let body: Vec<&str> = stdout
        .lines()
        .filter(|line| line.starts_with('│') && !line.contains("Lot area"))
        .collect();
    assert_eq!(body.len(), 3);
    assert!(body[0].contains(" 5000 "));
    assert!(body[1].contains(" 2000 "));
    assert_eq!(body[1], body[2]);
    Ok(())
}

#[test]
fn test_rerun_overwrites_chart() -> Result<()> {
    let temp_dir = TempDir::new()?;

    run("2000", &temp_dir)?;
    let first = std::fs::read(temp_dir.path().join(CHART_FILE_NAME))?;
    run("2000,9000", &temp_dir)?;
    let second = std::fs::read(temp_dir.path().join(CHART_FILE_NAME))?;

    assert_ne!(first, second);
    Ok(())
}
