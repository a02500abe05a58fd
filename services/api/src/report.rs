use crate::infra::load_receipt;
use clap::Args;
use receipt_points::error::AppError;
use receipt_points::receipts::{score_breakdown, PointsBreakdown, Receipt};
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a receipt JSON file
    #[arg(long)]
    pub(crate) receipt: PathBuf,
    /// Print the breakdown as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score_report(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs { receipt, json } = args;

    let receipt = load_receipt(&receipt)?;
    let breakdown = score_breakdown(&receipt);

    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        print!("{}", render_breakdown(&receipt, &breakdown));
    }

    Ok(())
}

pub(crate) fn render_breakdown(receipt: &Receipt, breakdown: &PointsBreakdown) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "Receipt from {} on {} at {} ({} item(s), total {})",
        receipt.retailer,
        receipt.purchase_date,
        receipt.purchase_time,
        receipt.items.len(),
        receipt.total
    )
    .expect("write to string");

    writeln!(out, "\nRule breakdown").expect("write to string");
    for component in &breakdown.components {
        writeln!(
            out,
            "- {:<24} {:>5}  {}",
            component.rule.label(),
            component.points,
            component.notes
        )
        .expect("write to string");
    }

    writeln!(out, "\nTotal points: {}", breakdown.total).expect("write to string");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_points::receipts::Item;
    use std::io::Write as _;

    fn receipt() -> Receipt {
        Receipt {
            retailer: "M&M Corner Market".to_string(),
            purchase_date: "2022-03-20".to_string(),
            purchase_time: "14:33".to_string(),
            items: vec![
                Item {
                    short_description: "Gatorade".to_string(),
                    price: "2.25".to_string(),
                },
                Item {
                    short_description: "Gatorade".to_string(),
                    price: "2.25".to_string(),
                },
            ],
            total: "9.00".to_string(),
        }
    }

    #[test]
    fn render_lists_each_rule_and_total() {
        let receipt = receipt();
        let breakdown = score_breakdown(&receipt);
        let rendered = render_breakdown(&receipt, &breakdown);

        assert!(rendered.starts_with("Receipt from M&M Corner Market"));
        assert_eq!(rendered.matches("\n- ").count(), 8);
        assert!(rendered.contains("round dollar total"));
        assert!(rendered.trim_end().ends_with("Total points: 104"));
    }

    #[test]
    fn load_receipt_reads_wire_format() {
        let path = std::env::temp_dir().join(format!(
            "receipt-points-report-{}.json",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).expect("create temp file");
        file.write_all(
            serde_json::to_string(&receipt())
                .expect("serialize")
                .as_bytes(),
        )
        .expect("write temp file");

        let loaded = load_receipt(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.expect("receipt loads"), receipt());
    }

    #[test]
    fn load_receipt_reports_missing_files_as_io_errors() {
        let path = std::env::temp_dir().join("receipt-points-does-not-exist.json");
        assert!(matches!(load_receipt(&path), Err(AppError::Io(_))));
    }

    #[test]
    fn run_score_report_rejects_invalid_json() {
        let path = std::env::temp_dir().join(format!(
            "receipt-points-invalid-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "{\"retailer\": 5}").expect("write temp file");

        let result = run_score_report(ScoreArgs {
            receipt: path.clone(),
            json: false,
        });
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(AppError::Payload(_))));
    }
}
