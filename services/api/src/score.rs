use clap::Args;
use receipt_points::error::AppError;
use receipt_points::receipts::{evaluate, PointsOutcome, Receipt};
use std::fmt::Write as _;
use std::io::Read;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// Receipt JSON file to score. Reads standard input when omitted.
    pub(crate) path: Option<PathBuf>,
    /// Print the points contributed by each rule
    #[arg(long)]
    pub(crate) breakdown: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = match &args.path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let receipt: Receipt = serde_json::from_str(&raw)?;
    let outcome = evaluate(&receipt);
    print!("{}", render_outcome(&receipt, &outcome, args.breakdown));
    Ok(())
}

fn render_outcome(receipt: &Receipt, outcome: &PointsOutcome, breakdown: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} on {} at {}: {} point(s)",
        receipt.retailer, receipt.purchase_date, receipt.purchase_time, outcome.total
    );

    if breakdown {
        for component in &outcome.components {
            let _ = writeln!(
                out,
                "  {:<24} {:>4}  {}",
                component.rule.label(),
                component.points,
                component.notes
            );
        }
    }

    out
}
