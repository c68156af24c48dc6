//! Plays a short seeded session with a fixed betting pattern.
//!
//! Run with `cargo run --example seeded_session -- 42`.

use craps_table::{BetCategory, CrapsTable, DiceSource, SessionLedger, TableConfig};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(7);

    let mut table = match CrapsTable::with_balance(TableConfig::default(), 500) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    let mut dice = DiceSource::from_seed(Some(seed));
    let mut ledger = SessionLedger::new();

    for _ in 0..25 {
        // Pass line on every come-out, plus the field each roll.
        if table.point().is_none() && table.book().get(BetCategory::PassLine) == 0 {
            let _ = table.add(BetCategory::PassLine, 10);
        }
        if let Some(point) = table.point()
            && point != 6
            && table.book().get(BetCategory::Place(6)) == 0
        {
            let _ = table.add(BetCategory::Place(6), 12);
        }
        let _ = table.add(BetCategory::Field, 5);

        match table.begin_roll(&mut dice) {
            Ok(report) => {
                let _ = ledger.record(&report);
                println!(
                    "roll {:>2} {:<8} point {:<4} net {:>+4} balance {}",
                    report.roll,
                    report.outcome.to_string(),
                    report.next_point.map_or("off".to_string(), |p| p.to_string()),
                    report.net_change,
                    report.balance_after
                );
            }
            Err(e) => {
                println!("stopped: {e}");
                break;
            }
        }
    }

    println!(
        "seed {seed}: session {:+} over {} rolls",
        ledger.session_net(),
        ledger.rolls()
    );
}
