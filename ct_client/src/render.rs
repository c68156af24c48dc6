//! Plain-text views of table state for the terminal.

use craps_table::{
    BetResult, CrapsTable, RollReport, SessionLedger, ShooterRotation, game::CategoryOutcome,
};
use std::fmt;

fn point_label(point: Option<u8>) -> String {
    match point {
        Some(point) => format!("point {point}"),
        None => "point off".to_string(),
    }
}

fn outcome_line(outcome: &CategoryOutcome) -> String {
    let delta = match outcome.result {
        BetResult::Win => format!("+{}", outcome.won.saturating_sub(outcome.stake)),
        BetResult::Lose => format!("-{}", outcome.lost),
        BetResult::Push => "0".to_string(),
    };
    let stays = if outcome.cleared { "" } else { " (stays up)" };
    format!(
        "  {:<12} {:>6}  {:<4} {:>7}{stays}",
        outcome.category.to_string(),
        outcome.stake,
        outcome.result,
        delta
    )
}

/// One roll: dice, the decided bets and the running total.
pub struct ReportView<'a> {
    pub report: &'a RollReport,
    pub session_net: i64,
}

impl fmt::Display for ReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        let (d1, d2) = report.outcome.dice();
        write!(f, "Roll {}: {}", report.roll, report.outcome)?;
        if d1 == d2 && matches!(report.outcome.total(), 4 | 6 | 8 | 10) {
            write!(f, " the hard way")?;
        }
        writeln!(f)?;

        if report.point_established() {
            writeln!(f, "  Point is {}", report.outcome.total())?;
        } else if report.point_made() {
            writeln!(f, "  Winner! Point made")?;
        } else if report.is_seven_out() {
            writeln!(f, "  Seven out")?;
        }

        for outcome in &report.outcomes {
            writeln!(f, "{}", outcome_line(outcome))?;
        }
        write!(
            f,
            "  Net {:+}  Session {:+}  Balance {}",
            report.net_change, self.session_net, report.balance_after
        )
    }
}

/// Table summary with the layout and who holds the dice.
pub struct StatusView<'a> {
    pub table: &'a CrapsTable,
    pub rotation: &'a ShooterRotation,
}

impl fmt::Display for StatusView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.table;
        writeln!(
            f,
            "{} | {} | {} | min {} max {}",
            table.config().name,
            table.phase(),
            point_label(table.point()),
            table.config().min_bet,
            table.config().max_bet,
        )?;
        if let Some(shooter) = self.rotation.current() {
            writeln!(
                f,
                "Shooter {shooter} (hand {}, roll {})",
                self.rotation.hand(),
                self.rotation.rolls_this_hand() + 1
            )?;
        }
        if table.book().is_empty() {
            writeln!(f, "No bets on the layout")?;
        } else {
            for (category, amount) in table.book().iter() {
                writeln!(f, "  {:<12} {:>6}", category.to_string(), amount)?;
            }
        }
        write!(
            f,
            "Balance {}  Staked {}  Available {}",
            table.balance(),
            table.total_staked(),
            table.available()
        )
    }
}

/// Last `n` ledger entries, oldest first.
pub struct HistoryView<'a> {
    pub ledger: &'a SessionLedger,
    pub n: usize,
}

impl fmt::Display for HistoryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ledger = self.ledger;
        if ledger.rolls() == 0 {
            return write!(f, "No rolls yet");
        }
        for entry in ledger.recent(self.n) {
            writeln!(
                f,
                "  #{:<4} {:<5} staked {:>6} returned {:>6} net {:>+6} balance {}",
                entry.roll, entry.kind, entry.staked, entry.returned, entry.net, entry.balance_after
            )?;
        }
        write!(f, "Session {:+} over {} rolls", ledger.session_net(), ledger.rolls())?;
        if let Some(best) = ledger.biggest_win() {
            write!(f, ", best roll #{} {:+}", best.roll, best.net)?;
        }
        if let Some(worst) = ledger.biggest_loss() {
            write!(f, ", worst roll #{} {:+}", worst.roll, worst.net)?;
        }
        Ok(())
    }
}

pub fn render_report(report: &RollReport, session_net: i64) -> String {
    ReportView {
        report,
        session_net,
    }
    .to_string()
}

pub fn render_status(table: &CrapsTable, rotation: &ShooterRotation) -> String {
    StatusView { table, rotation }.to_string()
}

pub fn render_history(ledger: &SessionLedger, n: usize) -> String {
    HistoryView { ledger, n }.to_string()
}
