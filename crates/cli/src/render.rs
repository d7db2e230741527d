//! Plain-text views of aggregation results.

use aggregator::{
    BudgetProgress, BudgetTarget, Currency, Summary, TagBreakdown, Transaction, TransactionKind,
    YearMonth, format_compact, format_percentage,
};
use chrono::TimeZone;

const BAR_WIDTH: usize = 20;

/// Dashboard cards.
pub fn summary(title: &str, summary: &Summary, currency: Currency) -> String {
    let rows = [
        ("Income", summary.income),
        ("Expense", summary.expense),
        ("Investment", summary.investment),
        ("Balance", summary.balance),
    ];
    let mut lines = vec![title.to_string()];
    for (label, amount) in rows {
        lines.push(format!(
            "  {label:<12}{:>16}  ({})",
            amount.format(currency),
            format_compact(amount, currency)
        ));
    }
    lines.join("\n")
}

/// Reports screen: one row per tag with its share of the total.
pub fn breakdown(
    kind: TransactionKind,
    month: YearMonth,
    breakdown: &TagBreakdown,
    currency: Currency,
) -> String {
    if breakdown.is_empty() {
        return format!("No {kind} transactions in {month}.");
    }

    let mut lines = vec![format!("{kind} by tag, {month}")];
    for share in breakdown {
        lines.push(format!(
            "  {:<16}{:>16}  {:>5}%",
            share.tag,
            share.amount.format(currency),
            share.percentage_label()
        ));
    }
    lines.push(format!(
        "  {:<16}{:>16}",
        "Total",
        breakdown.total().format(currency)
    ));
    lines.join("\n")
}

/// Planner screen: usage of a caller-supplied budget.
pub fn budget(
    kind: TransactionKind,
    month: YearMonth,
    progress: &BudgetProgress,
    currency: Currency,
) -> String {
    let remaining = if progress.is_exceeded() {
        format!("over by {}", (-progress.remaining).format(currency))
    } else {
        format!("{} left", progress.remaining.format(currency))
    };
    [
        format!("{kind} budget, {month}"),
        format!(
            "  used {} of {}, {remaining}",
            progress.used.format(currency),
            progress.budget.format(currency)
        ),
        format!(
            "  {} [{}]",
            progress_bar(progress.percentage, BAR_WIDTH),
            progress.status.as_str()
        ),
    ]
    .join("\n")
}

/// Status screen: targets with their recomputed progress.
pub fn targets(targets: &[&BudgetTarget], currency: Currency) -> String {
    if targets.is_empty() {
        return "No targets found.".to_string();
    }

    targets
        .iter()
        .map(|target| {
            let progress = target.budget_progress();
            format!(
                "{} ({} {}) {}\n  {} / {}  {} [{}]",
                target.title,
                target.category,
                target.period,
                target.status,
                target.current_amount.format(currency),
                target.target_amount.format(currency),
                progress_bar(progress.percentage, BAR_WIDTH),
                progress.status.as_str()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Transaction list, one line each, dates shown in `tz`.
pub fn transactions<Tz: TimeZone>(
    transactions: &[&Transaction],
    tz: &Tz,
    currency: Currency,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    if transactions.is_empty() {
        return "No transactions found.".to_string();
    }

    transactions
        .iter()
        .map(|tx| {
            let date = tx
                .created_at
                .map(|at| at.with_timezone(tz).format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "----------------".to_string());
            let method = tx.payment_method.map(|m| m.as_str()).unwrap_or("-");
            format!(
                "{date}  {:<10} {:<20} {:<12} {:<5} {:>14}",
                tx.kind.as_str(),
                tx.title,
                tx.tag_label(),
                method,
                tx.amount.format(currency)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn months(months: &[YearMonth]) -> String {
    months
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Text progress bar such as `████████████████░░░░ 80.0%`.
fn progress_bar(percentage: f64, width: usize) -> String {
    let ratio = (percentage / 100.0).clamp(0.0, 1.0);
    let filled = ((ratio * width as f64).round() as usize).min(width);
    let empty = width.saturating_sub(filled);
    format!(
        "{}{} {}%",
        "█".repeat(filled),
        "░".repeat(empty),
        format_percentage(percentage)
    )
}

#[cfg(test)]
mod tests {
    use aggregator::{
        Money, TargetStatus, compute_budget_progress, group_by_tag, summarize,
    };
    use chrono::Utc;

    use super::*;

    fn rupees(value: i64) -> Money {
        Money::new(value * 100)
    }

    fn march() -> YearMonth {
        YearMonth::new(2026, 3).unwrap()
    }

    #[test]
    fn summary_lists_every_card() {
        let txs = vec![
            Transaction::new(TransactionKind::Income, rupees(50000)),
            Transaction::new(TransactionKind::Expense, rupees(1500)),
        ];
        let text = summary("March 2026", &summarize(&txs), Currency::Inr);
        assert!(text.starts_with("March 2026\n"));
        assert!(text.contains("₹50,000.00  (50K)"));
        assert!(text.contains("₹1,500.00  (1.5K)"));
        assert!(text.contains("₹48,500.00  (48.5K)"));
    }

    #[test]
    fn breakdown_shows_percentages_and_total() {
        let txs = vec![
            Transaction::new(TransactionKind::Expense, rupees(300)).with_tag("Food"),
            Transaction::new(TransactionKind::Expense, rupees(700)),
        ];
        let text = breakdown(
            TransactionKind::Expense,
            march(),
            &group_by_tag(&txs),
            Currency::Inr,
        );
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Expense by tag, March 2026");
        assert!(lines[1].contains("Food") && lines[1].ends_with("30.0%"));
        assert!(lines[2].contains("Other") && lines[2].ends_with("70.0%"));
        assert!(lines[3].contains("₹1,000.00"));
    }

    #[test]
    fn empty_breakdown_says_so() {
        let text = breakdown(
            TransactionKind::Income,
            march(),
            &TagBreakdown::default(),
            Currency::Inr,
        );
        assert_eq!(text, "No Income transactions in March 2026.");
    }

    #[test]
    fn budget_reports_overspend() {
        let progress = compute_budget_progress(rupees(12000), Some(rupees(10000)));
        let text = budget(TransactionKind::Expense, march(), &progress, Currency::Inr);
        assert!(text.contains("over by ₹2,000.00"));
        assert!(text.ends_with("100.0% [exceeded]"));
    }

    #[test]
    fn progress_bar_is_clamped() {
        assert_eq!(progress_bar(50.0, 4), "██░░ 50.0%");
        assert_eq!(progress_bar(150.0, 4), "████ 150.0%");
        assert_eq!(progress_bar(0.0, 4), "░░░░ 0.0%");
    }

    #[test]
    fn targets_render_status_band() {
        let target = BudgetTarget {
            id: "t".to_string(),
            title: "Groceries".to_string(),
            category: TransactionKind::Expense,
            target_amount: rupees(10000),
            period: march(),
            color: None,
            current_amount: rupees(9000),
            progress: 90.0,
            status: TargetStatus::Process,
        };
        let text = targets(&[&target], Currency::Inr);
        assert!(text.starts_with("Groceries (Expense March 2026) PROCESS"));
        assert!(text.ends_with("90.0% [warning]"));
        assert_eq!(targets(&[], Currency::Inr), "No targets found.");
    }

    #[test]
    fn transactions_show_local_dates() {
        let created = Utc.with_ymd_and_hms(2026, 3, 9, 20, 0, 0).unwrap();
        let tx = Transaction::new(TransactionKind::Expense, rupees(250))
            .with_title("Dinner")
            .with_tag("Food")
            .with_created_at(created);
        let text = transactions(&[&tx], &chrono_tz::Asia::Kolkata, Currency::Inr);
        assert!(text.starts_with("2026-03-10 01:30  Expense"));
        assert!(text.ends_with("₹250.00"));
    }
}
