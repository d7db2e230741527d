use chrono::{TimeZone, Utc};
use chrono_tz::Asia::Kolkata;

use aggregator::{
    BudgetStatus, Money, Period, StatusFilter, Summary, TargetStatus, TransactionKind, TypeFilter,
    YearMonth, compute_budget_progress, filter_by_month, filter_by_period, filter_by_type,
    filter_targets_by_status, group_by_tag, ingest, recent, summarize,
};

const SNAPSHOT: &str = r#"[
    {"_id":"1","type":"Income","title":"Salary","amount":50000,"tag":"Salary",
     "payment_method":"Bank","month":"March 2026","created_at":"2026-03-01T04:00:00"},
    {"_id":"2","type":"Expense","title":"Groceries","amount":300,"tag":"Food",
     "payment_method":"UPI","month":"March 2026","created_at":"2026-03-09T18:45:00"},
    {"_id":"3","type":"Expense","title":"Snacks","amount":"200","tag":"Food",
     "payment_method":"Cash","month":"March 2026","created_at":"2026-03-10T03:00:00"},
    {"_id":"4","type":"Expense","title":"Train","amount":500,"tag":"Travel",
     "payment_method":"Card","month":"March 2026","created_at":"2026-03-10T05:00:00"},
    {"_id":"5","type":"Investment","title":"SIP","amount":10000,
     "payment_method":"Bank","month":"March 2026","created_at":"2026-03-05T06:00:00"},
    {"_id":"6","type":"Expense","title":"Old rent","amount":19000,"tag":"Rent",
     "month":"February 2026","created_at":"2026-02-27T06:00:00"},
    {"_id":"7","type":"Expense","title":"Broken","amount":"n/a","tag":"Food",
     "month":"March 2026","created_at":"garbage"},
    {"_id":"8","type":"Refund","title":"Unknown type","amount":5}
]"#;

fn rupees(value: i64) -> Money {
    Money::new(value * 100)
}

fn ids(txs: &[&aggregator::Transaction]) -> Vec<String> {
    txs.iter().map(|tx| tx.id.clone()).collect()
}

#[test]
fn snapshot_ingest_drops_only_unknown_types() {
    let txs = ingest::parse_transactions(SNAPSHOT).unwrap();
    assert_eq!(txs.len(), 7);
    let broken = txs.iter().find(|tx| tx.id == "7").unwrap();
    assert_eq!(broken.amount, Money::ZERO);
    assert_eq!(broken.created_at, None);
}

#[test]
fn summary_of_everything_balances() {
    let txs = ingest::parse_transactions(SNAPSHOT).unwrap();
    let summary = summarize(&txs);
    assert_eq!(
        summary,
        Summary {
            income: rupees(50000),
            expense: rupees(20000),
            investment: rupees(10000),
            balance: rupees(20000),
        }
    );
    assert_eq!(
        summary.income - summary.expense - summary.investment,
        summary.balance
    );
}

#[test]
fn monthly_report_for_expenses() {
    let txs = ingest::parse_transactions(SNAPSHOT).unwrap();
    let march = YearMonth::new(2026, 3).unwrap();
    let in_march = filter_by_month(&txs, march, &Kolkata);
    let expenses = filter_by_type(in_march, TypeFilter::Only(TransactionKind::Expense));
    assert_eq!(ids(&expenses), ["2", "3", "4"]);

    let breakdown = group_by_tag(expenses);
    assert_eq!(breakdown.total(), rupees(1000));
    let rows: Vec<_> = breakdown
        .iter()
        .map(|share| (share.tag.as_str(), share.amount, share.percentage_label()))
        .collect();
    assert_eq!(
        rows,
        [
            ("Food", rupees(500), "50.0".to_string()),
            ("Travel", rupees(500), "50.0".to_string()),
        ]
    );
}

#[test]
fn daily_view_in_local_time() {
    let txs = ingest::parse_transactions(SNAPSHOT).unwrap();
    // 2026-03-10 in India runs from 2026-03-09T18:30Z to 2026-03-10T18:30Z.
    let reference = Kolkata.with_ymd_and_hms(2026, 3, 10, 20, 0, 0).unwrap();
    let today = filter_by_period(&txs, Period::Daily, &reference);
    assert_eq!(ids(&today), ["2", "3", "4"]);

    let utc_reference = Utc.with_ymd_and_hms(2026, 3, 10, 20, 0, 0).unwrap();
    let today_utc = filter_by_period(&txs, Period::Daily, &utc_reference);
    assert_eq!(ids(&today_utc), ["3", "4"]);
}

#[test]
fn weekly_then_type_then_recent() {
    let txs = ingest::parse_transactions(SNAPSHOT).unwrap();
    let reference = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
    let week = filter_by_period(&txs, Period::Weekly, &reference);
    assert_eq!(ids(&week), ["2", "3", "4", "5"]);
    let expenses = filter_by_type(week, TransactionKind::Expense.into());
    assert_eq!(ids(&recent(expenses, 2)), ["4", "3"]);
}

#[test]
fn planner_budget_for_february_expenses() {
    let txs = ingest::parse_transactions(SNAPSHOT).unwrap();
    let feb = YearMonth::new(2026, 2).unwrap();
    let used = summarize(filter_by_month(&txs, feb, &Utc)).expense;
    let progress = compute_budget_progress(used, Some(rupees(20000)));
    assert_eq!(progress.remaining, rupees(1000));
    assert_eq!(progress.percentage, 95.0);
    assert_eq!(progress.status, BudgetStatus::Warning);
}

#[test]
fn target_status_view() {
    let targets = ingest::parse_targets(
        r##"[
            {"id":"a","title":"Food","category":"Expense","targetAmount":10000,"month":3,
             "year":2026,"currentAmount":12000,"progress":120,"status":"FAILED","color":"#ef4444"},
            {"id":"b","title":"Save","category":"Investment","targetAmount":5000,"month":3,
             "year":2026,"currentAmount":5000,"progress":100,"status":"COMPLETED"}
        ]"##,
    )
    .unwrap();
    let failed = filter_targets_by_status(&targets, StatusFilter::Only(TargetStatus::Failed));
    assert_eq!(failed.len(), 1);
    let progress = failed[0].budget_progress();
    assert_eq!(progress.remaining, rupees(-2000));
    assert_eq!(progress.percentage, 100.0);
    assert_eq!(progress.status, BudgetStatus::Exceeded);
    assert_eq!(filter_targets_by_status(&targets, StatusFilter::All).len(), 2);
}

#[test]
fn oversized_backend_amounts_do_not_break_totals() {
    let txs = ingest::parse_transactions(
        r#"[{"type":"Income","amount":5e16,"tag":"Bonus"},
            {"type":"Income","amount":"50000000000000000","tag":"Bonus"},
            {"type":"Income","amount":250,"tag":"Bonus"}]"#,
    )
    .unwrap();
    assert_eq!(txs.len(), 3);
    assert_eq!(summarize(&txs).income, rupees(250));
    let breakdown = group_by_tag(&txs);
    assert_eq!(breakdown.total(), rupees(250));
    assert_eq!(breakdown.amount("Bonus"), Some(rupees(250)));
}
