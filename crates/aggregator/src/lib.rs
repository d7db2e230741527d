//! Transaction aggregation for the finance dashboards.
//!
//! The crate turns backend snapshots into the numbers the screens render:
//! per-type summaries, per-tag breakdowns and budget progress. It owns no
//! state and does no I/O. Callers fetch records, normalize them through
//! [`ingest`], pass the current filter selection in and render the result.
//!
//! ```rust
//! use aggregator::{Money, Period, TypeFilter, TransactionKind, group_by_tag, filter_by_period,
//!     filter_by_type, ingest::parse_transactions};
//! use chrono::Utc;
//!
//! let txs = parse_transactions(
//!     r#"[{"type":"Expense","amount":300,"tag":"Food","created_at":"2026-03-01T10:00:00Z"},
//!         {"type":"Expense","amount":700,"tag":"Rent","created_at":"2026-03-02T10:00:00Z"}]"#,
//! )?;
//! let all = filter_by_period(&txs, Period::All, &Utc::now());
//! let breakdown = group_by_tag(filter_by_type(all, TypeFilter::Only(TransactionKind::Expense)));
//! assert_eq!(breakdown.total(), Money::new(100_000));
//! assert_eq!(breakdown.shares()[1].percentage_label(), "70.0");
//! # Ok::<(), aggregator::AggregatorError>(())
//! ```

pub use budget::{
    BudgetProgress, BudgetStatus, LIMIT_THRESHOLD, WARNING_THRESHOLD, budget_status,
    compute_budget_progress,
};
pub use currency::Currency;
pub use error::AggregatorError;
pub use format::{format_compact, format_percentage};
pub use money::Money;
pub use months::{YearMonth, recent_months};
pub use ops::{
    Period, Summary, TagBreakdown, TagShare, filter_by_month, filter_by_month_label,
    filter_by_period, filter_by_type, group_by_tag, recent, summarize,
};
pub use targets::{
    BudgetTarget, StatusFilter, TargetStatus, filter_targets_by_status, targets_for_month,
};
pub use transactions::{OTHER_TAG, PaymentMethod, Transaction, TransactionKind, TypeFilter};

mod budget;
mod currency;
mod error;
mod format;
pub mod ingest;
mod money;
mod months;
mod ops;
mod targets;
mod transactions;

pub type ResultAggregator<T> = Result<T, AggregatorError>;
