//! Aggregations over transaction snapshots.
//!
//! Every function here is pure: callers pass the snapshot and the current
//! selection in, and get a fresh result back. Filters borrow from their input
//! and preserve its order, so they compose:
//!
//! ```rust
//! use aggregator::{Money, Transaction, TransactionKind, TypeFilter, filter_by_type, summarize};
//!
//! let txs = vec![
//!     Transaction::new(TransactionKind::Income, Money::new(5_000_000)),
//!     Transaction::new(TransactionKind::Expense, Money::new(2_000_000)),
//! ];
//! let expenses = filter_by_type(&txs, TypeFilter::Only(TransactionKind::Expense));
//! assert_eq!(summarize(expenses).expense, Money::new(2_000_000));
//! ```

mod breakdown;
mod filters;
mod summary;

pub use breakdown::{TagBreakdown, TagShare, group_by_tag};
pub use filters::{
    Period, filter_by_month, filter_by_month_label, filter_by_period, filter_by_type, recent,
};
pub use summary::{Summary, summarize};
