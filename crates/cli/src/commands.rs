use aggregator::{
    BudgetTarget, Currency, Money, Period, StatusFilter, Transaction, TransactionKind, TypeFilter,
    YearMonth, compute_budget_progress, filter_by_month, filter_by_period, filter_by_type,
    filter_targets_by_status, group_by_tag, recent, recent_months, summarize,
};
use chrono::{DateTime, TimeZone, Utc};
use clap::Subcommand;

use crate::{config::AppConfig, error::Result, render, source::Source};

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Income, expense, investment and balance totals.
    Summary {
        /// day, week, month or all.
        #[arg(long, default_value = "all")]
        period: Period,
        /// Calendar month such as "March 2026" or 2026-03; overrides --period.
        #[arg(long)]
        month: Option<YearMonth>,
        #[arg(long = "type", default_value = "all")]
        kind: TypeFilter,
    },
    /// Per-tag breakdown of one transaction type for a month.
    Report {
        #[arg(long = "type", default_value = "expense")]
        kind: TransactionKind,
        /// Defaults to the current month.
        #[arg(long)]
        month: Option<YearMonth>,
    },
    /// Usage of a monthly budget.
    Budget {
        /// Budget in rupees, e.g. 15000 or 15000.50.
        #[arg(long)]
        amount: String,
        #[arg(long = "type", default_value = "expense")]
        kind: TransactionKind,
        #[arg(long)]
        month: Option<YearMonth>,
    },
    /// Budget targets and their progress.
    Targets {
        /// COMPLETED, PROCESS, FAILED or all.
        #[arg(long, default_value = "all")]
        status: StatusFilter,
        #[arg(long)]
        month: Option<YearMonth>,
    },
    /// Most recent transactions.
    Transactions {
        #[arg(long, default_value = "all")]
        period: Period,
        #[arg(long = "type", default_value = "all")]
        kind: TypeFilter,
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Month labels for a picker, oldest first.
    Months {
        #[arg(long, default_value_t = 12)]
        count: usize,
    },
}

pub async fn run(config: &AppConfig, command: &Command) -> Result<String> {
    let tz = config.tz()?;
    let now = Utc::now().with_timezone(&tz);
    let currency = Currency::default();
    let source = || Source::from_config(config);

    let output = match *command {
        Command::Summary {
            period,
            month,
            kind,
        } => {
            let transactions = source()?.transactions().await?;
            summary_view(&transactions, period, month, kind, &now, currency)
        }
        Command::Report { kind, month } => {
            let month = month.unwrap_or_else(|| YearMonth::of(now.date_naive()));
            let transactions = source()?.transactions().await?;
            report_view(&transactions, kind, month, &tz, currency)
        }
        Command::Budget {
            ref amount,
            kind,
            month,
        } => {
            let budget = Money::parse_major(amount, currency)?;
            let month = month.unwrap_or_else(|| YearMonth::of(now.date_naive()));
            let transactions = source()?.transactions().await?;
            budget_view(&transactions, kind, month, budget, &tz, currency)
        }
        Command::Targets { status, month } => {
            let targets = source()?.targets(month).await?;
            targets_view(&targets, status, currency)
        }
        Command::Transactions {
            period,
            kind,
            limit,
        } => {
            let transactions = source()?.transactions().await?;
            transactions_view(&transactions, period, kind, limit, &now, currency)
        }
        Command::Months { count } => render::months(&recent_months(now.date_naive(), count)),
    };
    Ok(output)
}

fn period_title<Tz: TimeZone>(period: Period, now: &DateTime<Tz>) -> String {
    match period {
        Period::Daily => "Today".to_string(),
        Period::Weekly => "Last 7 days".to_string(),
        Period::Monthly => YearMonth::of(now.date_naive()).to_string(),
        Period::All => "All time".to_string(),
    }
}

fn summary_view<Tz: TimeZone>(
    transactions: &[Transaction],
    period: Period,
    month: Option<YearMonth>,
    kind: TypeFilter,
    now: &DateTime<Tz>,
    currency: Currency,
) -> String {
    let (title, scoped) = match month {
        Some(month) => (
            month.to_string(),
            filter_by_month(transactions, month, &now.timezone()),
        ),
        None => (
            period_title(period, now),
            filter_by_period(transactions, period, now),
        ),
    };
    let totals = summarize(filter_by_type(scoped, kind));
    render::summary(&title, &totals, currency)
}

fn report_view<Tz: TimeZone>(
    transactions: &[Transaction],
    kind: TransactionKind,
    month: YearMonth,
    tz: &Tz,
    currency: Currency,
) -> String {
    let scoped = filter_by_month(transactions, month, tz);
    let breakdown = group_by_tag(filter_by_type(scoped, kind.into()));
    render::breakdown(kind, month, &breakdown, currency)
}

fn budget_view<Tz: TimeZone>(
    transactions: &[Transaction],
    kind: TransactionKind,
    month: YearMonth,
    budget: Money,
    tz: &Tz,
    currency: Currency,
) -> String {
    let used = summarize(filter_by_month(transactions, month, tz)).total_for(kind);
    let progress = compute_budget_progress(used, Some(budget));
    tracing::debug!(%used, %budget, status = progress.status.as_str(), "budget progress");
    render::budget(kind, month, &progress, currency)
}

fn targets_view(targets: &[BudgetTarget], status: StatusFilter, currency: Currency) -> String {
    render::targets(&filter_targets_by_status(targets, status), currency)
}

fn transactions_view<Tz: TimeZone>(
    transactions: &[Transaction],
    period: Period,
    kind: TypeFilter,
    limit: usize,
    now: &DateTime<Tz>,
    currency: Currency,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let scoped = filter_by_type(filter_by_period(transactions, period, now), kind);
    render::transactions(&recent(scoped, limit), &now.timezone(), currency)
}
