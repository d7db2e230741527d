//! Wire shapes exchanged with the finance backend.
//!
//! The backend is schemaless, so every field is optional and amounts are kept
//! as raw JSON values. Turning these into strict domain records is the job of
//! `aggregator::ingest`.

pub mod transaction {
    use serde::{Deserialize, Serialize};
    use serde_json::Value;

    /// A transaction document as returned by `/transactions/all`.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct TransactionRecord {
        /// Document id. Older endpoints only expose the raw `_id`.
        #[serde(default, alias = "_id")]
        pub id: Option<String>,
        /// `Income`, `Expense` or `Investment`.
        #[serde(default, rename = "type")]
        pub kind: Option<String>,
        #[serde(default)]
        pub title: Option<String>,
        /// Usually a number, sometimes a numeric string.
        #[serde(default)]
        pub amount: Option<Value>,
        #[serde(default)]
        pub tag: Option<String>,
        #[serde(default, alias = "paymentMethod")]
        pub payment_method: Option<String>,
        #[serde(default)]
        pub description: Option<String>,
        /// Redundant `"MonthName Year"` label.
        #[serde(default)]
        pub month: Option<String>,
        /// ISO datetime, with or without offset.
        #[serde(default, alias = "createdAt")]
        pub created_at: Option<String>,
    }
}

pub mod target {
    use serde::{Deserialize, Serialize};
    use serde_json::Value;

    /// A monthly budget target as returned by `/targets/`.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TargetRecord {
        #[serde(default, alias = "_id")]
        pub id: Option<String>,
        #[serde(default)]
        pub title: Option<String>,
        /// Same vocabulary as a transaction type.
        #[serde(default)]
        pub category: Option<String>,
        #[serde(default, alias = "target_amount")]
        pub target_amount: Option<Value>,
        /// 1-based month number.
        #[serde(default)]
        pub month: Option<u32>,
        #[serde(default)]
        pub year: Option<i32>,
        #[serde(default)]
        pub color: Option<String>,
        #[serde(default, alias = "current_amount")]
        pub current_amount: Option<Value>,
        /// Percentage computed by the backend; may exceed 100.
        #[serde(default)]
        pub progress: Option<f64>,
        /// `COMPLETED`, `PROCESS` or `FAILED`.
        #[serde(default)]
        pub status: Option<String>,
    }

    /// Query string of `/targets/`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct TargetsQuery {
        pub month: u32,
        pub year: i32,
    }
}

#[cfg(test)]
mod tests {
    use super::{target::TargetRecord, transaction::TransactionRecord};

    #[test]
    fn transaction_accepts_mongo_style_document() {
        let record: TransactionRecord = serde_json::from_str(
            r#"{"_id":"65f0","type":"Expense","title":"Lunch","amount":"250",
                "tag":"Food","payment_method":"UPI","month":"March 2026",
                "created_at":"2026-03-02T12:30:00.123456"}"#,
        )
        .unwrap();
        assert_eq!(record.id.as_deref(), Some("65f0"));
        assert_eq!(record.kind.as_deref(), Some("Expense"));
        assert_eq!(record.amount, Some(serde_json::json!("250")));
        assert_eq!(record.payment_method.as_deref(), Some("UPI"));
    }

    #[test]
    fn transaction_fields_are_all_optional() {
        let record: TransactionRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, TransactionRecord::default());
    }

    #[test]
    fn target_uses_camel_case() {
        let record: TargetRecord = serde_json::from_str(
            r#"{"id":"t1","title":"Groceries","category":"Expense","targetAmount":10000,
                "month":3,"year":2026,"currentAmount":9000,"progress":90,"status":"PROCESS"}"#,
        )
        .unwrap();
        assert_eq!(record.target_amount, Some(serde_json::json!(10000)));
        assert_eq!(record.current_amount, Some(serde_json::json!(9000)));
        assert_eq!(record.month, Some(3));
        assert_eq!(record.progress, Some(90.0));
    }
}
