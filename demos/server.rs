//! Runnable demo: the REST API over an in-memory store seeded with sample
//! bills.
//!
//! ```sh
//! cargo run --example server
//! curl localhost:8080/bills
//! ```

use billed::prelude::*;
use chrono::NaiveDate;

fn seed() -> Vec<Bill> {
    let bill = |name: &str, bill_type: &str, date: &str, amount: f64, status: BillStatus| Bill {
        id: Uuid::new_v4(),
        email: "a@a".to_string(),
        bill_type: bill_type.to_string(),
        name: name.to_string(),
        date: date.parse::<NaiveDate>().expect("seed date"),
        amount,
        vat: amount * 0.2,
        pct: 20,
        commentary: String::new(),
        file_url: format!("https://billed.test/receipts/{name}.jpg"),
        file_name: format!("{name}.jpg"),
        status,
    };

    vec![
        bill("encore", "Hôtel et logement", "2004-04-04", 400.0, BillStatus::Pending),
        bill("test1", "Transports", "2001-01-01", 100.0, BillStatus::Refused),
        bill("test3", "Services en ligne", "2003-03-03", 300.0, BillStatus::Accepted),
        bill("test2", "Restaurants et bars", "2002-02-02", 200.0, BillStatus::Refused),
    ]
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .init();

    let config = AppConfig::default().with_env_overrides();
    let store = InMemoryBillStore::with_bills(seed());

    Builder::new()
        .with_store(Arc::new(store))
        .with_config(config)
        .serve()
        .await
}
