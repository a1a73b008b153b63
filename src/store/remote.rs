//! Hosted store reached over its REST interface
//!
//! The backend exposes each table at `{url}/rest/v1/{table}` with
//! PostgREST-style filters (`column=eq.value`, `order=column.desc`). The
//! access key travels as the `apikey` header and as a bearer token.
//!
//! The hosted schema uses Spanish table and column names; the row types
//! below map them onto the domain model.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::secrets::StoreSecrets;
use crate::config::settings::BackendKind;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, Transaction, TransactionKind};

use super::TransactionStore;

const CATEGORIES_TABLE: &str = "categorias";
const TRANSACTIONS_TABLE: &str = "transacciones";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Label the hosted schema uses for a transaction kind
fn kind_label(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => "Ingreso",
        TransactionKind::Expense => "Gasto",
    }
}

#[derive(Debug, Deserialize)]
struct CategoryRow {
    nombre: String,
}

/// A row of the `transacciones` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct TransactionRow {
    tipo: String,
    fecha: NaiveDate,
    monto: f64,
    #[serde(default)]
    descripcion: Option<String>,
    categoria: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(t: &Transaction) -> Self {
        Self {
            tipo: kind_label(t.kind).to_string(),
            fecha: t.date,
            monto: t.amount.as_decimal(),
            descripcion: Some(t.description.clone()),
            categoria: t.category.clone(),
        }
    }
}

impl TryFrom<TransactionRow> for Transaction {
    type Error = TrackerError;

    fn try_from(row: TransactionRow) -> Result<Self, Self::Error> {
        let kind = row
            .tipo
            .parse::<TransactionKind>()
            .map_err(|e| TrackerError::Storage(e.to_string()))?;

        Ok(Transaction {
            kind,
            date: row.fecha,
            amount: Money::from_decimal(row.monto),
            description: row.descripcion.unwrap_or_default(),
            category: row.categoria,
        })
    }
}

/// Transaction store backed by the hosted relational database
pub struct RestStore {
    client: Client,
    base_url: String,
    key: String,
}

impl RestStore {
    /// Build a client for the store described by `secrets`
    pub fn new(secrets: &StoreSecrets) -> TrackerResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TrackerError::Connection(e.to_string()))?;

        Ok(Self {
            client,
            base_url: secrets.url.trim_end_matches('/').to_string(),
            key: secrets.key.clone(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        self.client
            .request(method, self.table_url(table))
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
    }

    fn send(&self, request: RequestBuilder, table: &str) -> TrackerResult<Response> {
        let response = request.send().map_err(|e| {
            warn!(table, error = %e, "store request failed");
            TrackerError::from(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .ok()
            .filter(|body| !body.trim().is_empty())
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());
        warn!(table, status = status.as_u16(), %message, "store rejected request");
        Err(TrackerError::Remote {
            status: status.as_u16(),
            message,
        })
    }
}

impl TransactionStore for RestStore {
    fn backend(&self) -> BackendKind {
        BackendKind::Remote
    }

    fn insert_transaction(&self, transaction: &Transaction) -> TrackerResult<()> {
        let row = TransactionRow::from(transaction);
        let request = self
            .request(Method::POST, TRANSACTIONS_TABLE)
            .header("Prefer", "return=minimal")
            .json(&row);

        self.send(request, TRANSACTIONS_TABLE)?;
        info!(kind = %transaction.kind, category = %transaction.category, "transaction saved");
        Ok(())
    }

    fn list_categories(&self, kind: TransactionKind) -> TrackerResult<Vec<String>> {
        let filter = format!("eq.{}", kind_label(kind));
        let request = self
            .request(Method::GET, CATEGORIES_TABLE)
            .query(&[("select", "nombre,tipo"), ("tipo", filter.as_str())]);

        let rows: Vec<CategoryRow> = self.send(request, CATEGORIES_TABLE)?.json()?;
        debug!(%kind, count = rows.len(), "fetched categories");
        Ok(rows.into_iter().map(|row| row.nombre).collect())
    }

    fn list_transactions(&self) -> TrackerResult<Vec<Transaction>> {
        let request = self
            .request(Method::GET, TRANSACTIONS_TABLE)
            .query(&[("select", "*"), ("order", "fecha.desc")]);

        let rows: Vec<TransactionRow> = self.send(request, TRANSACTIONS_TABLE)?.json()?;
        debug!(count = rows.len(), "fetched transactions");
        rows.into_iter().map(Transaction::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn secrets(url: &str) -> StoreSecrets {
        StoreSecrets {
            url: url.into(),
            key: "anon-key".into(),
        }
    }

    #[test]
    fn test_table_url() {
        let store = RestStore::new(&secrets("https://abc.example.co/")).unwrap();
        assert_eq!(
            store.table_url(TRANSACTIONS_TABLE),
            "https://abc.example.co/rest/v1/transacciones"
        );
    }

    #[test]
    fn test_row_from_transaction() {
        let txn = Transaction::new(
            TransactionKind::Expense,
            NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            Money::from_cents(30050),
            "Rent",
        );
        let json = serde_json::to_value(TransactionRow::from(&txn)).unwrap();

        assert_eq!(json["tipo"], "Gasto");
        assert_eq!(json["fecha"], "2024-05-02");
        assert_eq!(json["monto"], 300.5);
        assert_eq!(json["descripcion"], "");
        assert_eq!(json["categoria"], "Rent");
    }

    #[test]
    fn test_transaction_from_row() {
        let json = r#"{
            "id": 7,
            "tipo": "Ingreso",
            "fecha": "2024-05-01",
            "monto": 1000,
            "descripcion": null,
            "categoria": "Salary",
            "created_at": "2024-05-01T10:00:00+00:00"
        }"#;
        let row: TransactionRow = serde_json::from_str(json).unwrap();
        let txn = Transaction::try_from(row).unwrap();

        assert!(txn.is_income());
        assert_eq!(txn.amount, Money::from_cents(100000));
        assert_eq!(txn.description, "");
        assert_eq!(txn.category, "Salary");
    }

    #[test]
    fn test_unknown_kind_label_rejected() {
        let row = TransactionRow {
            tipo: "Transferencia".into(),
            fecha: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            monto: 1.0,
            descripcion: None,
            categoria: "Other".into(),
        };
        assert!(matches!(
            Transaction::try_from(row),
            Err(TrackerError::Storage(_))
        ));
    }

    fn mock_store(server: &mockito::Server) -> RestStore {
        RestStore::new(&StoreSecrets {
            url: server.url(),
            key: "test-key".into(),
        })
        .unwrap()
    }

    #[test]
    fn test_list_categories_filters_by_kind() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/rest/v1/categorias")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("select".into(), "nombre,tipo".into()),
                Matcher::UrlEncoded("tipo".into(), "eq.Ingreso".into()),
            ]))
            .match_header("apikey", "test-key")
            .match_header("authorization", "Bearer test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"nombre":"Salary","tipo":"Ingreso"},{"nombre":"Bonus","tipo":"Ingreso"}]"#)
            .create();

        let store = mock_store(&server);
        let categories = store.list_categories(TransactionKind::Income).unwrap();

        mock.assert();
        assert_eq!(categories, vec!["Salary".to_string(), "Bonus".to_string()]);
    }

    #[test]
    fn test_list_transactions_newest_first() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/rest/v1/transacciones")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("select".into(), "*".into()),
                Matcher::UrlEncoded("order".into(), "fecha.desc".into()),
            ]))
            .match_header("apikey", "test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"id": 2, "tipo": "Gasto", "fecha": "2024-05-10", "monto": 12.5,
                     "descripcion": "Lunch", "categoria": "Food"},
                    {"id": 1, "tipo": "Ingreso", "fecha": "2024-05-01", "monto": 1000,
                     "descripcion": null, "categoria": "Salary"}
                ]"#,
            )
            .create();

        let store = mock_store(&server);
        let txns = store.list_transactions().unwrap();

        mock.assert();
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].kind, TransactionKind::Expense);
        assert_eq!(txns[0].date, NaiveDate::from_ymd_opt(2024, 5, 10).unwrap());
        assert_eq!(txns[0].amount, Money::from_cents(1250));
        assert_eq!(txns[0].description, "Lunch");
        assert_eq!(txns[1].category, "Salary");
        assert_eq!(txns[1].description, "");
    }

    #[test]
    fn test_insert_transaction_posts_row() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/rest/v1/transacciones")
            .match_header("apikey", "test-key")
            .match_header("authorization", "Bearer test-key")
            .match_header("prefer", "return=minimal")
            .match_body(Matcher::Json(serde_json::json!({
                "tipo": "Gasto",
                "fecha": "2024-05-02",
                "monto": 300.5,
                "descripcion": "May rent",
                "categoria": "Rent"
            })))
            .with_status(201)
            .create();

        let mut txn = Transaction::new(
            TransactionKind::Expense,
            NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            Money::from_cents(30050),
            "Rent",
        );
        txn.description = "May rent".into();

        let store = mock_store(&server);
        store.insert_transaction(&txn).unwrap();

        mock.assert();
    }

    #[test]
    fn test_rejected_request_is_remote_error() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/rest/v1/transacciones")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body(r#"{"message":"Invalid API key"}"#)
            .create();

        let store = mock_store(&server);
        let err = store.list_transactions().unwrap_err();

        mock.assert();
        match err {
            TrackerError::Remote { status, message } => {
                assert_eq!(status, 401);
                assert!(message.contains("Invalid API key"));
            }
            other => panic!("expected remote error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejected_request_without_body_uses_reason() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/rest/v1/transacciones")
            .with_status(403)
            .create();

        let txn = Transaction::new(
            TransactionKind::Income,
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            Money::from_cents(100),
            "Salary",
        );
        let store = mock_store(&server);

        assert!(matches!(
            store.insert_transaction(&txn),
            Err(TrackerError::Remote { status: 403, ref message }) if message == "Forbidden"
        ));
    }

    #[test]
    fn test_unreachable_store_is_connection_error() {
        let store = RestStore::new(&secrets("http://127.0.0.1:9")).unwrap();
        let err = store.list_transactions().unwrap_err();
        assert!(matches!(err, TrackerError::Connection(_)));
    }
}
