//! Liveness probe for load balancers and deploy scripts.
//!
//! Reports which store backend the process is serving from, so a deployment that
//! silently fell back to memory (no `DATABASE_URL`) is visible from outside. It
//! does not query the database.

use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

use crate::store::Store;

/// `GET /health`, unauthenticated.
#[get("/health")]
pub async fn health(store: web::Data<Store>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "store": store.backend_name(),
        "timestamp": Utc::now()
    }))
}
