//! HTTP search service and session runtime against an in-process fake of the
//! NCO FastAPI backend.

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use ncosearch::app::{Event, PageSize, SearchMode, SearchSession, SessionSettings};
use ncosearch::service::{perform_search, SearchOutcome, SearchRequest};
use ncosearch::{HttpSearchService, NcoSearchError, SearchService, SessionRuntime};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

const SEMANTIC_CORPUS: usize = 25;

#[derive(Deserialize)]
struct SearchParams {
    query: String,
    k: Option<usize>,
}

async fn exact_search(Query(params): Query<SearchParams>) -> Response {
    match params.query.as_str() {
        "medic" => Json(json!([{
            "occupation_title": "Combat Medic",
            "nco_2015": "31-9099.01",
            "nco_2004": "31-9099.00",
            "division": "Health Professionals",
            "subdivision": "Medical Practitioners",
            "group": "Paramedics",
            "family": "Emergency Care"
        }]))
        .into_response(),
        "boom" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": "index unavailable" })),
        )
            .into_response(),
        "garbled" => (StatusCode::OK, "[{\"occupation_title\": ").into_response(),
        _ => Json(json!([])).into_response(),
    }
}

async fn semantic_search(Query(params): Query<SearchParams>) -> Response {
    let Some(k) = params.k else {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "detail": [{ "loc": ["query", "k"], "msg": "field required" }] })),
        )
            .into_response();
    };

    let rows: Vec<Value> = (0..k.min(SEMANTIC_CORPUS))
        .map(|i| {
            json!({
                "occupation_title": format!("{} role {i}", params.query),
                "nco_2015": format!("{i:02}-2011.00"),
                "nco_2004": format!("{i:02}-2011"),
                "division": "Professionals",
                "subdivision": "Health",
                "group": "Medical Doctors",
                "family": "Physicians",
                "similarity_score": 0.99 - (i as f64) * 0.01
            })
        })
        .collect();
    Json(Value::Array(rows)).into_response()
}

async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/exact_search", get(exact_search))
        .route("/semantic_search", get(semantic_search));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn exact_search_decodes_backend_rows() {
    let service = HttpSearchService::new(spawn_backend().await).unwrap();

    let rows = service.exact_search("medic").await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Combat Medic");
    assert_eq!(rows[0].code_2015, "31-9099.01");
    assert_eq!(rows[0].family, "Emergency Care");
    assert_eq!(rows[0].similarity_score, None);

    assert!(service.exact_search("astronaut").await.unwrap().is_empty());
}

#[tokio::test]
async fn semantic_search_sends_limit() {
    let service = HttpSearchService::new(spawn_backend().await).unwrap();

    let rows = service.semantic_search("army doctor", 10).await.unwrap();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0].score_label(), "0.99");
    assert!(rows.windows(2).all(|w| w[0].similarity_score >= w[1].similarity_score));
}

#[tokio::test]
async fn server_error_keeps_fastapi_detail() {
    let service = HttpSearchService::new(spawn_backend().await).unwrap();

    match service.exact_search("boom").await {
        Err(NcoSearchError::Service { endpoint, status, message }) => {
            assert_eq!(endpoint, "/exact_search");
            assert_eq!(status, 500);
            assert_eq!(message, "index unavailable");
        }
        other => panic!("expected service error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let service = HttpSearchService::new(spawn_backend().await).unwrap();
    assert!(matches!(
        service.exact_search("garbled").await,
        Err(NcoSearchError::Decode { .. })
    ));
}

#[tokio::test]
async fn unreachable_backend_folds_into_failed_outcome() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let service = HttpSearchService::new(format!("http://{addr}")).unwrap();
    let outcome = perform_search(&service, &SearchRequest::exact(1, "medic")).await;
    assert!(matches!(outcome, SearchOutcome::Failed { .. }));
}

#[tokio::test]
async fn runtime_pages_semantic_results_from_backend() {
    let service = Arc::new(HttpSearchService::new(spawn_backend().await).unwrap());
    let mut runtime = SessionRuntime::new(SearchSession::default(), service);

    runtime.handle(Event::SetMode(SearchMode::Semantic));
    runtime.handle(Event::SetPageSize(PageSize::Ten));
    runtime.handle(Event::SetQuery("nurse".to_string()));
    runtime.handle(Event::Dispatch);
    assert!(runtime.session().is_loading());
    assert!(runtime.settle().await);

    let snapshot = runtime.session().snapshot();
    assert_eq!(snapshot.result_count, 10);
    assert_eq!(snapshot.total_pages, 1);
    assert!(snapshot.show_similarity);
}

#[tokio::test]
async fn all_page_size_requests_configured_limit_and_shows_one_page() {
    let service = Arc::new(HttpSearchService::new(spawn_backend().await).unwrap());
    let settings = SessionSettings {
        initial_mode: SearchMode::Semantic,
        initial_page_size: PageSize::All,
        ..SessionSettings::default()
    };
    let mut runtime = SessionRuntime::new(SearchSession::new(settings), service);

    runtime.handle(Event::SetQuery("nurse".to_string()));
    runtime.handle(Event::Dispatch);
    runtime.settle().await;

    let snapshot = runtime.session().snapshot();
    assert_eq!(snapshot.result_count, SEMANTIC_CORPUS);
    assert_eq!(snapshot.total_pages, 1);
    assert_eq!(snapshot.visible_rows.len(), SEMANTIC_CORPUS);
}

#[tokio::test]
async fn backend_failure_settles_as_empty_results() {
    let service = Arc::new(HttpSearchService::new(spawn_backend().await).unwrap());
    let mut runtime = SessionRuntime::new(SearchSession::default(), service);

    runtime.handle(Event::SetQuery("boom".to_string()));
    runtime.handle(Event::Dispatch);
    runtime.settle().await;

    let snapshot = runtime.session().snapshot();
    assert!(snapshot.has_searched);
    assert!(!snapshot.loading);
    assert_eq!(snapshot.result_count, 0);
}
