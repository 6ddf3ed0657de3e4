pub mod health;

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::generation::handlers as generation;
use crate::render::handlers as export;
use crate::share::handlers as share;
use crate::state::AppState;
use crate::stories::handlers as stories;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Export
        .route("/api/export/pdf", post(export::handle_export_pdf))
        .route("/api/export/docx", post(export::handle_export_docx))
        // Draft generation
        .route(
            "/api/generate-story",
            post(generation::handle_generate_story),
        )
        // Stories
        .route(
            "/api/v1/stories/:user_id",
            get(stories::handle_get_story).patch(stories::handle_patch_story),
        )
        .route(
            "/api/v1/stories/:user_id/drafts/:style",
            put(stories::handle_put_draft),
        )
        .route(
            "/api/v1/stories/:user_id/customization",
            put(stories::handle_put_customization),
        )
        .route(
            "/api/v1/stories/:user_id/timeline",
            post(stories::handle_add_timeline_event),
        )
        .route(
            "/api/v1/stories/:user_id/timeline/:event_id",
            patch(stories::handle_update_timeline_event)
                .delete(stories::handle_delete_timeline_event),
        )
        // Sharing
        .route(
            "/api/v1/stories/:user_id/share",
            post(share::handle_create_share),
        )
        .route("/api/v1/shares/:share_id", get(share::handle_get_share))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::errors::SHARE_UNAVAILABLE;
    use crate::store::MemoryStore;

    fn app() -> Router {
        build_router(AppState {
            store: Arc::new(MemoryStore::new()),
            llm: None,
            config: Config::local(),
        })
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    fn my_life_export(draft: Option<&str>) -> Value {
        let mut body = json!({
            "story": { "customization": { "title": "My Life" } },
            "style": "simple",
        });
        if let Some(draft) = draft {
            body["draft"] = json!(draft);
        }
        body
    }

    #[tokio::test]
    async fn test_health() {
        let response = app().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_export_pdf_attachment() {
        let request = json_request(
            Method::POST,
            "/api/export/pdf",
            my_life_export(Some("Para one.\n\nPara two.")),
        );
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"my-life.pdf\""
        );
        let bytes = body_bytes(response).await;
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[tokio::test]
    async fn test_export_docx_attachment() {
        let request = json_request(
            Method::POST,
            "/api/export/docx",
            my_life_export(Some("Para one.\n\nPara two.")),
        );
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"my-life.docx\""
        );
        assert!(body_bytes(response).await.starts_with(b"PK"));
    }

    #[tokio::test]
    async fn test_export_without_draft_is_400() {
        for uri in ["/api/export/pdf", "/api/export/docx"] {
            let request = json_request(Method::POST, uri, my_life_export(None));
            let response = app().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(body_json(response).await["error"], "Missing story or draft");
        }
    }

    #[tokio::test]
    async fn test_export_accepts_null_customization_text() {
        let body = json!({
            "story": { "customization": { "title": "My Life", "subtitle": null } },
            "draft": "Para one.",
            "style": "simple",
        });
        let request = json_request(Method::POST, "/api/export/docx", body);
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"my-life.docx\""
        );
    }

    #[tokio::test]
    async fn test_export_malformed_json_is_400() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/export/pdf")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_generate_story_falls_back_without_key() {
        let request = json_request(
            Method::POST,
            "/api/generate-story",
            json!({ "story": { "personal": { "fullName": "Ada" } }, "style": "poetic" }),
        );
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["provider"], "fallback");
        assert!(body["draft"]
            .as_str()
            .unwrap()
            .starts_with("(Poetic draft) Ada\n\n"));
    }

    #[tokio::test]
    async fn test_generate_story_requires_style() {
        let request = json_request(Method::POST, "/api/generate-story", json!({ "story": {} }));
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Missing style or story payload.");
    }

    #[tokio::test]
    async fn test_story_timeline_lifecycle() {
        let app = app();

        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/v1/stories/u1/timeline",
                json!({ "title": "First job", "date": "2001", "description": "Bakery" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let event_id = body_json(response).await["id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(json_request(
                Method::PATCH,
                &format!("/api/v1/stories/u1/timeline/{event_id}"),
                json!({ "notes": "Early mornings" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["notes"], "Early mornings");

        let delete = Request::builder()
            .method(Method::DELETE)
            .uri(format!("/api/v1/stories/u1/timeline/{event_id}"))
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(delete).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app.oneshot(get("/api/v1/stories/u1")).await.unwrap();
        let story = body_json(response).await;
        assert_eq!(story["timeline"], json!([]));
    }

    #[tokio::test]
    async fn test_unknown_style_path_is_400() {
        let request = json_request(
            Method::PUT,
            "/api/v1/stories/u1/drafts/gothic",
            json!({ "content": "x" }),
        );
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_reshare_keeps_id_and_serves_latest_snapshot() {
        let app = app();

        let response = app
            .clone()
            .oneshot(json_request(
                Method::PATCH,
                "/api/v1/stories/u1",
                json!({ "customization": { "title": "My Life" } }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let mut ids = Vec::new();
        for draft in ["First.\n\nDraft.", "Second draft."] {
            let response = app
                .clone()
                .oneshot(json_request(
                    Method::POST,
                    "/api/v1/stories/u1/share",
                    json!({ "draft": draft, "style": "simple" }),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let body = body_json(response).await;
            let id = body["shareId"].as_str().unwrap().to_string();
            assert_eq!(body["url"], format!("http://localhost:8080/share/{id}"));
            ids.push(id);
        }
        assert_eq!(ids[0], ids[1]);

        let response = app
            .oneshot(get(&format!("/api/v1/shares/{}", ids[0])))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let snapshot = body_json(response).await;
        assert_eq!(snapshot["draft"], "Second draft.");
        assert_eq!(snapshot["title"], "My Life");
        assert_eq!(snapshot["paragraphs"], json!(["Second draft."]));
    }

    #[tokio::test]
    async fn test_first_share_for_fresh_user_succeeds() {
        let app = app();

        let response = app
            .clone()
            .oneshot(get("/api/v1/stories/fresh"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/v1/stories/fresh/share",
                json!({ "draft": "Hello.", "style": "simple" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let share_id = body_json(response).await["shareId"]
            .as_str()
            .unwrap()
            .to_string();

        let response = app.oneshot(get("/api/v1/stories/fresh")).await.unwrap();
        let story = body_json(response).await;
        assert_eq!(story["shareableId"], share_id);
        assert_eq!(story["storyDrafts"]["simple"], "Hello.");
    }

    #[tokio::test]
    async fn test_unknown_share_is_unavailable() {
        let response = app().oneshot(get("/api/v1/shares/missing")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], SHARE_UNAVAILABLE);
    }
}
