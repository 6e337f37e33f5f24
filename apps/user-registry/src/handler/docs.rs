//! # API ドキュメント
//!
//! - `GET /docs` - Swagger UI ページ
//! - `GET /docs/openapi.json` - utoipa が生成する OpenAPI ドキュメント

use axum::{Json, response::Html};
use utoipa::OpenApi;

use crate::openapi::ApiDoc;

/// Swagger UI のページ
///
/// 静的アセットは CDN から読み込み、仕様は `/docs/openapi.json` を参照する。
const SWAGGER_UI_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>User Registry API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/docs/openapi.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

/// GET /docs
pub async fn docs_page() -> Html<&'static str> {
    Html(SWAGGER_UI_PAGE)
}

/// GET /docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_docs_pageは仕様のurlを参照する() {
        let Html(page) = docs_page().await;

        assert!(page.contains("/docs/openapi.json"));
    }

    #[tokio::test]
    async fn test_docs_pageはマウント先のセレクタを含む完全なhtml() {
        let Html(page) = docs_page().await;

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(r##"dom_id: "#swagger-ui""##));
        assert!(page.trim_end().ends_with("</html>"));
    }

    #[tokio::test]
    async fn test_openapi_jsonはユーザーapiを含む() {
        let Json(doc) = openapi_json().await;

        assert!(doc.paths.paths.contains_key("/users/{id}"));
    }
}
