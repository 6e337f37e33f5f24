//! # OpenAPI 仕様テスト
//!
//! utoipa から生成される OpenAPI 仕様の整合性を検証する。

use user_registry::openapi::ApiDoc;
use utoipa::OpenApi;

#[test]
fn test_openapi仕様がパニックせず生成される() {
    let doc = ApiDoc::openapi();
    // パニックしなければ成功
    let _yaml = doc.to_yaml().unwrap();
}

#[test]
fn test_全パスが含まれている() {
    let doc = ApiDoc::openapi();
    let paths: Vec<&str> = doc.paths.paths.keys().map(|k| k.as_str()).collect();

    assert_eq!(paths.len(), 3, "パス数が 3 であること: {paths:?}");
    assert!(paths.contains(&"/health"));
    assert!(paths.contains(&"/users"));
    assert!(paths.contains(&"/users/{id}"));
}

#[test]
fn test_users_idに3つのメソッドが定義されている() {
    let doc = ApiDoc::openapi();
    let item = doc
        .paths
        .paths
        .get("/users/{id}")
        .expect("/users/{id} が存在すること");

    assert!(item.get.is_some());
    assert!(item.put.is_some());
    assert!(item.delete.is_some());
}

#[test]
fn test_全タグが含まれている() {
    let doc = ApiDoc::openapi();
    let tags: Vec<&str> = doc
        .tags
        .as_ref()
        .expect("tags が存在すること")
        .iter()
        .map(|t| t.name.as_str())
        .collect();

    assert!(tags.contains(&"health"));
    assert!(tags.contains(&"users"));
}

#[test]
fn test_エラースキーマが登録されている() {
    let doc = ApiDoc::openapi();
    let components = doc.components.as_ref().expect("components が存在すること");

    for name in [
        "ProblemDetails",
        "FieldError",
        "ValidationErrorResponse",
        "MessageResponse",
    ] {
        assert!(
            components.schemas.contains_key(name),
            "{name} スキーマが存在すること"
        );
    }
}

#[test]
fn test_ローカルサーバーが登録されている() {
    let doc = ApiDoc::openapi();
    let servers = doc.servers.as_ref().expect("servers が存在すること");

    assert!(servers.iter().any(|s| s.url == "http://localhost:3000"));
}
