use axum::http::{StatusCode, header};
use serde_json::json;
use temp_dir::TempDir;

mod helpers;

async fn seeded(dir: &TempDir) -> anyhow::Result<helpers::TestApp> {
    let app = helpers::setup_test_app(dir.child("db.sqlite3")).await?;
    app.seed_user("u1", "john").await?;
    app.seed_user("u2", "jane").await?;
    app.seed_recipe("r1", "u2", 10).await?;
    app.seed_recipe("r2", "u2", 20).await?;

    Ok(app)
}

#[tokio::test]
async fn test_health_and_ready() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_test_app(dir.child("db.sqlite3")).await?;

    let res = app.request("GET", "/health", None).await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(helpers::body_json(res).await?, json!({"status": "ok"}));

    let res = app.request("GET", "/ready", None).await?;
    assert_eq!(res.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn test_protected_routes_require_token() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = seeded(&dir).await?;

    for (method, uri) in [
        ("POST", "/api/recipes/r1/favorite/"),
        ("DELETE", "/api/recipes/r1/shopping_cart/"),
        ("GET", "/api/recipes/download_shopping_cart/"),
        ("POST", "/api/users/u2/subscribe/"),
        ("GET", "/api/users/subscriptions/"),
    ] {
        let res = app.request(method, uri, None).await?;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{method} {uri}");
        assert!(helpers::body_json(res).await?["errors"].is_string());
    }

    Ok(())
}

#[tokio::test]
async fn test_invalid_token_is_unauthorized() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = seeded(&dir).await?;
    let token = foodgram::auth::generate_token("u1", "another_secret_key_minimum_32_characters", 60)?;

    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/api/recipes/r1/favorite/")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(axum::body::Body::empty())?;
    let res = tower::ServiceExt::oneshot(app.router.clone(), req).await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn test_token_cookie_is_accepted() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = seeded(&dir).await?;

    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/api/recipes/r1/favorite/")
        .header(header::COOKIE, format!("auth_token={}", helpers::token("u1")))
        .body(axum::body::Body::empty())?;
    let res = tower::ServiceExt::oneshot(app.router.clone(), req).await?;

    assert_eq!(res.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
async fn test_favorite_lifecycle() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = seeded(&dir).await?;

    let res = app.request("POST", "/api/recipes/r1/favorite/", Some("u1")).await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(
        helpers::body_json(res).await?,
        json!({"id": "r1", "name": "recipe r1", "image": null, "cooking_time": 10})
    );

    let res = app.request("POST", "/api/recipes/r1/favorite/", Some("u1")).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        helpers::body_json(res).await?,
        json!({"errors": "relation already exists"})
    );

    let res = app.request("DELETE", "/api/recipes/r1/favorite/", Some("u1")).await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = app.request("DELETE", "/api/recipes/r1/favorite/", Some("u1")).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        helpers::body_json(res).await?,
        json!({"errors": "relation does not exist"})
    );

    Ok(())
}

#[tokio::test]
async fn test_missing_recipe_is_not_found() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = seeded(&dir).await?;

    let res = app.request("POST", "/api/recipes/nope/shopping_cart/", Some("u1")).await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(helpers::body_json(res).await?, json!({"errors": "recipe not found"}));

    let res = app.request("DELETE", "/api/recipes/nope/favorite/", Some("u1")).await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_subscribe_and_list_subscriptions() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = seeded(&dir).await?;

    let res = app.request("POST", "/api/users/u1/subscribe/", Some("u1")).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(helpers::body_json(res).await?, json!({"errors": "cannot follow self"}));

    let res = app
        .request("POST", "/api/users/u2/subscribe/?recipes_limit=1", Some("u1"))
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = helpers::body_json(res).await?;
    assert_eq!(body["username"], "jane");
    assert_eq!(body["is_subscribed"], true);
    assert_eq!(body["recipes_count"], 2);
    assert_eq!(body["recipes"], json!([{"id": "r2", "name": "recipe r2", "image": null, "cooking_time": 10}]));

    let res = app.request("GET", "/api/users/subscriptions/", Some("u1")).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = helpers::body_json(res).await?;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["recipes"].as_array().map(Vec::len), Some(2));

    let res = app.request("DELETE", "/api/users/u2/subscribe/", Some("u1")).await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = app.request("GET", "/api/users/subscriptions/", Some("u1")).await?;
    assert_eq!(helpers::body_json(res).await?, json!([]));

    let res = app.request("POST", "/api/users/ghost/subscribe/", Some("u1")).await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(helpers::body_json(res).await?, json!({"errors": "user not found"}));

    Ok(())
}

#[tokio::test]
async fn test_download_shopping_cart() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = seeded(&dir).await?;
    app.seed_ingredient("salt", "salt", "g").await?;
    app.seed_ingredient("flour", "Flour", "g").await?;
    app.seed_line("r1", "salt", 5_000).await?;
    app.seed_line("r2", "salt", 10_000).await?;
    app.seed_line("r2", "flour", 250_500).await?;

    let res = app
        .request("GET", "/api/recipes/download_shopping_cart/", Some("u1"))
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(helpers::body_string(res).await?, "");

    for recipe in ["r1", "r2"] {
        let uri = format!("/api/recipes/{recipe}/shopping_cart/");
        let res = app.request("POST", &uri, Some("u1")).await?;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = app
        .request("GET", "/api/recipes/download_shopping_cart/", Some("u1"))
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()[header::CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );
    assert_eq!(
        res.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"shopping_list.txt\""
    );
    assert_eq!(
        helpers::body_string(res).await?,
        "1. Flour (g) — 250.5\n2. Salt (g) — 15\n"
    );

    Ok(())
}

#[tokio::test]
async fn test_ingredients_and_tags_are_public() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = seeded(&dir).await?;
    app.seed_ingredient("salt", "salt", "g").await?;

    let res = app.request("GET", "/api/ingredients/", None).await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        helpers::body_json(res).await?,
        json!([{"id": "salt", "name": "salt", "measurement_unit": "g"}])
    );

    let res = app.request("GET", "/api/ingredients/salt/", None).await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.request("GET", "/api/ingredients/pepper/", None).await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = app.request("GET", "/api/tags/", None).await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(helpers::body_json(res).await?, json!([]));

    Ok(())
}
