//! End-to-end tests for the provider facade against a mock FaselHD site

use faselhd_core::{
    Category, ClientConfig, DetailKind, FaselError, FaselProvider, MediaKind, Quality,
};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer) -> FaselProvider {
    FaselProvider::with_config(ClientConfig::with_base_url(server.uri()))
        .expect("provider should build")
}

async fn mount_page(server: &MockServer, page_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

const MOVIES_PAGE: &str = r#"
<html>
<body>
    <div class="movie-item">
        <img src="/uploads/valid.jpg">
        <h3><a href="/movies/valid-movie">Valid Movie</a></h3>
    </div>
    <div class="movie-item">
        <img src="/uploads/broken.jpg">
        <h3><a>Broken Movie</a></h3>
    </div>
</body>
</html>
"#;

const DETAIL_WITH_SERVERS: &str = r#"
<html>
<body>
    <h1>Dune</h1>
    <div class="servers">
        <div class="server-item">
            <span class="server-name">Fasel Player</span>
            <a href="/player/1">1</a>
        </div>
        <div class="server-item">
            <span class="server-name">HLS Mirror</span>
            <a href="/player/2">2</a>
        </div>
        <div class="server-item">
            <span class="server-name">Offline</span>
            <a href="/player/3">3</a>
        </div>
    </div>
</body>
</html>
"#;

#[tokio::test]
async fn test_browse_drops_card_without_href() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movies"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(MOVIES_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let entries = provider.browse_page(Category::Movies, 1).await.unwrap();

    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.title, "Valid Movie");
    assert_eq!(entry.detail_url, format!("{}/movies/valid-movie", server.uri()));
    assert_eq!(
        entry.poster_url.as_deref(),
        Some(format!("{}/uploads/valid.jpg", server.uri()).as_str())
    );
    assert_eq!(entry.media_kind, MediaKind::Movie);
}

#[tokio::test]
async fn test_browse_empty_page_is_not_an_error() {
    let server = MockServer::start().await;
    mount_page(&server, "/anime", "<html><body><p>لا يوجد</p></body></html>").await;

    let provider = provider_for(&server);
    let entries = provider.browse_page(Category::Anime, 7).await.unwrap();

    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_browse_server_error_is_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/series"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let result = provider.browse_page(Category::Series, 1).await;

    match result {
        Err(FaselError::HttpStatus { status, url }) => {
            assert_eq!(status, 503);
            assert!(url.ends_with("/series?page=1"));
        }
        other => panic!("Expected HttpStatus error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_home_page_lists_all_categories_in_order() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/movies",
        r#"<div class="movie-item"><h3><a href="/movies/m">M</a></h3></div>"#,
    )
    .await;
    mount_page(
        &server,
        "/series",
        r#"<div class="movie-item"><h3><a href="/series/s">S</a></h3></div>"#,
    )
    .await;
    mount_page(&server, "/anime", "<html></html>").await;

    let provider = provider_for(&server);
    let sections = provider.home_page(1).await.unwrap();

    let categories: Vec<Category> = sections.iter().map(|s| s.category).collect();
    assert_eq!(
        categories,
        vec![Category::Movies, Category::Series, Category::Anime]
    );
    assert_eq!(sections[0].name, "أفلام");
    assert_eq!(sections[1].entries[0].media_kind, MediaKind::Series);
    assert!(sections[2].entries.is_empty());
}

#[tokio::test]
async fn test_search_encodes_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "the office"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<div class="movie-item"><h3><a href="/series/the-office">The Office</a></h3></div>"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let results = provider.search("  the office ").await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "The Office");
    assert_eq!(results[0].media_kind, MediaKind::Movie);
}

#[tokio::test]
async fn test_search_no_matches_returns_empty() {
    let server = MockServer::start().await;
    mount_page(&server, "/search", "<html><body></body></html>").await;

    let provider = provider_for(&server);
    let results = provider.search("zzzz").await.unwrap();

    assert!(results.is_empty());
}

#[tokio::test]
async fn test_load_detail_series_accepts_relative_url() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/series/dark",
        r#"
        <h1>Dark</h1>
        <img class="poster" src="/uploads/dark.jpg">
        <span class="year">2017</span>
        <span class="rating">8.7</span>
        <div class="episode-item">
            <span class="episode-number">1</span>
            <span class="episode-title">Secrets</span>
            <a href="/episodes/dark-1">Watch</a>
        </div>
        "#,
    )
    .await;

    let provider = provider_for(&server);
    let detail = provider.load_detail("/series/dark").await.unwrap().unwrap();

    assert_eq!(detail.url, format!("{}/series/dark", server.uri()));
    assert_eq!(detail.year, Some(2017));
    assert_eq!(detail.rating, Some(8700));
    match &detail.kind {
        DetailKind::Series { episodes } => {
            assert_eq!(episodes.len(), 1);
            assert_eq!(
                episodes[0].data_url,
                format!("{}/episodes/dark-1", server.uri())
            );
        }
        DetailKind::Movie { .. } => panic!("Expected a series"),
    }
}

#[tokio::test]
async fn test_load_detail_movie_uses_own_url_as_data() {
    let server = MockServer::start().await;
    mount_page(&server, "/movies/dune", "<h1>Dune</h1><span class=\"rating\">x</span>").await;

    let provider = provider_for(&server);
    let url = format!("{}/movies/dune", server.uri());
    let detail = provider.load_detail(&url).await.unwrap().unwrap();

    assert_eq!(detail.kind, DetailKind::Movie { data_url: url });
    assert_eq!(detail.rating, None);
}

#[tokio::test]
async fn test_load_detail_is_idempotent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movies/stable"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<h1>Stable</h1><div class="description">Same every time</div><span class="year">2001</span>"#,
        ))
        .expect(2)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let first = provider.load_detail("/movies/stable").await.unwrap();
    let second = provider.load_detail("/movies/stable").await.unwrap();

    assert!(first.is_some());
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_load_detail_without_heading_is_none() {
    let server = MockServer::start().await;
    mount_page(&server, "/movies/gone", "<html><body>removed</body></html>").await;

    let provider = provider_for(&server);
    let detail = provider.load_detail("/movies/gone").await.unwrap();

    assert!(detail.is_none());
}

#[tokio::test]
async fn test_load_detail_missing_page_is_fetch_error() {
    let server = MockServer::start().await;

    let provider = provider_for(&server);
    let result = provider.load_detail("/movies/missing").await;

    match result {
        Err(err @ FaselError::HttpStatus { status: 404, .. }) => assert!(err.is_fetch_error()),
        other => panic!("Expected 404 HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_resolve_links_skips_server_without_source() {
    let server = MockServer::start().await;
    mount_page(&server, "/movies/dune", DETAIL_WITH_SERVERS).await;
    mount_page(
        &server,
        "/player/1",
        r#"<iframe src="https://embed.example.com/e/dune"></iframe>"#,
    )
    .await;
    mount_page(
        &server,
        "/player/2",
        r#"<video><source src="/hls/dune/master.m3u8"></video>"#,
    )
    .await;
    mount_page(&server, "/player/3", "<p>This server is offline</p>").await;

    let provider = provider_for(&server);
    let data_url = format!("{}/movies/dune", server.uri());
    let links = provider.resolve_links(&data_url).await.unwrap();

    assert_eq!(links.len(), 2);

    assert_eq!(links[0].server_label, "Fasel Player");
    assert_eq!(links[0].url, "https://embed.example.com/e/dune");
    assert!(!links[0].is_segmented_stream);

    assert_eq!(links[1].server_label, "HLS Mirror");
    assert_eq!(
        links[1].url,
        format!("{}/hls/dune/master.m3u8", server.uri())
    );
    assert!(links[1].is_segmented_stream);

    for link in &links {
        assert_eq!(link.provider_label, "FaselHD");
        assert_eq!(link.referer_url, data_url);
        assert_eq!(link.quality, Quality::Unknown);
    }
}

#[tokio::test]
async fn test_load_links_survives_failing_server_page() {
    let server = MockServer::start().await;
    mount_page(&server, "/movies/dune", DETAIL_WITH_SERVERS).await;
    Mock::given(method("GET"))
        .and(path("/player/1"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    mount_page(
        &server,
        "/player/2",
        r#"<iframe src="//cdn.example.com/live/index.m3u8"></iframe>"#,
    )
    .await;
    // /player/3 is not mounted and answers 404

    let provider = provider_for(&server);
    let mut links = Vec::new();
    let mut subtitles = 0;
    let success = provider
        .load_links("/movies/dune", |link| links.push(link), |_| subtitles += 1)
        .await
        .unwrap();

    assert!(success);
    assert_eq!(subtitles, 0);
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].url, "http://cdn.example.com/live/index.m3u8");
    assert!(links[0].is_segmented_stream);
}

#[tokio::test]
async fn test_resolve_links_falls_back_past_placeholder_frame() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/episodes/x",
        r#"<div class="server-item"><span class="server-name">Main</span><a href="/player/main">1</a></div>"#,
    )
    .await;
    mount_page(
        &server,
        "/player/main",
        r#"<iframe src="about:blank"></iframe><video><source src="/media/x.m3u8"></video>"#,
    )
    .await;

    let provider = provider_for(&server);
    let links = provider.resolve_links("/episodes/x").await.unwrap();

    assert_eq!(links.len(), 1);
    assert_eq!(links[0].url, format!("{}/media/x.m3u8", server.uri()));
    assert!(links[0].is_segmented_stream);
}

#[tokio::test]
async fn test_session_cookie_is_sent_on_later_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movies"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "session=abc; Path=/")
                .set_body_string(MOVIES_PAGE),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/movies/valid-movie"))
        .and(header("cookie", "session=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<h1>Valid Movie</h1>"))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let entries = provider.browse_page(Category::Movies, 1).await.unwrap();
    let detail = provider.load_detail(&entries[0].detail_url).await.unwrap();

    assert_eq!(detail.expect("detail should load").title, "Valid Movie");
}

#[tokio::test]
async fn test_resolve_links_without_servers_succeeds_empty() {
    let server = MockServer::start().await;
    mount_page(&server, "/episodes/dark-1", "<h1>Dark 1</h1>").await;

    let provider = provider_for(&server);
    let mut called = false;
    let success = provider
        .load_links("/episodes/dark-1", |_| called = true, |_| {})
        .await
        .unwrap();

    assert!(success);
    assert!(!called);
}

#[tokio::test]
async fn test_resolve_links_fetches_duplicate_servers_each_time() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/episodes/x",
        r#"
        <div class="server-item"><span class="server-name">Same</span><a href="/player/same">a</a></div>
        <div class="server-item"><span class="server-name">Same</span><a href="/player/same">b</a></div>
        "#,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/player/same"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"<iframe src="/embed/same"></iframe>"#),
        )
        .expect(2)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let links = provider.resolve_links("/episodes/x").await.unwrap();

    assert_eq!(links.len(), 2);
    assert_eq!(links[0], links[1]);
}

#[tokio::test]
async fn test_resolve_links_top_level_failure_is_error() {
    let server = MockServer::start().await;

    let provider = provider_for(&server);
    let result = provider.resolve_links("/movies/nowhere").await;

    assert!(matches!(
        result,
        Err(FaselError::HttpStatus { status: 404, .. })
    ));
}
