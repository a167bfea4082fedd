//! Integration tests for the platform clients using wiremock HTTP mocks.

use trendboard_trends::sources::{HackerNewsClient, RedditClient, SerpApiClient, YouTubeClient};
use trendboard_trends::{Platform, TrendError};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const UA: &str = "trendboard-test/0.1";

#[tokio::test]
async fn youtube_trending_sends_chart_query_and_parses_items() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "items": [
            {
                "id": "abc123",
                "snippet": {
                    "title": "Rust in production",
                    "channelTitle": "Ferris",
                    "description": "#rustlang talk",
                    "publishedAt": "2025-01-02T10:00:00Z",
                    "tags": ["rust"]
                },
                "statistics": {
                    "viewCount": "1200",
                    "likeCount": "80",
                    "commentCount": "7"
                }
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("chart", "mostPopular"))
        .and(query_param("regionCode", "GB"))
        .and(query_param("maxResults", "5"))
        .and(query_param("key", "yt-key"))
        .and(header("user-agent", UA))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = YouTubeClient::with_base_url("yt-key", 30, UA, &server.uri())
        .expect("client construction should not fail");
    let response = client
        .trending_videos("GB", 5)
        .await
        .expect("should parse videos");

    let items = response.items.expect("items present");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id.as_deref(), Some("abc123"));
    let stats = items[0].statistics.as_ref().expect("statistics present");
    assert_eq!(stats.view_count, Some(1200));
    assert_eq!(stats.like_count, Some(80));
}

#[tokio::test]
async fn youtube_without_items_key_is_not_an_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "kind": "youtube#videoListResponse"
        })))
        .mount(&server)
        .await;

    let client = YouTubeClient::with_base_url("yt-key", 30, UA, &server.uri()).unwrap();
    let response = client.trending_videos("US", 25).await.unwrap();
    assert!(response.items.is_none());
}

#[tokio::test]
async fn youtube_forbidden_is_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = YouTubeClient::with_base_url("bad-key", 30, UA, &server.uri()).unwrap();
    let err = client.trending_videos("US", 25).await.unwrap_err();
    assert!(matches!(err, TrendError::Http(_)), "got {err:?}");
}

#[tokio::test]
async fn reddit_hot_posts_parses_listing() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "kind": "Listing",
        "data": {
            "children": [
                {
                    "kind": "t3",
                    "data": {
                        "title": "Show off your #homelab",
                        "author": "alice",
                        "score": 420,
                        "num_comments": 69,
                        "url": "https://i.redd.it/x.png",
                        "permalink": "/r/technology/comments/x/",
                        "created_utc": 1_735_787_045.0
                    }
                },
                { "kind": "t3", "data": { "title": "bare post" } }
            ]
        }
    });

    Mock::given(method("GET"))
        .and(path("/r/technology/hot.json"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = RedditClient::with_base_url(30, UA, &server.uri()).unwrap();
    let posts = client
        .hot_posts("technology", 10)
        .await
        .expect("should parse listing")
        .into_posts();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].author.as_deref(), Some("alice"));
    assert_eq!(posts[0].score, Some(420));
    assert_eq!(posts[0].num_comments, Some(69));
    assert_eq!(posts[1].score, None);
}

#[tokio::test]
async fn reddit_rate_limit_is_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/r/startups/hot.json"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = RedditClient::with_base_url(30, UA, &server.uri()).unwrap();
    let err = client.hot_posts("startups", 25).await.unwrap_err();
    assert!(matches!(err, TrendError::Http(_)));
}

#[tokio::test]
async fn hackernews_ids_are_truncated_to_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/topstories.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([5, 4, 3, 2, 1])))
        .mount(&server)
        .await;

    let client = HackerNewsClient::with_base_url(30, UA, &server.uri()).unwrap();
    let ids = client.top_story_ids(3).await.unwrap();
    assert_eq!(ids, vec![5, 4, 3]);
}

#[tokio::test]
async fn hackernews_details_skip_null_and_failed_items() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/topstories.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([1, 2, 3])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/item/1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 1,
            "title": "Compilers are fun",
            "by": "pg",
            "score": 150,
            "descendants": 30,
            "url": "https://example.com/compilers",
            "time": 1_735_787_045
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/item/2.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/item/3.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = HackerNewsClient::with_base_url(30, UA, &server.uri()).unwrap();
    let stories = client.top_stories_with_details(3).await.unwrap();

    assert_eq!(stories.len(), 1);
    assert_eq!(stories[0].id, Some(1));
    assert_eq!(stories[0].title.as_deref(), Some("Compilers are fun"));
}

#[tokio::test]
async fn hackernews_details_keep_ranking_order_when_responses_arrive_out_of_order() {
    let server = MockServer::start().await;
    let ids: Vec<u64> = (100..120).rev().collect();

    Mock::given(method("GET"))
        .and(path("/topstories.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(ids)))
        .mount(&server)
        .await;
    // Higher-ranked items answer slowest.
    for (rank, id) in ids.iter().enumerate() {
        let delay = std::time::Duration::from_millis(5 * (ids.len() - rank) as u64);
        Mock::given(method("GET"))
            .and(path(format!("/item/{id}.json")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "id": id, "title": format!("story {id}") }))
                    .set_delay(delay),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = HackerNewsClient::with_base_url(30, UA, &server.uri()).unwrap();
    let stories = client.top_stories_with_details(20).await.unwrap();

    let got: Vec<u64> = stories.iter().filter_map(|s| s.id).collect();
    assert_eq!(got, ids);
}

#[tokio::test]
async fn hackernews_failed_id_list_fails_the_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/topstories.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = HackerNewsClient::with_base_url(30, UA, &server.uri()).unwrap();
    assert!(client.top_stories_with_details(10).await.is_err());
}

#[tokio::test]
async fn serpapi_interest_sends_timeseries_query() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "search_metadata": { "status": "Success" },
        "interest_over_time": {
            "timeline_data": [
                { "date": "Feb 23 – Mar 1, 2025", "values": [{ "query": "AI", "extracted_value": 71 }] },
                { "date": "Mar 2 – 8, 2025", "values": [{ "query": "AI", "extracted_value": 88 }] }
            ]
        }
    });

    Mock::given(method("GET"))
        .and(query_param("engine", "google_trends"))
        .and(query_param("q", "AI"))
        .and(query_param("data_type", "TIMESERIES"))
        .and(query_param("api_key", "serp-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = SerpApiClient::with_base_url("serp-key", 30, UA, &server.uri()).unwrap();
    let response = client.interest_over_time("AI").await.unwrap();

    let timeline = response.interest_over_time.expect("timeline present").timeline_data;
    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline[1].interest(), 88);
    assert_eq!(timeline[0].date.as_deref(), Some("Feb 23 – Mar 1, 2025"));
}

#[tokio::test]
async fn serpapi_in_band_error_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": "Invalid API key."
        })))
        .mount(&server)
        .await;

    let client = SerpApiClient::with_base_url("bad", 30, UA, &server.uri()).unwrap();
    let err = client.interest_over_time("AI").await.unwrap_err();
    match err {
        TrendError::Api { platform, message } => {
            assert_eq!(platform, Platform::GoogleTrends);
            assert_eq!(message, "Invalid API key.");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/topstories.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = HackerNewsClient::with_base_url(30, UA, &server.uri()).unwrap();
    let err = client.top_story_ids(5).await.unwrap_err();
    assert!(matches!(err, TrendError::Deserialize { .. }));
}
