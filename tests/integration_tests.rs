// Integration tests for UMKM Nearby

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};

use umkm_nearby::config::{CatalogSettings, DiscoverySettings, LoggingSettings, ServerSettings, SessionSettings, Settings};
use umkm_nearby::core::{filter_and_sort, top_matches, DiscoveryEngine};
use umkm_nearby::models::{Coordinate, Listing, Price, SearchCriteria, SortKey};
use umkm_nearby::routes::{configure_routes, AppState};

fn create_listing(id: &str, name: &str, lat: f64, lon: f64, price: f64) -> Listing {
    Listing {
        id: id.to_string(),
        name: name.to_string(),
        address: "Banda Aceh".to_string(),
        category: Some("Makanan & Minuman".to_string()),
        category_id: Some("cat-food".to_string()),
        coordinate: Some(Coordinate::new(lat, lon)),
        thumbnail_url: None,
        price: Some(Price::Fixed { amount: price }),
    }
}

/// Toko Kopi at the origin, Toko Teh a few kilometres north-east
fn sample() -> Vec<Listing> {
    vec![
        create_listing("kopi", "Toko Kopi", 5.54, 95.34, 20.0),
        create_listing("teh", "Toko Teh", 5.60, 95.40, 50.0),
    ]
}

fn names<'a, I: IntoIterator<Item = &'a Listing>>(items: I) -> Vec<&'a str> {
    items.into_iter().map(|l| l.name.as_str()).collect()
}

#[::core::prelude::v1::test]
fn test_radius_excludes_far_listing() {
    let criteria = SearchCriteria {
        origin: Some(Coordinate::new(5.54, 95.34)),
        radius_km: 5.0,
        ..SearchCriteria::default()
    };

    let result = filter_and_sort(&sample(), &criteria, SortKey::None);

    assert_eq!(names(&result), vec!["Toko Kopi"]);
}

#[::core::prelude::v1::test]
fn test_no_origin_ignores_radius() {
    let criteria = SearchCriteria { radius_km: 0.5, ..SearchCriteria::default() };

    let result = filter_and_sort(&sample(), &criteria, SortKey::None);

    assert_eq!(names(&result), vec!["Toko Kopi", "Toko Teh"]);
}

#[::core::prelude::v1::test]
fn test_price_ascending() {
    let mut listings = sample();
    listings.reverse();

    let result = filter_and_sort(&listings, &SearchCriteria::default(), SortKey::from("price-asc"));

    assert_eq!(names(&result), vec!["Toko Kopi", "Toko Teh"]);
}

#[::core::prelude::v1::test]
fn test_text_is_case_insensitive() {
    let criteria = SearchCriteria { text: "teh".to_string(), ..SearchCriteria::default() };

    let result = filter_and_sort(&sample(), &criteria, SortKey::None);

    assert_eq!(names(&result), vec!["Toko Teh"]);
}

#[::core::prelude::v1::test]
fn test_top_matches_without_origin_keeps_order() {
    let criteria = SearchCriteria { text: "toko".to_string(), ..SearchCriteria::default() };

    let cards = top_matches(&sample(), &criteria, 3);

    assert_eq!(names(cards.iter().map(|c| &c.listing)), vec!["Toko Kopi", "Toko Teh"]);
    assert!(cards.iter().all(|c| c.distance_km.is_none()));
}

#[::core::prelude::v1::test]
fn test_nan_coordinate_only_survives_without_origin() {
    let mut listings = sample();
    listings.push(Listing {
        coordinate: Some(Coordinate::new(f64::NAN, 95.34)),
        ..create_listing("nan", "Toko Roti", 0.0, 0.0, 10.0)
    });

    let with_origin = SearchCriteria {
        origin: Some(Coordinate::new(5.54, 95.34)),
        radius_km: 10_000.0,
        ..SearchCriteria::default()
    };
    assert!(!names(&filter_and_sort(&listings, &with_origin, SortKey::None)).contains(&"Toko Roti"));

    let text_only = SearchCriteria { text: "roti".to_string(), ..SearchCriteria::default() };
    assert_eq!(names(&filter_and_sort(&listings, &text_only, SortKey::None)), vec!["Toko Roti"]);
}

#[::core::prelude::v1::test]
fn test_discover_end_to_end() {
    let engine = DiscoveryEngine::with_defaults();
    let listings: Vec<Listing> = (0..20)
        .map(|i| create_listing(&i.to_string(), &format!("Warung {:02}", i), 5.54 + i as f64 * 0.001, 95.34, 1000.0 * (20 - i) as f64))
        .collect();
    let criteria = SearchCriteria {
        text: "warung".to_string(),
        origin: Some(Coordinate::new(5.54, 95.34)),
        radius_km: 1.5,
        ..SearchCriteria::default()
    };

    let page = engine.discover(&listings, &criteria, SortKey::PriceAsc, 2);

    // 0.001 degree of latitude is ~111 m, so 14 listings fall inside 1.5 km
    assert_eq!(page.total, 14);
    assert_eq!(page.page_count, 2);
    assert_eq!(page.items.len(), 5);
    assert_eq!(page.items[0].listing.name, "Warung 04");
    assert!(page.items.iter().all(|r| r.distance_km.is_some_and(|d| d <= 1.5)));
}

// HTTP routes against a mocked catalog

fn settings(base_url: String) -> Settings {
    Settings {
        server: ServerSettings::default(),
        catalog: CatalogSettings { base_url, timeout_secs: 5 },
        discovery: DiscoverySettings::default(),
        sessions: SessionSettings::default(),
        logging: LoggingSettings::default(),
    }
}

fn catalog_body() -> String {
    json!({
        "data": [
            {
                "_id": "kopi",
                "nama_umkm": "Toko Kopi",
                "alamat": "Jl. Teuku Umar",
                "kategori": "Makanan & Minuman",
                "kategori_id": "cat-food",
                "latitude": "5.54",
                "longitude": "95.34",
                "harga": "Rp20.000"
            },
            {
                "_id": "teh",
                "nama_umkm": "Toko Teh",
                "alamat": "Jl. Cut Nyak Dhien",
                "kategori": "Makanan & Minuman",
                "kategori_id": "cat-food",
                "latitude": 5.60,
                "longitude": 95.40,
                "harga": 50000
            },
            {
                "_id": "batik",
                "nama_umkm": "Batik Aceh",
                "alamat": "Pasar Aceh",
                "kategori": "Fashion & Pakaian",
                "kategori_id": "cat-fashion",
                "latitude": null,
                "longitude": null
            },
            { "nama_umkm": "Tanpa Id" }
        ]
    })
    .to_string()
}

/// Mocks are removed when dropped, so callers hold on to the returned handles
async fn mock_catalog(server: &mut mockito::ServerGuard) -> Vec<mockito::Mock> {
    let listings = server
        .mock("GET", "/umkm/all")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(catalog_body())
        .create_async()
        .await;

    let categories = server
        .mock("GET", "/category/all")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "data": [ { "_id": "cat-fashion", "nama_kategori": "Fashion & Pakaian" } ] }).to_string())
        .create_async()
        .await;

    vec![listings, categories]
}

macro_rules! app {
    ($base_url:expr) => {{
        let state = AppState::from_settings(&settings($base_url)).expect("app state");
        test::init_service(App::new().app_data(web::Data::new(state)).configure(configure_routes)).await
    }};
}

#[actix_web::test]
async fn test_health() {
    let app = app!("http://127.0.0.1:1".to_string());

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_search_route_filters_by_radius() {
    let mut server = mockito::Server::new_async().await;
    let _mocks = mock_catalog(&mut server).await;
    let app = app!(server.url());

    let req = test::TestRequest::post()
        .uri("/api/v1/discovery/search")
        .set_json(json!({
            "origin": { "latitude": 5.54, "longitude": 95.34 },
            "radiusKm": 5,
            "sort": "distance"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"], 1);
    assert_eq!(body["pageCount"], 1);
    assert_eq!(body["results"][0]["listing"]["name"], "Toko Kopi");
    assert_eq!(body["results"][0]["distanceKm"], 0.0);
}

#[actix_web::test]
async fn test_search_route_without_origin_sorts_by_price() {
    let mut server = mockito::Server::new_async().await;
    let _mocks = mock_catalog(&mut server).await;
    let app = app!(server.url());

    let req = test::TestRequest::post()
        .uri("/api/v1/discovery/search")
        .set_json(json!({ "sort": "price-desc", "category": "all" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let names: Vec<&str> = body["results"]
        .as_array()
        .expect("results")
        .iter()
        .map(|r| r["listing"]["name"].as_str().unwrap_or_default())
        .collect();
    assert_eq!(names, vec!["Toko Teh", "Toko Kopi", "Batik Aceh"]);
}

#[actix_web::test]
async fn test_search_route_rejects_bad_page() {
    let app = app!("http://127.0.0.1:1".to_string());

    let req = test::TestRequest::post()
        .uri("/api/v1/discovery/search")
        .set_json(json!({ "page": 0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_search_route_catalog_down_is_bad_gateway() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/umkm/all")
        .match_query(mockito::Matcher::Any)
        .with_status(500)
        .create_async()
        .await;
    let app = app!(server.url());

    let req = test::TestRequest::post()
        .uri("/api/v1/discovery/search")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

#[actix_web::test]
async fn test_top_route_orders_by_distance() {
    let mut server = mockito::Server::new_async().await;
    let _mocks = mock_catalog(&mut server).await;
    let app = app!(server.url());

    let req = test::TestRequest::post()
        .uri("/api/v1/discovery/top")
        .set_json(json!({ "text": "toko", "origin": { "latitude": 5.60, "longitude": 95.40 } }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let cards = body["cards"].as_array().expect("cards");
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0]["listing"]["id"], "teh");
    assert_eq!(cards[1]["listing"]["id"], "kopi");
}

#[actix_web::test]
async fn test_categories_route_intersects_allowed_list() {
    let mut server = mockito::Server::new_async().await;
    let _mocks = mock_catalog(&mut server).await;
    let app = app!(server.url());

    let req = test::TestRequest::get().uri("/api/v1/categories").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["categories"], json!(["Fashion & Pakaian"]));
}

#[actix_web::test]
async fn test_categories_route_falls_back_when_provider_fails() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server.mock("GET", "/category/all").with_status(503).create_async().await;
    let app = app!(server.url());

    let req = test::TestRequest::get().uri("/api/v1/categories").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["categories"].as_array().map(Vec::len), Some(5));
}

#[actix_web::test]
async fn test_suggestions_route() {
    let mut server = mockito::Server::new_async().await;
    let _mocks = mock_catalog(&mut server).await;
    let app = app!(server.url());

    let req = test::TestRequest::post()
        .uri("/api/v1/discovery/suggestions")
        .set_json(json!({ "text": "fash" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["suggestions"], json!([{ "type": "category", "name": "Fashion & Pakaian" }]));
}

#[actix_web::test]
async fn test_session_lifecycle() {
    let mut server = mockito::Server::new_async().await;
    let _mocks = mock_catalog(&mut server).await;
    let app = app!(server.url());

    let req = test::TestRequest::post()
        .uri("/api/v1/sessions")
        .set_json(json!({ "origin": { "latitude": 5.54, "longitude": 95.34 }, "radiusKm": 50 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let id = body["session"]["id"].as_str().expect("session id").to_string();
    assert_eq!(body["session"]["state"]["kind"], "idle");
    // Clamped to the configured maximum
    assert_eq!(body["session"]["criteria"]["radiusKm"], 10.0);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/sessions/{}/events", id))
        .set_json(json!({ "event": "input", "text": "toko" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["session"]["state"]["kind"], "typing");
    assert_eq!(body["results"]["total"], 2);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/sessions/{}/events", id))
        .set_json(json!({ "event": "submit" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["session"]["state"]["kind"], "submitted");
    assert_eq!(body["session"]["state"]["cards"][0]["listing"]["id"], "kopi");

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/sessions/{}/events", id))
        .set_json(json!({ "event": "dismiss" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["session"]["state"]["kind"], "idle");
    assert!(body["results"].is_null());

    let req = test::TestRequest::delete().uri(&format!("/api/v1/sessions/{}", id)).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get().uri(&format!("/api/v1/sessions/{}", id)).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_session_unknown_event() {
    let app = app!("http://127.0.0.1:1".to_string());

    let req = test::TestRequest::post()
        .uri("/api/v1/sessions")
        .set_json(json!({}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let id = body["session"]["id"].as_str().expect("session id").to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/sessions/{}/events", id))
        .set_json(json!({ "event": "scroll" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}
