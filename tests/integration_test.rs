use fdc_client::{
    DataType, FdcClient, FdcClientConfig, FdcError, FoodParams, ListParams, ReportFormat,
    SearchParams, SortBy, SortOrder, StatusCode,
};
use httpmock::prelude::*;
use serde_json::json;

/// Build a client pointed at a mock FDC server
fn client_for(server: &MockServer) -> FdcClient {
    let config = FdcClientConfig::new("test-key").with_base_url(server.base_url());
    FdcClient::from_config(config).unwrap()
}

fn food_body(fdc_id: u64, description: &str) -> serde_json::Value {
    json!({
        "fdcId": fdc_id,
        "description": description,
        "dataType": "SR Legacy",
        "publicationDate": "4/1/2019",
        "foodNutrients": []
    })
}

#[tokio::test]
async fn test_get_food_by_id() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/food/534358")
            .query_param("api_key", "test-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(food_body(534358, "NUT 'N BERRY MIX"));
    });

    let client = client_for(&server);
    let food = client.get_food("534358", &FoodParams::new()).await.unwrap();

    assert_eq!(food.fdc_id, 534358);
    assert_eq!(food.description, "NUT 'N BERRY MIX");

    mock.assert();
}

#[tokio::test]
async fn test_get_food_empty_id_rejected_before_network() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(food_body(1, "x"));
    });

    let client = client_for(&server);
    let err = client.get_food("", &FoodParams::new()).await.unwrap_err();

    assert!(matches!(err, FdcError::InvalidArgument(_)));
    mock.assert_hits(0);
}

#[tokio::test]
async fn test_get_food_malformed_id_rejected_before_network() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(food_body(1, "x"));
    });

    let client = client_for(&server);
    let err = client.get_food("not-a-number", &FoodParams::new()).await.unwrap_err();

    assert!(matches!(err, FdcError::InvalidArgument(_)));
    mock.assert_hits(0);
}

#[tokio::test]
async fn test_get_food_forwards_format_and_nutrients() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/food/534358")
            .query_param("format", "full")
            .query_param("nutrients", "203,204,303");
        then.status(200)
            .json_body(food_body(534358, "NUT 'N BERRY MIX"));
    });

    let client = client_for(&server);
    let params = FoodParams::new()
        .format(ReportFormat::Full)
        .nutrient(203)
        .nutrient(204)
        .nutrient(303);
    let food = client.get_food("534358", &params).await.unwrap();

    assert_eq!(food.fdc_id, 534358);
    mock.assert();
}

#[tokio::test]
async fn test_get_food_too_many_nutrients_rejected_before_network() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(food_body(1, "x"));
    });

    let client = client_for(&server);
    let mut params = FoodParams::new();
    for number in 200..226 {
        params = params.nutrient(number);
    }
    let err = client.get_food("534358", &params).await.unwrap_err();

    assert!(matches!(err, FdcError::InvalidArgument(_)));
    mock.assert_hits(0);
}

#[tokio::test]
async fn test_get_food_not_found() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/food/999999999");
        then.status(404).body("no such food");
    });

    let client = client_for(&server);
    let err = client.get_food("999999999", &FoodParams::new()).await.unwrap_err();

    assert!(matches!(err, FdcError::NotFound { ref resource } if resource.contains("999999999")));
    mock.assert();
}

#[tokio::test]
async fn test_get_food_server_error_carries_status_and_body() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/food/534358");
        then.status(500).body("internal failure");
    });

    let client = client_for(&server);
    let err = client.get_food("534358", &FoodParams::new()).await.unwrap_err();

    match err {
        FdcError::Remote { status, body } => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(&body[..], b"internal failure");
        }
        other => panic!("expected Remote error, got {other:?}"),
    }
    mock.assert();
}

#[tokio::test]
async fn test_malformed_json_is_decode_error() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/food/534358");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("{not valid json");
    });

    let client = client_for(&server);
    let err = client.get_food("534358", &FoodParams::new()).await.unwrap_err();

    assert!(matches!(err, FdcError::Decode(_)));
    mock.assert();
}

#[tokio::test]
async fn test_wrong_shape_is_decode_error() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/food/534358");
        then.status(200).json_body(json!({"unexpected": "shape"}));
    });

    let client = client_for(&server);
    let err = client.get_food("534358", &FoodParams::new()).await.unwrap_err();

    assert!(matches!(err, FdcError::Decode(_)));
    mock.assert();
}

#[tokio::test]
async fn test_list_foods_fixture_order_preserved() {
    let server = MockServer::start();

    let names = [
        "Abiyuch, raw",
        "Acerola juice, raw",
        "Acerola, (west indian cherry), raw",
        "Acorn stew (Apache)",
        "Agave, cooked (Southwest)",
    ];
    let body: Vec<_> = names
        .iter()
        .enumerate()
        .map(|(i, name)| food_body(167000 + i as u64, name))
        .collect();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/foods/list")
            .query_param("api_key", "test-key")
            .query_param("pageSize", "5");
        then.status(200).json_body(json!(body));
    });

    let client = client_for(&server);
    let page = client
        .list_foods(&ListParams::new().page_size(5))
        .await
        .unwrap();

    assert_eq!(page.foods.len(), 5);
    assert!(page.foods.len() <= page.page_size as usize);
    let decoded: Vec<&str> = page.foods.iter().map(|f| f.description.as_str()).collect();
    assert_eq!(decoded, names);
    assert_eq!(page.page_number, 1);
    assert_eq!(page.total_hits, None);

    mock.assert();
}

#[tokio::test]
async fn test_list_foods_forwards_paging_and_sorting() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/foods/list")
            .query_param("pageSize", "2")
            .query_param("pageNumber", "3")
            .query_param("dataType", "Foundation,SR Legacy")
            .query_param("sortBy", "lowercaseDescription.keyword")
            .query_param("sortOrder", "desc");
        then.status(200)
            .json_body(json!([food_body(1104067, "Flour, corn")]));
    });

    let client = client_for(&server);
    let params = ListParams::new()
        .page_size(2)
        .page_number(3)
        .data_type(DataType::Foundation)
        .data_type(DataType::SrLegacy)
        .sort_by(SortBy::Description)
        .sort_order(SortOrder::Desc);
    let page = client.list_foods(&params).await.unwrap();

    assert_eq!(page.page_number, 3);
    assert_eq!(page.page_size, 2);

    mock.assert();
}

#[tokio::test]
async fn test_list_foods_invalid_page_size_rejected_before_network() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(json!([]));
    });

    let client = client_for(&server);
    let err = client
        .list_foods(&ListParams::new().page_size(0))
        .await
        .unwrap_err();

    assert!(matches!(err, FdcError::InvalidArgument(_)));
    mock.assert_hits(0);
}

#[tokio::test]
async fn test_search_foods() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/foods/search")
            .query_param("api_key", "test-key")
            .query_param("query", "cheddar cheese")
            .query_param("pageSize", "25");
        then.status(200).json_body(json!({
            "totalHits": 1034,
            "currentPage": 1,
            "totalPages": 42,
            "foods": [food_body(328637, "CHEDDAR CHEESE")]
        }));
    });

    let client = client_for(&server);
    let page = client
        .search_foods("cheddar cheese", &SearchParams::new().page_size(25))
        .await
        .unwrap();

    assert_eq!(page.total_hits, Some(1034));
    assert_eq!(page.total_pages, Some(42));
    assert_eq!(page.page_number, 1);
    assert_eq!(page.page_size, 25);
    assert_eq!(page.foods[0].description, "CHEDDAR CHEESE");

    mock.assert();
}

#[tokio::test]
async fn test_search_foods_forwards_brand_owner() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/foods/search")
            .query_param("query", "mix")
            .query_param("brandOwner", "Kar Nut Products Company");
        then.status(200).json_body(json!({
            "totalHits": 1,
            "currentPage": 1,
            "totalPages": 1,
            "foods": [food_body(534358, "NUT 'N BERRY MIX")]
        }));
    });

    let client = client_for(&server);
    let page = client
        .search_foods(
            "mix",
            &SearchParams::new().brand_owner("Kar Nut Products Company"),
        )
        .await
        .unwrap();

    assert_eq!(page.foods.len(), 1);
    mock.assert();
}

#[tokio::test]
async fn test_search_empty_query_rejected_before_network() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(json!({
            "totalHits": 0, "currentPage": 1, "totalPages": 0, "foods": []
        }));
    });

    let client = client_for(&server);
    let err = client
        .search_foods("   ", &SearchParams::new())
        .await
        .unwrap_err();

    assert!(matches!(err, FdcError::InvalidArgument(_)));
    mock.assert_hits(0);
}

#[tokio::test]
async fn test_get_foods_multiple_ids() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/foods")
            .query_param("fdcIds", "534358,373052");
        then.status(200).json_body(json!([
            food_body(534358, "NUT 'N BERRY MIX"),
            food_body(373052, "NUT AND SEED MIX"),
        ]));
    });

    let client = client_for(&server);
    let foods = client.get_foods(&["534358", "373052"], &FoodParams::new()).await.unwrap();

    assert_eq!(foods.len(), 2);
    assert_eq!(foods[0].fdc_id, 534358);
    assert_eq!(foods[1].fdc_id, 373052);

    mock.assert();
}

#[tokio::test]
async fn test_get_foods_forwards_format() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/foods")
            .query_param("format", "abridged")
            .query_param("fdcIds", "534358");
        then.status(200)
            .json_body(json!([food_body(534358, "NUT 'N BERRY MIX")]));
    });

    let client = client_for(&server);
    let foods = client
        .get_foods(&["534358"], &FoodParams::new().format(ReportFormat::Abridged))
        .await
        .unwrap();

    assert_eq!(foods.len(), 1);
    mock.assert();
}

#[tokio::test]
async fn test_get_foods_limits_enforced_before_network() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(json!([]));
    });

    let client = client_for(&server);

    let err = client.get_foods(&[], &FoodParams::new()).await.unwrap_err();
    assert!(matches!(err, FdcError::InvalidArgument(_)));

    let ids: Vec<String> = (1..=21).map(|i| i.to_string()).collect();
    let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    let err = client.get_foods(&refs, &FoodParams::new()).await.unwrap_err();
    assert!(matches!(err, FdcError::InvalidArgument(_)));

    mock.assert_hits(0);
}

#[tokio::test]
async fn test_rate_limit_envelope_mapped() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/foods/list");
        then.status(429).json_body(json!({
            "error": {"code": "OVER_RATE_LIMIT", "message": "API rate limit exceeded"}
        }));
    });

    let client = client_for(&server);
    let err = client.list_foods(&ListParams::new()).await.unwrap_err();

    assert!(matches!(err, FdcError::RateLimited));
    mock.assert();
}

#[tokio::test]
async fn test_invalid_api_key_mapped() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/food/534358");
        then.status(403).json_body(json!({
            "error": {"code": "API_KEY_INVALID", "message": "An invalid api_key was supplied"}
        }));
    });

    let client = client_for(&server);
    let err = client.get_food("534358", &FoodParams::new()).await.unwrap_err();

    assert!(matches!(err, FdcError::InvalidApiKey));
    mock.assert();
}

#[tokio::test]
async fn test_food_with_empty_identity_is_decode_error() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/foods/list");
        then.status(200)
            .json_body(json!([{"fdcId": 0, "description": "Mystery food"}]));
    });

    let client = client_for(&server);
    let err = client.list_foods(&ListParams::new()).await.unwrap_err();

    assert!(matches!(err, FdcError::Decode(_)));
    mock.assert();
}
