//! Person API Tests

use axum::http::StatusCode;
use chrono::{NaiveDate, Utc};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use person_directory::application::dto::response::age_at;
use person_directory::application::dto::PersonResponse;

use crate::common::{person_body, person_body_named, TestApp};

#[tokio::test]
async fn test_add_person_returns_created() {
    let app = TestApp::new();
    let japan = app.add_country("Japan").await;

    let response = app
        .server
        .post("/api/persons")
        .json(&json!({
            "PersonName": "Tom",
            "Email": "tom@example.com",
            "DateOfBirth": "2002-05-28",
            "Gender": "Male",
            "CountryID": japan.country_id,
            "ReceiveNewsLetters": false
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let tom: PersonResponse = response.json();

    let dob = NaiveDate::from_ymd_opt(2002, 5, 28).unwrap();
    assert_ne!(tom.person_id, Uuid::nil());
    assert_eq!(tom.person_name.as_deref(), Some("Tom"));
    assert_eq!(tom.gender.as_deref(), Some("Male"));
    assert_eq!(tom.country.as_deref(), Some("Japan"));
    assert_eq!(tom.age, Some(age_at(dob, Utc::now())));

    let fetched: PersonResponse = app
        .server
        .get(&format!("/api/persons/{}", tom.person_id))
        .await
        .json();
    assert_eq!(fetched, tom);
}

#[tokio::test]
async fn test_add_person_empty_body_is_bad_request() {
    let app = TestApp::new();

    app.server
        .post("/api/persons")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_person_missing_name_is_bad_request() {
    let app = TestApp::new();
    let mut body = person_body();
    body["PersonName"] = Value::Null;

    app.server
        .post("/api/persons")
        .json(&body)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert!(app.list_persons("").await.is_empty());
}

#[tokio::test]
async fn test_add_person_invalid_email_lists_errors() {
    let app = TestApp::new();
    let mut body = person_body();
    body["Email"] = json!("not-an-email");

    let response = app.server.post("/api/persons").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert_eq!(json["code"], 10007);
    assert_eq!(json["errors"], json!(["Email value should be a valid email"]));
}

#[tokio::test]
async fn test_add_person_malformed_json_is_bad_request() {
    let app = TestApp::new();

    app.server
        .post("/api/persons")
        .text("{ not json")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_persons_contains_added() {
    let app = TestApp::new();

    assert!(app.list_persons("").await.is_empty());

    let first = app.add_person(person_body()).await;
    let second = app.add_person(person_body()).await;

    let persons = app.list_persons("").await;
    assert_eq!(persons.len(), 2);
    assert!(persons.contains(&first));
    assert!(persons.contains(&second));
}

#[tokio::test]
async fn test_list_persons_default_sort_is_name_ascending() {
    let app = TestApp::new();
    for name in ["Marry", "alice", "Bob"] {
        app.add_person(person_body_named(name, None)).await;
    }

    let names: Vec<_> = app
        .list_persons("")
        .await
        .into_iter()
        .filter_map(|p| p.person_name)
        .collect();

    assert_eq!(names, vec!["alice", "Bob", "Marry"]);
}

#[tokio::test]
async fn test_list_persons_sorted_by_name_descending() {
    let app = TestApp::new();
    for _ in 0..5 {
        app.add_person(person_body()).await;
    }

    let persons = app
        .list_persons("?sortBy=PersonName&sortOrder=DESC")
        .await;

    let names: Vec<String> = persons
        .iter()
        .map(|p| p.person_name.clone().unwrap_or_default().to_lowercase())
        .collect();
    assert_eq!(names.len(), 5);
    assert!(names.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_list_persons_empty_search_returns_all() {
    let app = TestApp::new();
    for _ in 0..3 {
        app.add_person(person_body()).await;
    }

    let all = app.list_persons("").await;
    let searched = app
        .list_persons("?searchBy=PersonName&searchString=")
        .await;

    assert_eq!(searched, all);
}

#[tokio::test]
async fn test_list_persons_search_by_name_ignores_case() {
    let app = TestApp::new();
    let rahman = app.add_person(person_body_named("Rahman", None)).await;
    let mary = app.add_person(person_body_named("Mary", None)).await;
    app.add_person(person_body_named("Scott", None)).await;

    let persons = app
        .list_persons("?searchBy=PersonName&searchString=MA")
        .await;

    assert_eq!(persons, vec![mary, rahman]);
}

#[tokio::test]
async fn test_list_persons_search_by_country_name() {
    let app = TestApp::new();
    let japan = app.add_country("Japan").await;
    let usa = app.add_country("USA").await;

    let tom = app
        .add_person(person_body_named("Tom", Some(japan.country_id)))
        .await;
    app.add_person(person_body_named("Ann", Some(usa.country_id)))
        .await;

    let persons = app
        .list_persons("?searchBy=CountryID&searchString=jap")
        .await;

    assert_eq!(persons, vec![tom]);
}

#[tokio::test]
async fn test_search_fields_lists_every_field() {
    let app = TestApp::new();

    let fields: Vec<Value> = app.server.get("/api/persons/search-fields").await.json();

    let names: Vec<&str> = fields.iter().filter_map(|f| f["Name"].as_str()).collect();
    assert_eq!(
        names,
        vec!["PersonName", "Email", "DateOfBirth", "Gender", "CountryID", "Address"]
    );
}

#[tokio::test]
async fn test_get_unknown_person_is_not_found() {
    let app = TestApp::new();

    app.server
        .get(&format!("/api/persons/{}", Uuid::new_v4()))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_person_round_trips() {
    let app = TestApp::new();
    let uk = app.add_country("UK").await;
    let added = app.add_person(person_body_named("John", None)).await;

    let mut update = added.to_update_request();
    update.person_name = Some("William".into());
    update.email = Some("william@example.com".into());
    update.country_id = Some(uk.country_id);
    update.receive_news_letters = false;

    let response = app
        .server
        .put(&format!("/api/persons/{}", added.person_id))
        .json(&update)
        .await;

    response.assert_status(StatusCode::OK);
    let updated: PersonResponse = response.json();
    assert_eq!(updated.person_name.as_deref(), Some("William"));
    assert_eq!(updated.country.as_deref(), Some("UK"));
    assert!(!updated.receive_news_letters);

    let fetched: PersonResponse = app
        .server
        .get(&format!("/api/persons/{}", added.person_id))
        .await
        .json();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_uses_path_id() {
    let app = TestApp::new();
    let added = app.add_person(person_body()).await;

    let mut update = added.to_update_request();
    update.person_id = Uuid::new_v4();
    update.address = Some("221B Baker Street".into());

    let updated: PersonResponse = app
        .server
        .put(&format!("/api/persons/{}", added.person_id))
        .json(&update)
        .await
        .json();

    assert_eq!(updated.person_id, added.person_id);
    assert_eq!(updated.address.as_deref(), Some("221B Baker Street"));
}

#[tokio::test]
async fn test_update_unknown_person_is_not_found() {
    let app = TestApp::new();
    let added = app.add_person(person_body()).await;
    let update = added.to_update_request();

    app.server
        .put(&format!("/api/persons/{}", Uuid::new_v4()))
        .json(&update)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_empty_name_is_bad_request() {
    let app = TestApp::new();
    let added = app.add_person(person_body()).await;

    let mut update = added.to_update_request();
    update.person_name = Some(String::new());

    app.server
        .put(&format!("/api/persons/{}", added.person_id))
        .json(&update)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let fetched: PersonResponse = app
        .server
        .get(&format!("/api/persons/{}", added.person_id))
        .await
        .json();
    assert_eq!(fetched, added);
}

#[tokio::test]
async fn test_update_whitespace_name_is_accepted() {
    let app = TestApp::new();
    let added = app.add_person(person_body()).await;

    let mut update = added.to_update_request();
    update.person_name = Some("   ".into());

    let response = app
        .server
        .put(&format!("/api/persons/{}", added.person_id))
        .json(&update)
        .await;

    response.assert_status(StatusCode::OK);
    let updated: PersonResponse = response.json();
    assert_eq!(updated.person_name.as_deref(), Some("   "));
}

#[tokio::test]
async fn test_update_body_without_id_uses_path_id() {
    let app = TestApp::new();
    let added = app.add_person(person_body()).await;

    let response = app
        .server
        .put(&format!("/api/persons/{}", added.person_id))
        .json(&json!({ "PersonName": "William" }))
        .await;

    response.assert_status(StatusCode::OK);
    let updated: PersonResponse = response.json();
    assert_eq!(updated.person_id, added.person_id);
    assert_eq!(updated.person_name.as_deref(), Some("William"));
}

#[tokio::test]
async fn test_delete_person() {
    let app = TestApp::new();
    let added = app.add_person(person_body()).await;
    let path = format!("/api/persons/{}", added.person_id);

    app.server
        .delete(&path)
        .await
        .assert_status(StatusCode::NO_CONTENT);
    app.server.get(&path).await.assert_status(StatusCode::NOT_FOUND);
    app.server
        .delete(&path)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_person_leaves_others() {
    let app = TestApp::new();
    let kept = app.add_person(person_body()).await;

    app.server
        .delete(&format!("/api/persons/{}", Uuid::new_v4()))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    assert_eq!(app.list_persons("").await, vec![kept]);
}
