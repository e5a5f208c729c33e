mod common;

use axum::http::StatusCode;
use common::{extract_from_page, get, login, post_form, setup_test_app, DEMO_CELL_ID};
use labyrinth::CellId;

#[tokio::test]
async fn test_view_existing_cell() {
    let test_app = setup_test_app();
    let resp = get(&test_app.app, &format!("/cell/{}", DEMO_CELL_ID), None).await;
    assert_eq!(resp.status, StatusCode::OK);

    let body = resp.text();
    let links = extract_from_page(
        &body,
        "<ul class=\"card-link-list\">Links",
        "</ul> <!--links-->",
    )
    .expect("links section");
    let link_items = links
        .lines()
        .filter(|line| line.contains("<li class=\"card-link\">"))
        .count();
    assert_eq!(link_items, 2);
}

#[tokio::test]
async fn test_view_missing_cell_is_not_found() {
    let test_app = setup_test_app();
    let resp = get(&test_app.app, "/cell/thiscelldoesnotexist", None).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert!(resp.text().contains("This cell does not exist"));
}

#[tokio::test]
async fn test_create_cell_redirects_to_new_card() {
    let test_app = setup_test_app();
    let cookie = login(&test_app.app).await;

    let resp = post_form(
        &test_app.app,
        "/newCell",
        &[
            ("room", "This is a room"),
            ("title", "The new cell"),
            ("body", "This is the new cell I'm creating"),
            ("source", "Confucius"),
        ],
        Some(&cookie),
    )
    .await;
    assert_eq!(resp.status, StatusCode::FOUND);

    let location = resp.location().unwrap().to_string();
    let id = location.strip_prefix("/cell/").expect("redirects to a cell");
    let cell = test_app.repo.get_cell(&CellId::new(id)).unwrap();
    assert_eq!(cell.title, "The new cell");
    assert_eq!(cell.room, "This is a room");
    assert_eq!(cell.sources.len(), 1);

    let page = get(&test_app.app, &location, None).await;
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(
        extract_from_page(&page.text(), "<div class=\"card-title\">", "</div><!--title-->"),
        Some("The new cell")
    );
}

#[tokio::test]
async fn test_create_cell_without_body_is_bad_request() {
    let test_app = setup_test_app();
    let cookie = login(&test_app.app).await;
    let before = test_app.repo.cell_count();

    let resp = post_form(
        &test_app.app,
        "/newCell",
        &[
            ("room", "This is a room"),
            ("title", "The new cell"),
            ("body", ""),
            ("source", "Confucius"),
        ],
        Some(&cookie),
    )
    .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert!(resp.text().starts_with("Error when creating card"));
    assert_eq!(test_app.repo.cell_count(), before);
}

#[tokio::test]
async fn test_create_cell_without_room_is_bad_request() {
    let test_app = setup_test_app();
    let cookie = login(&test_app.app).await;

    let resp = post_form(
        &test_app.app,
        "/newCell",
        &[
            ("room", ""),
            ("title", "The new cell"),
            ("body", "This one does have a body"),
        ],
        Some(&cookie),
    )
    .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_cell_requires_login() {
    let test_app = setup_test_app();
    let before = test_app.repo.cell_count();

    let resp = post_form(
        &test_app.app,
        "/newCell",
        &[("room", "r"), ("title", "t"), ("body", "b")],
        None,
    )
    .await;
    assert_eq!(resp.status, StatusCode::FOUND);
    assert_eq!(resp.location(), Some("/page/auth.html"));
    assert_eq!(test_app.repo.cell_count(), before);
}

#[tokio::test]
async fn test_save_requires_login() {
    let test_app = setup_test_app();
    let id = CellId::new(DEMO_CELL_ID);
    let before = test_app.repo.get_cell(&id).unwrap();

    let resp = post_form(
        &test_app.app,
        "/save",
        &[
            ("cellId", DEMO_CELL_ID),
            ("title", "Hijacked"),
            ("body", "Overwritten"),
            ("room", "Elsewhere"),
        ],
        None,
    )
    .await;
    assert_eq!(resp.status, StatusCode::FOUND);
    assert_eq!(resp.location(), Some("/page/auth.html"));
    assert_eq!(test_app.repo.get_cell(&id).unwrap(), before);
}

#[tokio::test]
async fn test_update_cell() {
    let test_app = setup_test_app();
    let cookie = login(&test_app.app).await;

    let resp = post_form(
        &test_app.app,
        "/save",
        &[
            ("cellId", DEMO_CELL_ID),
            ("room", "This is a room"),
            ("title", "Updated title"),
            ("body", "I'm updating this cell"),
        ],
        Some(&cookie),
    )
    .await;
    assert_eq!(resp.status, StatusCode::FOUND);
    assert_eq!(
        resp.location(),
        Some(format!("/cell/{}", DEMO_CELL_ID).as_str())
    );

    let cell = test_app.repo.get_cell(&CellId::new(DEMO_CELL_ID)).unwrap();
    assert_eq!(cell.title, "Updated title");
    assert_eq!(cell.links.len(), 2);
}

#[tokio::test]
async fn test_update_cell_with_blank_fields_is_rejected() {
    let test_app = setup_test_app();
    let cookie = login(&test_app.app).await;
    let before = test_app.repo.get_cell(&CellId::new(DEMO_CELL_ID)).unwrap();

    let resp = post_form(
        &test_app.app,
        "/save",
        &[
            ("cellId", DEMO_CELL_ID),
            ("room", "  "),
            ("title", "Updated title"),
            ("body", "  "),
        ],
        Some(&cookie),
    )
    .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);

    let after = test_app.repo.get_cell(&CellId::new(DEMO_CELL_ID)).unwrap();
    assert_eq!(after, before);
    assert_eq!(after.room, "Habitación");
}

#[tokio::test]
async fn test_update_unknown_cell_is_not_found() {
    let test_app = setup_test_app();
    let cookie = login(&test_app.app).await;

    let resp = post_form(
        &test_app.app,
        "/save",
        &[
            ("cellId", "missing"),
            ("room", "r"),
            ("title", "t"),
            ("body", "b"),
        ],
        Some(&cookie),
    )
    .await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_edit_page_requires_login() {
    let test_app = setup_test_app();
    let uri = format!("/cell/{}/edit", DEMO_CELL_ID);

    let anonymous = get(&test_app.app, &uri, None).await;
    assert_eq!(anonymous.status, StatusCode::FOUND);
    assert_eq!(anonymous.location(), Some("/page/auth.html"));

    let cookie = login(&test_app.app).await;
    let resp = get(&test_app.app, &uri, Some(&cookie)).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.text().contains("action=\"/save\""));
}

#[tokio::test]
async fn test_edit_page_for_missing_cell() {
    let test_app = setup_test_app();
    let cookie = login(&test_app.app).await;
    let resp = get(&test_app.app, "/cell/missing/edit", Some(&cookie)).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}
