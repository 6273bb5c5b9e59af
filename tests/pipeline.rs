// End-to-end runs from raw JSON payloads through all three views.

use geomatch::io::{load, parse_posts, parse_users, MemSource, POSTS, USERS};
use geomatch::{analyze, find_duplicate_titles, find_nearest, merge, PostId, UserId};

const USERS_JSON: &str = r#"[
    {"id": 1, "name": "User1", "username": "Username1", "address": {"geo": {"lat": "123.123", "lng": "123.123"}}},
    {"id": 2, "name": "User2", "username": "Username2", "address": {"geo": {"lat": "123.123", "lng": "123.123"}}},
    {"id": 3, "name": "User3", "username": "Username3", "address": {"geo": {"lat": "123.123", "lng": "123.123"}}}
]"#;

const POSTS_JSON: &str = r#"[
    {"id": 1, "userId": 1, "body": "post1", "title": "title1"},
    {"id": 2, "userId": 1, "body": "post2", "title": "title2"},
    {"id": 3, "userId": 2, "body": "post3", "title": "title3"},
    {"id": 4, "userId": 2, "body": "post4", "title": "title4"}
]"#;

const CITIES_JSON: &str = r#"[
    {"id": 1, "username": "username1", "city": "Krakow", "geo": {"lat": "50.0646501", "lng": "19.9449799"}},
    {"id": 2, "username": "username2", "city": "Warsaw", "geo": {"lat": "52.229676", "lng": "21.012229"}},
    {"id": 3, "username": "username3", "city": "Wroclaw", "geo": {"lat": "51.1078852", "lng": "17.0385376"}}
]"#;

#[test]
fn merge_matches_users_with_their_posts() {
    let users = parse_users(USERS_JSON.as_bytes()).unwrap();
    let posts = parse_posts(POSTS_JSON.as_bytes()).unwrap();
    let merged = merge(&users, &posts);

    let json = serde_json::to_value(&merged).unwrap();
    assert_eq!(json, serde_json::json!([
        {
            "id": 1, "username": "Username1", "geo": {"lat": 123.123, "lng": 123.123},
            "posts": [{"id": 1, "userId": 1, "title": "title1"}, {"id": 2, "userId": 1, "title": "title2"}]
        },
        {
            "id": 2, "username": "Username2", "geo": {"lat": 123.123, "lng": 123.123},
            "posts": [{"id": 3, "userId": 2, "title": "title3"}, {"id": 4, "userId": 2, "title": "title4"}]
        },
        {
            "id": 3, "username": "Username3", "geo": {"lat": 123.123, "lng": 123.123},
            "posts": []
        }
    ]));
}

#[test]
fn repeated_titles_from_json() {
    let posts = parse_posts(br#"[
        {"id": 1, "userId": 1, "title": "title_1"},
        {"id": 1, "userId": 1, "title": "title_1"},
        {"id": 2, "userId": 1, "title": "title_2"},
        {"id": 2, "userId": 1, "title": "title_2"},
        {"id": 2, "userId": 1, "title": "title_2"},
        {"id": 3, "userId": 1, "title": "title_3"},
        {"id": 4, "userId": 1, "title": "title_4"},
        {"id": 5, "userId": 1, "title": "title_5"}
    ]"#).unwrap();
    assert_eq!(find_duplicate_titles(&posts), ["title_1", "title_2"]);
}

#[test]
fn nearest_between_polish_cities() {
    let users = parse_users(CITIES_JSON.as_bytes()).unwrap();
    let nearest = find_nearest(&users).unwrap();

    let expected = [("username1", UserId(3), 235_688), ("username2", UserId(1), 251_980), ("username3", UserId(1), 235_688)];
    for (username, neighbor_id, distance) in expected {
        let neighbor = nearest.get(username).unwrap().neighbor.unwrap();
        assert_eq!(neighbor.entity.id, neighbor_id, "{username}");
        assert_eq!(neighbor.distance_m, distance, "{username}");
    }
}

#[test]
fn full_report_from_memory_source() {
    let src = MemSource::new().with(USERS, CITIES_JSON).with(POSTS, POSTS_JSON);
    let (users, posts) = load(&src).unwrap();
    let report = analyze(&users, &posts).unwrap();

    assert_eq!(report.users.len(), 3);
    assert_eq!(report.users[1].posts.iter().map(|p| p.id).collect::<Vec<_>>(), [PostId(3), PostId(4)]);
    assert!(report.duplicate_titles.is_empty());

    let text = report.to_string();
    assert!(text.contains("username1 wrote 2 posts\n"), "{text}");
    assert!(text.contains("username3 wrote 0 posts\n"), "{text}");
    assert!(text.contains("No repeated titles\n"), "{text}");
    assert!(text.contains("Nearest to username2 lives username1, distance: 251980 m\n"), "{text}");
}

#[test]
fn report_serializes_to_json() {
    let users = parse_users(CITIES_JSON.as_bytes()).unwrap();
    let report = analyze(&users[..1], &[]).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["nearest"], serde_json::json!([{"username": "username1", "neighbor": null}]));
    assert_eq!(json["duplicate_titles"], serde_json::json!([]));
}

#[test]
fn malformed_post_fails_fast() {
    let err = parse_posts(br#"[{"id": 1, "title": "no owner"}]"#).unwrap_err();
    assert_eq!(format!("{err:#}"), "post #0: missing field `userId`");
}
