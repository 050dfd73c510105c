use vimeo_api::types::{Category, Channel, PaginatedResponse, User, Video};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_categories_full() {
    let json = load_fixture("categories.json");
    let resp: PaginatedResponse<Category> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.total, 10);
    assert_eq!(resp.page, 1);
    assert_eq!(resp.paging.next.as_deref(), Some("/categories?page=2"));
    assert_eq!(resp.paging.previous, None);

    let animation = &resp.data[0];
    assert_eq!(animation.uri, "/categories/animation");
    assert_eq!(animation.name, "Animation");
    assert!(animation.top_level);
    assert_eq!(animation.subcategories.len(), 2);
    assert_eq!(animation.subcategories[1].name, "Stop Motion");
    assert!(animation.last_video_featured_time.is_some());

    let pictures = animation.pictures.as_ref().unwrap();
    assert_eq!(pictures.kind, "custom");
    assert_eq!(pictures.sizes.len(), 2);
    assert_eq!(pictures.sizes[1].width, 1280);
    assert!(pictures.sizes[1].link_with_play_button.is_some());

    let documentary = &resp.data[1];
    assert_eq!(documentary.name, "Documentary");
    assert!(documentary.pictures.is_none());
    assert!(documentary.subcategories.is_empty());
}

#[test]
fn deserialize_channels() {
    let json = load_fixture("channels.json");
    let resp: PaginatedResponse<Channel> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.len(), 1);
    assert_eq!(resp.paging.next, None);
    assert_eq!(resp.paging.last.as_deref(), Some("/channels?page=1"));

    let staff_picks = &resp.data[0];
    assert_eq!(staff_picks.uri, "/channels/927");
    assert_eq!(staff_picks.name, "Staff Picks");
    assert!(staff_picks.created_time.is_some());
    assert_eq!(
        staff_picks.user.as_ref().unwrap().name,
        "Vimeo Curation"
    );
    assert_eq!(
        staff_picks.privacy.as_ref().unwrap().view.as_deref(),
        Some("anybody")
    );
}

#[test]
fn deserialize_videos() {
    let json = load_fixture("videos.json");
    let resp: PaginatedResponse<Video> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.len(), 1);
    assert_eq!(resp.total, 150);
    assert_eq!(resp.page, 2);

    let video = &resp.data[0];
    assert_eq!(video.uri, "/videos/512345678");
    assert_eq!(video.name, "Autumn Ride");
    assert_eq!(video.duration, 372);
    assert_eq!(video.width, 3840);
    assert_eq!(video.height, 2160);
    assert_eq!(video.language.as_deref(), Some("en"));
    assert_eq!(video.status.as_deref(), Some("available"));
    assert_eq!(video.tags.len(), 1);
    assert_eq!(video.tags[0].canonical, "cycling");
    assert_eq!(video.stats.as_ref().unwrap().plays, 1042);

    let privacy = video.privacy.as_ref().unwrap();
    assert_eq!(privacy.view.as_deref(), Some("anybody"));
    assert_eq!(privacy.embed.as_deref(), Some("public"));
    assert!(!privacy.download);
    assert!(privacy.add);

    let user = video.user.as_ref().unwrap();
    assert_eq!(user.name, "Jana Kovar");
    assert_eq!(user.location.as_deref(), Some("Bolzano, Italy"));
}

#[test]
fn deserialize_single_user() {
    let json = load_fixture("user.json");
    let user: User = serde_json::from_str(&json).unwrap();
    assert_eq!(user.uri, "/users/152184");
    assert_eq!(user.account, "plus");
    assert_eq!(user.bio.as_deref(), Some("Shoots bikes and mountains."));
    assert_eq!(user.websites.len(), 1);
    assert_eq!(user.websites[0].link, "https://janakovar.example");
    assert_eq!(user.websites[0].description, None);
}

#[test]
fn deserialize_list_without_pagination() {
    let resp: PaginatedResponse<Video> = serde_json::from_str(r#"{"data": []}"#).unwrap();
    assert!(resp.data.is_empty());
    assert_eq!(resp.total, 0);
    assert_eq!(resp.page, 0);
    assert_eq!(resp.paging.next, None);
    assert_eq!(resp.paging.first, None);
}

#[test]
fn deserialize_partial_video_from_field_selection() {
    // A `fields=uri,name` response carries only the selected fields.
    let video: Video =
        serde_json::from_str(r#"{"uri": "/videos/1", "name": "clip"}"#).unwrap();
    assert_eq!(video.uri, "/videos/1");
    assert_eq!(video.name, "clip");
    assert_eq!(video.duration, 0);
    assert!(video.privacy.is_none());
    assert!(video.tags.is_empty());
}

#[test]
fn deserialize_malformed_json_returns_error() {
    let bad_json = r#"{"data": not valid json}"#;
    let result = serde_json::from_str::<PaginatedResponse<Video>>(bad_json);
    assert!(result.is_err());
}
