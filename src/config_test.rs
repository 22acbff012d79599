use super::*;

#[test]
fn defaults_match_operator_defaults() {
    let config = GalleryConfig::default();
    assert_eq!(config.title, "Subject Matter Experts");
    assert!(config.list_name.is_empty());
    assert_eq!(config.items_per_page, 4);
    assert_eq!(config.user_field_name, "User");
    assert_eq!(config.description_field_name, "Description");
    assert_eq!(config.certification_field_name, "Certification");
    assert!(config.site_url.is_empty());
}

#[test]
fn configured_max_clamps_to_one_through_four() {
    let mut config = GalleryConfig::default();

    config.items_per_page = 0;
    assert_eq!(config.configured_max(), 1);

    config.items_per_page = 3;
    assert_eq!(config.configured_max(), 3);

    config.items_per_page = 99;
    assert_eq!(config.configured_max(), 4);
}

#[test]
fn field_selection_substitutes_defaults_for_empty_names() {
    let config = GalleryConfig {
        user_field_name: String::new(),
        description_field_name: "  ".to_owned(),
        certification_field_name: "Certs".to_owned(),
        ..GalleryConfig::default()
    };

    let fields = config.field_selection();
    assert_eq!(fields.user, "User");
    assert_eq!(fields.description, "Description");
    assert_eq!(fields.certification, "Certs");
}

#[test]
fn partial_json_payload_fills_in_defaults() {
    let config: GalleryConfig =
        serde_json::from_str(r#"{"listName":"Experts","itemsPerPage":2}"#).expect("config");
    assert_eq!(config.list_name, "Experts");
    assert_eq!(config.items_per_page, 2);
    assert_eq!(config.user_field_name, "User");
    assert_eq!(config.title, "Subject Matter Experts");
}

#[test]
fn from_host_off_browser_returns_defaults() {
    assert_eq!(GalleryConfig::from_host(), GalleryConfig::default());
}
