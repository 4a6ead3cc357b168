use anyhow::Result;
use connect_model::model::{
    Channel, CreateUserRequest, MediaConcurrency, PhoneType, RoutingProfile, UserIdentityInfo,
    UserPhoneConfig,
};
use connect_model::{ModelError, Record};

/// `with_x(v)` gives the same record as `set_x(Some(v))`.
#[test]
fn test_builder_matches_setter() -> Result<()> {
    let built = CreateUserRequest::default()
        .with_username("jdoe")
        .with_instance_id("i-1")
        .with_phone_config(
            UserPhoneConfig::default()
                .with_phone_type(PhoneType::SoftPhone)
                .with_auto_accept(false)
                .with_after_contact_work_time_limit(30),
        );

    let mut set = CreateUserRequest::default();
    set.set_username(Some("jdoe".to_string()));
    set.set_instance_id(Some("i-1".to_string()));
    let mut phone_config = UserPhoneConfig::default();
    phone_config.set_phone_type(Some(PhoneType::SoftPhone));
    phone_config.set_auto_accept(Some(false));
    phone_config.set_after_contact_work_time_limit(Some(30));
    set.set_phone_config(Some(phone_config));

    assert_eq!(built, set);
    assert_eq!(built.phone_config().and_then(|p| p.auto_accept()), Some(false));
    Ok(())
}

/// Distinct keys accumulate; a repeated key fails the chain.
#[test]
fn test_map_entry_insertion() -> Result<()> {
    let request = CreateUserRequest::default()
        .add_tags_entry("team", "support")?
        .add_tags_entry("site", "berlin")?;

    let tags = request.tags().expect("tags are set");
    assert_eq!(tags.len(), 2);
    assert_eq!(tags.get("team").map(String::as_str), Some("support"));
    assert_eq!(tags.get("site").map(String::as_str), Some("berlin"));

    let duplicate = CreateUserRequest::default()
        .add_tags_entry("team", "support")
        .and_then(|r| r.add_tags_entry("team", "sales"));
    match duplicate {
        Err(err @ ModelError::DuplicateKey { .. }) => {
            assert!(err.is_construction_error());
            assert_eq!(err.to_string(), "Duplicated keys (team) are provided for Tags.");
        }
        other => panic!("expected a duplicate key error, got {:?}", other),
    }
    Ok(())
}

/// Clearing a map returns the field to unset rather than empty.
#[test]
fn test_clear_map_entries() -> Result<()> {
    let request = CreateUserRequest::default()
        .add_tags_entry("team", "support")?
        .clear_tags_entries();

    assert!(request.tags().is_none());
    assert_eq!(request, CreateUserRequest::default());

    // the map is created again on the next insert
    let again = request.add_tags_entry("team", "sales")?;
    assert_eq!(again.tags().map(|t| t.len()), Some(1));
    Ok(())
}

/// Appending creates the list on first use; `with_` replaces it wholesale.
#[test]
fn test_list_append_and_replace() -> Result<()> {
    let request = CreateUserRequest::default()
        .push_security_profile_ids("sp-agent")
        .extend_security_profile_ids(["sp-admin", "sp-qa"]);
    assert_eq!(
        request.security_profile_ids(),
        Some(&["sp-agent".to_string(), "sp-admin".to_string(), "sp-qa".to_string()][..])
    );

    let replaced = request.with_security_profile_ids(vec!["sp-only"]);
    assert_eq!(replaced.security_profile_ids(), Some(&["sp-only".to_string()][..]));

    let emptied = replaced.with_security_profile_ids(Vec::<String>::new());
    assert_eq!(emptied.security_profile_ids(), Some(&[][..]));
    Ok(())
}

/// Nested records in lists keep their order and compare element by element.
#[test]
fn test_nested_list_order_matters() -> Result<()> {
    let voice = MediaConcurrency::default()
        .with_channel(Channel::Voice)
        .with_concurrency(1);
    let chat = MediaConcurrency::default()
        .with_channel(Channel::Chat)
        .with_concurrency(3);

    let first = RoutingProfile::default().with_media_concurrencies([voice.clone(), chat.clone()]);
    let second = RoutingProfile::default().with_media_concurrencies([chat, voice]);

    assert_ne!(first, second);
    assert_eq!(first.populated_fields(), vec!["MediaConcurrencies"]);
    Ok(())
}

/// Building the same request twice yields independent, equal values.
#[test]
fn test_builders_do_not_alias() -> Result<()> {
    let identity = UserIdentityInfo::default()
        .with_first_name("Jane")
        .with_last_name("Doe");
    let request = CreateUserRequest::default().with_identity_info(identity.clone());

    let changed = request
        .clone()
        .with_identity_info(identity.clone().with_email("jane@example.com"));

    assert_eq!(request.identity_info(), Some(&identity));
    assert_ne!(request, changed);
    Ok(())
}
