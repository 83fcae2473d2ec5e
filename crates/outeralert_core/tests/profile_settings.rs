use outeralert_core::{DomainError, ErrorKind, UserProfile};

#[test]
fn a_fresh_profile_starts_at_the_baseline() {
    let profile = UserProfile::new("testUser", "abcd1234");

    assert_eq!(profile.username, "testUser");
    assert_eq!(profile.password, "abcd1234");
    assert_eq!(profile.profile_pic, None);
    assert_eq!((profile.xp, profile.level), (0, 1));
}

#[test]
fn settings_changes_replace_each_field() {
    let mut profile = UserProfile::new("testUser", "abcd1234");

    profile.change_username("coastalwatch").unwrap();
    profile.change_password("stormy-night-9").unwrap();
    profile.change_profile_pic("userPicture.png").unwrap();

    assert_eq!(profile.username, "coastalwatch");
    assert_eq!(profile.password, "stormy-night-9");
    assert_eq!(profile.profile_pic.as_deref(), Some("userPicture.png"));
}

#[test]
fn values_are_trimmed_before_storage() {
    let mut profile = UserProfile::new("testUser", "abcd1234");

    profile.change_username("  rescue.ranger ").unwrap();
    assert_eq!(profile.username, "rescue.ranger");

    profile.change_profile_pic(" avatar.jpg  ").unwrap();
    assert_eq!(profile.profile_pic.as_deref(), Some("avatar.jpg"));
}

#[test]
fn a_failed_change_leaves_the_profile_untouched() {
    let mut profile = UserProfile::new("testUser", "abcd1234");
    profile.change_profile_pic("userPicture.png").unwrap();

    let err = profile.change_username("   ").unwrap_err();
    assert!(matches!(err, DomainError::BlankField("username")));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.to_string(), "username is required");

    assert!(profile.change_password("").is_err());
    assert!(profile.change_profile_pic(" ").is_err());

    assert_eq!(profile.username, "testUser");
    assert_eq!(profile.password, "abcd1234");
    assert_eq!(profile.profile_pic.as_deref(), Some("userPicture.png"));
}

#[test]
fn reset_progress_keeps_identity() {
    let mut profile = UserProfile::new("testUser", "abcd1234");
    profile.change_profile_pic("userPicture.png").unwrap();
    profile.xp = 120;
    profile.level = 3;

    profile.reset_progress();

    assert_eq!((profile.xp, profile.level), (0, 1));
    assert_eq!(profile.username, "testUser");
    assert_eq!(profile.profile_pic.as_deref(), Some("userPicture.png"));
}

#[test]
fn avatar_initial_uppercases_the_first_letter() {
    let mut profile = UserProfile::new("dina", "abcd1234");
    assert_eq!(profile.avatar_initial(), 'D');

    profile.change_username("árvíz").unwrap();
    assert_eq!(profile.avatar_initial(), 'Á');
}
