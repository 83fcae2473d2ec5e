use outeralert_core::{
    AnswerFeedback, AnswerKey, AppState, Checklist, ChecklistItem, Notification, QuizQuestion,
    QuizTopic, UserProfile,
};

#[test]
fn checklist_serialization_uses_expected_wire_fields() {
    let mut checklist = Checklist::new("Earthquake Kit");
    checklist.items.push(ChecklistItem::new("Bottled water"));
    checklist.items.push(ChecklistItem {
        name: "Torchlight".to_string(),
        done: true,
    });

    let json = serde_json::to_value(&checklist).unwrap();
    assert_eq!(json["name"], "Earthquake Kit");
    assert_eq!(json["items"][0]["name"], "Bottled water");
    assert_eq!(json["items"][0]["done"], false);
    assert_eq!(json["items"][1]["done"], true);

    let decoded: Checklist = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, checklist);
}

#[test]
fn profile_serialization_uses_expected_wire_fields() {
    let mut profile = UserProfile::new("testUser", "abcd1234");
    profile.change_profile_pic("userPicture.png").unwrap();
    profile.xp = 50;
    profile.level = 2;

    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(json["username"], "testUser");
    assert_eq!(json["password"], "abcd1234");
    assert_eq!(json["profile_pic"], "userPicture.png");
    assert_eq!(json["xp"], 50);
    assert_eq!(json["level"], 2);

    let decoded: UserProfile = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, profile);
}

#[test]
fn missing_picture_serializes_as_null() {
    let profile = UserProfile::new("testUser", "abcd1234");
    let json = serde_json::to_value(&profile).unwrap();
    assert!(json["profile_pic"].is_null());
}

#[test]
fn notification_serialization_uses_expected_wire_fields() {
    let notification = Notification::new("Flood Hit Habour");

    let json = serde_json::to_value(&notification).unwrap();
    assert_eq!(json["message"], "Flood Hit Habour");
    assert_eq!(json["seen"], false);
}

#[test]
fn quiz_enums_use_snake_case_wire_values() {
    assert_eq!(
        serde_json::to_value(QuizTopic::Earthquake).unwrap(),
        "earthquake"
    );
    assert_eq!(
        serde_json::to_value(AnswerFeedback::Correct).unwrap(),
        "correct"
    );
    assert_eq!(serde_json::to_value(AnswerKey::B).unwrap(), "B");

    let decoded: QuizTopic = serde_json::from_value("fire".into()).unwrap();
    assert_eq!(decoded, QuizTopic::Fire);
}

#[test]
fn quiz_question_serialization_keeps_slot_order() {
    let question = QuizQuestion::new(
        "Which topic drills flood safety?",
        [
            "Earthquake".to_string(),
            "Flood".to_string(),
            "Fire".to_string(),
            "First aid".to_string(),
        ],
        AnswerKey::B,
    );

    let json = serde_json::to_value(&question).unwrap();
    assert_eq!(json["prompt"], "Which topic drills flood safety?");
    assert_eq!(json["options"][1], "Flood");
    assert_eq!(json["answer"], "B");
}

#[test]
fn app_state_reset_clears_the_session_but_keeps_the_account() {
    let mut state = AppState::new(UserProfile::new("testUser", "abcd1234"));
    state.profile.xp = 60;
    state.profile.level = 3;
    let list = state.checklists.insert_checklist("Go Bag").unwrap();
    state.checklists.insert_item(list, "Whistle").unwrap();
    state.notifications.push("Earthquake hit 2.4");

    state.reset();

    assert_eq!(state.profile.username, "testUser");
    assert_eq!((state.profile.xp, state.profile.level), (0, 1));
    assert!(state.checklists.is_empty());
    assert!(state.notifications.is_empty());
}
