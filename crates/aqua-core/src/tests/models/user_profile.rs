use crate::UserProfile;

#[test]
fn test_user_profile_new_computes_goal_from_weight() {
    let profile = UserProfile::new(
        "Ana".to_string(),
        "ana@example.com".to_string(),
        "secret".to_string(),
        Some("f".to_string()),
        Some(29),
        Some(70.0),
    );

    assert_eq!(profile.name, "Ana");
    assert_eq!(profile.email, "ana@example.com");
    assert_eq!(profile.age, Some(29));
    assert_eq!(profile.weight_kg, Some(70.0));
    assert_eq!(profile.daily_goal_ml, 2450);
    assert!(!profile.id.is_nil());
}

#[test]
fn test_user_profile_new_defaults_goal_without_weight() {
    let profile = UserProfile::new(
        "Luis".to_string(),
        "luis@example.com".to_string(),
        "secret".to_string(),
        None,
        None,
        None,
    );

    assert_eq!(profile.sex, None);
    assert_eq!(profile.age, None);
    assert_eq!(profile.weight_kg, None);
    assert_eq!(profile.daily_goal_ml, 2000);
}
