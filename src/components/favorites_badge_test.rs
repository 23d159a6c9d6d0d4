use super::*;

#[test]
fn no_favorites_hides_badge() {
    assert_eq!(badge_text(true, 0), None);
}

#[test]
fn single_favorite_is_singular() {
    assert_eq!(badge_text(true, 1).as_deref(), Some("❤️ 1 favorite"));
}

#[test]
fn several_favorites_are_plural() {
    assert_eq!(badge_text(true, 2).as_deref(), Some("❤️ 2 favorites"));
    assert_eq!(badge_text(true, 31).as_deref(), Some("❤️ 31 favorites"));
}

#[test]
fn badge_stays_hidden_while_favorites_load() {
    assert_eq!(badge_text(false, 0), None);
    assert_eq!(badge_text(false, 1), None);
    assert_eq!(badge_text(false, 3), None);
}
