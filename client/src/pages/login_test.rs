use super::*;

#[test]
fn heading_names_the_portal_role() {
    assert_eq!(login_heading(None), "Login");
    assert_eq!(login_heading(Some(Role::Admin)), "Admin Login");
    assert_eq!(login_heading(Some(Role::University)), "University Login");
}

#[test]
fn subtitle_falls_back_to_generic_text() {
    assert_eq!(login_subtitle(None), "Access your dashboard");
    assert_eq!(login_subtitle(Some(Role::Student)), "Access your dashboard");
    assert_eq!(login_subtitle(Some(Role::Consultancy)), "Manage your consultancy profile");
}
