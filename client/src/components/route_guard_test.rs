use std::sync::Arc;

use super::*;

fn dashboard_body() -> ChildrenFn {
    Arc::new(|| view! { <p>"consultancy dashboard"</p> }.into_any())
}

#[test]
fn unresolved_check_renders_no_children() {
    Owner::new().with(|| {
        // `install_route_guard` starts here and only flips after its effect runs.
        let (permitted, _) = signal(false);
        let html = gated(permitted.into(), dashboard_body()).to_html();
        assert!(!html.contains("consultancy dashboard"), "{html}");
    });
}

#[test]
fn allowed_check_renders_children() {
    Owner::new().with(|| {
        let (permitted, set_permitted) = signal(false);
        set_permitted.set(true);
        let html = gated(permitted.into(), dashboard_body()).to_html();
        assert!(html.contains("consultancy dashboard"), "{html}");
    });
}
