use super::*;

#[test]
fn main_class_hides_when_profile_is_open() {
    assert_eq!(main_class(true), "main");
    assert_eq!(main_class(false), "main hidden");
}

#[test]
fn main_style_follows_sidebar_offset() {
    let mut sidebar = SidebarState::new(false);
    assert_eq!(main_style(sidebar.main_offset_px()), "margin-left: 240px");
    sidebar.toggle_mobile();
    assert_eq!(main_style(sidebar.main_offset_px()), "margin-left: 0px");
}
