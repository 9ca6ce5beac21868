pub mod feedback;
pub mod navbar;
pub mod navbar_menu;
pub mod projects;
pub mod sidebar;
pub mod spinner;
pub mod toast;
