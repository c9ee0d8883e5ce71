pub mod api_utils;
pub mod clipboard;
pub mod components;
pub mod date_utils;
pub mod debounce;
pub mod icons;
pub mod list_utils;
pub mod pagination;
pub mod phone_utils;
pub mod theme;
