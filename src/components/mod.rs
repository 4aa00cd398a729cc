pub mod character_list;
pub mod detail;
pub mod search_bar;
pub mod status_bar;
