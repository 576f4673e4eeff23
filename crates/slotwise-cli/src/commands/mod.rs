pub mod book;
pub mod prefs;
pub mod suggest;
