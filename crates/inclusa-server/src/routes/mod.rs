pub mod api;
pub mod export;
pub mod health;
pub mod locales;
pub mod pages;
