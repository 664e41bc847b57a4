pub mod fallback;
pub mod health;
pub mod pages;
pub mod search_url;
pub mod upload;
