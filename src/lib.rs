//! Server-rendered anime browser: joins the Jikan metadata API (JSON) with
//! the Safebooru tag-search API (XML) and renders composed HTML pages.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
