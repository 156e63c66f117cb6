#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod document;
pub mod editor;
pub mod error;
pub mod export;
pub mod fetch;
pub mod id_generator;
pub mod panels;
pub mod route;
pub mod search;
pub mod shape;
pub mod texture_manager;

pub use app::QuestApp;
pub use config::Config;
pub use document::Document;
pub use editor::EditScreen;
pub use fetch::Fetcher;
pub use route::Route;
pub use search::SearchScreen;
pub use shape::{Shape, ShapeKind};
