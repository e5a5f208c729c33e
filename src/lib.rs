pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod repository;
pub mod session;

pub use config::Config;
pub use domain::{Cell, CellDraft, CellId, CellLink, CellUpdate, CollectionOfCells, Source};
pub use error::{AppError, RepoError};
pub use repository::Repository;
pub use session::{AuthState, SessionStore};
