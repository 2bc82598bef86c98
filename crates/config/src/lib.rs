mod config;
mod error;
mod feature;
mod fragment;
mod merge;
mod policy;
mod preset;
mod sidebar;
mod site;
mod theme;

pub mod path;

pub use self::config::*;
pub use self::error::*;
pub use self::feature::*;
pub use self::fragment::*;
pub use self::merge::*;
pub use self::policy::*;
pub use self::preset::*;
pub use self::sidebar::*;
pub use self::site::*;
pub use self::theme::*;

pub use self::path::RelPath;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
