#![warn(clippy::print_stderr)]
#![warn(clippy::print_stdout)]

pub use crate::compose::{Composer, compose};
pub use crate::error::{Error, Result};
pub use crate::features::{FeatureList, FeatureNode};
pub use crate::links::{LinkPolicy, LinkViolation, LinkViolationKind, find_broken_links};
pub use crate::sidebar::{DocNavigation, NavLink, Sidebars, SidebarNode, SidebarTree};
pub use crate::site::Site;
pub use crate::site_config::SiteConfig;

pub use docsite_config as config;

pub mod compose;
pub mod error;
pub mod features;
mod files;
pub mod links;
pub mod sidebar;
pub mod site;
pub mod site_config;
