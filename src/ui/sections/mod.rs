//! Page sections
//!
//! Each section registers its animations once mounted and hands everything
//! it owns back to the controller when disposed.

mod about;
mod contact;
mod footer;
mod hero;
mod navbar;
mod projects;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use projects::Projects;
pub use skills::Skills;
