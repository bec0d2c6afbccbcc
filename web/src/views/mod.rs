mod home;
mod not_found;
mod profile;
mod projects;
mod users;

pub use home::Home;
pub use not_found::NotFound;
pub use profile::Profile;
pub use projects::Projects;
pub use users::Users;

/// Page size shared by the listing pages.
pub const PAGE_SIZE: u32 = 12;
