pub mod home;
pub mod not_found;
pub mod suites;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use suites::SuitesPage;
