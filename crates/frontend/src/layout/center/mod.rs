pub mod center;
pub mod home;

pub use center::Center;
pub use home::Home;
