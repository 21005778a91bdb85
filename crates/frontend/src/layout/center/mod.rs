pub mod center;
pub mod pages;

pub use center::Center;
pub use pages::PageContent;
