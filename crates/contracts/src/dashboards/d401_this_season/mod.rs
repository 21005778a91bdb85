pub mod dto;
pub mod mock;
pub mod view;

pub use dto::{SeasonProduct, SeasonRange, SeasonSnapshot};
pub use view::SeasonView;
