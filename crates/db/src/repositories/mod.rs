//! Database repositories.

mod comment;
mod cuisine;
mod like;
mod photo_url;
mod price_range;
mod restaurant;
mod user;

pub use comment::CommentRepository;
pub use cuisine::CuisineRepository;
pub use like::LikeRepository;
pub use photo_url::PhotoUrlRepository;
pub use price_range::PriceRangeRepository;
pub use restaurant::RestaurantRepository;
pub use user::UserRepository;
