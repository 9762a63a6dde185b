//! Database entities.

pub mod comment;
pub mod cuisine;
pub mod like;
pub mod photo_url;
pub mod price_range;
pub mod restaurant;
pub mod user;

pub use comment::Entity as Comment;
pub use cuisine::Entity as Cuisine;
pub use like::Entity as Like;
pub use photo_url::Entity as PhotoUrl;
pub use price_range::Entity as PriceRange;
pub use restaurant::Entity as Restaurant;
pub use user::Entity as User;
