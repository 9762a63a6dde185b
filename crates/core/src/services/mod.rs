//! Business logic services.

pub mod comment;
pub mod cuisine;
pub mod like;
pub mod photo;
pub mod price_range;
pub mod projection;
pub mod restaurant;
pub mod user;

pub use comment::{CommentService, CommentWithAuthor, NewCommentInput};
pub use cuisine::{CuisineService, NewCuisineInput};
pub use like::LikeService;
pub use photo::PhotoService;
pub use price_range::PriceRangeService;
pub use projection::{ChildIndex, EntityMap};
pub use restaurant::{NewRestaurantInput, RestaurantService, RestaurantView, UpdateRestaurantInput};
pub use user::{LoginInput, RegisterUserInput, Session, UserService};
