pub mod requests;
pub mod views;

pub use requests::{AddImageRequest, AddUserRequest};
pub use views::{ImageView, UserView};
