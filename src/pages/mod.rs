pub mod customer_detail;
pub mod customers;
pub mod home;
pub mod landing;
pub mod products;

pub use customer_detail::CustomerDetail;
pub use customers::Customers;
pub use home::Home;
pub use landing::{Landing, NotFound};
pub use products::Products;
