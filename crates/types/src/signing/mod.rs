mod order;
pub use order::SignedOrder;

mod error;
pub use error::{SignedOrderError, SigningError};
