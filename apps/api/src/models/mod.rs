pub mod booking;
pub mod contact;
pub mod user;

pub use booking::{Booking, NewBooking};
pub use contact::{Contact, NewContact};
pub use user::{NewUser, User};
