pub mod health;
pub mod musicians;

pub use health::health_check;
pub use musicians::{
    create_musician, delete_musician, get_musician, list_musicians, update_musician,
};
