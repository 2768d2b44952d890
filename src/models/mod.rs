pub mod musician;

pub use musician::Musician;
