pub mod musicians;

pub use musicians::{CreateMusician, MusicianResponse, UpdateMusician};
