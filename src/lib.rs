pub mod session;
pub mod tetris;

pub mod utils {
    pub mod prelude {
        pub use anyhow::{anyhow, Context, Error};
        pub type Result<T> = anyhow::Result<T, Error>;

        pub use std::ops::{Add, Sub};
    }
}

pub mod prelude {
    pub use super::session::*;
    pub use super::tetris::prelude::*;
    pub use super::utils::prelude::*;
}
