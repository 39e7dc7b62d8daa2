pub mod coordinates;
pub mod observation;
pub mod observer;
pub mod time;

pub use coordinates::*;
pub use observation::*;
pub use observer::*;
pub use time::*;
