mod property;
mod publisher;
mod stream;
mod subscription;

pub use property::*;
pub use publisher::*;
pub use stream::*;
pub use subscription::*;
