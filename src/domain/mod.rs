pub mod quote;
pub mod subscription;
