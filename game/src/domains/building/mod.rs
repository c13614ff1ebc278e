pub use domain::*;

mod domain;
mod loading;
mod operations;
mod queries;
