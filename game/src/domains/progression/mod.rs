pub use domain::*;

mod domain;
mod grant_experience;
mod loading;
