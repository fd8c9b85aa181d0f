pub mod errors;
pub mod http;
pub mod models;
pub mod validation;

pub use errors::SpyCatError;
pub use models::{ parse_leading_number, Breed, Cat, CatId, Draft, NewCat, SalaryUpdate };
pub use validation::{ validate_draft, ValidationError };
