//! Record type definitions

pub mod employee;
pub mod flavor;
pub mod ingredient;
pub mod supplier;
pub mod utensil;
pub mod wire;

pub use employee::{Employee, Position, Shift};
pub use flavor::{Flavor, FlavorStatus};
pub use ingredient::{Ingredient, IngredientStatus};
pub use supplier::{Supplier, SupplierStatus};
pub use utensil::{Utensil, UtensilStatus};
