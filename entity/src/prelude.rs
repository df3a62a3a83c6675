pub use super::comanda::Entity as Comanda;
pub use super::comanda_product::Entity as ComandaProduct;
pub use super::token::Entity as Token;
pub use super::user::Entity as User;
