pub use super::orders::Entity as Orders;
pub use super::posts::Entity as Posts;
pub use super::products::Entity as Products;
pub use super::users::Entity as Users;
