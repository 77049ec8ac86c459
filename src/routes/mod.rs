pub mod authorizer;
pub mod table;

// Re-export so code outside can do "use crate::routes::{RouteAuthorizer, NavDecision};"
pub use authorizer::{NavDecision, RouteAuthorizer, HOME_PATH, LOGIN_PATH};
pub use table::{Access, RouteDescriptor, RouteMatch, RouteTable};
