//! Access control - roles, capability table and the access policy.

mod policy;
mod role;

pub use policy::AccessPolicy;
pub use role::{Capabilities, Permission, Role, UnknownRole};
