mod ram_access;
pub use ram_access::*;
