// Record and enumeration definitions, one module per API area.

pub mod attached_file;
pub mod contact_search;
pub mod evaluation_form;
pub mod metric;
pub mod persistent_contact;
pub mod phone_number;
pub mod routing_profile;
pub mod rule;
pub mod traffic_distribution;
pub mod user;
pub mod view;

pub use attached_file::*;
pub use contact_search::*;
pub use evaluation_form::*;
pub use metric::*;
pub use persistent_contact::*;
pub use phone_number::*;
pub use routing_profile::*;
pub use rule::*;
pub use traffic_distribution::*;
pub use user::*;
pub use view::*;
