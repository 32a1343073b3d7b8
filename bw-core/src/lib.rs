pub mod entities {
    pub use bw_entities::{
        address::*, danger::*, geo::*, id::*, location::*, time::*, time_category::*, user::*,
    };
}

pub mod gateways;
pub mod repositories;
pub mod review_basket;
pub mod usecases;
pub mod util;
