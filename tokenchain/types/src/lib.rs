mod allocation;
mod batch;
mod coerce;
mod error;
mod ibc;
mod response;
mod routing;
mod serializers;
mod status;

pub use {
    allocation::*, batch::*, coerce::*, error::*, ibc::*, response::*, routing::*,
    serializers::*, status::*,
};

// -------------------------------- re-exports ---------------------------------

pub use serde_json::{Value as Json, json};
