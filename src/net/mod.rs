//! Network layer: collaborator seams, wire types, and the aggregation
//! pipeline that combines them into display items.

pub mod api;
pub mod pipeline;
pub mod store;
pub mod types;
