pub mod cli;
pub mod ctx;
pub mod error;
pub mod figures;
pub mod io;
pub mod math;
pub mod pipeline;
pub mod schema;
pub mod scores;
pub mod table;
