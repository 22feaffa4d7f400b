mod root;
mod schema;
mod show;

pub use root::Cli;
pub use schema::SchemaCommand;
pub use show::ShowCommand;
