pub mod debugger;
pub mod renderer;
pub mod settings;
