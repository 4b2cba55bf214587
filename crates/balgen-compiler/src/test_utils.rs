//! Test utilities.

use balgen_core::Schema;

use crate::typegen::{self, Config, Module};

/// Parse an SDL fixture, panicking on syntax errors.
pub fn schema(sdl: &str) -> Schema {
    Schema::parse(sdl).unwrap_or_else(|e| panic!("invalid test schema: {e}\n{sdl}"))
}

/// Render `sdl` with default configuration and a root contract named `Service`.
pub fn render(sdl: &str) -> String {
    render_with(sdl, &Config::new())
}

pub fn render_with(sdl: &str, config: &Config) -> String {
    let schema = schema(sdl);
    typegen::generate(&schema, "Service", config)
        .unwrap_or_else(|e| panic!("generation failed: {e}"))
}

pub fn compile(sdl: &str, config: &Config) -> Module {
    typegen::compile(&schema(sdl), "Service", config)
}
