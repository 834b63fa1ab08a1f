mod adapters;
mod determinism;
mod fixtures;
