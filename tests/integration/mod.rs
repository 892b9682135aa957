/// Integration tests: tools end to end against mocked Solana and market services
mod basic_integration;
mod transport;
