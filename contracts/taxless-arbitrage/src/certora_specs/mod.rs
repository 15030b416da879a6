// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Formal verification rules for the taxless arbitrage contract.
//
// STRUCTURE:
//
// - access_specs.rs : Owner role and allow-list rules
// - swap_specs.rs   : Swap entry point ordering and validation rules
//
// PATTERNS USED:
//
// 1. Nondeterministic addresses - Prove properties for arbitrary accounts
// 2. Before/after reads - Allow-list state compared across a call
// 3. Sanity rules - Ensure rules aren't vacuously true
//
// USAGE:
// - Unit tests: cargo test -p taxless-arbitrage
// - Certora build: cargo build --features certora -p taxless-arbitrage
// - Verification: certoraSorobanProver taxless_arbitrage.conf
//
// ============================================================================

pub mod access_specs;
pub mod swap_specs;
