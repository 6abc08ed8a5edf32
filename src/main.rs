// This binary crate is intentionally minimal.
// All perceptron logic lives in the library (src/lib.rs and its modules).
// Run examples with:
//   cargo run --example xor
fn main() {
    println!("pyrite-nn: a from-scratch multilayer perceptron library in Rust.");
    println!("Run `cargo run --example xor` to see the XOR demo.");
}
