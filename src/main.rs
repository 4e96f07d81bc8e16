// The binary only points at the demos; everything lives in the library.
// Run them with:
//   cargo run --example separable
//   cargo run --example admissions
fn main() {
    println!("ferrite-ff: a two-layer sigmoid network trained by full-batch gradient descent.");
    println!("Run `cargo run --example separable` or `cargo run --example admissions` for a demo.");
}
